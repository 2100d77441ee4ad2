/// Target URL selection and domain extraction for a context-menu click
use std::fmt;

use url::Url;

use crate::click_data::ClickContext;
use crate::error::BlockError;

/// Normalized, non-empty hostname
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain(String);

impl Domain {
    /// Extract the hostname of `url`.
    ///
    /// Fails with `InvalidUrlFormat` when the string does not parse as an
    /// absolute URL or when it has no hostname (`about:blank`, `data:` URLs).
    pub fn from_url(url: &str) -> Result<Domain, BlockError> {
        let parsed = Url::parse(url).map_err(|_| BlockError::InvalidUrlFormat(url.to_string()))?;

        match parsed.host_str() {
            Some(host) if !host.is_empty() => Ok(Domain(host.to_ascii_lowercase())),
            _ => Err(BlockError::InvalidUrlFormat(url.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pick the first non-empty candidate URL (resource, frame, link, page)
pub fn select_target_url(ctx: &ClickContext) -> Option<&str> {
    ctx.candidates()
        .into_iter()
        .flatten()
        .find(|url| !url.is_empty())
}

/// Resolve a click to the domain that should be blocked
pub fn resolve(ctx: &ClickContext) -> Result<Domain, BlockError> {
    let target = select_target_url(ctx).ok_or(BlockError::NoTargetUrl)?;
    Domain::from_url(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(src: &str, frame: &str, link: &str, page: &str) -> ClickContext {
        let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
        ClickContext {
            src_url: opt(src),
            frame_url: opt(frame),
            link_url: opt(link),
            page_url: opt(page),
            ..ClickContext::new("block-domain")
        }
    }

    #[test]
    fn test_resolve_prefers_resource_url() {
        let ctx = click(
            "https://img.example.com/a.png",
            "https://frame.example.com/",
            "https://link.example.com/",
            "https://page.example.com/",
        );
        assert_eq!(resolve(&ctx).unwrap().as_str(), "img.example.com");
    }

    #[test]
    fn test_resolve_priority_fallthrough() {
        let ctx = click("", "https://frame.example.com/", "https://link.example.com/", "https://page.example.com/");
        assert_eq!(resolve(&ctx).unwrap().as_str(), "frame.example.com");

        let ctx = click("", "", "https://link.example.com/", "https://page.example.com/");
        assert_eq!(resolve(&ctx).unwrap().as_str(), "link.example.com");

        let ctx = click("", "", "", "https://page.example.com/");
        assert_eq!(resolve(&ctx).unwrap().as_str(), "page.example.com");
    }

    #[test]
    fn test_empty_string_is_skipped() {
        let mut ctx = click("", "", "https://link.example.com/x", "");
        ctx.src_url = Some(String::new());
        assert_eq!(resolve(&ctx).unwrap().as_str(), "link.example.com");
    }

    #[test]
    fn test_higher_priority_invalid_url_is_not_skipped() {
        let ctx = click("not a url", "", "", "https://page.example.com/");
        assert_eq!(
            resolve(&ctx),
            Err(BlockError::InvalidUrlFormat("not a url".to_string()))
        );
    }

    #[test]
    fn test_resolve_no_target() {
        assert_eq!(resolve(&click("", "", "", "")), Err(BlockError::NoTargetUrl));
    }

    #[test]
    fn test_resolve_normalizes_case() {
        let ctx = click("", "", "", "https://Sub.Example.COM/path");
        assert_eq!(resolve(&ctx).unwrap().as_str(), "sub.example.com");
    }

    #[test]
    fn test_domain_keeps_subdomains_and_drops_port() {
        assert_eq!(
            Domain::from_url("http://ads.tracker.example.co.uk:8080/pixel?id=1").unwrap().as_str(),
            "ads.tracker.example.co.uk"
        );
        assert_eq!(Domain::from_url("http://127.0.0.1:3000/").unwrap().as_str(), "127.0.0.1");
    }

    #[test]
    fn test_hostless_urls_are_invalid() {
        assert!(matches!(
            Domain::from_url("about:blank"),
            Err(BlockError::InvalidUrlFormat(_))
        ));
        assert!(matches!(
            Domain::from_url("data:image/png;base64,AAAA"),
            Err(BlockError::InvalidUrlFormat(_))
        ));
    }

    #[test]
    fn test_display() {
        let domain = Domain::from_url("https://ads.example.com/").unwrap();
        assert_eq!(format!("{}", domain), "ads.example.com");
    }
}
