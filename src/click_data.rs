/// Data structures for context-menu clicks
use serde::{Deserialize, Serialize};

/// Menu item identifier as delivered by Chrome (string or number)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MenuItemId {
    Text(String),
    Number(f64),
}

impl MenuItemId {
    pub fn matches(&self, id: &str) -> bool {
        matches!(self, MenuItemId::Text(text) if text == id)
    }
}

/// Candidate URLs for a single click, mirroring `contextMenus.OnClickData`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClickContext {
    pub menu_item_id: MenuItemId,
    #[serde(default)]
    pub src_url: Option<String>,
    #[serde(default)]
    pub frame_url: Option<String>,
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default)]
    pub page_url: Option<String>,
}

impl ClickContext {
    pub fn new(menu_item_id: &str) -> ClickContext {
        ClickContext {
            menu_item_id: MenuItemId::Text(menu_item_id.to_string()),
            src_url: None,
            frame_url: None,
            link_url: None,
            page_url: None,
        }
    }

    /// Candidate URLs in priority order: resource, frame, link, page
    pub fn candidates(&self) -> [Option<&str>; 4] {
        [
            self.src_url.as_deref(),
            self.frame_url.as_deref(),
            self.link_url.as_deref(),
            self.page_url.as_deref(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_on_click_data() {
        let json = r#"{
            "menuItemId": "block-domain",
            "editable": false,
            "srcUrl": "https://ads.example.com/banner.png",
            "pageUrl": "https://news.example.org/"
        }"#;

        let ctx: ClickContext = serde_json::from_str(json).unwrap();

        assert!(ctx.menu_item_id.matches("block-domain"));
        assert_eq!(ctx.src_url.as_deref(), Some("https://ads.example.com/banner.png"));
        assert_eq!(ctx.frame_url, None);
        assert_eq!(ctx.link_url, None);
        assert_eq!(ctx.page_url.as_deref(), Some("https://news.example.org/"));
    }

    #[test]
    fn test_numeric_menu_item_id_never_matches() {
        let ctx: ClickContext = serde_json::from_str(r#"{"menuItemId": 7}"#).unwrap();

        assert_eq!(ctx.menu_item_id, MenuItemId::Number(7.0));
        assert!(!ctx.menu_item_id.matches("block-domain"));
        assert!(!ctx.menu_item_id.matches("7"));
    }

    #[test]
    fn test_candidates_order() {
        let ctx = ClickContext {
            src_url: Some("a".to_string()),
            frame_url: Some("b".to_string()),
            link_url: Some("c".to_string()),
            page_url: Some("d".to_string()),
            ..ClickContext::new("block-domain")
        };

        assert_eq!(ctx.candidates(), [Some("a"), Some("b"), Some("c"), Some("d")]);
    }
}
