/// Fixed extension settings: menu entry, dispatch endpoint, notification look

/// Identifier of the single context-menu entry
pub const MENU_ITEM_ID: &str = "block-domain";

/// Label shown in the context menu
pub const MENU_ITEM_TITLE: &str = "Block Domain (Pi-hole)";

/// Contexts in which the menu entry is visible
pub const MENU_CONTEXTS: [&str; 4] = ["image", "frame", "link", "page"];

pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Media type pinning the GitHub REST API version
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// `event_type` the blocklist workflow listens for
pub const DISPATCH_EVENT_TYPE: &str = "block_domain";

pub const NOTIFICATION_ICON: &str = "icon48.png";
pub const NOTIFICATION_PRIORITY: i32 = 2;

/// Where and what the dispatch client posts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    pub api_base: String,
    pub event_type: String,
}

impl DispatchConfig {
    /// `POST` target for a repository-dispatch event
    pub fn dispatch_url(&self, account: &str, repository: &str) -> String {
        format!(
            "{}/repos/{}/{}/dispatches",
            self.api_base.trim_end_matches('/'),
            account,
            repository
        )
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        DispatchConfig {
            api_base: GITHUB_API_BASE.to_string(),
            event_type: DISPATCH_EVENT_TYPE.to_string(),
        }
    }
}
