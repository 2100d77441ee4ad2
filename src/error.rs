/// Error taxonomy for the click-to-dispatch flow
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    #[error("No URL found in click context")]
    NoTargetUrl,

    #[error("Invalid URL format: {0}")]
    InvalidUrlFormat(String),

    #[error("GitHub credentials are not configured")]
    MissingConfiguration,

    #[error("GitHub API rejected dispatch with status {status}: {body}")]
    RemoteRejection { status: u16, body: String },

    #[error("Network error: {0}")]
    TransportFailure(String),

    #[error("Notification failed: {0}")]
    NotificationDelivery(String),

    #[error("Browser API call failed: {0}")]
    Host(String),
}

impl BlockError {
    /// Short `(title, message)` pair shown to the user, if this error is user-facing
    pub fn user_notice(&self) -> Option<(&'static str, String)> {
        match self {
            BlockError::NoTargetUrl => Some(("Error", "No URL found.".to_string())),
            BlockError::InvalidUrlFormat(_) => Some(("Error", "Invalid URL format.".to_string())),
            BlockError::MissingConfiguration => {
                Some(("Setup Required", "Please check Extension Options.".to_string()))
            }
            BlockError::RemoteRejection { status, .. } => {
                Some(("Failed", format!("GitHub API: {}", status)))
            }
            BlockError::TransportFailure(message) | BlockError::Host(message) => {
                Some(("Network Error", message.clone()))
            }
            BlockError::NotificationDelivery(_) => None,
        }
    }
}
