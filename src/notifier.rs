/// Best-effort system notifications
use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::config::{NOTIFICATION_ICON, NOTIFICATION_PRIORITY};
use crate::error::BlockError;

/// Options object passed to `chrome.notifications.create`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationOptions {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    pub icon_url: String,
    pub priority: i32,
}

impl NotificationOptions {
    pub fn basic(title: &str, message: &str) -> NotificationOptions {
        NotificationOptions {
            kind: "basic".to_string(),
            title: title.to_string(),
            message: message.to_string(),
            icon_url: NOTIFICATION_ICON.to_string(),
            priority: NOTIFICATION_PRIORITY,
        }
    }
}

/// Platform notification API; returns the created notification id
#[allow(async_fn_in_trait)]
pub trait NotificationApi {
    async fn create_notification(&self, options: &NotificationOptions) -> Result<String, BlockError>;
}

/// Show a notification. Failures are logged and never returned.
pub async fn notify<A: NotificationApi>(api: &A, title: &str, message: &str) {
    info!("[Notification] {}: {}", title, message);

    match api.create_notification(&NotificationOptions::basic(title, message)).await {
        Ok(id) => info!("Notification sent, ID: {}", id),
        Err(e) => {
            let e = match e {
                BlockError::NotificationDelivery(_) => e,
                other => BlockError::NotificationDelivery(other.to_string()),
            };
            error!("{}", e);
        }
    }
}
