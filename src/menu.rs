/// Context-menu registration
use log::info;
use serde::{Deserialize, Serialize};

use crate::config::{MENU_CONTEXTS, MENU_ITEM_ID, MENU_ITEM_TITLE};
use crate::error::BlockError;

/// Properties passed to `chrome.contextMenus.create`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuEntry {
    pub id: String,
    pub title: String,
    pub contexts: Vec<String>,
}

impl MenuEntry {
    pub fn block_domain() -> MenuEntry {
        MenuEntry {
            id: MENU_ITEM_ID.to_string(),
            title: MENU_ITEM_TITLE.to_string(),
            contexts: MENU_CONTEXTS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait MenuApi {
    async fn remove_all_menus(&self) -> Result<(), BlockError>;
    async fn create_menu(&self, entry: &MenuEntry) -> Result<(), BlockError>;
}

/// Clear any earlier registration, then create the single entry.
///
/// Safe to call on every install/update event.
pub async fn ensure_registered<A: MenuApi>(api: &A) -> Result<(), BlockError> {
    let entry = MenuEntry::block_domain();
    api.remove_all_menus().await?;
    api.create_menu(&entry).await?;
    info!("Context menu '{}' created.", entry.id);
    Ok(())
}
