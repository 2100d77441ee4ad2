/// Event routing: install hook and context-menu click handling
use log::{debug, error, info, warn};

use crate::click_data::ClickContext;
use crate::config::MENU_ITEM_ID;
use crate::dispatch::{DispatchClient, DispatchResult, HttpTransport};
use crate::domain::resolve;
use crate::error::BlockError;
use crate::menu::{MenuApi, ensure_registered};
use crate::notifier::{NotificationApi, notify};
use crate::storage::{CredentialStore, OptionsPage};

/// Everything the router needs from the browser
pub trait Host: CredentialStore + OptionsPage + NotificationApi + MenuApi + HttpTransport {}

impl<T> Host for T where T: CredentialStore + OptionsPage + NotificationApi + MenuApi + HttpTransport {}

/// Which branch a click ended in
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Not our menu item
    Ignored,
    /// No usable URL on the clicked element
    Unresolved(BlockError),
    /// Stored credentials could not be read
    StorageUnavailable(BlockError),
    /// Credentials incomplete; options page opened
    SetupRequired,
    Dispatched(DispatchResult),
}

pub struct EventRouter<H> {
    host: H,
    client: DispatchClient,
}

impl<H: Host> EventRouter<H> {
    pub fn new(host: H, client: DispatchClient) -> Self {
        EventRouter { host, client }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Install/update hook: (re)register the context-menu entry
    pub async fn on_installed(&self) {
        info!("Extension installed/updated");
        if let Err(e) = ensure_registered(&self.host).await {
            error!("Context menu registration failed: {}", e);
        }
    }

    /// Handle one context-menu click. Every branch ends back at idle; nothing is retried.
    pub async fn handle_click(&self, ctx: &ClickContext) -> ClickOutcome {
        debug!("Context menu clicked: {:?}", ctx);

        if !ctx.menu_item_id.matches(MENU_ITEM_ID) {
            return ClickOutcome::Ignored;
        }

        let domain = match resolve(ctx) {
            Ok(domain) => domain,
            Err(e) => {
                error!("URL error: {}", e);
                self.report(&e).await;
                return ClickOutcome::Unresolved(e);
            }
        };

        info!("Processing domain: {}", domain);
        notify(&self.host, "Processing", &format!("Domain: {}", domain)).await;

        let settings = match self.host.load_settings().await {
            Ok(settings) => settings,
            Err(e) => {
                error!("Failed to read settings: {}", e);
                self.report(&e).await;
                return ClickOutcome::StorageUnavailable(e);
            }
        };

        let credentials = match settings.credentials() {
            Ok(credentials) => credentials,
            Err(e) => {
                warn!("{}", e);
                self.report(&e).await;
                if let Err(e) = self.host.open_options_page().await {
                    error!("Failed to open options page: {}", e);
                }
                return ClickOutcome::SetupRequired;
            }
        };

        let result = self.client.dispatch(&self.host, &domain, &credentials).await;
        match result.clone().into_result() {
            Ok(domain) => {
                notify(&self.host, "Blocked!", &format!("{} sent to GitHub.", domain)).await;
            }
            Err(e) => self.report(&e).await,
        }

        ClickOutcome::Dispatched(result)
    }

    async fn report(&self, e: &BlockError) {
        if let Some((title, message)) = e.user_notice() {
            notify(&self.host, title, &message).await;
        }
    }
}
