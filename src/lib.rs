/// Pi-hole Blocker - Chrome extension background worker
/// Sends right-clicked domains to a GitHub repository-dispatch webhook.
/// Built with Rust + WASM

mod chrome;
mod click_data;
mod config;
mod dispatch;
mod domain;
mod error;
mod menu;
mod notifier;
mod router;
mod storage;

use std::rc::Rc;

use log::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub use click_data::{ClickContext, MenuItemId};
pub use config::DispatchConfig;
pub use dispatch::{DispatchClient, DispatchRequest, DispatchResult, HttpResponse, HttpTransport};
pub use domain::{Domain, resolve};
pub use error::BlockError;
pub use menu::{MenuApi, MenuEntry, ensure_registered};
pub use notifier::{NotificationApi, NotificationOptions, notify};
pub use router::{ClickOutcome, EventRouter, Host};
pub use storage::{CredentialStore, Credentials, OptionsPage, StoredSettings};

// Set up panic hook and listeners as soon as the service worker loads the module.
// Listeners must be registered synchronously or Chrome drops wake-up events.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    info!("Background script started (v{})", env!("CARGO_PKG_VERSION"));

    let router = Rc::new(EventRouter::new(chrome::ChromeHost, DispatchClient::default()));

    let on_installed = {
        let router = router.clone();
        Closure::wrap(Box::new(move || {
            let router = router.clone();
            spawn_local(async move {
                router.on_installed().await;
            });
        }) as Box<dyn Fn()>)
    };
    chrome::onInstalled(on_installed.as_ref().unchecked_ref());
    on_installed.forget();

    let on_clicked = Closure::wrap(Box::new(move |info: JsValue| {
        let ctx: ClickContext = match serde_wasm_bindgen::from_value(info) {
            Ok(ctx) => ctx,
            Err(e) => {
                error!("Unexpected click data: {:?}", e);
                return;
            }
        };

        // Each click runs independently; overlapping clicks are not merged.
        let router = router.clone();
        spawn_local(async move {
            let outcome = router.handle_click(&ctx).await;
            info!("Click handled: {:?}", outcome);
        });
    }) as Box<dyn Fn(JsValue)>);
    chrome::onContextMenuClicked(on_clicked.as_ref().unchecked_ref());
    on_clicked.forget();
}

// Re-export core domain functions for JavaScript access
#[wasm_bindgen]
pub fn extract_domain(url: &str) -> Option<String> {
    Domain::from_url(url).ok().map(|domain| domain.to_string())
}
