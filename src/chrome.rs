/// Browser-backed implementation of the router's host traits
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response, WorkerGlobalScope};

use crate::dispatch::{DispatchRequest, HttpResponse, HttpTransport};
use crate::error::BlockError;
use crate::menu::{MenuApi, MenuEntry};
use crate::notifier::{NotificationApi, NotificationOptions};
use crate::storage::{CredentialStore, OptionsPage, SETTINGS_KEYS, StoredSettings};

// Import JS bridge functions
#[wasm_bindgen(module = "/chrome_api.js")]
extern "C" {
    pub fn onInstalled(callback: &js_sys::Function);

    pub fn onContextMenuClicked(callback: &js_sys::Function);

    #[wasm_bindgen(catch)]
    async fn removeAllContextMenus() -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn createContextMenu(properties: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn getSyncStorage(keys: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn openOptionsPage() -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn createNotification(options: JsValue) -> Result<JsValue, JsValue>;
}

/// Human-readable text for a thrown JS value
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn host_error(value: JsValue) -> BlockError {
    BlockError::Host(js_error_message(&value))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, BlockError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| BlockError::Host(format!("Failed to serialize: {:?}", e)))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ChromeHost;

impl CredentialStore for ChromeHost {
    async fn load_settings(&self) -> Result<StoredSettings, BlockError> {
        let stored = getSyncStorage(to_js(&SETTINGS_KEYS)?).await.map_err(host_error)?;

        if stored.is_null() || stored.is_undefined() {
            return Ok(StoredSettings::default());
        }

        serde_wasm_bindgen::from_value(stored)
            .map_err(|e| BlockError::Host(format!("Failed to parse settings: {:?}", e)))
    }
}

impl OptionsPage for ChromeHost {
    async fn open_options_page(&self) -> Result<(), BlockError> {
        openOptionsPage().await.map_err(host_error)
    }
}

impl NotificationApi for ChromeHost {
    async fn create_notification(&self, options: &NotificationOptions) -> Result<String, BlockError> {
        let id = createNotification(to_js(options)?)
            .await
            .map_err(|e| BlockError::NotificationDelivery(js_error_message(&e)))?;
        Ok(id.as_string().unwrap_or_default())
    }
}

impl MenuApi for ChromeHost {
    async fn remove_all_menus(&self) -> Result<(), BlockError> {
        removeAllContextMenus().await.map_err(host_error)
    }

    async fn create_menu(&self, entry: &MenuEntry) -> Result<(), BlockError> {
        createContextMenu(to_js(entry)?).await.map_err(host_error)
    }
}

impl HttpTransport for ChromeHost {
    async fn post(&self, request: &DispatchRequest) -> Result<HttpResponse, BlockError> {
        let transport = |e: JsValue| BlockError::TransportFailure(js_error_message(&e));

        let headers = Headers::new().map_err(transport)?;
        for (name, value) in &request.headers {
            headers.set(name, value).map_err(transport)?;
        }

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&request.body));

        let js_request = Request::new_with_str_and_init(&request.url, &init).map_err(transport)?;

        // Background pages run as a service worker; there is no `window`.
        let scope: WorkerGlobalScope = js_sys::global().unchecked_into();
        let response: Response = JsFuture::from(scope.fetch_with_request(&js_request))
            .await
            .map_err(transport)?
            .dyn_into()
            .map_err(transport)?;

        let status = response.status();
        let body = if response.ok() {
            String::new()
        } else {
            let text = JsFuture::from(response.text().map_err(transport)?)
                .await
                .map_err(transport)?;
            text.as_string().unwrap_or_default()
        };

        Ok(HttpResponse { status, body })
    }
}
