//! Browser tests for JS value conversions. Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use js_sys::{Object, Reflect};
use pihole_blocker::{ClickContext, MenuEntry, NotificationOptions, StoredSettings, resolve};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn set(obj: &Object, key: &str, value: JsValue) {
    Reflect::set(obj, &JsValue::from_str(key), &value).unwrap();
}

#[wasm_bindgen_test]
fn click_data_from_js_object() {
    let info = Object::new();
    set(&info, "menuItemId", "block-domain".into());
    set(&info, "editable", JsValue::FALSE);
    set(&info, "linkUrl", "https://Ads.Example.com/click".into());
    set(&info, "pageUrl", "https://news.example.org/".into());

    let ctx: ClickContext = serde_wasm_bindgen::from_value(info.into()).unwrap();

    assert!(ctx.menu_item_id.matches("block-domain"));
    assert_eq!(resolve(&ctx).unwrap().as_str(), "ads.example.com");
}

#[wasm_bindgen_test]
fn stored_settings_from_partial_storage() {
    let stored = Object::new();
    set(&stored, "githubUser", "alice".into());

    let settings: StoredSettings = serde_wasm_bindgen::from_value(stored.into()).unwrap();

    assert_eq!(settings.github_user.as_deref(), Some("alice"));
    assert!(settings.credentials().is_err());
}

#[wasm_bindgen_test]
fn notification_options_to_js_object() {
    let options = serde_wasm_bindgen::to_value(&NotificationOptions::basic("Blocked!", "done")).unwrap();

    let kind = Reflect::get(&options, &JsValue::from_str("type")).unwrap();
    let icon = Reflect::get(&options, &JsValue::from_str("iconUrl")).unwrap();
    assert_eq!(kind.as_string().as_deref(), Some("basic"));
    assert_eq!(icon.as_string().as_deref(), Some("icon48.png"));
}

#[wasm_bindgen_test]
fn menu_entry_to_js_object() {
    let entry = serde_wasm_bindgen::to_value(&MenuEntry::block_domain()).unwrap();

    let contexts = Reflect::get(&entry, &JsValue::from_str("contexts")).unwrap();
    assert!(js_sys::Array::is_array(&contexts));
    assert_eq!(js_sys::Array::from(&contexts).length(), 4);
}
