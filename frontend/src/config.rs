use crate::utils::storage as storage_utils;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

// Deployments may inject either global before the bundle loads:
//   window.__STOREFRONT_ENV = { API_BASE_URL: "..." }
//   window.__STOREFRONT_CONFIG = { api_base_url: "..." }
fn global_string(object_key: &str, primary_key: &str, alt_key: &str) -> Option<String> {
    let win = storage_utils::window().ok()?;
    let holder = js_sys::Reflect::get(&win, &object_key.into()).ok()?;
    if holder.is_undefined() || holder.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(holder);
    js_sys::Reflect::get(&obj, &primary_key.into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &alt_key.into()).ok())
        .and_then(|v| v.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    global_string("__STOREFRONT_ENV", "API_BASE_URL", "api_base_url")
        .or_else(|| global_string("__STOREFRONT_CONFIG", "api_base_url", "API_BASE_URL"))
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

pub fn cached_base_url() -> Option<String> {
    API_BASE_URL.get().cloned()
}

fn write_window_config(cfg: &RuntimeConfig) {
    let url = match &cfg.api_base_url {
        Some(url) => url,
        None => return,
    };
    let win = match storage_utils::window() {
        Ok(win) => win,
        Err(_) => return,
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&win, &"__STOREFRONT_CONFIG".into(), &obj);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

/// Resolves the API base URL once: injected globals win, then the served
/// `config.json`, then the compiled-in default.
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        write_window_config(&cfg);
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
