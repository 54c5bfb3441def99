use web_sys::{Storage, Window};

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

// Off the web target there is no global window, so storage access
// degrades to an error instead of an unresolvable extern call.
#[cfg(not(target_arch = "wasm32"))]
pub fn window() -> Result<Window, String> {
    Err("No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}
