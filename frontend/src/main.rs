use storefront_frontend::{config, router};
use wasm_bindgen_futures::spawn_local;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("Starting Storefront frontend: initializing runtime config");

    // Resolve the API base URL before mounting so the first submit never
    // races the config fetch.
    spawn_local(async move {
        config::init().await;
        log::debug!("Runtime config initialized");
        router::mount_app();
    });
}
