//! # client
//!
//! Leptos + WASM front-end for the 360° product showroom.
//!
//! The navigation logic lives in the `gallery` crate. This crate fetches the
//! content document, hands it to `gallery::engine::ShowroomCore`, and carries
//! out the actions the engine returns: overlay and view visibility through the
//! reactive [`state::stage::Stage`], timers through `gloo-timers`, and camera
//! and marker work through the A-Frame bridge in `scene`.
//!
//! Browser-only modules are compiled with the `csr` feature. `state`, `util`,
//! and `net` also build natively so their logic can be unit tested.

pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
pub mod app;
#[cfg(feature = "csr")]
pub mod components;
#[cfg(feature = "csr")]
pub mod host;
#[cfg(feature = "csr")]
pub mod scene;

/// Web entry point: install logging and mount the overlay app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| wasm_bindgen::JsValue::from_str(&format!("failed to init logger: {e}")))?;

    log::info!("showroom client starting");
    leptos::mount::mount_to_body(app::App);
    Ok(())
}
