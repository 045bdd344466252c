pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    if let Err(err) = shared::category_heading::init_on_dom_ready() {
        log::warn!("category heading not mounted: {}", err);
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
