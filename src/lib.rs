#![cfg(target_arch = "wasm32")]
//! Decorative page effects for the browser.
//!
//! Every effect is exported to JS as its own entry point and attaches to the
//! page markup by id/selector. Missing markup is logged and skipped, never
//! thrown. Layout math lives in `fx-core` so it can be tested on the host.

use wasm_bindgen::prelude::*;

mod connectors;
mod constants;
mod dom;
mod effects;
mod scene;

pub use connectors::{
    connector_group_count, init_connector_layer, init_polygon_solidator,
    init_rectangle_solidator, init_sub_line_connector, ConnectorHandle,
};
pub use effects::{
    button_border_animation, custom_cursor, hover_weave_effect, init_image_slider,
    init_mouse_marble_effect, SliderHandle,
};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("page-fx loaded");
    Ok(())
}
