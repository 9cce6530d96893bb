use crate::dom;
use fx_core::tilt::{weave_frame, weave_transition, WEAVE_RESET_SHADOW, WEAVE_RESET_TRANSFORM};
use fx_core::{WEAVE_INTENSITY, WEAVE_SPEED_SEC};
use glam::DVec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 3D hover tilt for every element matching `selector`.
#[wasm_bindgen(js_name = hoverWeaveEffect)]
pub fn hover_weave_effect(selector: &str, intensity: Option<f64>, speed: Option<f64>) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let intensity = intensity.unwrap_or(WEAVE_INTENSITY);
    let speed = speed.unwrap_or(WEAVE_SPEED_SEC);

    for el in dom::query_all(&document, selector) {
        dom::set_style(&el, "transition", &weave_transition(speed));
        dom::set_style(&el, "will-change", "transform, box-shadow");
        dom::set_style(&el, "transform-origin", "center center");

        let target = el.clone();
        dom::add_listener(&el, "mousemove", move |ev| {
            let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let client = DVec2::new(mouse.client_x() as f64, mouse.client_y() as f64);
            let frame = weave_frame(&dom::rect_of(&target), client, intensity);
            dom::set_style(&target, "transform", &frame.transform);
            dom::set_style(&target, "box-shadow", &frame.box_shadow);
        });

        let target = el.clone();
        dom::add_listener(&el, "mouseleave", move |_| {
            dom::set_style(&target, "transform", WEAVE_RESET_TRANSFORM);
            dom::set_style(&target, "box-shadow", WEAVE_RESET_SHADOW);
        });
    }
}
