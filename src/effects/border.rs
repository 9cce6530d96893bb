use crate::constants::{BUTTON_BORDER_SVG_SELECTOR, BUTTON_CONTAINER_SELECTOR};
use crate::dom;
use fx_core::border::{stroke_style, BorderFrame};
use fx_core::BORDER_CORNER_RADIUS;
use wasm_bindgen::prelude::*;
use web_sys as web;

fn fit_and_stroke(border: &web::Element, svg: &web::Element, rect: &web::Element, active_class: &str) {
    let frame = BorderFrame::from_rect(&dom::rect_of(border));
    _ = svg.set_attribute("viewBox", &frame.view_box());
    _ = svg.set_attribute("width", &format!("{}px", frame.width));
    _ = svg.set_attribute("height", &format!("{}px", frame.height));

    let radius = BORDER_CORNER_RADIUS.to_string();
    _ = rect.set_attribute("width", &frame.width.to_string());
    _ = rect.set_attribute("height", &frame.height.to_string());
    _ = rect.set_attribute("x", "0");
    _ = rect.set_attribute("y", "0");
    _ = rect.set_attribute("rx", &radius);
    _ = rect.set_attribute("ry", &radius);

    let stroke = stroke_style(border.class_list().contains(active_class));
    dom::set_style(rect, "stroke", stroke.stroke);
    dom::set_style(rect, "stroke-width", stroke.stroke_width);
    dom::set_style(rect, "stroke-dasharray", stroke.dasharray);
    if let Some(offset) = stroke.dashoffset {
        dom::set_style(rect, "stroke-dashoffset", offset);
    }
    if stroke.restarts_animation() {
        dom::set_style(rect, "animation", "none");
        // reading layout forces a reflow so the animation starts over
        _ = rect.get_bounding_client_rect();
    }
    dom::set_style(rect, "animation", stroke.animation);
}

/// Fit each button's SVG border to its element and toggle the animated
/// dashed stroke on `active_class`. Call again whenever the class changes.
#[wasm_bindgen(js_name = buttonBorderAnimation)]
pub fn button_border_animation(path_selector: &str, border_selector: &str, active_class: &str) {
    let Some(document) = dom::window_document() else {
        return;
    };
    for container in dom::query_all(&document, BUTTON_CONTAINER_SELECTOR) {
        let border = container.query_selector(border_selector).ok().flatten();
        let svg = container.query_selector(BUTTON_BORDER_SVG_SELECTOR).ok().flatten();
        let rect = container.query_selector(path_selector).ok().flatten();
        let (Some(border), Some(svg), Some(rect)) = (border, svg, rect) else {
            continue;
        };
        fit_and_stroke(&border, &svg, &rect, active_class);
    }
}
