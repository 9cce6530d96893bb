use crate::constants::INPUT_WRAPPER_SELECTOR;
use crate::dom;
use fx_core::caret::{caret_left, parse_css_px, prefix_before_caret};
use fx_core::fmt_num;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

const UPDATE_EVENTS: [&str; 5] = ["input", "click", "keyup", "keydown", "scroll"];

/// Width of `text` rendered in the input's font, measured with a hidden span.
fn measure_text_width(document: &web::Document, input: &web::HtmlInputElement, text: &str) -> f64 {
    let (Some(body), Ok(span)) = (document.body(), document.create_element("span")) else {
        return 0.0;
    };
    let font = dom::computed_style(input)
        .map(|s| dom::computed_value(&s, "font"))
        .unwrap_or_default();
    dom::set_style(&span, "visibility", "hidden");
    dom::set_style(&span, "position", "absolute");
    dom::set_style(&span, "white-space", "pre");
    dom::set_style(&span, "font", &font);
    span.set_text_content(Some(text));

    if body.append_child(&span).is_err() {
        return 0.0;
    }
    let width = dom::offset_size(&span).x;
    _ = body.remove_child(&span);
    width
}

fn update_caret(document: &web::Document, input: &web::HtmlInputElement, caret: &web::Element) {
    let value = input.value();
    let selection = input.selection_start().ok().flatten().unwrap_or(0);
    let text = prefix_before_caret(&value, selection);
    let text_width = measure_text_width(document, input, text);
    let padding_left = dom::computed_style(input)
        .map(|s| parse_css_px(&dom::computed_value(&s, "padding-left")))
        .unwrap_or(0.0);
    let left = caret_left(padding_left, text_width, input.scroll_left() as f64);
    dom::set_style(caret, "left", &format!("{}px", fmt_num(left)));
}

fn wire_input(document: web::Document, input: web::HtmlInputElement, caret: web::Element) {
    {
        let (doc, inp, car) = (document.clone(), input.clone(), caret.clone());
        dom::add_listener(&input, "focus", move |_| {
            dom::set_style(&car, "display", "inline-block");
            update_caret(&doc, &inp, &car);
        });
    }
    {
        let car = caret.clone();
        dom::add_listener(&input, "blur", move |_| {
            dom::set_style(&car, "display", "none");
        });
    }
    for event in UPDATE_EVENTS {
        let (doc, inp, car) = (document.clone(), input.clone(), caret.clone());
        dom::add_listener(&input, event, move |_| update_caret(&doc, &inp, &car));
    }
}

/// Drive a fake caret element for every input matching `input_selector`.
///
/// The caret is the `cursor_selector` element inside the input's closest
/// `.input-wrapper`; inputs without one are left alone.
#[wasm_bindgen(js_name = customCursor)]
pub fn custom_cursor(input_selector: &str, cursor_selector: &str) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let mut wired = 0usize;
    for el in dom::query_all(&document, input_selector) {
        let Ok(input) = el.dyn_into::<web::HtmlInputElement>() else {
            continue;
        };
        let caret = input
            .closest(INPUT_WRAPPER_SELECTOR)
            .ok()
            .flatten()
            .and_then(|wrapper| wrapper.query_selector(cursor_selector).ok().flatten());
        let Some(caret) = caret else {
            continue;
        };
        wire_input(document.clone(), input, caret);
        wired += 1;
    }
    log::debug!("[caret] wired {} inputs for {}", wired, input_selector);
}
