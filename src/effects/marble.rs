use crate::dom;
use fx_core::marble::{receives_pointer, MarbleLook, MarbleTracker, MARBLE_HOVER, MARBLE_IDLE};
use fx_core::tilt::{
    parallax_frame, PARALLAX_HOVER_FILTER, PARALLAX_RESET_FILTER, PARALLAX_RESET_TRANSFORM,
    PARALLAX_TRANSITION,
};
use fx_core::PARALLAX_INTENSITY;
use glam::DVec2;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

fn client_point(ev: &web::Event) -> Option<DVec2> {
    // PointerEvent extends MouseEvent, so this covers both
    ev.dyn_ref::<web::MouseEvent>()
        .map(|m| DVec2::new(m.client_x() as f64, m.client_y() as f64))
}

fn element_receives_pointer(el: &web::Element) -> bool {
    match dom::computed_style(el) {
        Some(style) => receives_pointer(
            &dom::computed_value(&style, "pointer-events"),
            &dom::computed_value(&style, "visibility"),
            &dom::computed_value(&style, "display"),
        ),
        None => true,
    }
}

fn apply_look(marble: &web::Element, look: &MarbleLook) {
    let size = look.size_css();
    dom::set_style(marble, "width", &size);
    dom::set_style(marble, "height", &size);
    dom::set_style(marble, "background", look.background);
    dom::set_style(marble, "animation", look.animation);
}

fn wire_container(content: &web::Element, marble: Option<web::Element>) {
    let tracker = Rc::new(Cell::new(MarbleTracker::default()));

    {
        let (tracker, marble) = (tracker.clone(), marble.clone());
        dom::add_listener(content, "pointerenter", move |_| {
            let mut t = tracker.get();
            t.enter();
            tracker.set(t);
            if let Some(m) = &marble {
                dom::set_style(m, "opacity", "1");
            }
        });
    }
    {
        let (tracker, marble) = (tracker.clone(), marble.clone());
        dom::add_listener(content, "pointerleave", move |_| {
            let mut t = tracker.get();
            t.leave();
            tracker.set(t);
            if let Some(m) = &marble {
                dom::set_style(m, "opacity", "0");
            }
        });
    }

    let Some(marble) = marble else {
        return;
    };
    // mousemove covers devices that never fire pointer events
    for event in ["pointermove", "mousemove"] {
        let (tracker, marble, container) = (tracker.clone(), marble.clone(), content.clone());
        dom::add_listener(content, event, move |ev| {
            let Some(client) = client_point(&ev) else {
                return;
            };
            let follow = tracker.get().follow(
                &dom::rect_of(&container),
                client,
                dom::offset_size(&marble),
            );
            if let Some(transform) = follow {
                dom::set_style(&marble, "transform", &transform);
            }
        });
    }
}

fn wire_hover_target(el: &web::Element, marble: Option<web::Element>) {
    dom::set_style(el, "transition", PARALLAX_TRANSITION);
    dom::set_style(el, "transform-origin", "center center");
    dom::set_style(el, "will-change", "transform, box-shadow");

    {
        let marble = marble.clone();
        dom::add_listener(el, "pointerenter", move |_| {
            if let Some(m) = &marble {
                apply_look(m, &MARBLE_HOVER);
            }
        });
    }
    {
        let target = el.clone();
        dom::add_listener(el, "pointermove", move |ev| {
            if !element_receives_pointer(&target) {
                return;
            }
            let Some(client) = client_point(&ev) else {
                return;
            };
            let frame = parallax_frame(&dom::rect_of(&target), client, PARALLAX_INTENSITY);
            dom::set_style(&target, "transform", &frame.transform);
            dom::set_style(&target, "box-shadow", &frame.box_shadow);
            dom::set_style(&target, "filter", PARALLAX_HOVER_FILTER);
            dom::set_style(&target, "animation", MARBLE_HOVER.animation);
        });
    }
    {
        let target = el.clone();
        dom::add_listener(el, "pointerleave", move |_| {
            if let Some(m) = &marble {
                apply_look(m, &MARBLE_IDLE);
            }
            dom::set_style(&target, "transform", PARALLAX_RESET_TRANSFORM);
            dom::set_style(&target, "box-shadow", "none");
            dom::set_style(&target, "filter", PARALLAX_RESET_FILTER);
            dom::set_style(&target, "animation", "none");
        });
    }
}

/// Pointer marble inside `selector`, with parallax on its `element_selector`
/// children.
#[wasm_bindgen(js_name = initMouseMarbleEffect)]
pub async fn init_mouse_marble_effect(selector: String, marble_id: String, element_selector: String) {
    dom::dom_ready().await;
    let Some(document) = dom::window_document() else {
        return;
    };
    let Some(content) = dom::query(&document, &selector) else {
        log::warn!("[marble] no {} found, pointer tracking disabled", selector);
        return;
    };
    let marble = document.get_element_by_id(&marble_id);
    if marble.is_none() {
        log::warn!("[marble] no #{} found, marble will not show", marble_id);
    }

    let targets = match content.query_selector_all(&element_selector) {
        Ok(list) => dom::elements(&list),
        Err(e) => {
            log::warn!("[marble] bad selector {}: {:?}", element_selector, e);
            Vec::new()
        }
    };
    if targets.is_empty() {
        log::warn!("[marble] no {} inside {}", element_selector, selector);
    }

    wire_container(&content, marble.clone());
    let mut wired = 0usize;
    for el in targets.iter().filter(|el| element_receives_pointer(el)) {
        wire_hover_target(el, marble.clone());
        wired += 1;
    }
    log::info!("[marble] tracking {} with {} hover targets", selector, wired);
}
