use crate::constants::{
    ACTIVE_CLASS, SLIDER_BODY_SELECTOR, SLIDER_BULLETS_SELECTOR, SLIDER_BULLET_ITEMS_SELECTOR,
    SLIDER_IMAGE_SELECTOR, SLIDER_TITLE_SELECTOR,
};
use crate::dom::{self, Interval};
use fx_core::slider::{Jump, Slide, SlideDeck};
use fx_core::SLIDE_INTERVAL_MS;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

struct SliderState {
    document: web::Document,
    deck: SlideDeck,
    timer: Option<Interval>,
}

type SharedSlider = Rc<RefCell<SliderState>>;

/// Handle to a running slider.
#[wasm_bindgen]
pub struct SliderHandle {
    state: SharedSlider,
}

#[wasm_bindgen]
impl SliderHandle {
    /// Index of the slide on screen.
    #[wasm_bindgen(getter)]
    pub fn index(&self) -> usize {
        self.state.borrow().deck.index()
    }

    /// Jump to `index`. Restarts the rotation timer unless cancelled.
    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&self, index: usize) {
        go_to(&self.state, index);
    }

    /// Stop automatic rotation. Bullets keep working but no longer restart it.
    pub fn cancel(&self) {
        let mut s = self.state.borrow_mut();
        s.deck.stop_rotation();
        s.timer = None;
        log::info!("[slider] cancelled");
    }
}

fn slide_from_js(item: &JsValue) -> Slide {
    let field = |key: &str| {
        js_sys::Reflect::get(item, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    };
    Slide {
        url: field("url"),
        title: field("title"),
        body: field("body"),
    }
}

fn render(state: &SliderState) {
    let doc = &state.document;
    let Some(image) = dom::query(doc, SLIDER_IMAGE_SELECTOR) else {
        return;
    };
    let slide = state.deck.current();
    dom::set_style(&image, "background-image", &slide.background_image());
    dom::set_style(&image, "background-position", "center");
    dom::set_style(&image, "background-size", "cover");
    dom::set_style(&image, "height", "100%");
    dom::set_style(&image, "border-radius", "5px");

    if let Some(title) = dom::query(doc, SLIDER_TITLE_SELECTOR) {
        title.set_text_content(Some(&slide.title));
    }
    if let Some(body) = dom::query(doc, SLIDER_BODY_SELECTOR) {
        body.set_text_content(Some(&slide.body));
    }
    for (i, bullet) in dom::query_all(doc, SLIDER_BULLET_ITEMS_SELECTOR)
        .iter()
        .enumerate()
    {
        _ = bullet
            .class_list()
            .toggle_with_force(ACTIVE_CLASS, state.deck.is_active(i));
    }
}

fn start_rotation(state: &SharedSlider) {
    let ticker = state.clone();
    let timer = Interval::new(SLIDE_INTERVAL_MS, move || {
        let mut s = ticker.borrow_mut();
        s.deck.advance();
        render(&s);
    });
    match timer {
        Ok(t) => state.borrow_mut().timer = Some(t),
        Err(e) => log::error!("[slider] {:?}", e),
    }
}

fn go_to(state: &SharedSlider, index: usize) {
    let rearm = {
        let mut s = state.borrow_mut();
        match s.deck.jump(index) {
            Jump::Ignored => return,
            Jump::Moved { rearm } => {
                render(&s);
                // drop the old timer before arming a new one
                s.timer = None;
                rearm
            }
        }
    };
    if rearm {
        start_rotation(state);
    }
}

fn build_bullets(state: &SharedSlider) {
    let (document, count) = {
        let s = state.borrow();
        (s.document.clone(), s.deck.len())
    };
    let Some(container) = dom::query(&document, SLIDER_BULLETS_SELECTOR) else {
        log::warn!("[slider] no {} container, bullets skipped", SLIDER_BULLETS_SELECTOR);
        return;
    };
    for i in 0..count {
        let Ok(span) = document.create_element("span") else {
            continue;
        };
        let target = state.clone();
        dom::add_listener(&span, "click", move |_| go_to(&target, i));
        _ = container.append_child(&span);
    }
}

/// Rotating image/testimonial slider.
///
/// `slides` is an array of `{ url, title, body }` objects. Resolves to
/// `undefined` when the list is empty or not an array.
#[wasm_bindgen(js_name = initImageSlider)]
pub async fn init_image_slider(slides: JsValue) -> Option<SliderHandle> {
    if !js_sys::Array::is_array(&slides) {
        log::warn!("[slider] slides must be an array");
        return None;
    }
    let slides: Vec<Slide> = js_sys::Array::from(&slides)
        .iter()
        .map(|item| slide_from_js(&item))
        .collect();
    let Some(deck) = SlideDeck::new(slides) else {
        log::warn!("[slider] no slides given");
        return None;
    };

    dom::dom_ready().await;
    let document = dom::window_document()?;
    let state: SharedSlider = Rc::new(RefCell::new(SliderState {
        document,
        deck,
        timer: None,
    }));
    build_bullets(&state);
    render(&state.borrow());
    start_rotation(&state);
    log::info!("[slider] started with {} slides", state.borrow().deck.len());
    Some(SliderHandle { state })
}
