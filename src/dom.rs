use fx_core::Rect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach a listener for the page's lifetime.
#[inline]
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// A listener that can be detached again. Dropping it detaches it.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut()>,
}

impl Listener {
    pub fn new(target: &web::EventTarget, event: &'static str, handler: impl FnMut() + 'static) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// A `setInterval` timer, cleared on drop.
pub struct Interval {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(ms: i32, handler: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms,
            )
            .map_err(|e| anyhow::anyhow!("setInterval: {:?}", e))?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}

/// Resolves once the document has been parsed (`DOMContentLoaded`), or
/// immediately if that already happened.
pub async fn dom_ready() {
    let Some(document) = window_document() else {
        return;
    };
    let loading = js_sys::Reflect::get(&document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|v| v.as_string())
        .map(|s| s == "loading")
        .unwrap_or(false);
    if !loading {
        return;
    }
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let once = Closure::once_into_js(move || {
            _ = resolve.call0(&JsValue::NULL);
        });
        _ = document.add_event_listener_with_callback("DOMContentLoaded", once.unchecked_ref());
    });
    _ = JsFuture::from(promise).await;
}

pub fn rect_of(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Every element in a `NodeList`, skipping non-element nodes.
pub fn elements(list: &web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(e) => {
            log::warn!("bad selector {selector}: {:?}", e);
            Vec::new()
        }
    }
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

/// Inline style declaration for HTML and SVG elements alike.
pub fn style_of(el: &web::Element) -> Option<web::CssStyleDeclaration> {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        return Some(html.style());
    }
    el.dyn_ref::<web::SvgElement>().map(|svg| svg.style())
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(style) = style_of(el) {
        _ = style.set_property(property, value);
    }
}

pub fn computed_style(el: &web::Element) -> Option<web::CssStyleDeclaration> {
    web::window()?.get_computed_style(el).ok().flatten()
}

#[inline]
pub fn computed_value(style: &web::CssStyleDeclaration, property: &str) -> String {
    style.get_property_value(property).unwrap_or_default()
}

/// `offsetWidth`/`offsetHeight` for HTML elements; 0 otherwise.
pub fn offset_size(el: &web::Element) -> glam::DVec2 {
    el.dyn_ref::<web::HtmlElement>()
        .map(|h| glam::DVec2::new(h.offset_width() as f64, h.offset_height() as f64))
        .unwrap_or(glam::DVec2::ZERO)
}
