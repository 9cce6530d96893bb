use crate::constants::{
    ChainPreset, HubPreset, CHAIN_PRESETS, CONNECTOR_ANCHOR_SELECTOR, POLYGON_HUB, RECTANGLE_HUB,
};
use crate::dom::{self, Interval, Listener};
use crate::scene::{DomScene, LayerRefs, TargetAnchor};
use fx_core::{
    ConnectorEngine, ConnectorStyle, FxError, LayerConfig, LayerKind, LayerRegistry, LayerSlot,
    Trigger,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

type SharedEngine = Rc<RefCell<ConnectorEngine<DomScene>>>;

/// A started layer: its engine plus the resize listener and poll timer that
/// drive it. Dropping it stops both and removes the drawn primitives.
struct Runtime {
    engine: SharedEngine,
    _resize: Listener,
    _poll: Interval,
}

impl Drop for Runtime {
    fn drop(&mut self) {
        if let Ok(engine) = self.engine.try_borrow() {
            for group in engine.groups() {
                group.root().remove();
            }
        }
    }
}

type Slot = LayerSlot<Runtime>;

thread_local! {
    // Running layers by name; re-initializing a name hands back the same runtime.
    static REGISTRY: RefCell<LayerRegistry<Runtime>> = RefCell::new(LayerRegistry::new());
}

/// Handle to a running connector layer.
#[wasm_bindgen]
pub struct ConnectorHandle {
    name: String,
    slot: Slot,
}

#[wasm_bindgen]
impl ConnectorHandle {
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.name.clone()
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Run one layout pass now. Returns false when the layer is cancelled or
    /// its surface/hub is currently missing.
    pub fn recompute(&self) -> bool {
        match self.slot.borrow().as_ref() {
            Some(rt) => !rt.engine.borrow_mut().on_trigger(Trigger::Manual).skipped,
            None => false,
        }
    }

    /// Stop the poll timer, detach the resize listener and remove the drawn
    /// connectors. Safe to call more than once.
    pub fn cancel(&self) {
        let runtime = REGISTRY.with(|r| r.borrow_mut().cancel(&self.name, &self.slot));
        if runtime.is_some() {
            log::info!("[connector] {} cancelled", self.name);
        }
        drop(runtime);
    }
}

/// Configure and start a layer, or return the already running one.
pub fn launch(
    document: &web::Document,
    refs: LayerRefs,
    config: LayerConfig,
) -> anyhow::Result<ConnectorHandle> {
    let name = config.name.clone();
    let (slot, fresh) = REGISTRY.with(|r| {
        r.borrow_mut()
            .get_or_launch(&name, || start_runtime(document, refs, config))
    })?;
    if !fresh {
        log::info!("[connector] {} already running", name);
    }
    Ok(ConnectorHandle { name, slot })
}

fn start_runtime(
    document: &web::Document,
    refs: LayerRefs,
    config: LayerConfig,
) -> anyhow::Result<Runtime> {
    let name = config.name.clone();
    let poll_ms = config.poll_interval_ms;
    let mut engine = ConnectorEngine::configure(DomScene::new(document.clone(), refs), config)?;
    let report = engine.start()?;
    log::info!(
        "[connector] {} started: groups={} visible={} hidden={} skipped={}",
        name,
        engine.groups().len(),
        report.visible,
        report.hidden,
        report.skipped
    );
    let engine: SharedEngine = Rc::new(RefCell::new(engine));

    let window = web::window().ok_or_else(|| FxError::MissingElement("window".into()))?;
    let on_resize = engine.clone();
    let resize = Listener::new(&window, "resize", move || {
        on_resize.borrow_mut().on_trigger(Trigger::Resize);
    });
    let on_poll = engine.clone();
    let poll = Interval::new(poll_ms, move || {
        on_poll.borrow_mut().on_trigger(Trigger::Poll);
    })?;

    Ok(Runtime {
        engine,
        _resize: resize,
        _poll: poll,
    })
}

fn surface_by_id(document: &web::Document, id: &str) -> Option<web::Element> {
    let surface = document.get_element_by_id(id);
    if surface.is_none() {
        log::warn!("[connector] no #{} surface, layer skipped", id);
    }
    surface
}

fn launch_hub(document: &web::Document, preset: &HubPreset) -> Option<ConnectorHandle> {
    let surface = surface_by_id(document, preset.surface_id)?;
    let style = ConnectorStyle {
        control_ratio: preset.control_ratio,
        animation: preset.animation.to_string(),
        line_class: preset.line_class.to_string(),
        ..ConnectorStyle::default()
    };
    let refs = LayerRefs {
        surface,
        hub_id: Some(preset.hub_id.to_string()),
        anchor: TargetAnchor::Child(CONNECTOR_ANCHOR_SELECTOR.to_string()),
    };
    let config = LayerConfig::hub(preset.name, preset.targets).with_style(style);
    launch(document, refs, config)
        .map_err(|e| log::error!("[connector] {}: {:?}", preset.name, e))
        .ok()
}

fn launch_chain(document: &web::Document, preset: &ChainPreset) -> Option<ConnectorHandle> {
    let surface = surface_by_id(document, preset.surface_id)?;
    let refs = LayerRefs {
        surface,
        hub_id: None,
        anchor: TargetAnchor::Element,
    };
    let config = LayerConfig::chain(preset.name, preset.targets);
    launch(document, refs, config)
        .map_err(|e| log::error!("[connector] {}: {:?}", preset.name, e))
        .ok()
}

#[wasm_bindgen(js_name = initRectangleSolidator)]
pub async fn init_rectangle_solidator() -> Option<ConnectorHandle> {
    dom::dom_ready().await;
    launch_hub(&dom::window_document()?, &RECTANGLE_HUB)
}

#[wasm_bindgen(js_name = initPolygonSolidator)]
pub async fn init_polygon_solidator() -> Option<ConnectorHandle> {
    dom::dom_ready().await;
    launch_hub(&dom::window_document()?, &POLYGON_HUB)
}

/// Start the five chain layers; the array holds a handle per layer that
/// found its surface.
#[wasm_bindgen(js_name = initSubLineConnector)]
pub async fn init_sub_line_connector() -> js_sys::Array {
    dom::dom_ready().await;
    let handles = js_sys::Array::new();
    if let Some(document) = dom::window_document() {
        for preset in CHAIN_PRESETS.iter() {
            if let Some(h) = launch_chain(&document, preset) {
                handles.push(&JsValue::from(h));
            }
        }
    }
    handles
}

fn get_field(obj: &JsValue, key: &str) -> Option<JsValue> {
    js_sys::Reflect::get(obj, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn get_string(obj: &JsValue, key: &str) -> Option<String> {
    get_field(obj, key).and_then(|v| v.as_string())
}

/// Layer description passed in from JS.
struct LayerSpec {
    config: LayerConfig,
    surface_id: String,
    hub_id: Option<String>,
    anchor: TargetAnchor,
}

fn parse_layer_spec(raw: &JsValue) -> anyhow::Result<LayerSpec> {
    let name = get_string(raw, "name").ok_or_else(|| anyhow::anyhow!("`name` is required"))?;
    let surface_id =
        get_string(raw, "surface").ok_or_else(|| anyhow::anyhow!("`surface` is required"))?;
    let targets_raw =
        get_field(raw, "targets").ok_or_else(|| anyhow::anyhow!("`targets` is required"))?;
    if !js_sys::Array::is_array(&targets_raw) {
        anyhow::bail!("`targets` must be an array of ids");
    }
    let targets: Vec<String> = js_sys::Array::from(&targets_raw)
        .iter()
        .map(|v| v.as_string().ok_or_else(|| anyhow::anyhow!("target ids must be strings")))
        .collect::<anyhow::Result<_>>()?;

    let kind = match get_string(raw, "kind").as_deref() {
        None | Some("hub") => LayerKind::Hub,
        Some("chain") => LayerKind::Chain,
        Some(other) => anyhow::bail!("unknown layer kind `{other}`"),
    };
    let hub_id = get_string(raw, "hub");
    if kind == LayerKind::Hub && hub_id.is_none() {
        anyhow::bail!("hub layer `{name}` needs a `hub` id");
    }
    let anchor = match (get_string(raw, "anchor"), kind) {
        (Some(sel), _) => TargetAnchor::Child(sel),
        (None, LayerKind::Hub) => TargetAnchor::Child(CONNECTOR_ANCHOR_SELECTOR.to_string()),
        (None, LayerKind::Chain) => TargetAnchor::Element,
    };

    let target_refs: Vec<&str> = targets.iter().map(String::as_str).collect();
    let mut config = match kind {
        LayerKind::Hub => LayerConfig::hub(&name, &target_refs),
        LayerKind::Chain => LayerConfig::chain(&name, &target_refs),
    };
    if let Some(ratio) = get_field(raw, "ratio").and_then(|v| v.as_f64()) {
        config.style.control_ratio = ratio;
    }
    if let Some(ms) = get_field(raw, "pollMs").and_then(|v| v.as_f64()) {
        config = config.with_poll_interval(ms as i32);
    }
    config.validate()?;
    Ok(LayerSpec {
        config,
        surface_id,
        hub_id,
        anchor,
    })
}

/// Start a connector layer described by a plain JS object:
/// `{ name, surface, hub?, targets, kind?, anchor?, ratio?, pollMs? }`.
///
/// Rejects on a malformed description; resolves to `undefined` when the
/// surface element is not on the page.
#[wasm_bindgen(js_name = initConnectorLayer)]
pub async fn init_connector_layer(spec: JsValue) -> Result<Option<ConnectorHandle>, JsValue> {
    let spec = parse_layer_spec(&spec).map_err(|e| JsValue::from_str(&e.to_string()))?;
    dom::dom_ready().await;
    let Some(document) = dom::window_document() else {
        return Ok(None);
    };
    let Some(surface) = surface_by_id(&document, &spec.surface_id) else {
        return Ok(None);
    };
    let refs = LayerRefs {
        surface,
        hub_id: spec.hub_id,
        anchor: spec.anchor,
    };
    launch(&document, refs, spec.config)
        .map(Some)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Number of primitives a running layer owns; used by the page's debug hooks.
#[wasm_bindgen(js_name = connectorGroupCount)]
pub fn connector_group_count(name: &str) -> usize {
    REGISTRY.with(|r| {
        r.borrow()
            .with_running(name, |rt| rt.engine.borrow().groups().len())
            .unwrap_or(0)
    })
}
