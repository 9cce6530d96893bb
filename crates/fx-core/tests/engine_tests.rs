// Host-side tests for the connector layout engine against a recording scene.

use fx_core::*;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
enum Painted {
    Hidden,
    Curve { d: String, end: String, cx: f64, cy: f64 },
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
}

#[derive(Default)]
struct MockScene {
    surface: Option<Rect>,
    hub: Option<Rect>,
    rects: HashMap<String, Rect>,
    created: usize,
    paints: usize,
    // state per group id
    state: HashMap<usize, Painted>,
}

impl MockScene {
    fn with_surface(surface: Rect) -> Self {
        Self {
            surface: Some(surface),
            ..Self::default()
        }
    }

    fn put(&mut self, id: &str, r: Rect) {
        self.rects.insert(id.to_string(), r);
    }
}

impl Scene for MockScene {
    type Group = usize;

    fn surface_rect(&self) -> Option<Rect> {
        self.surface
    }

    fn hub_rect(&self) -> Option<Rect> {
        self.hub
    }

    fn target_rect(&self, id: &str) -> Option<Rect> {
        self.rects.get(id).copied()
    }

    fn create_group(
        &mut self,
        index: usize,
        _kind: LayerKind,
        _style: &ConnectorStyle,
    ) -> Result<usize, FxError> {
        self.created += 1;
        Ok(index)
    }

    fn paint(&mut self, group: &usize, placement: &Placement, _style: &ConnectorStyle) {
        self.paints += 1;
        let painted = match placement {
            Placement::Hidden => Painted::Hidden,
            Placement::Curve(c) => Painted::Curve {
                d: c.path_data(),
                end: c.end_transform(),
                cx: c.start.x,
                cy: c.start.y,
            },
            Placement::Segment(s) => Painted::Line {
                x1: s.from.x,
                y1: s.from.y,
                x2: s.to.x,
                y2: s.to.y,
            },
        };
        self.state.insert(*group, painted);
    }
}

fn hub_scene() -> MockScene {
    // surface at (10, 20); hub centered at (100, 100) in surface space
    let mut s = MockScene::with_surface(Rect::new(10.0, 20.0, 1000.0, 800.0));
    s.hub = Some(Rect::new(60.0, 70.0, 100.0, 100.0));
    s
}

#[test]
fn hub_layer_creates_one_group_per_target_once() {
    let mut scene = hub_scene();
    scene.put("a", Rect::new(400.0, 100.0, 50.0, 40.0));
    let config = LayerConfig::hub("skills", &["a", "b", "c", "d"]);
    let mut engine = ConnectorEngine::configure(scene, config).unwrap();
    assert!(engine.groups().is_empty());

    engine.start().unwrap();
    assert_eq!(engine.groups().len(), 4);
    assert_eq!(engine.scene().created, 4);

    engine.on_trigger(Trigger::Poll);
    engine.on_trigger(Trigger::Resize);
    engine.start().unwrap();
    assert_eq!(engine.scene().created, 4);
    assert_eq!(engine.groups(), &[0, 1, 2, 3]);
}

#[test]
fn right_side_target_matches_reference_geometry() {
    let mut scene = hub_scene();
    // near-edge midpoint at (300, 120) in surface space => viewport (310, 140)
    scene.put("right", Rect::new(310.0, 120.0, 80.0, 40.0));
    let config = LayerConfig::hub("skills", &["right"]);
    let mut engine = ConnectorEngine::configure(scene, config).unwrap();
    let report = engine.start().unwrap();
    assert_eq!(report.visible, 1);

    let Placement::Curve(curve) = engine.placements()[0] else {
        panic!("expected a curve");
    };
    assert_eq!(curve.start, glam::DVec2::new(100.0, 100.0));
    assert_eq!(curve.end, glam::DVec2::new(300.0, 120.0));
    let expected = 20.0_f64.atan2(200.0).to_degrees();
    assert!((curve.angle_deg - expected).abs() < 1e-12);
    assert!((curve.angle_deg - 5.7106).abs() < 1e-3);
    // |dx| * 0.3 = 60 > 40
    assert_eq!(curve.control_a.x, 160.0);
    assert_eq!(curve.control_b.x, 240.0);
}

#[test]
fn degenerate_and_missing_targets_are_hidden() {
    let mut scene = hub_scene();
    scene.put("ok", Rect::new(400.0, 100.0, 50.0, 40.0));
    scene.put("flat", Rect::new(400.0, 200.0, 50.0, 0.0));
    scene.put("thin", Rect::new(400.0, 300.0, 0.0, 10.0));
    let config = LayerConfig::hub("skills", &["ok", "flat", "missing", "thin"]);
    let mut engine = ConnectorEngine::configure(scene, config).unwrap();
    let report = engine.start().unwrap();

    assert_eq!(report.visible, 1);
    assert_eq!(report.hidden, 3);
    let state = &engine.scene().state;
    assert!(matches!(state[&0], Painted::Curve { .. }));
    assert_eq!(state[&1], Painted::Hidden);
    assert_eq!(state[&2], Painted::Hidden);
    assert_eq!(state[&3], Painted::Hidden);
}

#[test]
fn target_collapsing_after_being_visible_gets_hidden() {
    let mut scene = hub_scene();
    scene.put("a", Rect::new(400.0, 100.0, 50.0, 40.0));
    let mut engine = ConnectorEngine::configure(scene, LayerConfig::hub("l", &["a"])).unwrap();
    engine.start().unwrap();
    assert!(matches!(engine.scene().state[&0], Painted::Curve { .. }));

    engine.scene_mut().put("a", Rect::new(400.0, 100.0, 0.0, 0.0));
    engine.on_trigger(Trigger::Resize);
    assert_eq!(engine.scene().state[&0], Painted::Hidden);

    engine.scene_mut().put("a", Rect::new(400.0, 100.0, 50.0, 40.0));
    engine.on_trigger(Trigger::Poll);
    assert!(matches!(engine.scene().state[&0], Painted::Curve { .. }));
}

#[test]
fn repeated_passes_are_idempotent() {
    let mut scene = hub_scene();
    scene.put("a", Rect::new(400.0, 100.0, 50.0, 40.0));
    scene.put("b", Rect::new(0.0, 500.0, 33.3, 17.1));
    scene.put("c", Rect::new(90.0, 400.0, 40.0, 40.0));
    let config = LayerConfig::hub("l", &["a", "b", "c"]);
    let mut engine = ConnectorEngine::configure(scene, config).unwrap();
    engine.start().unwrap();
    let first_state = engine.scene().state.clone();
    let first_placements = engine.placements().to_vec();

    engine.on_trigger(Trigger::Poll);
    assert_eq!(engine.scene().state, first_state);
    assert_eq!(engine.placements(), first_placements.as_slice());
}

#[test]
fn missing_hub_or_surface_leaves_prior_state() {
    let mut scene = hub_scene();
    scene.put("a", Rect::new(400.0, 100.0, 50.0, 40.0));
    let mut engine = ConnectorEngine::configure(scene, LayerConfig::hub("l", &["a"])).unwrap();
    engine.start().unwrap();
    let before = engine.scene().state.clone();
    let paints = engine.scene().paints;

    engine.scene_mut().hub = None;
    let report = engine.on_trigger(Trigger::Poll);
    assert!(report.skipped);
    assert_eq!(engine.scene().paints, paints);
    assert_eq!(engine.scene().state, before);

    engine.scene_mut().hub = Some(Rect::new(60.0, 70.0, 100.0, 100.0));
    engine.scene_mut().surface = None;
    assert!(engine.on_trigger(Trigger::Resize).skipped);
    assert_eq!(engine.scene().paints, paints);
    assert_eq!(engine.passes(), 1);
}

#[test]
fn chain_of_three_draws_two_segments() {
    let mut scene = MockScene::with_surface(Rect::new(100.0, 50.0, 900.0, 200.0));
    scene.put("x", Rect::new(100.0, 50.0, 100.0, 20.0));
    scene.put("y", Rect::new(300.0, 60.0, 80.0, 40.0));
    scene.put("z", Rect::new(500.0, 50.0, 60.0, 60.0));
    let config = LayerConfig::chain("languages", &["x", "y", "z"]);
    let mut engine = ConnectorEngine::configure(scene, config).unwrap();
    let report = engine.start().unwrap();

    assert_eq!(engine.scene().created, 2);
    assert_eq!(report.visible, 2);
    assert_eq!(
        engine.scene().state[&0],
        Painted::Line {
            x1: 100.0,
            y1: 10.0,
            x2: 200.0,
            y2: 30.0
        }
    );
    assert_eq!(
        engine.scene().state[&1],
        Painted::Line {
            x1: 280.0,
            y1: 30.0,
            x2: 400.0,
            y2: 30.0
        }
    );
}

#[test]
fn chain_link_with_missing_end_is_hidden_but_keeps_alignment() {
    let mut scene = MockScene::with_surface(Rect::new(0.0, 0.0, 900.0, 200.0));
    scene.put("a", Rect::new(0.0, 0.0, 10.0, 10.0));
    scene.put("c", Rect::new(100.0, 0.0, 10.0, 10.0));
    scene.put("d", Rect::new(200.0, 0.0, 10.0, 10.0));
    let mut engine =
        ConnectorEngine::configure(scene, LayerConfig::chain("tool", &["a", "b", "c", "d"]))
            .unwrap();
    engine.start().unwrap();
    let state = &engine.scene().state;
    assert_eq!(state.len(), 3);
    assert_eq!(state[&0], Painted::Hidden);
    assert_eq!(state[&1], Painted::Hidden);
    assert!(matches!(state[&2], Painted::Line { .. }));
}

#[test]
fn chain_does_not_need_a_hub() {
    let mut scene = MockScene::with_surface(Rect::new(0.0, 0.0, 10.0, 10.0));
    scene.put("database", Rect::new(0.0, 0.0, 10.0, 10.0));
    scene.put("mySql", Rect::new(50.0, 0.0, 10.0, 10.0));
    let mut engine =
        ConnectorEngine::configure(scene, LayerConfig::chain("db", &["database", "mySql"]))
            .unwrap();
    assert!(!engine.start().unwrap().skipped);
}

#[test]
fn each_trigger_runs_exactly_one_pass() {
    let mut scene = hub_scene();
    scene.put("a", Rect::new(400.0, 100.0, 50.0, 40.0));
    let mut engine = ConnectorEngine::configure(scene, LayerConfig::hub("l", &["a"])).unwrap();
    engine.start().unwrap();
    assert_eq!(engine.passes(), 1);
    engine.on_trigger(Trigger::Resize);
    assert_eq!(engine.passes(), 2);
    assert_eq!(engine.scene().paints, 2);
}

#[test]
fn pass_before_start_is_skipped() {
    let scene = hub_scene();
    let mut engine = ConnectorEngine::configure(scene, LayerConfig::hub("l", &["a"])).unwrap();
    assert!(engine.recompute_layout().skipped);
    assert_eq!(engine.scene().created, 0);
}

#[test]
fn invalid_configs_are_rejected() {
    let bad_poll = LayerConfig::hub("l", &["a"]).with_poll_interval(0);
    assert!(matches!(
        ConnectorEngine::configure(hub_scene(), bad_poll),
        Err(FxError::InvalidConfig(_))
    ));

    let unnamed = LayerConfig::chain("  ", &["a", "b"]);
    assert!(ConnectorEngine::configure(hub_scene(), unnamed).is_err());

    let style = ConnectorStyle {
        control_ratio: f64::NAN,
        ..ConnectorStyle::default()
    };
    let bad_ratio = LayerConfig::hub("l", &["a"]).with_style(style);
    assert!(ConnectorEngine::configure(hub_scene(), bad_ratio).is_err());
}

#[test]
fn chain_lines_do_not_share_the_hub_class() {
    assert_eq!(LayerConfig::hub("l", &["a"]).style.line_class, "connectorLine");
    let chain = LayerConfig::chain("l", &["a", "b"]);
    assert!(chain.style.line_class.is_empty());
}

type Engines = LayerRegistry<ConnectorEngine<MockScene>>;

fn launch_skills(
    registry: &mut Engines,
    builds: &mut usize,
) -> LayerSlot<ConnectorEngine<MockScene>> {
    let (slot, _) = registry
        .get_or_launch("skills", || {
            *builds += 1;
            let mut scene = hub_scene();
            scene.put("a", Rect::new(400.0, 100.0, 50.0, 40.0));
            let config = LayerConfig::hub("skills", &["a", "b", "c"]);
            let mut engine = ConnectorEngine::configure(scene, config)?;
            engine.start()?;
            Ok::<_, FxError>(engine)
        })
        .unwrap();
    slot
}

#[test]
fn relaunching_a_running_layer_reuses_its_primitives() {
    let mut registry = Engines::new();
    let mut builds = 0;
    let first = launch_skills(&mut registry, &mut builds);
    let second = launch_skills(&mut registry, &mut builds);

    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(builds, 1);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.with_running("skills", |e| e.scene().created), Some(3));
}

#[test]
fn cancel_frees_the_name_and_relaunch_starts_fresh() {
    let mut registry = Engines::new();
    let mut builds = 0;
    let first = launch_skills(&mut registry, &mut builds);

    let cancelled = registry.cancel("skills", &first).unwrap();
    assert_eq!(cancelled.groups().len(), 3);
    assert!(first.borrow().is_none());
    assert!(!registry.is_running("skills"));
    assert!(registry.is_empty());
    assert_eq!(registry.with_running("skills", |e| e.groups().len()), None);
    // second cancel is a no-op
    assert!(registry.cancel("skills", &first).is_none());

    let second = launch_skills(&mut registry, &mut builds);
    assert!(!Rc::ptr_eq(&first, &second));
    assert_eq!(builds, 2);
    let relaunched = registry
        .with_running("skills", |e| e.scene().created)
        .unwrap();
    assert_eq!(relaunched, 3);
    assert_eq!(cancelled.scene().created + relaunched, 6);
}
