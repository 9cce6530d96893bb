use crate::constants::SVG_NS;
use crate::dom;
use fx_core::{fmt_num, ConnectorStyle, FxError, LayerKind, Placement, Rect, Scene};
use fx_core::{END_SOCKET_POINTS, START_SOCKET_RADIUS};
use web_sys as web;

/// How a target id maps onto the element that gets measured.
#[derive(Clone, Debug)]
pub enum TargetAnchor {
    /// `#<id>` itself.
    Element,
    /// `#<id> <selector>`, e.g. the small SVG socket inside a skill card.
    Child(String),
}

/// Element references for one layer, resolved at configure time except for
/// the hub and the targets, which are looked up on every pass.
pub struct LayerRefs {
    pub surface: web::Element,
    pub hub_id: Option<String>,
    pub anchor: TargetAnchor,
}

/// Drawing elements of one connector.
pub enum DomGroup {
    Hub {
        group: web::Element,
        path: web::Element,
        start: web::Element,
        end: web::Element,
    },
    Chain {
        line: web::Element,
    },
}

impl DomGroup {
    pub fn root(&self) -> &web::Element {
        match self {
            DomGroup::Hub { group, .. } => group,
            DomGroup::Chain { line } => line,
        }
    }
}

pub struct DomScene {
    document: web::Document,
    refs: LayerRefs,
}

impl DomScene {
    pub fn new(document: web::Document, refs: LayerRefs) -> Self {
        Self { document, refs }
    }

    fn svg(&self, tag: &str) -> Result<web::Element, FxError> {
        self.document
            .create_element_ns(Some(SVG_NS), tag)
            .map_err(|e| FxError::Js(format!("create <{tag}>: {:?}", e)))
    }

    fn resolve_target(&self, id: &str) -> Option<web::Element> {
        match &self.refs.anchor {
            TargetAnchor::Element => self.document.get_element_by_id(id),
            TargetAnchor::Child(selector) => dom::query(&self.document, &format!("#{id} {selector}")),
        }
    }

    fn append(&self, el: &web::Element) -> Result<(), FxError> {
        self.refs
            .surface
            .append_child(el)
            .map(|_| ())
            .map_err(|e| FxError::Js(format!("append connector: {:?}", e)))
    }
}

fn set_attrs(el: &web::Element, attrs: &[(&str, &str)]) {
    for (name, value) in attrs {
        _ = el.set_attribute(name, value);
    }
}

fn set_line_class(el: &web::Element, class: &str) {
    if !class.is_empty() {
        _ = el.set_attribute("class", class);
    }
}

impl Scene for DomScene {
    type Group = DomGroup;

    fn surface_rect(&self) -> Option<Rect> {
        let surface = &self.refs.surface;
        surface.is_connected().then(|| dom::rect_of(surface))
    }

    fn hub_rect(&self) -> Option<Rect> {
        let id = self.refs.hub_id.as_deref()?;
        self.document
            .get_element_by_id(id)
            .map(|hub| dom::rect_of(&hub))
    }

    fn target_rect(&self, id: &str) -> Option<Rect> {
        self.resolve_target(id).map(|el| dom::rect_of(&el))
    }

    fn create_group(
        &mut self,
        index: usize,
        kind: LayerKind,
        style: &ConnectorStyle,
    ) -> Result<DomGroup, FxError> {
        let stroke_width = fmt_num(style.stroke_width);
        match kind {
            LayerKind::Hub => {
                let group = self.svg("g")?;
                set_attrs(
                    &group,
                    &[("class", "connectorGroup"), ("data-connector", index.to_string().as_str())],
                );

                let path = self.svg("path")?;
                set_line_class(&path, &style.line_class);
                set_attrs(
                    &path,
                    &[
                        ("fill", "none"),
                        ("stroke", style.color.as_str()),
                        ("stroke-width", stroke_width.as_str()),
                        ("stroke-linecap", "round"),
                        ("stroke-linejoin", "round"),
                    ],
                );
                dom::set_style(&path, "stroke-dasharray", &style.dash);
                dom::set_style(&path, "animation", &style.animation);

                let start = self.svg("circle")?;
                set_attrs(
                    &start,
                    &[
                        ("class", "startSocket"),
                        ("r", fmt_num(START_SOCKET_RADIUS).as_str()),
                        ("fill", style.color.as_str()),
                    ],
                );

                let end = self.svg("polygon")?;
                set_attrs(
                    &end,
                    &[
                        ("class", "endSocket"),
                        ("points", END_SOCKET_POINTS),
                        ("fill", style.color.as_str()),
                    ],
                );

                for child in [&path, &start, &end] {
                    group
                        .append_child(child)
                        .map_err(|e| FxError::Js(format!("append socket: {:?}", e)))?;
                }
                self.append(&group)?;
                Ok(DomGroup::Hub {
                    group,
                    path,
                    start,
                    end,
                })
            }
            LayerKind::Chain => {
                let line = self.svg("line")?;
                set_line_class(&line, &style.line_class);
                set_attrs(
                    &line,
                    &[
                        ("stroke", style.color.as_str()),
                        ("stroke-width", stroke_width.as_str()),
                        ("stroke-linecap", "round"),
                        ("stroke-dasharray", style.dash.as_str()),
                    ],
                );
                dom::set_style(&line, "animation", &style.animation);
                self.append(&line)?;
                Ok(DomGroup::Chain { line })
            }
        }
    }

    fn paint(&mut self, group: &DomGroup, placement: &Placement, _style: &ConnectorStyle) {
        match (group, placement) {
            (g, Placement::Hidden) => dom::set_style(g.root(), "display", "none"),
            (
                DomGroup::Hub {
                    group,
                    path,
                    start,
                    end,
                },
                Placement::Curve(curve),
            ) => {
                dom::set_style(group, "display", "block");
                _ = path.set_attribute("d", &curve.path_data());
                _ = start.set_attribute("cx", &fmt_num(curve.start.x));
                _ = start.set_attribute("cy", &fmt_num(curve.start.y));
                _ = end.set_attribute("transform", &curve.end_transform());
            }
            (DomGroup::Chain { line }, Placement::Segment(seg)) => {
                dom::set_style(line, "display", "block");
                _ = line.set_attribute("x1", &fmt_num(seg.from.x));
                _ = line.set_attribute("y1", &fmt_num(seg.from.y));
                _ = line.set_attribute("x2", &fmt_num(seg.to.x));
                _ = line.set_attribute("y2", &fmt_num(seg.to.y));
            }
            (g, other) => {
                log::warn!("[connector] placement {:?} does not fit group kind", other);
                dom::set_style(g.root(), "display", "none");
            }
        }
    }
}
