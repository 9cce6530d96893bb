// DOM contract for the page effects.
//
// Ids and selectors the surrounding markup provides, plus the connector
// layer presets wired by the exported `init_*` entry points. Everything here
// is plain data so it can be checked on the host.

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

// Connector targets resolve to this child of `#<id>` in hub layers
pub const CONNECTOR_ANCHOR_SELECTOR: &str = ".connectorSVG";

// Caret
pub const INPUT_WRAPPER_SELECTOR: &str = ".input-wrapper";

// Slider
pub const SLIDER_IMAGE_SELECTOR: &str = ".image-body";
pub const SLIDER_TITLE_SELECTOR: &str = ".text-part h1";
pub const SLIDER_BODY_SELECTOR: &str = ".text-part p";
pub const SLIDER_BULLETS_SELECTOR: &str = ".carousel-button";
pub const SLIDER_BULLET_ITEMS_SELECTOR: &str = ".carousel-button span";
pub const ACTIVE_CLASS: &str = "active";

// Button borders
pub const BUTTON_CONTAINER_SELECTOR: &str = ".button-container";
pub const BUTTON_BORDER_SVG_SELECTOR: &str = "svg.connectorSVG";

/// A layer radiating curves from a hub element.
#[derive(Clone, Copy, Debug)]
pub struct HubPreset {
    pub name: &'static str,
    pub surface_id: &'static str,
    pub hub_id: &'static str,
    pub targets: &'static [&'static str],
    pub control_ratio: f64,
    pub animation: &'static str,
    pub line_class: &'static str,
}

/// A layer linking consecutive elements with straight segments.
#[derive(Clone, Copy, Debug)]
pub struct ChainPreset {
    pub name: &'static str,
    pub surface_id: &'static str,
    pub targets: &'static [&'static str],
}

pub const RECTANGLE_HUB: HubPreset = HubPreset {
    name: "rectangle",
    surface_id: "connectionLayer",
    hub_id: "connectorSolidator",
    targets: &["skill", "languages", "framework", "tool", "library", "database"],
    control_ratio: fx_core::constants::RECT_CONTROL_RATIO,
    animation: fx_core::constants::DASH_ANIMATION,
    line_class: "connectorLine",
};

pub const POLYGON_HUB: HubPreset = HubPreset {
    name: "polygon",
    surface_id: "connectionPloyLayer",
    hub_id: "polygonSolidator",
    targets: &["php", "tailwind", "postman", "jquery", "mySql"],
    control_ratio: fx_core::constants::POLY_CONTROL_RATIO,
    animation: fx_core::constants::DASH_POLY_ANIMATION,
    line_class: "connectorPolyLine",
};

pub const CHAIN_PRESETS: [ChainPreset; 5] = [
    ChainPreset {
        name: "languages",
        surface_id: "connectionLanguageLayer",
        targets: &["languages", "html", "css", "javascript", "php"],
    },
    ChainPreset {
        name: "framework",
        surface_id: "connectionFrameworkLayer",
        targets: &["framework", "laravel", "bootstrap", "tailwind"],
    },
    ChainPreset {
        name: "tool",
        surface_id: "connectionToolsLayer",
        targets: &["tool", "git", "gitHub", "npm", "vsCode", "postman"],
    },
    ChainPreset {
        name: "library",
        surface_id: "connectionLibarayLayer",
        targets: &["library", "react", "jquery"],
    },
    ChainPreset {
        name: "database",
        surface_id: "connectionDatabaseLayer",
        targets: &["database", "mySql"],
    },
];
