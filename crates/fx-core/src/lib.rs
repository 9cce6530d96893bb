pub mod border;
pub mod caret;
pub mod connector;
pub mod constants;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod marble;
pub mod registry;
pub mod slider;
pub mod tilt;

pub use connector::*;
pub use constants::*;
pub use engine::*;
pub use error::FxError;
pub use geometry::*;
pub use registry::{LayerRegistry, LayerSlot};
