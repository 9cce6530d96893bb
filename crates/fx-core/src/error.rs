use thiserror::Error;

/// Failures surfaced while wiring an effect.
///
/// Per-target resolution problems inside a layout pass are not errors; they
/// come back as hidden placements instead.
#[derive(Debug, Error)]
pub enum FxError {
    #[error("missing element: {0}")]
    MissingElement(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("js error: {0}")]
    Js(String),
}
