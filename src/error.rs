use thiserror::Error;

/// Top-level error type for the shapescene crate.
#[derive(Debug, Error)]
pub enum ShapesceneError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to mesh construction operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Errors related to the scene model and its editing surface.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("scene object not found")]
    ObjectNotFound,

    #[error("no scene object is selected")]
    NothingSelected,

    #[error("unknown shape: {0}")]
    UnknownShape(String),

    #[error("unknown color: {0}")]
    UnknownColor(String),
}

/// Convenience type alias for results using [`ShapesceneError`].
pub type Result<T> = std::result::Result<T, ShapesceneError>;
