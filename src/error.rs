use thiserror::Error;

/// Top-level error type for track generation.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Elevation(#[from] ElevationError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error(transparent)]
    Host(#[from] HostError),
}

/// Errors in an authored layout. All of them abort generation.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("{parameter} = {value} is not a valid value")]
    InvalidParameter { parameter: &'static str, value: f64 },

    #[error("layout has no sections")]
    NoSections,

    #[error("origin direction has no horizontal component")]
    ZeroDirection,

    #[error("invalid horizon face spec: {0}")]
    InvalidFaceSpec(String),

    #[error("section {section} produces no pieces")]
    EmptySection { section: usize },
}

/// Errors raised while smoothing elevations.
#[derive(Debug, Error, PartialEq)]
pub enum ElevationError {
    #[error("slope smoothing of section {section} did not converge within {cap} iterations")]
    IterationCapExceeded { section: usize, cap: usize },

    #[error("slope smoothing of section {section} ran out of pieces before converging")]
    GapExhausted { section: usize },
}

/// Errors raised while emitting piece geometry.
#[derive(Debug, Error, PartialEq)]
pub enum EmitError {
    #[error("piece {piece} has no computed center")]
    MissingCenter { piece: usize },
}

/// Errors raised by render and physics collaborators.
#[derive(Debug, Error, PartialEq)]
pub enum HostError {
    #[error("{0} not found")]
    EntityNotFound(&'static str),
}

/// Convenience type alias for results using [`TrackError`].
pub type Result<T> = std::result::Result<T, TrackError>;
