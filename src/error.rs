use thiserror::Error;

/// Top-level error type for the kerfcut geometry engine.
#[derive(Debug, Error)]
pub enum KerfcutError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Direction(#[from] DirectionError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Invalid cutout geometry, detected at construction or render time.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("corner radius {radius} does not fit a {width} x {height} rectangle (needs width, height >= 2 * radius)")]
    RadiusTooLarge { radius: f64, width: f64, height: f64 },

    #[error("head radius {head} is smaller than shaft radius {shaft}")]
    HeadSmallerThanShaft { head: f64, shaft: f64 },

    #[error("kerf {kerf} collapses {feature} (nominal {nominal})")]
    KerfTooLarge {
        feature: &'static str,
        nominal: f64,
        kerf: f64,
    },

    #[error("shaft length {length} is shorter than the {minimum} needed to reach the head tangents")]
    ShaftTooShort { length: f64, minimum: f64 },

    #[error("vent grid needs {count} slots, more than the limit of {limit}")]
    TooManySlots { count: f64, limit: usize },

    #[error("kerf must be finite and non-negative, got {0}")]
    InvalidKerf(f64),

    #[error("{parameter} must be finite and non-negative, got {value}")]
    InvalidDimension { parameter: &'static str, value: f64 },

    #[error("arc radius {radius} is smaller than half the chord length {half_chord}")]
    ArcRadiusTooSmall { radius: f64, half_chord: f64 },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// A parameter outside the supported value set.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("unsupported fan size {size}, supported sizes are {supported:?}")]
    UnsupportedFanSize { size: u32, supported: Vec<u32> },
}

/// A vector that fails the canonical-direction tests.
#[derive(Debug, Error)]
pub enum DirectionError {
    #[error("vector {0:?} is not a canonical direction")]
    NotCanonical(Vec<f64>),

    #[error("vector {0:?} is not a canonical axis")]
    NotAxis(Vec<f64>),

    #[error("unknown direction name: {0}")]
    UnknownName(String),

    #[error("direction {0:?} is not a unit vector")]
    NotUnit(Vec<f64>),
}

/// Errors from path-segment sequence validation.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("path is not closed at segment {segment}")]
    NotClosed { segment: usize },
}

/// Convenience type alias for results using [`KerfcutError`].
pub type Result<T> = std::result::Result<T, KerfcutError>;
