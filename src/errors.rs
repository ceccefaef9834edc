use thiserror::Error;

pub type Result<T> = std::result::Result<T, AirfoilError>;

/// Errors raised by airfoil construction, analysis, transformation, interpolation and file I/O.
#[derive(Debug, Error)]
pub enum AirfoilError {
    /// Two sequences that must correspond index-by-index have different lengths.
    #[error("inconsistent point count: expected {expected}, got {actual}")]
    InconsistentPointCount { expected: usize, actual: usize },

    /// Zero area, zero chord, or all points coincident.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),

    /// The leading edge value could not be found verbatim among the stored points.
    #[error("leading edge is not a member of the stored point sequence")]
    GeometryInconsistency,

    #[error("unsupported file format: {0:?}")]
    UnsupportedFormat(String),

    #[error("an airfoil needs at least 3 points, got {actual}")]
    NotEnoughPoints { actual: usize },

    #[error("non-finite coordinate at index {index}")]
    NonFiniteCoordinate { index: usize },

    /// A transform was given a NaN or infinite factor, angle, axis or offset.
    #[error("non-finite transform parameter: {0}")]
    NonFiniteParameter(&'static str),

    /// The points run TE -> lower -> LE -> upper instead of TE -> upper -> LE -> lower.
    #[error("points are ordered clockwise, expected TE -> upper -> LE -> lower")]
    InvalidOrdering,

    #[error("{airfoils} airfoils but {stations} span stations")]
    SpanMismatch { airfoils: usize, stations: usize },

    #[error("span interpolation needs at least 2 stations, got {actual}")]
    NotEnoughStations { actual: usize },

    #[error("span coordinates must be strictly monotonic")]
    NotMonotonic,

    /// DAT headers and CSV records are single lines, so the name may not contain a line break.
    #[error("airfoil name {0:?} cannot be written on a single line")]
    UnwritableName(String),

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
}
