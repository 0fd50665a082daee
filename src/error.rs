use thiserror::Error;

/// Errors raised by the contour engines.
///
/// Every variant is raised synchronously before any snapshot is produced,
/// so a failed call never leaves a partially transformed structure set.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A numeric argument (angle, delta, margin or origin component) was
    /// NaN or infinite.
    #[error("{what} must be a finite number, got {value}")]
    NonFiniteValue { what: &'static str, value: f64 },

    /// A magnitude exceeded its clinical bound.
    #[error("{what} of {value} exceeds the allowed limit of {limit}")]
    MagnitudeOutOfRange {
        what: &'static str,
        value: f64,
        limit: f64,
    },

    /// An axis key could not be parsed into a known axis.
    #[error("unknown axis key '{key}', expected roll/pitch/yaw or x/y/z")]
    UnknownAxis { key: String },

    /// The named structure is not present in the structure set.
    #[error("no structure named '{name}' in the structure set")]
    UnknownStructure { name: String },

    /// An origin was supplied with the wrong number of coordinates.
    #[error("origin must hold exactly 3 coordinates, got {len}")]
    MalformedOrigin { len: usize },

    /// A flat coordinate buffer did not decode to whole 3D points.
    #[error("contour data of length {len} is not a multiple of 3")]
    RaggedContour { len: usize },

    /// A margin operation hit a slice with no points at all.
    #[error("contour needs at least one point")]
    EmptyContour,

    /// Two structures being compared disagree in slice or point counts.
    #[error("contours length differs: {what} {left} vs {right}")]
    ContourMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },

    /// The structure set has no isocenter reference to resolve a default
    /// origin from.
    #[error("structure set has no isocenter reference structure")]
    MissingIsocenter,
}
