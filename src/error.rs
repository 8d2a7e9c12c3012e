//! Error types for the simulation core.
//!
//! Three kinds of failure can surface from the engine:
//! - [`SimError::ShapeMismatch`]     – a non-circle body reached the circle-only resolver
//! - [`SimError::DegenerateGeometry`] – zero-distance centers or a zero-magnitude vector
//!   where a direction is required
//! - [`SimError::Configuration`]     – invalid construction input (non-positive mass,
//!   radius or grid size, too few polygon vertices)

use thiserror::Error;

/// Result type alias for simulation operations.
pub type SimResult<T> = Result<T, SimError>;

/// Errors produced by the simulation core.
#[derive(Debug, Error)]
pub enum SimError {
    /// A body that is not a circle was handed to the circle-only resolver.
    /// This is a configuration error of the caller, not a skippable case.
    #[error("body {index} is not a circle; the resolver only accepts circles")]
    ShapeMismatch { index: usize },

    /// Geometry with no usable direction: coincident centers, zero-magnitude
    /// axis or vector. Raised instead of letting NaN propagate.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Invalid value supplied at construction time.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl SimError {
    /// Create a degenerate geometry error.
    pub fn degenerate(details: impl Into<String>) -> Self {
        Self::DegenerateGeometry(details.into())
    }

    /// Create a configuration error.
    pub fn configuration(details: impl Into<String>) -> Self {
        Self::Configuration(details.into())
    }
}
