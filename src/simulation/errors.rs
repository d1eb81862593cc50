//! Error taxonomy for simulation setup.
//!
//! Runtime stepping never fails on a well-formed scenario: close encounters
//! are handled by the minimum-separation clamp in the force law, so the only
//! fallible operations are body construction and scenario assembly.

use thiserror::Error;

/// A body was constructed with a parameter the physics cannot accept.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidParameter {
    #[error("body {label:?}: mass must be positive, got {value}")]
    Mass { label: String, value: f64 },

    #[error("body {label:?}: radius must be positive, got {value}")]
    Radius { label: String, value: f64 },
}

/// A scenario configuration could not be turned into a runnable system.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameter),

    /// The anchor is a single index on the system, so a scenario may mark
    /// at most one body.
    #[error("bodies {first:?} and {second:?} are both marked as the anchor")]
    DuplicateAnchor { first: String, second: String },
}
