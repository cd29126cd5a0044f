//! Error types for the planning engine.

use thiserror::Error;

/// Result type alias for planning operations.
pub type Result<T> = std::result::Result<T, PlanError>;

/// Errors that can occur while planning address space.
///
/// Validation errors are reported, never silently corrected: a misaligned
/// or overlapping address is a design mistake the engineer has to see.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Malformed IP address or CIDR string.
    #[error("invalid address format: {0}")]
    Format(String),

    /// Address is not the network address for its claimed prefix.
    #[error("{given} is not a network address, should be {corrected}")]
    Boundary { given: String, corrected: String },

    /// Two blocks or two allocated subnets intersect.
    #[error("{first} overlaps with {second}")]
    Overlap { first: String, second: String },

    /// No subnets or no blocks supplied.
    #[error("no {0} supplied")]
    EmptyInput(&'static str),

    /// No block or address range can hold a subnet.
    #[error("insufficient capacity for subnet {index}")]
    InsufficientCapacity { index: usize },
}

impl PlanError {
    /// Check if this error came from per-line block validation
    /// (as opposed to a placement failure).
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            PlanError::Format(_) | PlanError::Boundary { .. } | PlanError::Overlap { .. }
        )
    }
}
