//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HearthError {
    /// A declared hyper-parameter has neither an override nor a default value.
    #[error("param {0} not in hyper params, and no default value was provided")]
    MissingHyperParameter(String),

    /// An override names a hyper-parameter that was not declared.
    #[error("param {0} is not a declared hyper param")]
    UnknownHyperParameter(String),

    /// A hyper-parameter value cannot be read as the requested type.
    #[error("param {name} has an invalid value: {reason}")]
    InvalidHyperParameter {
        /// Name of the parameter.
        name: String,
        /// What was wrong with the value.
        reason: String,
    },

    /// A behavioral hook of an agent was called without a concrete implementation.
    #[error("{0} is not implemented for this agent")]
    NotImplemented(&'static str),

    /// The space size helper received a space other than `Discrete` or `Box`.
    #[error("unsupported space kind: {0}")]
    UnsupportedSpaceKind(String),

    /// The flattened size of a space does not fit in `usize`.
    #[error("space of shape {0} is too large")]
    SpaceTooLarge(String),

    /// A transition was buffered on an agent declared without `buffer_size`.
    #[error("no buffer configured")]
    NoBufferConfigured,

    /// Samples were requested from an empty buffer.
    #[error("cannot sample from an empty buffer")]
    EmptyBuffer,
}
