use std::{any::type_name, error::Error as StdError};

use thiserror::Error;

use crate::Node;

/// An evaluation failure reported to the host.
///
/// `NodeError` wraps the error of an individual [`Node`] and records which
/// node produced it, so a host evaluating many nodes per tick can report a
/// failure without knowing every node's error type.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct NodeError {
    /// A descriptive message explaining the error.
    pub message: String,

    /// The underlying error that caused this failure.
    #[source]
    pub source: Box<dyn StdError + Send + Sync + 'static>,
}

impl NodeError {
    /// Creates a `NodeError` with a custom message and wrapped source error.
    pub fn new<E: StdError + Send + Sync + 'static>(message: String, error: E) -> Self {
        Self {
            message,
            source: Box::new(error),
        }
    }

    /// Includes the short type name of the failing node in the message and
    /// preserves the original error as the source.
    pub fn from_node<N: Node>(error: N::Error) -> Self {
        let full_type_name = type_name::<N>();
        let short_type = full_type_name.rsplit("::").next().unwrap_or(full_type_name);

        Self {
            message: format!("Node `{short_type}` failed: {error}"),
            source: Box::new(error),
        }
    }
}
