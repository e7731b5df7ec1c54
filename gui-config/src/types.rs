//! Core types shared across the configuration builder
//!
//! This module defines the node handle used to address the signal tree and the
//! error type reported when the finished document is serialized or written.
//! Building the tree itself never fails - any name or path is accepted as-is.

use std::fmt;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, GuiConfigError>;

/// Handle to a node stored in the signal tree
///
/// Handles are only meaningful for the `GuiConfig` that returned them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the tree's arena
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors that can occur while emitting the document
#[derive(Debug, thiserror::Error)]
pub enum GuiConfigError {
    #[error("Failed to serialize GUI configuration: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
