//! Signal tree and node definitions
//!
//! Callers describe nodes with `SignalDefinition` and attach them to a
//! `SignalTree`, which owns every node and renders the nested view.

pub mod definition;
pub mod tree;

// Re-export key types for convenience
pub use definition::SignalDefinition;
pub use tree::{SignalNode, SignalTree};
