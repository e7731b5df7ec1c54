//! Emitted document types
//!
//! These structs mirror the JSON the timeline viewer reads. They are only
//! produced by flattening the signal tree; the tree's own layout never leaks
//! into them.

use crate::display::DisplayHint;
use crate::generator::SignalGenerator;
use serde::{Deserialize, Serialize};

/// Top-level document consumed by the viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuiDocument {
    pub config: ViewerConfig,
    pub views: Views,
    pub signal_groups: Vec<SignalGroup>,
    pub signals_generate: Vec<SignalGenerator>,
}

/// Global viewer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerConfig {
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Views {
    pub timeline: TimelineView,
}

/// The timeline view and its nested signal tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineView {
    #[serde(rename = "type")]
    pub view_type: String,
    pub signals: Vec<NodeConfig>,
}

impl TimelineView {
    pub fn new(signals: Vec<NodeConfig>) -> Self {
        Self {
            view_type: "timeline".to_string(),
            signals,
        }
    }
}

/// A display group with its enable toggle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalGroup {
    pub name: String,
    pub enabled: bool,
    /// Paths of the member nodes, `None` for members without a path
    pub signals: Vec<Option<String>>,
}

/// Rendered form of one tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    pub name: String,
    pub groups: Vec<String>,
    /// Present for group nodes only; the inner value is `None` when neither
    /// the node nor its owner has a path
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    pub group: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayHint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signals: Vec<NodeConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(default)]
    pub include_traces: Vec<String>,
}

/// Maps a present key to `Some`, so an explicit `null` stays distinct from a missing key
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
