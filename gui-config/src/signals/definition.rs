//! Declarative description of a signal tree node
//!
//! A `SignalDefinition` carries the names exactly as the declaring component
//! knows them. Paths are resolved when the definition is attached to the tree.

use crate::display::DisplayHint;

/// Everything needed to attach one signal (or signal group) to the tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignalDefinition {
    /// Display label; unnamed nodes are structural only and never rendered
    pub name: Option<String>,
    /// Signal path, absolute or relative to the owning component
    pub path: Option<String>,
    /// True if the node stands for all of its descendants
    pub is_group: bool,
    /// Display groups the node belongs to
    pub groups: Vec<String>,
    /// Rendering hint
    pub display: Option<DisplayHint>,
    /// Opaque properties passed to the viewer verbatim
    pub properties: Option<serde_json::Value>,
    /// Drop the node from the rendered tree if it ends up without children
    pub skip_if_no_child: bool,
    /// Traces that must exist for the node to be meaningful
    pub required_traces: Option<Vec<String>>,
    /// Additional traces the node depends on
    pub include_traces: Vec<String>,
}

impl SignalDefinition {
    /// Create a named signal with default settings
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Create an unnamed, structural-only node
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Builder method: set the signal path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Builder method: mark the node as a group of signals
    pub fn as_group(mut self) -> Self {
        self.is_group = true;
        self
    }

    /// Builder method: add one display group
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.groups.push(group.into());
        self
    }

    /// Builder method: add several display groups
    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.extend(groups.into_iter().map(Into::into));
        self
    }

    /// Builder method: set the rendering hint
    pub fn with_display(mut self, display: DisplayHint) -> Self {
        self.display = Some(display);
        self
    }

    /// Builder method: set the opaque properties
    pub fn with_properties(mut self, properties: serde_json::Value) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Builder method: hide the node when it has no children
    pub fn with_skip_if_no_child(mut self, enabled: bool) -> Self {
        self.skip_if_no_child = enabled;
        self
    }

    /// Builder method: set the required traces
    pub fn with_required_traces<I, S>(mut self, traces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_traces = Some(traces.into_iter().map(Into::into).collect());
        self
    }

    /// Builder method: add traces the node depends on
    pub fn with_include_traces<I, S>(mut self, traces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_traces
            .extend(traces.into_iter().map(Into::into));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_builder() {
        let definition = SignalDefinition::new("pc")
            .with_path("pc")
            .with_group("cpu")
            .with_groups(["power", "debug"])
            .with_display(DisplayHint::hex_box())
            .with_skip_if_no_child(true)
            .with_required_traces(["pc", "active"])
            .with_include_traces(["insn"]);

        assert_eq!(definition.name.as_deref(), Some("pc"));
        assert_eq!(definition.path.as_deref(), Some("pc"));
        assert_eq!(definition.groups, vec!["cpu", "power", "debug"]);
        assert_eq!(definition.display, Some(DisplayHint::hex_box()));
        assert!(definition.skip_if_no_child);
        assert!(!definition.is_group);
        assert_eq!(
            definition.required_traces,
            Some(vec!["pc".to_string(), "active".to_string()])
        );
        assert_eq!(definition.include_traces, vec!["insn"]);
    }

    #[test]
    fn test_anonymous_definition() {
        let definition = SignalDefinition::anonymous().as_group();

        assert_eq!(definition.name, None);
        assert!(definition.is_group);
        assert!(definition.groups.is_empty());
        assert_eq!(definition.required_traces, None);
    }
}
