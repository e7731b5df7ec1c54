//! Component path resolution
//!
//! Signals are declared by simulator components and their names are local to
//! the component that declares them. The `Component` trait is the only thing the
//! builder needs from the simulator's component model: the component's
//! hierarchical path, used as a namespace prefix.

use std::fmt;

/// A simulated structural element that owns signals
pub trait Component {
    /// Hierarchical path of the component, optionally followed by `suffix`
    ///
    /// Returns `None` when the component has no resolvable path (e.g. the
    /// anonymous top of the hierarchy).
    fn comp_path(&self, include_top: bool, suffix: Option<&str>) -> Option<String>;

    /// Resolve a local name to an absolute path under this component
    fn resolve(&self, name: &str) -> String {
        join(self.comp_path(true, None).as_deref(), name)
    }
}

/// Prefix `name` with the owner path, or with a bare slash when there is none
pub(crate) fn join(owner: Option<&str>, name: &str) -> String {
    let path = match owner {
        Some(owner) => format!("{}/{}", owner, name),
        None => format!("/{}", name),
    };
    log::trace!("Resolved '{}' to '{}'", name, path);
    path
}

/// Like `join`, but absolute names and empty names pass through unchanged
pub(crate) fn join_trace(owner: Option<&str>, name: &str) -> String {
    if name.is_empty() || name.starts_with('/') {
        name.to_string()
    } else {
        join(owner, name)
    }
}

/// Plain hierarchical component path
///
/// Used by callers that describe a topology without a component model of their
/// own. The first segment is the top-level component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentPath {
    segments: Vec<String>,
}

impl ComponentPath {
    /// The anonymous root, which has no path
    pub fn root() -> Self {
        Self::default()
    }

    /// A top-level component
    pub fn new(top: impl Into<String>) -> Self {
        Self {
            segments: vec![top.into()],
        }
    }

    /// A sub-component of this one
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl Component for ComponentPath {
    fn comp_path(&self, include_top: bool, suffix: Option<&str>) -> Option<String> {
        let skip = if include_top { 0 } else { 1 };
        let parts: Vec<&str> = self
            .segments
            .iter()
            .skip(skip)
            .map(String::as_str)
            .chain(suffix)
            .collect();

        if parts.is_empty() {
            return None;
        }

        Some(parts.iter().map(|part| format!("/{}", part)).collect())
    }
}

impl fmt::Display for ComponentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.comp_path(true, None) {
            Some(path) => write!(f, "{}", path),
            None => write!(f, "<root>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_path() {
        let core = ComponentPath::new("chip").child("soc").child("core0");

        assert_eq!(core.comp_path(true, None).as_deref(), Some("/chip/soc/core0"));
        assert_eq!(core.comp_path(false, None).as_deref(), Some("/soc/core0"));
        assert_eq!(
            core.comp_path(true, Some("pc")).as_deref(),
            Some("/chip/soc/core0/pc")
        );
        assert_eq!(core.to_string(), "/chip/soc/core0");
    }

    #[test]
    fn test_root_has_no_path() {
        let root = ComponentPath::root();

        assert_eq!(root.comp_path(true, None), None);
        assert_eq!(root.comp_path(true, Some("pc")).as_deref(), Some("/pc"));
        assert_eq!(root.to_string(), "<root>");

        // Without the top segment a top-level component is pathless too
        assert_eq!(ComponentPath::new("chip").comp_path(false, None), None);
    }

    #[test]
    fn test_resolve() {
        assert_eq!(ComponentPath::new("core0").resolve("pc"), "/core0/pc");
        assert_eq!(ComponentPath::root().resolve("pc"), "/pc");
    }

    #[test]
    fn test_join_trace() {
        assert_eq!(join_trace(Some("/core0"), "/abs/trace"), "/abs/trace");
        assert_eq!(join_trace(Some("/core0"), "pc"), "/core0/pc");
        assert_eq!(join_trace(None, "pc"), "/pc");
        assert_eq!(join_trace(Some("/core0"), ""), "");
    }
}
