//! Signal tree
//!
//! Nodes live in an arena owned by `SignalTree` and refer to their parent and
//! children by `NodeId`. Slot 0 is the anonymous root. Nodes are only ever
//! appended; a node's parent is fixed when it is inserted.

use super::definition::SignalDefinition;
use crate::component::{self, Component};
use crate::display::DisplayHint;
use crate::document::NodeConfig;
use crate::generator::SignalGenerator;
use crate::types::NodeId;

/// A signal or a group of signals
#[derive(Debug, Clone)]
pub struct SignalNode {
    name: Option<String>,
    /// Absolute once resolved, never re-resolved
    path: Option<String>,
    is_group: bool,
    groups: Vec<String>,
    display: Option<DisplayHint>,
    properties: Option<serde_json::Value>,
    skip_if_no_child: bool,
    required_traces: Option<Vec<String>>,
    /// Own path first, then caller traces as given
    include_traces: Vec<String>,
    /// Path of the declaring component, used to resolve traces at render time
    owner_path: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    generated_signals: Vec<SignalGenerator>,
}

impl SignalNode {
    fn new(owner_path: Option<String>, parent: Option<NodeId>, definition: SignalDefinition) -> Self {
        let path = definition.path.map(|path| {
            if parent.is_none() || path.is_empty() || path.starts_with('/') {
                path
            } else {
                component::join(owner_path.as_deref(), &path)
            }
        });

        let mut include_traces: Vec<String> = path.iter().cloned().collect();
        include_traces.extend(definition.include_traces);

        Self {
            name: definition.name,
            path,
            is_group: definition.is_group,
            groups: definition.groups,
            display: definition.display,
            properties: definition.properties,
            skip_if_no_child: definition.skip_if_no_child,
            required_traces: definition.required_traces,
            include_traces,
            owner_path,
            parent,
            children: Vec::new(),
            generated_signals: Vec::new(),
        }
    }

    fn root() -> Self {
        Self::new(None, None, SignalDefinition::anonymous())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn is_group(&self) -> bool {
        self.is_group
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn display(&self) -> Option<&DisplayHint> {
        self.display.as_ref()
    }

    pub fn owner_path(&self) -> Option<&str> {
        self.owner_path.as_deref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Generators attached directly to this node
    pub fn generated_signals(&self) -> &[SignalGenerator] {
        &self.generated_signals
    }

    fn is_hidden(&self) -> bool {
        self.name.is_none() || (self.skip_if_no_child && self.children.is_empty())
    }
}

/// Arena holding every node of the configuration tree
///
/// Methods taking a `NodeId` panic if the id is out of range. Ids are plain
/// indices: an id taken from another tree is not detected and addresses
/// whichever node sits at that index here.
#[derive(Debug, Clone)]
pub struct SignalTree {
    nodes: Vec<SignalNode>,
}

impl SignalTree {
    /// Create a tree holding only the anonymous root
    pub fn new() -> Self {
        Self {
            nodes: vec![SignalNode::root()],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if nothing but the root has been added
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn get(&self, id: NodeId) -> Option<&SignalNode> {
        self.nodes.get(id.0)
    }

    pub fn node(&self, id: NodeId) -> &SignalNode {
        &self.nodes[id.0]
    }

    /// Attach a new node under `parent`, resolving its path against `owner`
    pub fn insert<C>(&mut self, parent: NodeId, owner: &C, definition: SignalDefinition) -> NodeId
    where
        C: Component + ?Sized,
    {
        let id = NodeId(self.nodes.len());
        let node = SignalNode::new(owner.comp_path(true, None), Some(parent), definition);

        log::debug!(
            "Adding signal {:?} (path {:?}) as {} under {}",
            node.name,
            node.path,
            id,
            parent
        );

        self.nodes[parent.0].children.push(id);
        self.nodes.push(node);
        id
    }

    /// Append a generator to a node's own generator list
    pub fn push_generator(&mut self, node: NodeId, generator: SignalGenerator) {
        log::debug!(
            "Adding {} generator for '{}' at {}",
            generator.kind(),
            generator.path(),
            node
        );
        self.nodes[node.0].generated_signals.push(generator);
    }

    /// Slash-joined path of names from the root down to `id`
    ///
    /// When no path can be built above a node, the node's own name is used.
    pub fn signal_path(&self, id: NodeId) -> Option<String> {
        let node = self.node(id);
        let parent_path = match node.parent {
            Some(parent) => self.signal_path(parent),
            None => return node.name.clone(),
        };

        match parent_path {
            None => node.name.clone(),
            Some(parent_path) => node
                .name
                .as_ref()
                .map(|name| format!("{}/{}", parent_path, name)),
        }
    }

    /// Rendered configs of the direct children that are not hidden
    pub fn collect_child_configs(&self, id: NodeId) -> Vec<NodeConfig> {
        self.node(id)
            .children
            .iter()
            .filter_map(|child| self.render_config(*child))
            .collect()
    }

    /// Render one node and its visible subtree
    ///
    /// Returns `None` for unnamed nodes and for childless nodes marked
    /// `skip_if_no_child`.
    pub fn render_config(&self, id: NodeId) -> Option<NodeConfig> {
        let node = self.node(id);
        if node.is_hidden() {
            return None;
        }

        let owner = node.owner_path.as_deref();

        let group = node
            .is_group
            .then(|| node.path.clone().or_else(|| node.owner_path.clone()));

        let required = node.required_traces.as_ref().map(|traces| {
            traces
                .iter()
                .map(|trace| component::join(owner, trace))
                .collect()
        });

        let include_traces = node
            .include_traces
            .iter()
            .map(|trace| component::join_trace(owner, trace))
            .collect();

        Some(NodeConfig {
            name: node.name.clone().unwrap_or_default(),
            groups: node.groups.clone(),
            group,
            path: node.path.clone(),
            display: node.display.clone(),
            signals: self.collect_child_configs(id),
            properties: node.properties.clone(),
            required,
            include_traces,
        })
    }

    /// Pre-order list of `id` and every descendant, hidden ones included
    pub fn collect_signals(&self, id: NodeId) -> Vec<&SignalNode> {
        let mut signals = Vec::new();
        self.collect_signals_into(id, &mut signals);
        signals
    }

    fn collect_signals_into<'a>(&'a self, id: NodeId, signals: &mut Vec<&'a SignalNode>) {
        let node = self.node(id);
        signals.push(node);
        for child in &node.children {
            self.collect_signals_into(*child, signals);
        }
    }

    /// Generators of `id` followed by those of its descendants, in order
    pub fn collect_generated_signals(&self, id: NodeId) -> Vec<&SignalGenerator> {
        let node = self.node(id);
        let mut generators: Vec<&SignalGenerator> = node.generated_signals.iter().collect();
        for child in &node.children {
            generators.extend(self.collect_generated_signals(*child));
        }
        generators
    }
}

impl Default for SignalTree {
    fn default() -> Self {
        Self::new()
    }
}
