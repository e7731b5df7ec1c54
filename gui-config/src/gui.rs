//! Main configuration API
//!
//! `GuiConfig` is the root of the signal tree and the entry point for
//! describing what the viewer shows. Once the simulated topology has been
//! declared, `generate` flattens the tree into a `GuiDocument` and `write_to`
//! emits it as JSON.

use crate::component::Component;
use crate::config::GuiOptions;
use crate::display::DisplayHint;
use crate::document::{GuiDocument, SignalGroup, TimelineView, ViewerConfig, Views};
use crate::generator::SignalGenerator;
use crate::signals::{SignalDefinition, SignalNode, SignalTree};
use crate::types::{NodeId, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Indentation of the emitted JSON
const INDENT: &[u8] = b"    ";

/// Root of the configuration tree
pub struct GuiConfig {
    options: GuiOptions,
    tree: SignalTree,
}

impl GuiConfig {
    /// Create an empty configuration
    pub fn new(options: GuiOptions) -> Self {
        Self {
            options,
            tree: SignalTree::new(),
        }
    }

    pub fn options(&self) -> &GuiOptions {
        &self.options
    }

    /// The anonymous root node, parent of all top-level signals
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    pub fn tree(&self) -> &SignalTree {
        &self.tree
    }

    pub fn node(&self, id: NodeId) -> &SignalNode {
        self.tree.node(id)
    }

    /// Attach a signal declared by `owner` under `parent`
    ///
    /// A relative path in the definition is resolved against the owner's path.
    ///
    /// # Panics
    /// Panics if `parent` is out of range for this configuration. A `NodeId`
    /// returned by another `GuiConfig` is not detected and attaches to the node
    /// at the same index here.
    ///
    /// # Example
    /// ```
    /// use gui_config::{ComponentPath, GuiConfig, GuiOptions, SignalDefinition};
    ///
    /// let mut gui = GuiConfig::new(GuiOptions::new());
    /// let core = ComponentPath::new("core0");
    ///
    /// let root = gui.root();
    /// let group = gui.add_signal(root, &core, SignalDefinition::new("core0").as_group());
    /// let pc = gui.add_signal(group, &core, SignalDefinition::new("pc").with_path("pc"));
    ///
    /// assert_eq!(gui.node(pc).path(), Some("/core0/pc"));
    /// ```
    pub fn add_signal<C>(&mut self, parent: NodeId, owner: &C, definition: SignalDefinition) -> NodeId
    where
        C: Component + ?Sized,
    {
        self.tree.insert(parent, owner, definition)
    }

    /// Attach a generator to the generator list of `node`
    ///
    /// Generators are emitted in the order they are added to a node.
    ///
    /// # Panics
    /// Panics if `node` is out of range. As with `add_signal`, ids from another
    /// `GuiConfig` are not detected.
    pub fn add_generator(&mut self, node: NodeId, generator: SignalGenerator) {
        self.tree.push_generator(node, generator);
    }

    /// Add the per-thread view of a core under `parent`
    ///
    /// This grafts a `threads` signal node declared by `owner` under `parent`
    /// and attaches the matching threads generator to `parent`. Returns the
    /// grafted node.
    pub fn add_threads<C>(
        &mut self,
        parent: NodeId,
        owner: &C,
        pc_signal: &str,
        function_gen: &str,
    ) -> NodeId
    where
        C: Component + ?Sized,
    {
        let threads = self.add_signal(
            parent,
            owner,
            SignalDefinition::new("threads")
                .with_path("threads")
                .with_include_traces(["thread_lifecycle", "thread_current"])
                .with_display(DisplayHint::StringBox),
        );

        // "threads" is named, so the name path always resolves
        let signal_path = format!("/{}", self.tree.signal_path(threads).unwrap_or_default());

        let generator = SignalGenerator::threads(owner, signal_path, pc_signal, function_gen);
        self.add_generator(parent, generator);
        threads
    }

    /// Flatten the tree into the document read by the viewer
    pub fn generate(&self) -> GuiDocument {
        let root = self.tree.root();

        let document = GuiDocument {
            config: ViewerConfig {
                verbose: self.options.verbose,
            },
            views: Views {
                timeline: TimelineView::new(self.tree.collect_child_configs(root)),
            },
            signal_groups: self.collect_groups(),
            signals_generate: self
                .tree
                .collect_generated_signals(root)
                .into_iter()
                .cloned()
                .collect(),
        };

        log::info!(
            "Generated GUI configuration: {} top-level signals, {} groups, {} generated signals",
            document.views.timeline.signals.len(),
            document.signal_groups.len(),
            document.signals_generate.len()
        );

        document
    }

    /// Build the display groups from every node, including hidden ones
    fn collect_groups(&self) -> Vec<SignalGroup> {
        let mut groups: Vec<SignalGroup> = Vec::new();
        // Key: group name, Value: index in `groups`
        let mut group_lookup: HashMap<String, usize> = HashMap::new();

        for signal in self.tree.collect_signals(self.tree.root()) {
            for name in signal.groups() {
                let index = *group_lookup.entry(name.clone()).or_insert_with(|| {
                    let enabled = self.options.is_group_enabled(name);
                    log::debug!("Creating signal group '{}' (enabled: {})", name, enabled);
                    groups.push(SignalGroup {
                        name: name.clone(),
                        enabled,
                        signals: Vec::new(),
                    });
                    groups.len() - 1
                });

                groups[index].signals.push(signal.path().map(str::to_string));
            }
        }

        groups
    }

    /// Generate the document and write it as indented JSON
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let document = self.generate();

        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        document.serialize(&mut serializer)?;

        let mut writer = serializer.into_inner();
        writer.flush()?;
        Ok(())
    }

    /// Generate the document and write it to a file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        log::info!("Writing GUI configuration to: {:?}", path);

        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))?;

        log::info!("GUI configuration written successfully: {:?}", path);
        Ok(())
    }

    /// Get configuration statistics
    pub fn stats(&self) -> GuiStats {
        let signals = self.tree.collect_signals(self.tree.root());

        GuiStats {
            num_nodes: signals.len() - 1,
            num_group_memberships: signals.iter().map(|s| s.groups().len()).sum(),
            num_generators: signals.iter().map(|s| s.generated_signals().len()).sum(),
        }
    }
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self::new(GuiOptions::default())
    }
}

/// Configuration statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuiStats {
    /// Total number of nodes, root excluded
    pub num_nodes: usize,
    /// Sum over all nodes of the display groups they belong to
    pub num_group_memberships: usize,
    /// Total number of attached generators
    pub num_generators: usize,
}
