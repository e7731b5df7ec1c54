//! Timeline GUI Configuration Library
//!
//! Builds the declarative document that tells an external waveform/timeline
//! viewer which simulation signals to display, how to group and draw them, and
//! which derived signals it must compute from raw traces first.
//!
//! # Architecture
//!
//! The library only describes a presentation:
//! - Components declare signals and signal groups into a tree
//! - Nodes can belong to several display groups at once
//! - Generators describe signals the viewer derives from other traces
//! - One final walk flattens the tree into a JSON document
//!
//! The library does NOT:
//! - Check that declared signals exist in the trace
//! - Compute derived signal values
//! - Capture traces or parse command lines
//!
//! # Example Usage
//!
//! ```no_run
//! use gui_config::{ComponentPath, DisplayHint, GuiConfig, GuiOptions, SignalDefinition, SignalGenerator};
//! use std::path::Path;
//!
//! let mut gui = GuiConfig::new(GuiOptions::new().with_power(false));
//! let core = ComponentPath::new("chip").child("core0");
//!
//! let root = gui.root();
//! let group = gui.add_signal(root, &core, SignalDefinition::new("core0").as_group());
//! gui.add_signal(
//!     group,
//!     &core,
//!     SignalDefinition::new("pc")
//!         .with_path("pc")
//!         .with_group("cpu")
//!         .with_display(DisplayHint::hex_box()),
//! );
//! gui.add_generator(root, SignalGenerator::from_binary(&core, "pc", "function", ["binary"]));
//!
//! gui.write_file(Path::new("gui_config.json")).unwrap();
//! ```

// Public modules
pub mod component;
pub mod config;
pub mod display;
pub mod document;
pub mod generator;
pub mod gui;
pub mod signals;
pub mod types;

// Re-export main types for convenience
pub use component::{Component, ComponentPath};
pub use config::{GuiOptions, POWER_GROUP};
pub use display::DisplayHint;
pub use document::{GuiDocument, NodeConfig, SignalGroup, TimelineView};
pub use generator::{SignalGenerator, SignalStacking};
pub use gui::{GuiConfig, GuiStats};
pub use signals::{SignalDefinition, SignalNode, SignalTree};
pub use types::{GuiConfigError, NodeId, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
