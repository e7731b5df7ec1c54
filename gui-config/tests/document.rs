//! End-to-end tests of the emitted viewer document.
mod common;

use gui_config::{GuiDocument, GuiOptions};
use serde_json::json;

#[test]
fn test_full_document() {
    common::init_logging();
    let gui = common::build_simple_system(GuiOptions::new().with_verbose(true));

    let document = serde_json::to_value(gui.generate()).unwrap();
    assert_eq!(
        document,
        json!({
            "config": { "verbose": true },
            "views": {
                "timeline": {
                    "type": "timeline",
                    "signals": [{
                        "name": "chip",
                        "groups": [],
                        "group": "/chip",
                        "signals": [{
                            "name": "core0",
                            "groups": [],
                            "group": "/chip/core0",
                            "signals": [
                                {
                                    "name": "pc",
                                    "groups": ["cpu"],
                                    "path": "/chip/core0/pc",
                                    "display": { "type": "box", "format": "hex" },
                                    "include_traces": ["/chip/core0/pc"],
                                },
                                {
                                    "name": "power",
                                    "groups": ["power", "cpu"],
                                    "path": "/chip/core0/power",
                                    "display": { "type": "analog" },
                                    "include_traces": ["/chip/core0/power"],
                                },
                            ],
                            "required": ["/chip/core0/pc"],
                            "include_traces": [],
                        }],
                        "include_traces": [],
                    }],
                },
            },
            "signal_groups": [
                { "name": "cpu", "enabled": true, "signals": ["/chip/core0/pc", "/chip/core0/power"] },
                { "name": "power", "enabled": false, "signals": ["/chip/core0/power"] },
                { "name": "dma", "enabled": true, "signals": ["/chip/dma/channels"] },
            ],
            "signals_generate": [
                {
                    "path": "/chip/core0/function",
                    "type": "binary_function",
                    "from_signal": "/chip/core0/pc",
                    "binaries": ["/chip/core0/binary"],
                },
                {
                    "path": "/chip/power_stacked",
                    "type": "from_signals",
                    "subtype": "analog_stacked",
                    "from_signals": ["/chip/core0/power", "/chip/dma/power"],
                },
            ],
        })
    );
}

#[test]
fn test_power_flag_enables_group() {
    let gui = common::build_simple_system(GuiOptions::new().with_power(true));
    let document = gui.generate();

    let power = document
        .signal_groups
        .iter()
        .find(|group| group.name == "power")
        .unwrap();
    assert!(power.enabled);
}

#[test]
fn test_written_document_round_trip() {
    let gui = common::build_simple_system(GuiOptions::new());

    let mut output = Vec::new();
    gui.write_to(&mut output).unwrap();

    let parsed: GuiDocument = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed, gui.generate());
}

#[test]
fn test_write_file() {
    common::init_logging();
    let gui = common::build_simple_system(GuiOptions::new());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gui_config.json");
    gui.write_file(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed["views"]["timeline"]["type"], "timeline");
    assert_eq!(parsed["signal_groups"].as_array().unwrap().len(), 3);
}

#[test]
fn test_write_file_to_missing_directory() {
    let gui = common::build_simple_system(GuiOptions::new());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("gui_config.json");

    let err = gui.write_file(&path).unwrap_err();
    assert!(err.to_string().starts_with("IO error"));
}

#[test]
fn test_generate_is_repeatable() {
    let gui = common::build_simple_system(GuiOptions::new());
    assert_eq!(gui.generate(), gui.generate());
    assert_eq!(gui.stats().num_nodes, 5);
    assert_eq!(gui.stats().num_generators, 2);
}
