//! Rendering hints for the viewer
//!
//! Serializing a `DisplayHint` produces the record the viewer reads, e.g.
//! `{"type": "box", "format": "hex"}`.

use serde::{Deserialize, Serialize};

/// How the viewer draws a signal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplayHint {
    /// Text inside a box, one box per value change
    StringBox,
    /// Plain text
    String,
    /// Single-bit pulse
    Pulse,
    /// Analog waveform
    Analog,
    /// Numeric value inside a box, printed with `format`
    Box { format: String },
    /// Decoded logic message
    LogicBox { message: String },
}

impl DisplayHint {
    /// Numeric box with an explicit print format
    pub fn boxed(format: impl Into<String>) -> Self {
        DisplayHint::Box {
            format: format.into(),
        }
    }

    /// Numeric box printed in hexadecimal
    pub fn hex_box() -> Self {
        Self::boxed("hex")
    }

    pub fn logic_box(message: impl Into<String>) -> Self {
        DisplayHint::LogicBox {
            message: message.into(),
        }
    }
}
