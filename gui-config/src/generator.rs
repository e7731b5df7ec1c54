//! Derived signal descriptors
//!
//! A generator tells the viewer to compute a signal from one or more captured
//! traces. All names are resolved against the owning component when the
//! descriptor is built, so a descriptor is already in its emitted form.
//! Descriptors are attached to the tree with `GuiConfig::add_generator`.

use crate::component::Component;
use serde::{Deserialize, Serialize};

/// How the viewer combines the sources of a `FromSignals` generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalStacking {
    /// Sources drawn as stacked analog curves
    AnalogStacked,
}

/// A signal the viewer must synthesize before rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SignalGenerator {
    /// Symbolic decoding of a value trace using binary files (e.g. PC to function name)
    #[serde(rename = "binary_function")]
    FromBinary {
        path: String,
        from_signal: String,
        binaries: Vec<String>,
    },

    /// Per-thread view built from the core's thread traces
    Threads {
        path: String,
        signal_path: String,
        pc_trace: String,
        // The viewer reads this key with this spelling
        #[serde(rename = "thread_lifecyle")]
        thread_lifecycle: String,
        thread_current: String,
        function_gen: String,
    },

    /// Combination of several signals into one
    FromSignals {
        path: String,
        subtype: SignalStacking,
        from_signals: Vec<String>,
    },
}

impl SignalGenerator {
    /// Decode `from_signal` through `binaries` into `to_signal`
    pub fn from_binary<C, I, S>(comp: &C, from_signal: &str, to_signal: &str, binaries: I) -> Self
    where
        C: Component + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        SignalGenerator::FromBinary {
            path: comp.resolve(to_signal),
            from_signal: comp.resolve(from_signal),
            binaries: binaries
                .into_iter()
                .map(|binary| comp.resolve(binary.as_ref()))
                .collect(),
        }
    }

    /// Stack `from_signals` into the analog signal `to_signal`
    pub fn from_signals<C, I, S>(comp: &C, from_signals: I, to_signal: &str) -> Self
    where
        C: Component + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        SignalGenerator::FromSignals {
            path: comp.resolve(to_signal),
            subtype: SignalStacking::AnalogStacked,
            from_signals: from_signals
                .into_iter()
                .map(|signal| comp.resolve(signal.as_ref()))
                .collect(),
        }
    }

    /// Threads generator for a component whose `threads` node lives at `signal_path`
    ///
    /// Only built by `GuiConfig::add_threads`, which grafts the node first.
    pub(crate) fn threads<C>(comp: &C, signal_path: String, pc_signal: &str, function_gen: &str) -> Self
    where
        C: Component + ?Sized,
    {
        let comp_path = |suffix: &str| {
            comp.comp_path(true, Some(suffix))
                .unwrap_or_else(|| format!("/{}", suffix))
        };

        SignalGenerator::Threads {
            path: comp_path("threads"),
            signal_path,
            pc_trace: comp_path(pc_signal),
            thread_lifecycle: comp_path("thread_lifecycle"),
            thread_current: comp_path("thread_current"),
            function_gen: comp_path(function_gen),
        }
    }

    /// Absolute path of the generated signal
    pub fn path(&self) -> &str {
        match self {
            SignalGenerator::FromBinary { path, .. } => path,
            SignalGenerator::Threads { path, .. } => path,
            SignalGenerator::FromSignals { path, .. } => path,
        }
    }

    /// Type tag the viewer dispatches on
    pub fn kind(&self) -> &'static str {
        match self {
            SignalGenerator::FromBinary { .. } => "binary_function",
            SignalGenerator::Threads { .. } => "threads",
            SignalGenerator::FromSignals { .. } => "from_signals",
        }
    }
}
