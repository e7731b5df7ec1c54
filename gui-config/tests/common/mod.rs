//! Shared fixtures for the integration tests
use gui_config::{
    ComponentPath, DisplayHint, GuiConfig, GuiOptions, SignalDefinition, SignalGenerator,
};

/// Install a test logger so `RUST_LOG=debug` shows the builder's output
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A small system: one core with an instruction view, a power domain and an
/// empty DMA group that is only kept for grouping.
///
/// Layout under the root:
/// - `chip` (group, `/chip`)
///   - `core0` (group, `/chip/core0`)
///     - `pc` (`/chip/core0/pc`, groups cpu)
///     - `power` (`/chip/core0/power`, groups power + cpu)
///   - `dma` (skipped: no children, group dma)
#[allow(dead_code)]
pub fn build_simple_system(options: GuiOptions) -> GuiConfig {
    let mut gui = GuiConfig::new(options);
    let root = gui.root();

    let chip = ComponentPath::new("chip");
    let core = chip.child("core0");
    let dma = chip.child("dma");

    let chip_node = gui.add_signal(root, &chip, SignalDefinition::new("chip").as_group());
    let core_node = gui.add_signal(
        chip_node,
        &core,
        SignalDefinition::new("core0").as_group().with_required_traces(["pc"]),
    );

    gui.add_signal(
        core_node,
        &core,
        SignalDefinition::new("pc")
            .with_path("pc")
            .with_group("cpu")
            .with_display(DisplayHint::hex_box()),
    );
    gui.add_signal(
        core_node,
        &core,
        SignalDefinition::new("power")
            .with_path("power")
            .with_groups(["power", "cpu"])
            .with_display(DisplayHint::Analog),
    );
    gui.add_signal(
        chip_node,
        &dma,
        SignalDefinition::new("dma")
            .with_path("channels")
            .with_group("dma")
            .with_skip_if_no_child(true),
    );

    gui.add_generator(
        root,
        SignalGenerator::from_binary(&core, "pc", "function", ["binary"]),
    );
    gui.add_generator(
        core_node,
        SignalGenerator::from_signals(&chip, ["core0/power", "dma/power"], "power_stacked"),
    );

    gui
}
