use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use dotboy_core::{Buttons, Cartridge, GameBoy, Registers, CYCLES_PER_FRAME};
use typed_builder::TypedBuilder;

/// Frames run when none are requested on the command line.
pub const DEFAULT_FRAMES: u32 = 60;

#[derive(TypedBuilder, Debug, Clone)]
pub struct RunConfig {
    #[builder(setter(into))]
    pub rom_path: PathBuf,
    #[builder(default = DEFAULT_FRAMES)]
    pub frames: u32,
    /// Print the register file once the run ends.
    #[builder(default = true)]
    pub dump_registers: bool,
    /// Buttons held for the whole run.
    #[builder(default)]
    pub buttons: Buttons,
}

/// What a finished run looked like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u32,
    pub cycles: u64,
    pub stopped: bool,
    pub registers: Registers,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.registers;
        writeln!(
            f,
            "{} frame(s), {} cycles{}",
            self.frames,
            self.cycles,
            if self.stopped { ", CPU stopped" } else { "" }
        )?;
        write!(
            f,
            "AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} PC={:04X}",
            r.af(),
            r.bc(),
            r.de(),
            r.hl(),
            r.sp,
            r.pc
        )
    }
}

/// Load the configured cartridge and run it headless.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let cartridge = Cartridge::from_file(&config.rom_path)?;
    log::info!("Playing ROM path: '{}'", config.rom_path.display());

    let mut gb = GameBoy::new();
    gb.load_cartridge(&cartridge);
    gb.reset();
    run_machine(&mut gb, config)
}

/// Run an already loaded machine for `config.frames` frames.
///
/// Stops after the first frame in which the CPU enters STOP.
pub fn run_machine(gb: &mut GameBoy, config: &RunConfig) -> Result<RunSummary> {
    if !config.buttons.is_empty() {
        gb.set_buttons(config.buttons);
    }

    let mut frames = 0;
    while frames < config.frames {
        gb.run_frame()
            .with_context(|| format!("frame {} of {}", frames + 1, config.frames))?;
        frames += 1;
        if gb.cpu.is_stopped() {
            log::info!("CPU stopped during frame {frames}");
            break;
        }
    }

    let summary = RunSummary {
        frames,
        cycles: gb.cpu.ticks(),
        stopped: gb.cpu.is_stopped(),
        registers: gb.cpu.regs,
    };
    log::info!(
        "ran {} frame(s), {} cycles ({:.1} frames of CPU time)",
        summary.frames,
        summary.cycles,
        summary.cycles as f64 / CYCLES_PER_FRAME as f64
    );
    Ok(summary)
}
