use crate::cpu::Cpu;
use crate::interrupts;
use crate::CYCLES_PER_FRAME;

use super::{Buttons, Cartridge, MemoryBus};

/// High-level Game Boy machine.
///
/// Owns the CPU and the bus and drives them in a fixed order: one CPU step,
/// then pixel timing, then the interrupt controller.
#[derive(Clone, Default)]
pub struct GameBoy {
    pub cpu: Cpu,
    pub bus: MemoryBus,
}

impl GameBoy {
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            bus: MemoryBus::new(),
        }
    }

    /// Reset CPU, RAM, I/O and interrupt state. The cartridge stays mapped.
    pub fn reset(&mut self) {
        log::info!("GB: reset");
        self.bus.reset();
        self.cpu.reset();
    }

    pub fn load_cartridge(&mut self, cartridge: &Cartridge) {
        self.bus.load_rom(cartridge.rom());
    }

    /// Run one CPU, pixel-timing and interrupt iteration.
    ///
    /// Returns the T-cycles consumed, interrupt dispatch included. Returns 0
    /// once the CPU has locked on an illegal opcode and while it is stopped.
    pub fn step(&mut self) -> u32 {
        if self.cpu.trap().is_some() {
            return 0;
        }

        let cycles = self.cpu.step(&mut self.bus);
        self.bus.step_ppu(self.cpu.ticks());
        cycles + interrupts::step(&mut self.cpu, &mut self.bus)
    }

    /// Run until one frame's worth of cycles has elapsed.
    ///
    /// Returns early while the CPU is stopped. Fails with the [`Trap`]
    /// once an illegal opcode locks the CPU.
    ///
    /// [`Trap`]: crate::cpu::Trap
    pub fn run_frame(&mut self) -> anyhow::Result<()> {
        let target = self.cpu.ticks() + CYCLES_PER_FRAME;

        while self.cpu.ticks() < target {
            if self.cpu.is_stopped() {
                break;
            }
            self.step();
            if let Some(trap) = self.cpu.trap() {
                return Err(anyhow::Error::new(*trap).context("emulation halted"));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn buttons(&self) -> Buttons {
        self.bus.buttons()
    }

    /// Replace the held-button snapshot. A new press wakes the CPU from STOP.
    pub fn set_buttons(&mut self, held: Buttons) {
        if self.bus.set_buttons(held) {
            self.cpu.resume();
        }
    }

    pub fn set_button(&mut self, button: Buttons, pressed: bool) {
        let mut held = self.buttons();
        held.set(button, pressed);
        self.set_buttons(held);
    }
}
