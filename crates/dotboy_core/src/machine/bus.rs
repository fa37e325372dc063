use crate::cpu::Bus;
use crate::interrupts::{Interrupt, Interrupts};

use super::ppu::PixelTiming;

mod dma;
mod init;
mod joypad;
mod mmio;

pub use joypad::Buttons;
use joypad::Joypad;

const ROM_SIZE: usize = 0x8000;
const RAM_BANK_SIZE: usize = 0x2000;
const OAM_SIZE: usize = 0x100;
const IO_SIZE: usize = 0x100;
const HRAM_SIZE: usize = 0x80;

/// DMG memory map.
///
/// Owns every backing buffer, the interrupt controller state and the
/// pixel-timing unit whose registers are memory mapped.
#[derive(Clone)]
pub struct MemoryBus {
    rom: [u8; ROM_SIZE],
    vram: [u8; RAM_BANK_SIZE],
    sram: [u8; RAM_BANK_SIZE],
    wram: [u8; RAM_BANK_SIZE],
    oam: [u8; OAM_SIZE],
    io: [u8; IO_SIZE],
    hram: [u8; HRAM_SIZE],
    interrupts: Interrupts,
    ppu: PixelTiming,
    joypad: Joypad,
}

impl Default for MemoryBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus {
    pub fn new() -> Self {
        let mut bus = Self {
            rom: [0; ROM_SIZE],
            vram: [0; RAM_BANK_SIZE],
            sram: [0; RAM_BANK_SIZE],
            wram: [0; RAM_BANK_SIZE],
            oam: [0; OAM_SIZE],
            io: [0; IO_SIZE],
            hram: [0; HRAM_SIZE],
            interrupts: Interrupts::default(),
            ppu: PixelTiming::default(),
            joypad: Joypad::default(),
        };
        bus.reset();
        bus
    }

    /// Map a cartridge image at 0x0000. Anything past 32 KiB is not visible.
    pub fn load_rom(&mut self, rom: &[u8]) {
        let len = rom.len().min(ROM_SIZE);
        self.rom.fill(0);
        self.rom[..len].copy_from_slice(&rom[..len]);
    }

    #[inline]
    pub fn ppu(&self) -> &PixelTiming {
        &self.ppu
    }

    /// Interrupt state without going through the `Bus` trait.
    #[inline]
    pub fn interrupt_state(&self) -> &Interrupts {
        &self.interrupts
    }

    /// Advance the pixel-timing unit to the CPU cycle counter.
    pub fn step_ppu(&mut self, cpu_ticks: u64) {
        self.ppu.step(cpu_ticks, &mut self.interrupts);
    }

    #[inline]
    pub fn buttons(&self) -> Buttons {
        self.joypad.held()
    }

    /// Replace the held-button snapshot.
    ///
    /// Any newly pressed button raises JOYPAD. Returns whether one was
    /// pressed so the caller can release a stopped CPU.
    pub fn set_buttons(&mut self, held: Buttons) -> bool {
        let pressed = self.joypad.set_held(held);
        if pressed.is_empty() {
            return false;
        }
        log::debug!("GB JOYP: pressed {pressed:?}");
        self.interrupts.request(Interrupt::JOYPAD);
        true
    }
}

impl Bus for MemoryBus {
    fn read8(&mut self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x7FFF => self.rom[addr as usize],
            0x8000..=0x9FFF => self.vram[(addr - 0x8000) as usize],
            0xA000..=0xBFFF => self.sram[(addr - 0xA000) as usize],
            0xC000..=0xDFFF => self.wram[(addr - 0xC000) as usize],
            // Echo RAM mirrors WRAM.
            0xE000..=0xFDFF => self.wram[(addr - 0xE000) as usize],
            0xFE00..=0xFEFF => self.oam[(addr - 0xFE00) as usize],
            0xFF00..=0xFF7F => self.read_io(addr),
            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize],
            0xFFFF => self.interrupts.enable.bits(),
        }
    }

    fn write8(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x7FFF => {
                log::warn!("GB BUS: write 0x{value:02X} to ROM at 0x{addr:04X} ignored");
            }
            0x8000..=0x9FFF => self.vram[(addr - 0x8000) as usize] = value,
            0xA000..=0xBFFF => self.sram[(addr - 0xA000) as usize] = value,
            0xC000..=0xDFFF => self.wram[(addr - 0xC000) as usize] = value,
            0xE000..=0xFDFF => self.wram[(addr - 0xE000) as usize] = value,
            0xFE00..=0xFEFF => self.oam[(addr - 0xFE00) as usize] = value,
            0xFF00..=0xFF7F => self.write_io(addr, value),
            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize] = value,
            0xFFFF => self.interrupts.enable = Interrupt::from_bits_retain(value),
        }
    }

    fn interrupts(&mut self) -> &mut Interrupts {
        &mut self.interrupts
    }
}
