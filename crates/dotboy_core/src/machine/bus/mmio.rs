use crate::interrupts::Interrupt;

use super::MemoryBus;

/// Value returned for LY (`0xFF44`). The live scanline is not exposed.
const LY_SENTINEL: u8 = 0x90;

impl MemoryBus {
    pub(super) fn read_io(&mut self, addr: u16) -> u8 {
        match addr {
            0xFF00 => self.joypad.read(),
            // DIV is not modeled.
            0xFF04 => rand::random::<u8>(),
            0xFF0F => self.interrupts.pending.bits(),
            0xFF40 => self.ppu.control,
            0xFF42 => self.ppu.scroll_y,
            0xFF43 => self.ppu.scroll_x,
            0xFF44 => LY_SENTINEL,
            _ => self.io[(addr - 0xFF00) as usize],
        }
    }

    pub(super) fn write_io(&mut self, addr: u16, value: u8) {
        match addr {
            0xFF00 => self.joypad.write(value),
            0xFF0F => self.interrupts.pending = Interrupt::from_bits_retain(value),
            0xFF40 => self.ppu.control = value,
            0xFF42 => self.ppu.scroll_y = value,
            0xFF43 => self.ppu.scroll_x = value,
            0xFF44 => {}
            0xFF46 => {
                self.io[0x46] = value;
                self.oam_dma(value);
            }
            _ => self.io[(addr - 0xFF00) as usize] = value,
        }
    }
}
