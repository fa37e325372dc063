use crate::cpu::Bus;
use crate::interrupts::Interrupts;

use super::MemoryBus;

/// Contents of `0xFF00..=0xFFFF` right after the boot ROM hands over.
///
/// Only `0xFF00..=0xFF7F` is reachable through the bus. HRAM starts
/// cleared regardless of the upper half.
#[rustfmt::skip]
pub(super) const IO_RESET: [u8; 0x100] = [
    0x0F, 0x00, 0x7C, 0xFF, 0x00, 0x00, 0x00, 0xF8, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01, // 0xFF0_
    0x80, 0xBF, 0xF3, 0xFF, 0xBF, 0xFF, 0x3F, 0x00, 0xFF, 0xBF, 0x7F, 0xFF, 0x9F, 0xFF, 0xBF, 0xFF, // 0xFF1_
    0xFF, 0x00, 0x00, 0xBF, 0x77, 0xF3, 0xF1, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0xFF2_
    0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, // 0xFF3_
    0x91, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x7E, 0xFF, 0xFE, // 0xFF4_
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x3E, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0xFF5_
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xC0, 0xFF, 0xC1, 0x00, 0xFE, 0xFF, 0xFF, 0xFF, // 0xFF6_
    0xF8, 0xFF, 0x00, 0x00, 0x00, 0x8F, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0xFF7_
    0xCE, 0xED, 0x66, 0x66, 0xCC, 0x0D, 0x00, 0x0B, 0x03, 0x73, 0x00, 0x83, 0x00, 0x0C, 0x00, 0x0D, // 0xFF8_
    0x00, 0x08, 0x11, 0x1F, 0x88, 0x89, 0x00, 0x0E, 0xDC, 0xCC, 0x6E, 0xE6, 0xDD, 0xDD, 0xD9, 0x99, // 0xFF9_
    0xBB, 0xBB, 0x67, 0x63, 0x6E, 0x0E, 0xEC, 0xCC, 0xDD, 0xDC, 0x99, 0x9F, 0xBB, 0xB9, 0x33, 0x3E, // 0xFFA_
    0x45, 0xEC, 0x52, 0xFA, 0x08, 0xB7, 0x07, 0x5D, 0x01, 0xFD, 0xC0, 0xFF, 0x08, 0xFC, 0x00, 0xE5, // 0xFFB_
    0x0B, 0xF8, 0xC2, 0xCE, 0xF4, 0xF9, 0x0F, 0x7F, 0x45, 0x6D, 0x3D, 0xFE, 0x46, 0x97, 0x33, 0x5E, // 0xFFC_
    0x08, 0xEF, 0xF1, 0xFF, 0x86, 0x83, 0x24, 0x74, 0x12, 0xFC, 0x00, 0x9F, 0xB4, 0xB7, 0x06, 0xD5, // 0xFFD_
    0xD0, 0x7A, 0x00, 0x9E, 0x04, 0x5F, 0x41, 0x2F, 0x1D, 0x77, 0x36, 0x75, 0x81, 0xAA, 0x70, 0x3A, // 0xFFE_
    0x98, 0xD1, 0x71, 0x02, 0x4D, 0x01, 0xC1, 0xFF, 0x0D, 0x00, 0xD3, 0x05, 0xF9, 0x00, 0x0B, 0x00, // 0xFFF_
];

/// I/O registers with a home outside the generic buffer, reloaded through
/// the bus after the reset vector is copied.
const ALIASED_REGISTERS: [u16; 3] = [0xFF40, 0xFF42, 0xFF43];

impl MemoryBus {
    /// Power-on state: RAM cleared, I/O from [`IO_RESET`], interrupts with
    /// only the master flag set, pixel timing at H-blank on line 0.
    ///
    /// The cartridge ROM is left mapped.
    pub fn reset(&mut self) {
        self.vram.fill(0);
        self.sram.fill(0);
        self.wram.fill(0);
        self.oam.fill(0);
        self.hram.fill(0);
        self.io.copy_from_slice(&IO_RESET);

        self.interrupts = Interrupts::default();
        self.ppu.reset();
        self.joypad.write(IO_RESET[0x00]);
        for addr in ALIASED_REGISTERS {
            self.write8(addr, IO_RESET[(addr - 0xFF00) as usize]);
        }
    }
}
