use crate::cpu::Bus;

use super::MemoryBus;

/// Bytes copied by one OAM DMA transfer.
const OAM_DMA_LENGTH: u16 = 0xA0;

impl MemoryBus {
    /// OAM DMA: copy `XX00..XX9F` to `FE00..FE9F` at once.
    ///
    /// Transfer timing and bus conflicts are not modeled.
    pub(super) fn oam_dma(&mut self, page: u8) {
        let base = (page as u16) << 8;
        for i in 0..OAM_DMA_LENGTH {
            self.oam[i as usize] = self.read8(base.wrapping_add(i));
        }
        log::debug!("GB DMA: 0x{base:04X} -> OAM");
    }
}
