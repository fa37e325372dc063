use crate::interrupts::{Interrupt, Interrupts};
use crate::SCREEN_HEIGHT;

const OAM_SCAN_CYCLES: u32 = 80;
const TRANSFER_CYCLES: u32 = 172;
const HBLANK_CYCLES: u32 = 204;
const SCANLINE_CYCLES: u32 = 456;
const LAST_SCANLINE: u8 = 153;

/// LCD controller mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PpuMode {
    #[default]
    HBlank,
    VBlank,
    OamScan,
    Transfer,
}

/// Pixel-timing unit.
///
/// Tracks the LCD mode and current scanline from the CPU cycle counter. No
/// pixels are produced; the unit only exists so software polling the LCD
/// state and waiting on VBLANK makes progress.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelTiming {
    /// LCDC (`0xFF40`).
    pub control: u8,
    /// SCX (`0xFF43`).
    pub scroll_x: u8,
    /// SCY (`0xFF42`).
    pub scroll_y: u8,
    scanline: u8,
    tick: u32,
    mode: PpuMode,
    /// CPU cycle counter seen by the previous `step`.
    last_ticks: u64,
}

impl PixelTiming {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn scanline(&self) -> u8 {
        self.scanline
    }

    /// Cycles accumulated in the current mode.
    #[inline]
    pub fn tick(&self) -> u32 {
        self.tick
    }

    #[inline]
    pub fn mode(&self) -> PpuMode {
        self.mode
    }

    /// Advance to the CPU cycle counter `cpu_ticks`.
    ///
    /// Every mode whose threshold has been reached is left in turn, so a
    /// large delta walks through several transitions in one call. Entering
    /// line 144 requests VBLANK, but only while VBLANK is enabled in IE.
    pub fn step(&mut self, cpu_ticks: u64, irq: &mut Interrupts) {
        let delta = cpu_ticks.saturating_sub(self.last_ticks);
        self.last_ticks = cpu_ticks;
        self.tick = self.tick.saturating_add(delta as u32);

        loop {
            match self.mode {
                PpuMode::OamScan if self.tick >= OAM_SCAN_CYCLES => {
                    self.tick -= OAM_SCAN_CYCLES;
                    self.mode = PpuMode::Transfer;
                }
                PpuMode::Transfer if self.tick >= TRANSFER_CYCLES => {
                    self.tick -= TRANSFER_CYCLES;
                    self.mode = PpuMode::HBlank;
                }
                PpuMode::HBlank if self.tick >= HBLANK_CYCLES => {
                    self.tick -= HBLANK_CYCLES;
                    self.scanline += 1;
                    if self.scanline as usize == SCREEN_HEIGHT {
                        self.enter_vblank(irq);
                    } else {
                        self.mode = PpuMode::OamScan;
                    }
                }
                PpuMode::VBlank if self.tick >= SCANLINE_CYCLES => {
                    self.tick -= SCANLINE_CYCLES;
                    self.scanline += 1;
                    if self.scanline > LAST_SCANLINE {
                        self.scanline = 0;
                        self.mode = PpuMode::OamScan;
                    }
                }
                _ => break,
            }
        }
    }

    fn enter_vblank(&mut self, irq: &mut Interrupts) {
        self.mode = PpuMode::VBlank;
        if irq.enable.contains(Interrupt::VBLANK) {
            irq.request(Interrupt::VBLANK);
            log::debug!("GB PPU: VBLANK requested at line {}", self.scanline);
        } else {
            log::debug!("GB PPU: VBLANK at line {} (disabled in IE)", self.scanline);
        }
    }
}
