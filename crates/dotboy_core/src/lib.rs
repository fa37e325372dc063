pub mod cpu;
pub mod interrupts;
pub mod machine;

pub use cpu::{Bus, Cpu, Flags, Registers, Trap};
pub use interrupts::{Interrupt, Interrupts};
pub use machine::{Buttons, Cartridge, CartridgeType, GameBoy, MemoryBus, PixelTiming, PpuMode};

/// Logical screen width in pixels for the Game Boy DMG.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels; also the first V-blank scanline.
pub const SCREEN_HEIGHT: usize = 144;
/// T-cycles in one full frame (154 scanlines of 456 cycles).
pub const CYCLES_PER_FRAME: u64 = 70_224;
