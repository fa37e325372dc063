mod bus;
mod cartridge;
mod gameboy;
mod ppu;


pub use bus::{Buttons, MemoryBus};
pub use cartridge::{Cartridge, CartridgeType};
pub use gameboy::GameBoy;
pub use ppu::{PixelTiming, PpuMode};
