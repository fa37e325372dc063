use std::fmt;
use std::path::Path;

use anyhow::{ensure, Context};

/// Smallest image that still holds a complete header.
pub const MIN_ROM_SIZE: usize = 0x180;
/// Largest image that is mapped without banking.
pub const MAPPED_ROM_SIZE: usize = 0x8000;

const TITLE_OFFSET: usize = 0x134;
const TITLE_LEN: usize = 16;
const TYPE_OFFSET: usize = 0x147;

/// Cartridge hardware declared by header byte 0x147.
///
/// Only used for diagnostics: every image is mapped as plain ROM.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CartridgeType {
    RomOnly,
    Mbc1,
    Mbc1Ram,
    Mbc1RamBattery,
    Mbc2,
    Mbc2Battery,
    RomRam,
    RomRamBattery,
    Mmm01,
    Mmm01Sram,
    Mmm01SramBattery,
    Mbc3TimerBattery,
    Mbc3TimerRamBattery,
    Mbc3,
    Mbc3Ram,
    Mbc3RamBattery,
    Mbc5,
    Mbc5Ram,
    Mbc5RamBattery,
    Mbc5Rumble,
    Mbc5RumbleSram,
    Mbc5RumbleSramBattery,
    PocketCamera,
    BandaiTama5,
    HudsonHuc3,
    HudsonHuc1,
    Unknown(u8),
}

impl CartridgeType {
    pub fn from_byte(value: u8) -> Self {
        use CartridgeType::*;
        match value {
            0x00 => RomOnly,
            0x01 => Mbc1,
            0x02 => Mbc1Ram,
            0x03 => Mbc1RamBattery,
            0x05 => Mbc2,
            0x06 => Mbc2Battery,
            0x08 => RomRam,
            0x09 => RomRamBattery,
            0x0B => Mmm01,
            0x0C => Mmm01Sram,
            0x0D => Mmm01SramBattery,
            0x0F => Mbc3TimerBattery,
            0x10 => Mbc3TimerRamBattery,
            0x11 => Mbc3,
            0x12 => Mbc3Ram,
            0x13 => Mbc3RamBattery,
            0x19 => Mbc5,
            0x1A => Mbc5Ram,
            0x1B => Mbc5RamBattery,
            0x1C => Mbc5Rumble,
            0x1D => Mbc5RumbleSram,
            0x1E => Mbc5RumbleSramBattery,
            0x1F => PocketCamera,
            0xFD => BandaiTama5,
            0xFE => HudsonHuc3,
            0xFF => HudsonHuc1,
            other => Unknown(other),
        }
    }

    /// Whether the cartridge needs a memory bank controller to run.
    pub fn is_banked(self) -> bool {
        !matches!(
            self,
            CartridgeType::RomOnly | CartridgeType::RomRam | CartridgeType::RomRamBattery
        )
    }
}

impl fmt::Display for CartridgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartridgeType::Unknown(value) => write!(f, "unknown (0x{value:02X})"),
            other => fmt::Debug::fmt(other, f),
        }
    }
}

/// A ROM image with its parsed header.
#[derive(Clone)]
pub struct Cartridge {
    rom: Vec<u8>,
    title: String,
    kind: CartridgeType,
}

impl fmt::Debug for Cartridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cartridge")
            .field("title", &self.title)
            .field("kind", &self.kind)
            .field("len", &self.rom.len())
            .finish()
    }
}

impl Cartridge {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let rom = std::fs::read(path)
            .with_context(|| format!("failed to read ROM {}", path.display()))?;
        Self::from_bytes(rom).with_context(|| format!("invalid ROM {}", path.display()))
    }

    pub fn from_bytes(rom: Vec<u8>) -> anyhow::Result<Self> {
        ensure!(
            rom.len() >= MIN_ROM_SIZE,
            "ROM is too small: {} bytes, the header alone needs {MIN_ROM_SIZE}",
            rom.len()
        );

        // 0x80 and 0xC0 are CGB flags that can overlap the end of the title.
        let title_bytes: Vec<u8> = rom[TITLE_OFFSET..TITLE_OFFSET + TITLE_LEN]
            .iter()
            .copied()
            .take_while(|&b| !matches!(b, 0x00 | 0x80 | 0xC0))
            .collect();
        let title = String::from_utf8_lossy(&title_bytes).into_owned();
        let kind = CartridgeType::from_byte(rom[TYPE_OFFSET]);

        log::info!(
            "GB ROM: \"{}\" type {} ({} bytes)",
            title,
            kind,
            rom.len()
        );
        if rom.len() > MAPPED_ROM_SIZE || kind.is_banked() {
            log::warn!(
                "GB ROM: only the first {} KiB are mapped, banking for {} is not supported",
                MAPPED_ROM_SIZE / 1024,
                kind
            );
        }

        Ok(Self { rom, title, kind })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> CartridgeType {
        self.kind
    }

    pub fn rom(&self) -> &[u8] {
        &self.rom
    }
}
