use serde::{Deserialize, Serialize};
use thiserror::Error;

mod nrom;


pub use nrom::Nrom;

/// How the four logical nametables map onto the two physical ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mirroring {
    /// $2000=$2400, $2800=$2C00
    Horizontal,
    /// $2000=$2800, $2400=$2C00
    Vertical,
    SingleLower,
    SingleUpper,
    FourScreen,
}

impl Mirroring {
    /// Decodes the mirroring bits of iNES header byte 6.
    pub fn from_ines_flags(flags6: u8) -> Self {
        if flags6 & 0x08 != 0 {
            Mirroring::FourScreen
        } else if flags6 & 0x01 != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        }
    }

    fn tables(self) -> [u16; 4] {
        match self {
            Mirroring::Horizontal => [0, 0, 1, 1],
            Mirroring::Vertical => [0, 1, 0, 1],
            Mirroring::SingleLower => [0, 0, 0, 0],
            Mirroring::SingleUpper => [1, 1, 1, 1],
            Mirroring::FourScreen => [0, 1, 2, 3],
        }
    }
}

/// Folds a nametable address in `$2000-$3EFF` onto the table the mirroring
/// mode selects. The result stays in `$2000-$2FFF`.
pub fn mirror_address(mode: Mirroring, addr: u16) -> u16 {
    let addr = addr.wrapping_sub(0x2000) % 0x1000;
    let table = addr / 0x0400;
    let offset = addr % 0x0400;
    0x2000 + mode.tables()[table as usize] * 0x0400 + offset
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartridgeError {
    #[error("PRG ROM must be 16KB or 32KB, got {0} bytes")]
    PrgSize(usize),
    #[error("CHR must be empty (CHR RAM) or 8KB, got {0} bytes")]
    ChrSize(usize),
}

/// Cartridge as seen from both buses.
///
/// `read`/`write` take CPU addresses (`$6000-$FFFF`) when called from the CPU
/// bus and PPU addresses (`$0000-$1FFF`) when called from the PPU bus. The
/// ranges never overlap, so a single pair of methods serves both.
pub trait Cartridge {
    fn read(&mut self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, data: u8);

    /// Maps a nametable address to the address whose low 11 bits select the
    /// physical CIRAM byte.
    fn name_table_address(&self, addr: u16) -> u16;
}

impl<C: Cartridge + ?Sized> Cartridge for Box<C> {
    fn read(&mut self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, data: u8) {
        (**self).write(addr, data)
    }

    fn name_table_address(&self, addr: u16) -> u16 {
        (**self).name_table_address(addr)
    }
}
