use super::{mirror_address, Cartridge, CartridgeError, Mirroring};
use crate::debug_flags;

const PRG_BANK_SIZE: usize = 0x4000;
const PRG_RAM_SIZE: usize = 0x2000;
const CHR_SIZE: usize = 0x2000;

/// Mapper 0. Fixed PRG and CHR, no bank switching.
pub struct Nrom {
    prg_rom: Vec<u8>,
    prg_ram: Vec<u8>,
    chr: Vec<u8>,
    chr_is_ram: bool,
    mirroring: Mirroring,
}

impl Nrom {
    /// An empty `chr` gives the board 8KB of CHR RAM.
    pub fn new(prg_rom: Vec<u8>, chr: Vec<u8>, mirroring: Mirroring) -> Result<Self, CartridgeError> {
        if prg_rom.len() != PRG_BANK_SIZE && prg_rom.len() != 2 * PRG_BANK_SIZE {
            return Err(CartridgeError::PrgSize(prg_rom.len()));
        }
        let chr_is_ram = chr.is_empty();
        if !chr_is_ram && chr.len() != CHR_SIZE {
            return Err(CartridgeError::ChrSize(chr.len()));
        }
        let chr = if chr_is_ram { vec![0; CHR_SIZE] } else { chr };

        if !debug_flags::quiet() {
            log::info!(
                "NROM cartridge: PRG ROM {} bytes, CHR {} ({} bytes), mirroring {:?}",
                prg_rom.len(),
                if chr_is_ram { "RAM" } else { "ROM" },
                chr.len(),
                mirroring
            );
        }

        Ok(Nrom {
            prg_rom,
            prg_ram: vec![0; PRG_RAM_SIZE],
            chr,
            chr_is_ram,
            mirroring,
        })
    }

    pub fn mirroring(&self) -> Mirroring {
        self.mirroring
    }

    pub fn set_mirroring(&mut self, mirroring: Mirroring) {
        self.mirroring = mirroring;
    }

    pub fn has_chr_ram(&self) -> bool {
        self.chr_is_ram
    }
}

impl Cartridge for Nrom {
    fn read(&mut self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x1FFF => self.chr[addr as usize],
            0x6000..=0x7FFF => self.prg_ram[(addr - 0x6000) as usize],
            // 16KB images show up at both $8000 and $C000
            0x8000..=0xFFFF => self.prg_rom[(addr - 0x8000) as usize % self.prg_rom.len()],
            _ => 0,
        }
    }

    fn write(&mut self, addr: u16, data: u8) {
        match addr {
            0x0000..=0x1FFF if self.chr_is_ram => self.chr[addr as usize] = data,
            0x6000..=0x7FFF => self.prg_ram[(addr - 0x6000) as usize] = data,
            _ => {}
        }
    }

    fn name_table_address(&self, addr: u16) -> u16 {
        mirror_address(self.mirroring, addr)
    }
}
