use super::{Access, BusError, BusResult, Memory, Space};
use crate::cartridge::Cartridge;
use crate::debug_flags;
use crate::ppu::memory::{PpuMemory, NAMETABLE_SIZE, PALETTE_SIZE};

/// The PPU address space is 14 bits wide; every access wraps at 16KB.
const PPU_ADDR_SPACE: u16 = 0x4000;

/// PPU view of the NES address space.
///
/// ```text
/// $0000-$1FFF  pattern tables (cartridge CHR)
/// $2000-$3EFF  nametables, remapped by the cartridge's mirroring
/// $3F00-$3FFF  palette RAM, mirrored every 32 bytes
/// ```
pub struct PpuBus<'a> {
    vram: &'a mut PpuMemory,
    cartridge: &'a mut dyn Cartridge,
}

impl<'a> PpuBus<'a> {
    pub fn new(vram: &'a mut PpuMemory, cartridge: &'a mut dyn Cartridge) -> Self {
        PpuBus { vram, cartridge }
    }

    fn nametable_index(&self, addr: u16) -> u16 {
        self.cartridge.name_table_address(addr) % NAMETABLE_SIZE as u16
    }
}

impl Memory for PpuBus<'_> {
    fn read(&mut self, addr: u16) -> BusResult<u8> {
        let addr = addr % PPU_ADDR_SPACE;
        let data = match addr {
            0x0000..=0x1FFF => self.cartridge.read(addr),
            0x2000..=0x3EFF => {
                let index = self.nametable_index(addr);
                self.vram.read_nametable(index)
            }
            0x3F00..=0x3FFF => self.vram.read_palette(addr % PALETTE_SIZE as u16),
            _ => return Err(BusError::unmapped(Space::Ppu, addr, Access::Read)),
        };

        if debug_flags::bus_trace() {
            log::trace!("ppu read  0x{:04X} -> 0x{:02X}", addr, data);
        }
        Ok(data)
    }

    fn write(&mut self, addr: u16, value: u8) -> BusResult<()> {
        let addr = addr % PPU_ADDR_SPACE;
        if debug_flags::bus_trace() {
            log::trace!("ppu write 0x{:04X} <- 0x{:02X}", addr, value);
        }

        match addr {
            0x0000..=0x1FFF => self.cartridge.write(addr, value),
            0x2000..=0x3EFF => {
                let index = self.nametable_index(addr);
                self.vram.write_nametable(index, value);
            }
            0x3F00..=0x3FFF => self
                .vram
                .write_palette(addr % PALETTE_SIZE as u16, value),
            _ => return Err(BusError::unmapped(Space::Ppu, addr, Access::Write)),
        }
        Ok(())
    }
}
