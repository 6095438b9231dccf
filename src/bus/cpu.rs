use super::{Access, BusError, BusResult, Memory, Space};
use crate::cartridge::Cartridge;
use crate::debug_flags;
use crate::input::ControllerPort;
use crate::memory::{Ram, RAM_SIZE};
use crate::ppu::PpuRegisters;

/// PPU register window, eight registers repeated every 8 bytes.
const PPU_REGISTER_BASE: u16 = 0x2000;
const OAM_DMA: u16 = 0x4014;
const JOYPAD1: u16 = 0x4016;
const JOYPAD2: u16 = 0x4017;

/// CPU view of the NES address space.
///
/// ```text
/// $0000-$1FFF  2KB internal RAM, mirrored 4x
/// $2000-$3FFF  PPU registers, mirrored every 8 bytes
/// $4014        OAM DMA
/// $4016/$4017  controller ports
/// $4000-$401F  APU and I/O (writes ignored)
/// $6000-$FFFF  cartridge
/// ```
pub struct CpuBus<'a> {
    ram: &'a mut Ram,
    ppu: &'a mut dyn PpuRegisters,
    joypad1: &'a mut dyn ControllerPort,
    joypad2: &'a mut dyn ControllerPort,
    cartridge: &'a mut dyn Cartridge,
}

impl<'a> CpuBus<'a> {
    pub fn new(
        ram: &'a mut Ram,
        ppu: &'a mut dyn PpuRegisters,
        joypad1: &'a mut dyn ControllerPort,
        joypad2: &'a mut dyn ControllerPort,
        cartridge: &'a mut dyn Cartridge,
    ) -> Self {
        CpuBus {
            ram,
            ppu,
            joypad1,
            joypad2,
            cartridge,
        }
    }
}

impl Memory for CpuBus<'_> {
    fn read(&mut self, addr: u16) -> BusResult<u8> {
        let data = match addr {
            0x0000..=0x1FFF => self.ram.read(addr % RAM_SIZE as u16),
            0x2000..=0x3FFF => self.ppu.read_register(PPU_REGISTER_BASE + addr % 8),
            OAM_DMA => self.ppu.read_register(addr),
            JOYPAD1 => self.joypad1.read(),
            JOYPAD2 => self.joypad2.read(),
            0x6000..=0xFFFF => self.cartridge.read(addr),
            _ => return Err(BusError::unmapped(Space::Cpu, addr, Access::Read)),
        };

        if debug_flags::bus_trace() {
            log::trace!("cpu read  0x{:04X} -> 0x{:02X}", addr, data);
        }
        Ok(data)
    }

    fn write(&mut self, addr: u16, value: u8) -> BusResult<()> {
        if debug_flags::bus_trace() {
            log::trace!("cpu write 0x{:04X} <- 0x{:02X}", addr, value);
        }

        match addr {
            0x0000..=0x1FFF => self.ram.write(addr % RAM_SIZE as u16, value),
            0x2000..=0x3FFF => self
                .ppu
                .write_register(PPU_REGISTER_BASE + addr % 8, value),
            OAM_DMA => self.ppu.write_register(addr, value),
            JOYPAD1 => self.joypad1.write(value),
            JOYPAD2 => self.joypad2.write(value),
            // APU and remaining I/O registers are not wired up
            0x4000..=0x401F => {}
            0x6000..=0xFFFF => self.cartridge.write(addr, value),
            _ => return Err(BusError::unmapped(Space::Cpu, addr, Access::Write)),
        }
        Ok(())
    }
}
