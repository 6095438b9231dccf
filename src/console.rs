use crate::bus::{CpuBus, PpuBus};
use crate::cartridge::Cartridge;
use crate::input::StandardController;
use crate::memory::Ram;
use crate::ppu::{PpuMemory, PpuRegisters, RegisterFile};

/// Everything the two buses decode to, owned in one place.
///
/// The buses are short-lived views: `cpu_bus()` and `ppu_bus()` split the
/// borrows so each only sees the collaborators it routes to.
pub struct Console<P = RegisterFile> {
    pub ram: Ram,
    pub ppu: P,
    pub vram: PpuMemory,
    pub joypad1: StandardController,
    pub joypad2: StandardController,
    cartridge: Box<dyn Cartridge>,
}

impl<P: PpuRegisters> Console<P> {
    pub fn new(ppu: P, cartridge: Box<dyn Cartridge>) -> Self {
        Console {
            ram: Ram::new(),
            ppu,
            vram: PpuMemory::new(),
            joypad1: StandardController::new(),
            joypad2: StandardController::new(),
            cartridge,
        }
    }

    pub fn cpu_bus(&mut self) -> CpuBus<'_> {
        CpuBus::new(
            &mut self.ram,
            &mut self.ppu,
            &mut self.joypad1,
            &mut self.joypad2,
            &mut *self.cartridge,
        )
    }

    pub fn ppu_bus(&mut self) -> PpuBus<'_> {
        PpuBus::new(&mut self.vram, &mut *self.cartridge)
    }

    pub fn cartridge(&self) -> &dyn Cartridge {
        &*self.cartridge
    }

    /// Swaps in a new cartridge and returns the old one. RAM and VRAM keep
    /// their contents, as they would on hardware.
    pub fn insert_cartridge(&mut self, cartridge: Box<dyn Cartridge>) -> Box<dyn Cartridge> {
        std::mem::replace(&mut self.cartridge, cartridge)
    }
}
