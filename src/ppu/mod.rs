//! PPU-side collaborators of the buses.
//!
//! The PPU core itself (rendering, timing, register semantics) lives outside
//! this crate. The CPU bus only needs somewhere to forward register traffic,
//! and the PPU bus needs the nametable and palette storage the PPU owns.

pub mod memory;
pub mod registers;


pub use memory::PpuMemory;
pub use registers::RegisterFile;

/// Register port the CPU bus forwards `$2000-$2007` and `$4014` to.
///
/// Addresses arrive already folded into `$2000-$2007`, or as `$4014`.
pub trait PpuRegisters {
    fn read_register(&mut self, addr: u16) -> u8;
    fn write_register(&mut self, addr: u16, data: u8);
}

impl<P: PpuRegisters + ?Sized> PpuRegisters for Box<P> {
    fn read_register(&mut self, addr: u16) -> u8 {
        (**self).read_register(addr)
    }

    fn write_register(&mut self, addr: u16, data: u8) {
        (**self).write_register(addr, data)
    }
}
