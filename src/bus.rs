//! Address decoding for the two NES address spaces.
//!
//! `CpuBus` and `PpuBus` are borrowed views over the collaborators they decode
//! to. Both implement [`Memory`], which supplies the shared 16-bit read.

use std::fmt;

use thiserror::Error;

mod cpu;
mod policy;
mod ppu;


pub use cpu::CpuBus;
pub use policy::{FaultPolicy, Lenient};
pub use ppu::PpuBus;

/// Direction of a faulting access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Read => f.write_str("read"),
            Access::Write => f.write_str("write"),
        }
    }
}

/// Address space a fault happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Space {
    Cpu,
    Ppu,
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Space::Cpu => f.write_str("cpu"),
            Space::Ppu => f.write_str("ppu"),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    #[error("unhandled {space} memory {access} at address: 0x{addr:04X}")]
    UnmappedAddress {
        space: Space,
        addr: u16,
        access: Access,
    },
}

impl BusError {
    pub fn addr(&self) -> u16 {
        match *self {
            BusError::UnmappedAddress { addr, .. } => addr,
        }
    }

    pub fn access(&self) -> Access {
        match *self {
            BusError::UnmappedAddress { access, .. } => access,
        }
    }

    pub(crate) fn unmapped(space: Space, addr: u16, access: Access) -> Self {
        log::debug!("unmapped {} {} at 0x{:04X}", space, access, addr);
        BusError::UnmappedAddress {
            space,
            addr,
            access,
        }
    }
}

pub type BusResult<T> = Result<T, BusError>;

/// Byte-addressed memory as seen by one of the cores.
///
/// Reads take `&mut self` because register reads have side effects
/// (status latches, controller shift registers).
pub trait Memory {
    fn read(&mut self, addr: u16) -> BusResult<u8>;
    fn write(&mut self, addr: u16, value: u8) -> BusResult<()>;

    /// Little-endian word from two independent byte reads. The second
    /// address wraps at 16 bits and then goes through the bus's own decode.
    fn read16(&mut self, addr: u16) -> BusResult<u16> {
        let lo = self.read(addr)? as u16;
        let hi = self.read(addr.wrapping_add(1))? as u16;
        Ok((hi << 8) | lo)
    }
}

impl<M: Memory + ?Sized> Memory for &mut M {
    fn read(&mut self, addr: u16) -> BusResult<u8> {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) -> BusResult<()> {
        (**self).write(addr, value)
    }

    fn read16(&mut self, addr: u16) -> BusResult<u16> {
        (**self).read16(addr)
    }
}
