//! CPU and PPU memory buses for an NES emulator.
//!
//! The buses only decode addresses. Everything they route to (RAM, PPU
//! registers, controllers, the cartridge) is reached through small traits so
//! the cores around them can be swapped freely.

pub mod bus;
pub mod cartridge;
pub mod console;
pub mod debug_flags;
pub mod input;
pub mod memory;
pub mod ppu;

pub use bus::{Access, BusError, BusResult, CpuBus, FaultPolicy, Lenient, Memory, PpuBus, Space};
pub use cartridge::{mirror_address, Cartridge, CartridgeError, Mirroring, Nrom};
pub use console::Console;
pub use input::{Buttons, ControllerPort, StandardController};
pub use memory::Ram;
pub use ppu::{PpuMemory, PpuRegisters, RegisterFile};
