/// Size of the console's internal work RAM.
pub const RAM_SIZE: usize = 0x800;

/// The 2KB of CPU work RAM. Mirroring is the bus's job; indices are
/// masked to the store so an out-of-range index can never panic.
#[derive(Debug, Clone)]
pub struct Ram {
    pub(crate) ram: [u8; RAM_SIZE],
}

impl Ram {
    pub fn new() -> Self {
        Ram { ram: [0; RAM_SIZE] }
    }

    pub fn read(&self, index: u16) -> u8 {
        self.ram[index as usize & (RAM_SIZE - 1)]
    }

    pub fn write(&mut self, index: u16, data: u8) {
        self.ram[index as usize & (RAM_SIZE - 1)] = data;
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.ram
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}
