/// Two physical 1KB nametables (CIRAM).
pub const NAMETABLE_SIZE: usize = 2048;
pub const PALETTE_SIZE: usize = 32;

/// PPU-owned storage reachable through the PPU bus
#[derive(Debug, Clone)]
pub struct PpuMemory {
    pub nametables: [u8; NAMETABLE_SIZE],
    pub palettes: [u8; PALETTE_SIZE],
}

impl PpuMemory {
    pub fn new() -> Self {
        Self {
            nametables: [0; NAMETABLE_SIZE],
            palettes: [0; PALETTE_SIZE],
        }
    }

    /// `index` is a physical CIRAM offset, already resolved through the
    /// cartridge's mirroring.
    pub fn read_nametable(&self, index: u16) -> u8 {
        self.nametables[index as usize % NAMETABLE_SIZE]
    }

    pub fn write_nametable(&mut self, index: u16, data: u8) {
        self.nametables[index as usize % NAMETABLE_SIZE] = data;
    }

    pub fn read_palette(&self, index: u16) -> u8 {
        self.palettes[Self::palette_index(index)]
    }

    pub fn write_palette(&mut self, index: u16, data: u8) {
        self.palettes[Self::palette_index(index)] = data;
    }

    // $3F10/$3F14/$3F18/$3F1C mirror $3F00/$3F04/$3F08/$3F0C
    fn palette_index(index: u16) -> usize {
        let index = index as usize % PALETTE_SIZE;
        if index >= 16 && index % 4 == 0 {
            index - 16
        } else {
            index
        }
    }
}

impl Default for PpuMemory {
    fn default() -> Self {
        Self::new()
    }
}
