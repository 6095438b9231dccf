/// Plain register file standing in for a PPU core.
///
/// Every write is stored as-is and read back unchanged; there are no status
/// side effects. Good enough to wire up a console without a renderer, and to
/// observe what the CPU bus forwards.
#[derive(Debug, Clone, Default)]
pub struct RegisterFile {
    registers: [u8; 8],
    oam_dma: u8,
    writes: u64,
}

impl RegisterFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value written to `$2000 + index`.
    pub fn register(&self, index: usize) -> u8 {
        self.registers[index & 7]
    }

    /// Page last written to `$4014`.
    pub fn oam_dma_page(&self) -> u8 {
        self.oam_dma
    }

    pub fn write_count(&self) -> u64 {
        self.writes
    }
}

impl super::PpuRegisters for RegisterFile {
    fn read_register(&mut self, addr: u16) -> u8 {
        match addr {
            0x4014 => self.oam_dma,
            _ => self.registers[(addr & 7) as usize],
        }
    }

    fn write_register(&mut self, addr: u16, data: u8) {
        self.writes += 1;
        match addr {
            0x4014 => self.oam_dma = data,
            _ => self.registers[(addr & 7) as usize] = data,
        }
    }
}
