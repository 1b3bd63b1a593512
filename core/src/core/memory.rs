/// Byte-addressed read access into emulated machine memory.
///
/// Implemented by the emulator (or a captured snapshot of it). Reads are
/// pure: calling `read_byte` twice without the machine advancing must
/// return the same value.
pub trait MemoryAccessor {
    fn read_byte(&self, addr: u16) -> u8;
}

/// Size of the console's RIOT work RAM.
pub const RAM_SIZE: usize = 0x80;

/// Captured copy of the 128-byte RIOT RAM.
///
/// Game rules address RAM either by its zero-page location (0x80-0xFF) or
/// by its raw offset (0x00-0x7F); both forms land on the same cell, so
/// only the low seven address bits are decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RamSnapshot {
    ram: [u8; RAM_SIZE],
}

impl RamSnapshot {
    pub fn new() -> Self {
        Self {
            ram: [0; RAM_SIZE],
        }
    }

    /// Build a snapshot from raw RAM contents. Shorter input is zero-padded,
    /// longer input is truncated to [`RAM_SIZE`] bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut snapshot = Self::new();
        let len = bytes.len().min(RAM_SIZE);
        snapshot.ram[..len].copy_from_slice(&bytes[..len]);
        snapshot
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        self.ram[(addr & 0x7F) as usize] = value;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.ram
    }
}

impl Default for RamSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryAccessor for RamSnapshot {
    fn read_byte(&self, addr: u16) -> u8 {
        self.ram[(addr & 0x7F) as usize]
    }
}
