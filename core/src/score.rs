//! Packed-decimal score decoding.
//!
//! Scores are stored as one to three bytes of packed decimal, two digits
//! per byte, high nibble first. Some games never store the lowest one or
//! two digits and display them as constant zeros; those are restored with
//! a scale multiplier.

use crate::core::memory::MemoryAccessor;

/// Most bytes a score can span (six displayed digits).
pub const MAX_SCORE_BYTES: usize = 3;

/// Errors raised while decoding a packed-decimal score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A nibble of `byte` (at position `index`, most significant first)
    /// holds a value above 9.
    InvalidDigit { index: usize, byte: u8 },

    /// Fewer than one or more than [`MAX_SCORE_BYTES`] bytes were supplied.
    Length(usize),

    /// The scaled score, or its change since the previous frame, does not
    /// fit the result type.
    Overflow,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDigit { index, byte } => {
                write!(f, "score byte {index} is not packed decimal: 0x{byte:02X}")
            }
            Self::Length(len) => write!(
                f,
                "score must span 1 to {MAX_SCORE_BYTES} bytes, got {len}"
            ),
            Self::Overflow => write!(f, "score does not fit in 32 bits"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Decode a single packed-decimal byte into 0..=99.
pub fn decode_bcd(byte: u8) -> Option<u32> {
    let hi = byte >> 4;
    let lo = byte & 0x0F;
    if hi > 9 || lo > 9 {
        return None;
    }
    Some(u32::from(hi) * 10 + u32::from(lo))
}

/// Concatenate the digit pairs of `bytes` (most significant first) and
/// multiply by `scale`.
///
/// ```
/// use quarter_core::score::decode_score;
/// assert_eq!(decode_score(&[0x12, 0x34], 1), Ok(1234));
/// assert_eq!(decode_score(&[0x09], 10), Ok(90));
/// ```
pub fn decode_score(bytes: &[u8], scale: u32) -> Result<u32, DecodeError> {
    if bytes.is_empty() || bytes.len() > MAX_SCORE_BYTES {
        return Err(DecodeError::Length(bytes.len()));
    }
    let mut value = 0u32;
    for (index, &byte) in bytes.iter().enumerate() {
        let pair = decode_bcd(byte).ok_or(DecodeError::InvalidDigit { index, byte })?;
        value = value * 100 + pair;
    }
    value.checked_mul(scale).ok_or(DecodeError::Overflow)
}

/// Where a game keeps its score and how to scale it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreLayout {
    /// Score byte addresses, most significant digit pair first.
    pub addrs: &'static [u16],
    /// Multiplier for digits the game never stores (1, 10 or 100).
    pub scale: u32,
}

impl ScoreLayout {
    pub const fn new(addrs: &'static [u16], scale: u32) -> Self {
        Self { addrs, scale }
    }

    /// Read the score bytes from memory and decode them.
    pub fn read(&self, mem: &dyn MemoryAccessor) -> Result<u32, DecodeError> {
        let mut bytes = [0u8; MAX_SCORE_BYTES];
        if self.addrs.is_empty() || self.addrs.len() > MAX_SCORE_BYTES {
            return Err(DecodeError::Length(self.addrs.len()));
        }
        for (slot, &addr) in bytes.iter_mut().zip(self.addrs) {
            *slot = mem.read_byte(addr);
        }
        decode_score(&bytes[..self.addrs.len()], self.scale)
    }
}
