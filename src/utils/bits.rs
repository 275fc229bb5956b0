//! Bit extraction and MSB-first byte assembly.
//!
//! Bit positions follow the register convention: bit 63 is the most
//! significant bit of a `u64`, bit 0 the least significant.

use crate::error::LfsrError;

/// Number of bits in the register word.
pub(crate) const WORD_BITS: u32 = 64;

/// Returns a mask with only bit `pos` set.
///
/// `pos` must be below 64; callers use compile-time positions.
pub(crate) const fn bit_mask(pos: u32) -> u64 {
    1u64 << pos
}

/// Returns bit `pos` of `value` as 0 or 1.
#[inline(always)]
pub(crate) const fn bit_of(value: u64, pos: u32) -> u64 {
    (value >> pos) & 1
}

/// Returns the XOR of all bits of `value` selected by `mask`.
#[inline(always)]
pub(crate) const fn masked_parity(value: u64, mask: u64) -> u64 {
    ((value & mask).count_ones() & 1) as u64
}

/// Returns bit `pos` of `value`, checking the position.
///
/// # Errors
/// Returns [`LfsrError::BitPositionOutOfRange`] if `pos >= 64`.
pub(crate) fn checked_bit(value: u64, pos: u32) -> Result<u8, LfsrError> {
    if pos >= WORD_BITS {
        return Err(LfsrError::BitPositionOutOfRange { position: pos });
    }
    Ok(bit_of(value, pos) as u8)
}

/// Appends `bit` as the new least significant bit of `acc`.
///
/// Eight calls starting from 0 place the first bit at position 7.
#[inline(always)]
pub(crate) const fn push_bit_msb(acc: u8, bit: u8) -> u8 {
    (acc << 1) | (bit & 1)
}

/// Sets the `index`-th bit of `byte` counting from the most significant one.
///
/// `index` 0 is bit 7, `index` 7 is bit 0.
pub(crate) const fn set_bit_msb(byte: u8, index: u32) -> u8 {
    byte | (0x80 >> index)
}
