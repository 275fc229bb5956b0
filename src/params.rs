//! Fixed constants of the cipher instance.
//!
//! The register width, feedback taps, output tap, warm-up length and search
//! stride are properties of this one cipher, not runtime options. They are
//! grouped in [`CipherParams`] so the register can be checked against the
//! exact bit formula without going through the search driver.

use crate::utils::bits::bit_mask;

/// Immutable description of the LFSR cipher instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherParams {
    /// Bit positions XORed together to form the feedback bit.
    pub feedback_taps: [u32; 4],
    /// Constant term of the feedback function (0 or 1).
    pub forced_bit: u64,
    /// Position that receives the feedback bit after a shift.
    pub feedback_bit: u32,
    /// Low bits dropped by the right shift.
    pub discard_bits: u32,
    /// Zero bits introduced at the bottom by the left shift.
    pub refill_bits: u32,
    /// Position read as the keystream bit.
    pub output_tap: u32,
    /// Shifts performed by the warm-up before the first keystream bit.
    pub warmup_shifts: usize,
    /// Increment between consecutive candidate seeds.
    pub seed_stride: u64,
}

impl CipherParams {
    /// The only cipher instance this crate attacks.
    pub const STANDARD: CipherParams = CipherParams {
        feedback_taps: [61, 57, 51, 46],
        forced_bit: 1,
        feedback_bit: 63,
        discard_bits: 5,
        refill_bits: 4,
        output_tap: 4,
        warmup_shifts: 512,
        seed_stride: 1 << 46,
    };

    /// Mask selecting every feedback tap.
    pub const fn feedback_mask(&self) -> u64 {
        bit_mask(self.feedback_taps[0])
            | bit_mask(self.feedback_taps[1])
            | bit_mask(self.feedback_taps[2])
            | bit_mask(self.feedback_taps[3])
    }

    /// Number of seeds visited before the stride wraps back to 0.
    ///
    /// The stride is a power of two, so this is `2^64 / stride`.
    pub const fn seed_count(&self) -> u64 {
        1 << (64 - self.seed_stride.trailing_zeros())
    }

    /// Bits of every candidate seed that the enumeration never changes.
    pub const fn fixed_seed_mask(&self) -> u64 {
        self.seed_stride - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_feedback_mask() {
        let mask = CipherParams::STANDARD.feedback_mask();
        assert_eq!(mask, (1 << 61) | (1 << 57) | (1 << 51) | (1 << 46));
        assert_eq!(mask.count_ones(), 4);
    }

    #[test]
    fn test_standard_seed_count() {
        assert_eq!(CipherParams::STANDARD.seed_count(), 1 << 18);
        assert_eq!(CipherParams::STANDARD.seed_count(), 262_144);
    }

    #[test]
    fn test_fixed_seed_mask_covers_low_46_bits() {
        let mask = CipherParams::STANDARD.fixed_seed_mask();
        assert_eq!(mask.count_ones(), 46);
        assert_eq!(mask.trailing_ones(), 46);
    }

    #[test]
    fn test_shift_geometry() {
        let p = CipherParams::STANDARD;
        assert_eq!(p.discard_bits - p.refill_bits, 1);
        assert!(p.output_tap >= p.refill_bits);
    }
}
