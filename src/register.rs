//! Register: the 64-bit linear feedback shift register.
//!
//! One shift step computes a feedback bit from four taps plus a forced 1,
//! drops the five low bits, moves the word back up by four and stores the
//! feedback bit at position 63. The four low bits are therefore zero after
//! every step, and bits 4..=62 hold the old bits 5..=63.
//!
//! Every trial owns its own [`Register`]; nothing is shared between trials.

use tracing::trace;

use crate::error::LfsrError;
use crate::params::CipherParams;
use crate::utils::bits::{bit_of, checked_bit, masked_parity};

const PARAMS: CipherParams = CipherParams::STANDARD;
const FEEDBACK_MASK: u64 = PARAMS.feedback_mask();

/// The cipher's 64-bit shift register.
///
/// # Examples
///
/// ```
/// use lfsrcrack::Register;
///
/// let mut reg = Register::new(0);
/// reg.shift();
/// // all taps are 0, so the feedback bit is the forced 1
/// assert_eq!(reg.state(), 0x8000_0000_0000_0000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Register {
    state: u64,
}

impl Register {
    /// Creates a register whose state equals `seed`.
    pub fn new(seed: u64) -> Self {
        Register { state: seed }
    }

    /// Creates a register from `seed` and runs the warm-up.
    ///
    /// This is the starting point of every trial.
    pub fn warmed(seed: u64) -> Self {
        let mut reg = Register::new(seed);
        reg.pre_shift();
        reg
    }

    /// Overwrites the state with `seed`. Any value is accepted.
    pub fn initialize(&mut self, seed: u64) {
        self.state = seed;
    }

    /// Returns the current state.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Returns bit `pos` of the current state.
    ///
    /// # Errors
    /// Returns [`LfsrError::BitPositionOutOfRange`] if `pos >= 64`.
    pub fn bit(&self, pos: u32) -> Result<u8, LfsrError> {
        checked_bit(self.state, pos)
    }

    /// Returns the bit the next [`shift`](Self::shift) will store at position 63.
    #[inline(always)]
    pub fn feedback(&self) -> u64 {
        PARAMS.forced_bit ^ masked_parity(self.state, FEEDBACK_MASK)
    }

    /// Advances the register by one step.
    #[inline(always)]
    pub fn shift(&mut self) {
        let f = self.feedback();
        self.state = ((self.state >> PARAMS.discard_bits) << PARAMS.refill_bits)
            | (f << PARAMS.feedback_bit);
    }

    /// Advances the register by `n` steps.
    pub fn shift_by(&mut self, n: usize) {
        for _ in 0..n {
            self.shift();
        }
    }

    /// Runs the 512-step warm-up that must follow [`initialize`](Self::initialize).
    pub fn pre_shift(&mut self) {
        self.shift_by(PARAMS.warmup_shifts);
        trace!(state = format_args!("{:#018x}", self.state), "register warmed up");
    }

    /// Advances the register once and returns the keystream bit (bit 4).
    #[inline(always)]
    pub fn output_bit(&mut self) -> u8 {
        self.shift();
        bit_of(self.state, PARAMS.output_tap) as u8
    }
}

impl Drop for Register {
    /// Clears the register state on drop.
    fn drop(&mut self) {
        self.state = 0;
    }
}
