//! Bit-level helpers shared by the register, cipher and decoder.

pub(crate) mod bits;
