//! StreamCipher: XOR keystream built from the register's output bit.
//!
//! Each data byte consumes eight register steps. The keystream byte collects
//! the eight output bits most significant first. Encryption and decryption
//! are the same operation.

use crate::register::Register;
use crate::utils::bits::push_bit_msb;

/// Produces the next keystream byte from `register`.
#[inline]
pub fn keystream_byte(register: &mut Register) -> u8 {
    let mut stream = 0u8;
    for _ in 0..8 {
        stream = push_bit_msb(stream, register.output_bit());
    }
    stream
}

/// Enciphers or deciphers one byte, advancing `register` by eight steps.
///
/// # Examples
///
/// ```
/// use lfsrcrack::{cipher, Register};
///
/// let mut enc = Register::warmed(1 << 46);
/// let mut dec = Register::warmed(1 << 46);
/// let c = cipher::process(&mut enc, b'A');
/// assert_eq!(cipher::process(&mut dec, c), b'A');
/// ```
#[inline]
pub fn process(register: &mut Register, byte: u8) -> u8 {
    byte ^ keystream_byte(register)
}

/// Runs `data` through a freshly seeded and warmed register.
///
/// Calling this twice with the same seed restores the input.
pub fn encipher(seed: u64, data: &[u8]) -> Vec<u8> {
    StreamCipher::with_seed(seed).apply(data)
}

/// A register bound to a seed, ready to process a byte sequence.
///
/// The register advances cumulatively across calls. Use
/// [`reseed`](Self::reseed) to start over.
#[derive(Debug, Clone)]
pub struct StreamCipher {
    register: Register,
}

impl StreamCipher {
    /// Initializes the register with `seed` and runs the warm-up.
    pub fn with_seed(seed: u64) -> Self {
        StreamCipher {
            register: Register::warmed(seed),
        }
    }

    /// Restarts the keystream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.register.initialize(seed);
        self.register.pre_shift();
    }

    /// Processes a single byte.
    pub fn process(&mut self, byte: u8) -> u8 {
        process(&mut self.register, byte)
    }

    /// Processes `data` and returns the result as a new vector.
    pub fn apply(&mut self, data: &[u8]) -> Vec<u8> {
        data.iter().map(|&b| self.process(b)).collect()
    }

    /// Processes `data` in place.
    pub fn apply_in_place(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            *byte = self.process(*byte);
        }
    }

    /// Returns the underlying register.
    pub fn register(&self) -> &Register {
        &self.register
    }
}
