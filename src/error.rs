//! Error types for the lfsrcrack library.
//!
//! The cipher, register and search paths are infallible. Errors only come
//! from reading ciphertext/plaintext sources, writing reports, parsing seeds
//! on the command line and the bit inspection helpers.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors produced by the lfsrcrack library.
#[derive(Error, Diagnostic, Debug)]
pub enum LfsrError {
    /// The ciphertext file could not be opened or read.
    #[error("failed to read ciphertext file {path:?}")]
    #[diagnostic(
        code(lfsrcrack::read_ciphertext),
        help("the ciphertext is a text file of '0'/'1' groups terminated by ']'")
    )]
    ReadCiphertext {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A ciphertext stream failed while being read to the end.
    #[error("failed to read ciphertext stream")]
    #[diagnostic(code(lfsrcrack::read_stream))]
    ReadStream(#[source] std::io::Error),

    /// The plaintext file given to the encrypt command could not be read.
    #[error("failed to read plaintext file {path:?}")]
    #[diagnostic(code(lfsrcrack::read_plaintext))]
    ReadPlaintext {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report sink rejected a write.
    #[error("failed to write report")]
    #[diagnostic(code(lfsrcrack::write_report))]
    WriteReport(#[source] std::io::Error),

    /// Bit position is outside the 64-bit register.
    #[error("bit position {position} is outside the 64-bit register")]
    #[diagnostic(code(lfsrcrack::bit_position))]
    BitPositionOutOfRange { position: u32 },

    /// A seed argument is neither decimal nor `0x`-prefixed hexadecimal.
    #[error("invalid seed {input:?}")]
    #[diagnostic(
        code(lfsrcrack::invalid_seed),
        help("use a decimal value or a 0x-prefixed hexadecimal value that fits in 64 bits")
    )]
    InvalidSeed { input: String },
}
