//! Ciphertext-only seed search for a fixed 64-bit LFSR stream cipher.
//!
//! The cipher XORs each data byte with eight output bits of a 64-bit linear
//! feedback shift register. Its seeds are searched exhaustively over a
//! strided keyspace of `2^18` values, and the seeds whose decryption is
//! mostly ASCII letters are reported for a human to read.
//!
//! # Architecture
//!
//! ```text
//! decoder   (text '0'/'1' groups terminated by ']' -> bytes)
//!     |
//! search    (SeedSpace -> trial per seed -> accepted Candidates)
//!     |         \
//!     |          cipher   (keystream byte = 8 output bits, XOR)
//!     |              |
//!     |          register (64-bit LFSR, 512-step warm-up)
//!     |
//! report    (re-decrypt accepted seeds, write texts)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with a seed:
//!
//! ```
//! use lfsrcrack::cipher;
//!
//! let seed = 0x1F << 46;
//! let ciphertext = cipher::encipher(seed, b"HELLO");
//! assert_ne!(ciphertext, b"HELLO");
//! assert_eq!(cipher::encipher(seed, &ciphertext), b"HELLO");
//! ```
//!
//! Recover the seed from the ciphertext alone:
//!
//! ```no_run
//! use lfsrcrack::{cipher, decoder, report, SeedSearch};
//!
//! let text = decoder::encode(&cipher::encipher(0x1F << 46, b"HELLO"));
//! let ciphertext = decoder::decode_str(&text);
//!
//! let outcome = SeedSearch::new(&ciphertext).run();
//! let recovered = report::recover(&ciphertext, &outcome.candidates);
//! assert!(recovered.iter().any(|r| r.plaintext == b"HELLO"));
//! ```

#![deny(clippy::all)]

pub mod cipher;
pub mod decoder;
pub mod error;
pub mod params;
pub mod register;
pub mod report;
pub mod search;
pub(crate) mod utils;

pub use cipher::StreamCipher;
pub use error::LfsrError;
pub use params::CipherParams;
pub use register::Register;
pub use search::{Candidate, SearchOutcome, SeedSearch, SeedSpace};
