//! CiphertextDecoder: text bit-groups to bytes.
//!
//! The ciphertext is written as groups of `'0'`/`'1'` characters, most
//! significant bit first, each terminated by `']'`. Every other character is
//! ignored. A group closed by `']'` before eight bits keeps its missing low
//! bits at 0. A `']'` right after a full group closes that group.

use std::fs::File;
use std::io::Read;
use std::iter::Peekable;
use std::path::Path;

use tracing::debug;

use crate::error::LfsrError;
use crate::utils::bits::set_bit_msb;

const ONE: u8 = b'1';
const ZERO: u8 = b'0';
const TERMINATOR: u8 = b']';

/// Decodes bit-group text into bytes.
///
/// # Examples
///
/// ```
/// use lfsrcrack::decoder;
///
/// assert_eq!(decoder::decode(b"10110010]"), vec![0xB2]);
/// assert_eq!(decoder::decode(b"101]"), vec![0b1010_0000]);
/// assert!(decoder::decode(b"").is_empty());
/// ```
pub fn decode(input: &[u8]) -> Vec<u8> {
    let mut chars = input.iter().copied().peekable();
    let mut output = Vec::with_capacity(input.len() / 9);
    while let Some(byte) = next_group(&mut chars) {
        output.push(byte);
    }
    output
}

/// Decodes bit-group text held in a string.
pub fn decode_str(input: &str) -> Vec<u8> {
    decode(input.as_bytes())
}

/// Reads `reader` to the end and decodes it.
///
/// # Errors
/// Returns [`LfsrError::ReadStream`] if reading fails.
pub fn decode_reader<R: Read>(mut reader: R) -> Result<Vec<u8>, LfsrError> {
    let mut text = Vec::new();
    reader
        .read_to_end(&mut text)
        .map_err(LfsrError::ReadStream)?;
    Ok(decode(&text))
}

/// Opens the ciphertext file at `path` and decodes it.
///
/// # Errors
/// Returns [`LfsrError::ReadCiphertext`] if the file cannot be opened or read.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, LfsrError> {
    let path = path.as_ref();
    let read_error = |source| LfsrError::ReadCiphertext {
        path: path.to_path_buf(),
        source,
    };
    let mut text = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut text))
        .map_err(read_error)?;
    let bytes = decode(&text);
    debug!(path = %path.display(), bytes = bytes.len(), "decoded ciphertext");
    Ok(bytes)
}

/// Writes `bytes` as bit-group text, one full group plus `']'` per byte.
///
/// # Examples
///
/// ```
/// use lfsrcrack::decoder;
///
/// assert_eq!(decoder::encode(&[0xB2, 0x01]), "10110010]00000001]");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len() * 9);
    for &byte in bytes {
        for i in (0..8u32).rev() {
            text.push(if (byte >> i) & 1 == 1 { '1' } else { '0' });
        }
        text.push(TERMINATOR as char);
    }
    text
}

/// Reads one group. Returns `None` once the input holds no further bits or
/// terminators.
fn next_group<I: Iterator<Item = u8>>(chars: &mut Peekable<I>) -> Option<u8> {
    let mut byte = 0u8;
    let mut filled = 0u32;
    while filled < 8 {
        match chars.next() {
            Some(ONE) => {
                byte = set_bit_msb(byte, filled);
                filled += 1;
            }
            Some(ZERO) => filled += 1,
            Some(TERMINATOR) => return Some(byte),
            Some(_) => {}
            None if filled == 0 => return None,
            None => return Some(byte),
        }
    }
    consume_terminator(chars);
    Some(byte)
}

/// Consumes the `']'` that closes a full group, if it is the next
/// recognized character.
fn consume_terminator<I: Iterator<Item = u8>>(chars: &mut Peekable<I>) {
    while let Some(&c) = chars.peek() {
        match c {
            TERMINATOR => {
                chars.next();
                return;
            }
            ONE | ZERO => return,
            _ => {
                chars.next();
            }
        }
    }
}
