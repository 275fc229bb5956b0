//! Reporter: recovers and prints the plaintext of accepted seeds.

use std::io::Write;

use crate::cipher::StreamCipher;
use crate::error::LfsrError;
use crate::search::Candidate;

/// Plaintext recovered for one accepted seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovered {
    pub seed: u64,
    pub plaintext: Vec<u8>,
}

impl Recovered {
    /// Returns the plaintext as text, one character per byte.
    pub fn text(&self) -> String {
        render_text(&self.plaintext)
    }
}

/// Output switches for [`write_report`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Prefix each candidate with its seed and put it on its own line.
    pub show_seeds: bool,
}

/// Re-decrypts `ciphertext` with each candidate's seed, in candidate order.
pub fn recover(ciphertext: &[u8], candidates: &[Candidate]) -> Vec<Recovered> {
    candidates
        .iter()
        .map(|candidate| Recovered {
            seed: candidate.seed,
            plaintext: StreamCipher::with_seed(candidate.seed).apply(ciphertext),
        })
        .collect()
}

/// Maps every byte to the character with the same code point (Latin-1).
///
/// ```
/// use lfsrcrack::report::render_text;
///
/// assert_eq!(render_text(b"Hi"), "Hi");
/// assert_eq!(render_text(&[0xE9]), "\u{e9}");
/// ```
pub fn render_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Writes the recovered texts to `writer`.
///
/// By default the texts are written back to back with no seed and no
/// separator, followed by one newline. With
/// [`show_seeds`](ReportOptions::show_seeds) every text gets its own line
/// prefixed by the seed in hexadecimal.
///
/// # Errors
/// Returns [`LfsrError::WriteReport`] if the writer fails.
pub fn write_report<W: Write>(
    mut writer: W,
    recovered: &[Recovered],
    options: ReportOptions,
) -> Result<(), LfsrError> {
    for entry in recovered {
        let written = if options.show_seeds {
            writeln!(writer, "{:#018x}: {}", entry.seed, entry.text())
        } else {
            write!(writer, "{}", entry.text())
        };
        written.map_err(LfsrError::WriteReport)?;
    }
    if !options.show_seeds {
        writeln!(writer).map_err(LfsrError::WriteReport)?;
    }
    writer.flush().map_err(LfsrError::WriteReport)
}
