//! SeedSearch: exhaustive seed search over the strided keyspace.
//!
//! Candidate seeds start at 0 and advance by `2^46` with wrapping arithmetic
//! until they return to 0, which visits `2^18` seeds whose low 46 bits are
//! all zero. For every seed the ciphertext is decrypted from a freshly
//! warmed register and scored by counting ASCII letters. A seed is kept when
//! its score is strictly greater than half the ciphertext length.

use std::iter::FusedIterator;

use tracing::{debug, info};

use crate::cipher;
use crate::params::CipherParams;
use crate::register::Register;

const PARAMS: CipherParams = CipherParams::STANDARD;

/// Number of trials between two progress notifications.
pub const PROGRESS_BLOCK: u64 = 1024;

/// A seed that passed the plausibility threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// The register initialization value.
    pub seed: u64,
    /// Number of decrypted bytes that are ASCII letters.
    pub score: usize,
}

impl Candidate {
    /// Returns whether this candidate passes for a ciphertext of `len` bytes.
    pub fn is_plausible(&self, len: usize) -> bool {
        is_plausible(self.score, len)
    }
}

/// Result of a complete search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Accepted seeds in enumeration order.
    pub candidates: Vec<Candidate>,
    /// Number of seeds tried.
    pub trials: u64,
}

impl SearchOutcome {
    /// Returns the accepted seeds in enumeration order.
    pub fn seeds(&self) -> Vec<u64> {
        self.candidates.iter().map(|c| c.seed).collect()
    }
}

/// Iterator over every candidate seed, in enumeration order.
///
/// # Examples
///
/// ```
/// use lfsrcrack::SeedSpace;
///
/// let mut space = SeedSpace::new();
/// assert_eq!(space.len(), 1 << 18);
/// assert_eq!(space.next(), Some(0));
/// assert_eq!(space.next(), Some(1 << 46));
/// ```
#[derive(Debug, Clone)]
pub struct SeedSpace {
    seed: u64,
    remaining: u64,
}

impl SeedSpace {
    /// Starts the enumeration at seed 0.
    pub fn new() -> Self {
        SeedSpace {
            seed: 0,
            remaining: PARAMS.seed_count(),
        }
    }

    /// Returns the seed visited at stride index `index`.
    pub fn seed_at(index: u64) -> u64 {
        index.wrapping_mul(PARAMS.seed_stride)
    }
}

impl Default for SeedSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for SeedSpace {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        let seed = self.seed;
        self.seed = self.seed.wrapping_add(PARAMS.seed_stride);
        // the stride divides 2^64, so wrapping back to 0 ends the space
        self.remaining = if self.seed == 0 { 0 } else { self.remaining - 1 };
        Some(seed)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SeedSpace {}

impl FusedIterator for SeedSpace {}

/// Returns whether `byte` is an ASCII letter (`A..=Z` or `a..=z`).
#[inline]
pub fn is_letter(byte: u8) -> bool {
    matches!(byte, 65..=90 | 97..=122)
}

/// Counts the ASCII letters in `plaintext`.
pub fn score(plaintext: &[u8]) -> usize {
    plaintext.iter().filter(|&&b| is_letter(b)).count()
}

/// Acceptance rule: more than half of the bytes must be letters.
///
/// Uses integer division and a strict comparison, so exactly half fails and
/// an empty ciphertext never passes.
///
/// ```
/// use lfsrcrack::search::is_plausible;
///
/// assert!(!is_plausible(2, 4));
/// assert!(is_plausible(3, 4));
/// assert!(!is_plausible(0, 0));
/// ```
pub fn is_plausible(score: usize, len: usize) -> bool {
    score > len / 2
}

/// Decrypts `ciphertext` under `seed` and scores the result.
pub fn trial(seed: u64, ciphertext: &[u8]) -> Candidate {
    let mut register = Register::warmed(seed);
    let score = ciphertext
        .iter()
        .map(|&b| cipher::process(&mut register, b))
        .filter(|&p| is_letter(p))
        .count();
    Candidate { seed, score }
}

type ProgressFn<'a> = dyn Fn(u64) + Sync + 'a;

/// Exhaustive search over [`SeedSpace`] for one ciphertext.
///
/// # Examples
///
/// ```no_run
/// use lfsrcrack::{cipher, SeedSearch};
///
/// let seed = 0x2A << 46;
/// let ciphertext = cipher::encipher(seed, b"HELLO");
/// let outcome = SeedSearch::new(&ciphertext).run();
/// assert!(outcome.seeds().contains(&seed));
/// ```
pub struct SeedSearch<'a> {
    ciphertext: &'a [u8],
    progress: Option<Box<ProgressFn<'a>>>,
}

impl<'a> SeedSearch<'a> {
    /// Prepares a search over `ciphertext`.
    pub fn new(ciphertext: &'a [u8]) -> Self {
        SeedSearch {
            ciphertext,
            progress: None,
        }
    }

    /// Registers an observer called with the number of trials completed
    /// since its previous call. Calls happen every [`PROGRESS_BLOCK`] trials.
    pub fn with_progress<F>(mut self, observer: F) -> Self
    where
        F: Fn(u64) + Sync + 'a,
    {
        self.progress = Some(Box::new(observer));
        self
    }

    /// Runs the search on the current thread.
    pub fn run(&self) -> SearchOutcome {
        let len = self.ciphertext.len();
        let mut candidates = Vec::new();
        let mut trials = 0u64;
        for seed in SeedSpace::new() {
            let candidate = trial(seed, self.ciphertext);
            if candidate.is_plausible(len) {
                debug!(
                    seed = format_args!("{:#018x}", seed),
                    score = candidate.score,
                    "candidate accepted"
                );
                candidates.push(candidate);
            }
            trials += 1;
            if trials % PROGRESS_BLOCK == 0 {
                self.notify(PROGRESS_BLOCK);
            }
        }
        self.finish(candidates, trials)
    }

    /// Runs the search on the rayon thread pool.
    ///
    /// The stride index range is split into blocks of [`PROGRESS_BLOCK`]
    /// seeds. Results are collected in enumeration order, so the outcome is
    /// identical to [`run`](Self::run).
    #[cfg(feature = "parallel")]
    pub fn run_parallel(&self) -> SearchOutcome {
        use rayon::prelude::*;

        let len = self.ciphertext.len();
        let blocks = (PARAMS.seed_count() / PROGRESS_BLOCK) as usize;
        let candidates: Vec<Candidate> = (0..blocks)
            .into_par_iter()
            .flat_map_iter(|block| {
                let start = block as u64 * PROGRESS_BLOCK;
                let accepted: Vec<Candidate> = (start..start + PROGRESS_BLOCK)
                    .map(|index| trial(SeedSpace::seed_at(index), self.ciphertext))
                    .filter(|candidate| candidate.is_plausible(len))
                    .collect();
                self.notify(PROGRESS_BLOCK);
                accepted
            })
            .collect();
        for candidate in &candidates {
            debug!(
                seed = format_args!("{:#018x}", candidate.seed),
                score = candidate.score,
                "candidate accepted"
            );
        }
        self.finish(candidates, PARAMS.seed_count())
    }

    fn notify(&self, completed: u64) {
        if let Some(observer) = &self.progress {
            observer(completed);
        }
    }

    fn finish(&self, candidates: Vec<Candidate>, trials: u64) -> SearchOutcome {
        info!(
            trials,
            accepted = candidates.len(),
            ciphertext_len = self.ciphertext.len(),
            "seed search finished"
        );
        SearchOutcome { candidates, trials }
    }
}
