//! Synthetic corpus generation for the benchmark suite.
//!
//! Produces random alphanumeric strings and texts with a pattern planted at
//! a uniformly chosen offset. The planted text is built as prefix + pattern
//! + suffix in one pass; nothing is mutated in place. Matchers never rely on
//! the plant actually being there, so a too-long pattern degrades to plain
//! random text rather than an error.

use tracing::warn;

/// Character set for generated corpora.
pub const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A generated text together with the offset of the planted pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantedText {
    /// The generated text
    pub text: String,

    /// Byte offset where the pattern was planted, `None` when it did not fit
    pub planted_at: Option<usize>,
}

/// Random string and corpus generator.
///
/// Wraps a seedable RNG so benchmarks and tests can reproduce a corpus
/// exactly.
#[derive(Debug)]
pub struct TextGenerator {
    rng: fastrand::Rng,
}

impl TextGenerator {
    /// Creates a generator seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Creates a generator with a fixed seed for reproducible corpora.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Generates a uniform random string of `len` charset characters.
    pub fn random_string(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| CHARSET[self.rng.usize(0..CHARSET.len())] as char)
            .collect()
    }

    /// Generates a text of exactly `len` characters containing `pattern` at
    /// a uniformly chosen offset.
    ///
    /// # Arguments
    ///
    /// * `len` - Total length of the generated text.
    /// * `pattern` - The substring to plant.
    ///
    /// # Returns
    ///
    /// The text and the offset the pattern was planted at. When the pattern
    /// is empty or longer than `len`, the text is plain random and the
    /// offset is `None`.
    pub fn text_with_pattern(&mut self, len: usize, pattern: &str) -> PlantedText {
        if pattern.is_empty() || pattern.len() > len {
            warn!(
                pattern_len = pattern.len(),
                text_len = len,
                "pattern does not fit, generating text without planting"
            );
            return PlantedText {
                text: self.random_string(len),
                planted_at: None,
            };
        }

        let insert_at = self.rng.usize(0..=len - pattern.len());
        let mut text = String::with_capacity(len);
        text.push_str(&self.random_string(insert_at));
        text.push_str(pattern);
        text.push_str(&self.random_string(len - insert_at - pattern.len()));

        PlantedText {
            text,
            planted_at: Some(insert_at),
        }
    }
}

impl Default for TextGenerator {
    fn default() -> Self {
        Self::new()
    }
}
