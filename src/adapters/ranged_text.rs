use crate::adapters::random_source::RandomSource;
use crate::domain::{FormatError, LengthConstraint};
use rand::Rng;
use std::sync::Arc;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// One in `SPACE_ODDS` interior positions becomes a word break.
const SPACE_ODDS: u32 = 6;

/// Printable text whose length is steered into a `[min, max]` window.
///
/// Output is lowercase ASCII letters separated by single spaces, so byte length
/// and character length coincide and the text is safe to embed in markup or
/// quoted attributes without escaping. It never starts or ends with a space.
#[derive(Debug, Clone)]
pub struct RangedTextGenerator {
    random: Arc<RandomSource>,
}

impl RangedTextGenerator {
    pub fn new(random: Arc<RandomSource>) -> Self {
        Self { random }
    }

    /// Generates text with a length in `[min_length, max_length]`.
    pub fn generate(&self, min_length: i64, max_length: i64) -> Result<String, FormatError> {
        let constraint = LengthConstraint::new(min_length, max_length)?;
        Ok(self.generate_within(constraint))
    }

    pub fn generate_within(&self, constraint: LengthConstraint) -> String {
        self.random.with_rng(|rng| Self::text(rng, constraint))
    }

    /// Draws a target length uniformly from the window and fills it.
    pub fn text<R: Rng + ?Sized>(rng: &mut R, constraint: LengthConstraint) -> String {
        let len = rng.gen_range(constraint.min()..=constraint.max());
        Self::exact(rng, len)
    }

    /// Text of exactly `len` characters.
    pub fn exact<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
        let mut text = String::with_capacity(len);
        let mut after_space = true;

        for position in 0..len {
            let last = position + 1 == len;
            if !after_space && !last && rng.gen_ratio(1, SPACE_ODDS) {
                text.push(' ');
                after_space = true;
            } else {
                let letter = ALPHABET[rng.gen_range(0..ALPHABET.len())];
                text.push(char::from(letter));
                after_space = false;
            }
        }

        text
    }

    /// Raw bytes of [`exact`](Self::exact) text, used as encoder input.
    pub fn bytes<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<u8> {
        Self::exact(rng, len).into_bytes()
    }
}
