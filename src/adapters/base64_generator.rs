use crate::adapters::random_source::RandomSource;
use crate::adapters::ranged_text::RangedTextGenerator;
use crate::domain::{FormatError, LengthConstraint};
use base64::alphabet;
use base64::engine::general_purpose::{
    GeneralPurpose, GeneralPurposeConfig, STANDARD, STANDARD_NO_PAD,
};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use rand::Rng;
use std::sync::Arc;

const FORMAT: &str = "byte";

/// Characters per base64 quantum (three raw bytes)
pub const QUANTUM: usize = 4;

/// Standard alphabet decoder that accepts both padded and unpadded input.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Base64 text whose *encoded* length lands in the requested window.
///
/// When the window holds a multiple of four the output is standard padded
/// base64. A window narrower than one quantum that holds no such multiple
/// (e.g. `[10, 10]`) gets the unpadded encoding of the same alphabet, which is
/// still a whole number of bytes. Lengths `≡ 1 (mod 4)` never encode anything.
#[derive(Debug, Clone)]
pub struct Base64Generator {
    random: Arc<RandomSource>,
}

impl Base64Generator {
    pub fn new(random: Arc<RandomSource>) -> Self {
        Self { random }
    }

    pub fn generate(&self, min_length: i64, max_length: i64) -> Result<String, FormatError> {
        let constraint = LengthConstraint::new(min_length, max_length)?;
        self.generate_within(constraint)
    }

    pub fn generate_within(&self, constraint: LengthConstraint) -> Result<String, FormatError> {
        self.random.with_rng(|rng| Self::encode_within(rng, constraint))
    }

    pub fn encode_within<R: Rng + ?Sized>(
        rng: &mut R,
        constraint: LengthConstraint,
    ) -> Result<String, FormatError> {
        let target = Self::target_length(rng, constraint)?;
        // floor(target * 3 / 4) raw bytes encode to exactly `target` characters
        let raw = RangedTextGenerator::bytes(rng, target * 3 / QUANTUM);

        let encoded = if target % QUANTUM == 0 {
            STANDARD.encode(raw)
        } else {
            STANDARD_NO_PAD.encode(raw)
        };
        debug_assert_eq!(encoded.len(), target);
        Ok(encoded)
    }

    /// Decodes output of this generator, padded or not.
    pub fn decode(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
        LENIENT.decode(encoded)
    }

    fn target_length<R: Rng + ?Sized>(
        rng: &mut R,
        constraint: LengthConstraint,
    ) -> Result<usize, FormatError> {
        let unsatisfiable = FormatError::UnsatisfiableLength {
            format: FORMAT,
            min: constraint.min(),
            max: constraint.max(),
            minimum: QUANTUM,
        };

        let max = constraint.max();
        if max < QUANTUM {
            return Err(unsatisfiable);
        }

        let low = constraint.min().max(QUANTUM);
        let first_padded = low.div_ceil(QUANTUM) * QUANTUM;
        if first_padded <= max {
            let slots = (max - first_padded) / QUANTUM + 1;
            return Ok(first_padded + QUANTUM * rng.gen_range(0..slots));
        }

        // No quantum boundary inside the window, so fewer than four candidates
        let unpadded: Vec<usize> = (low..=max).filter(|len| len % QUANTUM != 1).collect();
        if unpadded.is_empty() {
            return Err(unsatisfiable);
        }
        Ok(unpadded[rng.gen_range(0..unpadded.len())])
    }
}
