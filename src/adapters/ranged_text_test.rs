use super::random_source::RandomSource;
use super::ranged_text::RangedTextGenerator;
use crate::domain::FormatError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

fn generator(seed: u64) -> RangedTextGenerator {
    RangedTextGenerator::new(Arc::new(RandomSource::seeded(seed)))
}

#[test]
fn test_length_within_window() {
    let generator = generator(11);
    for (min, max) in [(0, 0), (1, 1), (0, 5), (3, 9), (10, 10), (50, 200)] {
        for _ in 0..50 {
            let text = generator.generate(min, max).unwrap();
            let len = text.len() as i64;
            assert!(
                (min..=max).contains(&len),
                "length {} outside [{}, {}]",
                len,
                min,
                max
            );
        }
    }
}

#[test]
fn test_exact_length_is_printable() {
    let mut rng = StdRng::seed_from_u64(3);
    let text = RangedTextGenerator::exact(&mut rng, 500);
    assert_eq!(text.len(), 500);
    assert!(text.chars().all(|c| c.is_ascii_lowercase() || c == ' '));
    assert!(!text.starts_with(' '));
    assert!(!text.ends_with(' '));
    assert!(!text.contains("  "));
}

#[test]
fn test_empty_window() {
    let generator = generator(5);
    assert_eq!(generator.generate(0, 0).unwrap(), "");
}

#[test]
fn test_inverted_window_fails() {
    let generator = generator(5);
    assert_eq!(
        generator.generate(8, 4),
        Err(FormatError::InvalidLengthConstraint { min: 8, max: 4 })
    );
}

#[test]
fn test_negative_bound_fails() {
    let generator = generator(5);
    assert!(matches!(
        generator.generate(-1, 4),
        Err(FormatError::InvalidLengthConstraint { .. })
    ));
}

#[test]
fn test_bytes_match_text_length() {
    let mut rng = StdRng::seed_from_u64(9);
    assert_eq!(RangedTextGenerator::bytes(&mut rng, 17).len(), 17);
}
