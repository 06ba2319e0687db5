use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Mutex;

/// Process-wide pseudo-random generator shared by every format generator.
///
/// The generator is internally synchronized: each call to [`with_rng`](Self::with_rng)
/// holds the lock for the duration of one generation. A seeded source replays
/// the same values for the same single-threaded call sequence; under concurrent
/// load the order in which callers acquire the lock decides who gets which draws.
#[derive(Debug)]
pub struct RandomSource {
    rng: Mutex<StdRng>,
    seed: Option<u64>,
}

impl RandomSource {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
            seed: None,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            seed: Some(seed),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Runs `f` with exclusive access to the generator.
    ///
    /// `f` must not call back into the same source; nested helpers take the
    /// `&mut StdRng` they are handed instead.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A panic inside `f` cannot leave the generator in an invalid state
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut *rng)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::sync::Arc;

    #[test]
    fn test_seeded_sources_replay() {
        let a = RandomSource::seeded(7);
        let b = RandomSource::seeded(7);
        let left: Vec<u32> = (0..16).map(|_| a.with_rng(|rng| rng.gen())).collect();
        let right: Vec<u32> = (0..16).map(|_| b.with_rng(|rng| rng.gen())).collect();
        assert_eq!(left, right);
        assert_eq!(a.seed(), Some(7));
    }

    #[test]
    fn test_entropy_source_has_no_seed() {
        assert!(RandomSource::from_seed(None).seed().is_none());
    }

    #[test]
    fn test_concurrent_use() {
        let source = Arc::new(RandomSource::seeded(1));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let source = source.clone();
                std::thread::spawn(move || {
                    (0..1000)
                        .map(|_| source.with_rng(|rng| rng.gen_range(0..10u32)))
                        .sum::<u32>()
                })
            })
            .collect();

        for handle in handles {
            let sum = handle.join().unwrap();
            assert!(sum <= 9 * 1000);
        }
    }
}
