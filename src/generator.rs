//! UUIDv4 generator and related types.

use rand::RngCore;

use crate::Uuid;

/// Represents a UUIDv4 generator driven by a caller-supplied random number generator.
///
/// The generator is the usual source of input for [`derive`](crate::derive) when the user does
/// not type a UUID in. Any [`RngCore`] works; a seeded one makes the sequence of tickets
/// reproducible.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::mock::StepRng;
/// use uuid_lotto::V4Generator;
///
/// let mut g = V4Generator::new(StepRng::new(0, 1));
/// assert!(g.generate().is_v4());
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V4Generator<R> {
    /// The random number generator used by the generator.
    rng: R,
}

impl<R: RngCore> V4Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new UUIDv4 object.
    pub fn generate(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        Uuid::from_random_bytes_v4(bytes)
    }

    /// Returns a mutable reference to the wrapped random number generator.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl<R: RngCore> Iterator for V4Generator<R> {
    type Item = Uuid;

    /// Returns a new UUIDv4 object; never returns `None`.
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }
}

#[cfg(feature = "global_gen")]
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
mod with_chacha {
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    use super::V4Generator;

    impl V4Generator<ChaCha12Rng> {
        /// Creates a generator whose output is fully determined by `seed`.
        ///
        /// # Examples
        ///
        /// ```rust
        /// use uuid_lotto::V4Generator;
        ///
        /// let a: Vec<_> = V4Generator::from_seed_u64(42).take(3).collect();
        /// let b: Vec<_> = V4Generator::from_seed_u64(42).take(3).collect();
        /// assert_eq!(a, b);
        /// ```
        pub fn from_seed_u64(seed: u64) -> Self {
            Self::new(ChaCha12Rng::seed_from_u64(seed))
        }

        /// Creates a generator seeded from the operating system's entropy source.
        pub fn from_entropy() -> Self {
            Self::new(ChaCha12Rng::from_entropy())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::V4Generator;
    use rand::rngs::mock::StepRng;

    const N_SAMPLES: usize = 100_000;

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        let g = V4Generator::new(rand::thread_rng());
        for e in g.take(N_SAMPLES) {
            assert!(re.is_match(&e.encode()));
        }
    }

    /// Generates identifiers without collision
    #[test]
    fn generates_identifiers_without_collision() {
        use std::collections::HashSet;
        let g = V4Generator::new(rand::thread_rng());
        let s: HashSet<_> = g.take(N_SAMPLES).collect();
        assert_eq!(s.len(), N_SAMPLES);
    }

    /// Sets constant bits even from degenerate random sources
    #[test]
    fn sets_constant_bits_even_from_degenerate_random_sources() {
        let mut g = V4Generator::new(StepRng::new(0, 0));
        assert_eq!(
            &g.generate().encode() as &str,
            "00000000-0000-4000-8000-000000000000"
        );
        let mut g = V4Generator::new(StepRng::new(u64::MAX, 0));
        assert_eq!(
            &g.generate().encode() as &str,
            "ffffffff-ffff-4fff-bfff-ffffffffffff"
        );
    }

    /// Reproduces the same sequence from the same seed
    #[cfg(feature = "global_gen")]
    #[test]
    fn reproduces_the_same_sequence_from_the_same_seed() {
        let a: Vec<_> = V4Generator::from_seed_u64(7).take(16).collect();
        let b: Vec<_> = V4Generator::from_seed_u64(7).take(16).collect();
        let c: Vec<_> = V4Generator::from_seed_u64(8).take(16).collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.iter().all(|e| e.is_v4()));
    }
}
