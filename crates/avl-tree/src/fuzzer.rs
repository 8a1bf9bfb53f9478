use rand::{rngs::OsRng, seq::SliceRandom, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Seeded generator for tree workloads.
///
/// Uses the xoshiro256** PRNG so a workload can be replayed from its seed.
///
/// # Examples
///
/// ```
/// use avl_tree::Fuzzer;
///
/// let mut a = Fuzzer::from_u64(7);
/// let mut b = Fuzzer::from_u64(7);
/// assert_eq!(a.random_int(0, 1000), b.random_int(0, 1000));
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl Fuzzer {
    /// If no seed is provided, one is drawn from `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });
        Self {
            seed,
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    /// Expands a `u64` into a full seed, little-endian in every 8-byte lane.
    pub fn from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        for lane in bytes.chunks_exact_mut(8) {
            lane.copy_from_slice(&seed.to_le_bytes());
        }
        Self::new(Some(bytes))
    }

    /// Random integer in `[min, max]`.
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    pub fn shuffle<T>(&mut self, elements: &mut [T]) {
        elements.shuffle(&mut self.rng);
    }

    /// `n` random integers in `[min, max]`, duplicates allowed.
    pub fn ints(&mut self, n: usize, min: i64, max: i64) -> Vec<i64> {
        (0..n).map(|_| self.random_int(min, max)).collect()
    }

    /// `0..n` in random order.
    pub fn distinct_ints(&mut self, n: usize) -> Vec<i64> {
        let mut values: Vec<i64> = (0..n as i64).collect();
        self.shuffle(&mut values);
        values
    }
}
