use rand::Rng;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use rand_core::RngCore;

use crate::distributions::BitDistribution;

pub struct Source {
    source: ChaCha8Rng,
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    pub fn branch(&mut self) -> ([u8; 32], Self) {
        let seed: [u8; 32] = self.new_seed();
        (seed, Source::new(seed))
    }

    pub fn new_seed(&mut self) -> [u8; 32] {
        let mut seed: [u8; 32] = [0u8; 32];
        self.fill_bytes(&mut seed);
        seed
    }

    #[inline(always)]
    pub fn next_u8(&mut self) -> u8 {
        self.next_u32() as u8
    }

    #[inline(always)]
    pub fn next_u16(&mut self) -> u16 {
        self.next_u32() as u16
    }

    #[inline(always)]
    pub fn next_u128(&mut self) -> u128 {
        ((self.next_u64() as u128) << 64) | self.next_u64() as u128
    }

    #[inline(always)]
    pub fn next_i32(&mut self) -> i32 {
        self.next_u32() as i32
    }

    #[inline(always)]
    pub fn next_i64(&mut self) -> i64 {
        self.next_u64() as i64
    }

    #[inline(always)]
    pub fn next_bool(&mut self) -> bool {
        self.next_u32() & 1 == 1
    }

    /// Returns an index uniformly drawn from `[0, len)`.
    ///
    /// # Panics
    ///
    /// Panics if `len == 0`.
    pub fn next_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot draw an index from an empty range");
        self.random_range(0..len)
    }

    /// Overwrites `bits` with one bit per byte drawn from `dist`.
    pub fn fill_bits(&mut self, bits: &mut [u8], dist: &BitDistribution) {
        bits.iter_mut().for_each(|b| *b = dist.sample_bit(self));
    }

    /// Returns `len` printable ASCII bytes.
    pub fn next_ascii(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(0x20 + (self.next_u32() % 0x5f) as u8))
            .collect()
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}
