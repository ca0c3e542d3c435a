use rand_core::RngCore;
use rand_distr::{Bernoulli, Distribution};

use crate::source::Source;

/// Distribution of individual bits written by [`Source::fill_bits`].
pub enum BitDistribution {
    /// Each bit is 0 or 1 with equal probability.
    Uniform,
    /// Each bit is 1 with the probability of the inner distribution.
    Bernoulli(Bernoulli),
    /// Every bit takes the given value.
    Constant(bool),
}

impl BitDistribution {
    pub fn sample_bit(&self, source: &mut Source) -> u8 {
        match self {
            BitDistribution::Uniform => (source.next_u32() & 1) as u8,
            BitDistribution::Bernoulli(dist) => dist.sample(source) as u8,
            BitDistribution::Constant(bit) => *bit as u8,
        }
    }
}
