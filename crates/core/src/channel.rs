//! Bit-flip noise channel with seeded randomness.
//!
//! Models a memoryless binary channel: each transmitted bit is inverted
//! independently with a fixed probability. There is no propagation between
//! bits, so the expected flip rate converges to the configured probability
//! as stream length grows.
//!
//! # Determinism
//!
//! All randomness comes from a seeded ChaCha8 RNG. Given the same seed
//! and inputs, outputs are bit-identical, which lets tests assert exact
//! flip positions rather than only statistical properties.

use crate::bitstream::Bitstream;
use crate::error::{ChannelError, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Configuration for the noise channel.
#[derive(Debug, Clone, Copy)]
pub struct ChannelConfig {
    /// Per-bit flip probability [0.0, 1.0]
    pub flip_probability: f64,

    /// Random seed for determinism
    pub seed: u64,
}

impl ChannelConfig {
    /// Create a configuration with the given flip probability and seed.
    pub fn new(flip_probability: f64, seed: u64) -> Self {
        Self {
            flip_probability,
            seed,
        }
    }

    /// Create a configuration with no noise (perfect channel).
    pub fn perfect(seed: u64) -> Self {
        Self {
            flip_probability: 0.0,
            seed,
        }
    }

    /// Validate the flip probability.
    ///
    /// # Errors
    /// Returns `ChannelError::InvalidProbability` if the probability is NaN
    /// or outside [0.0, 1.0].
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.flip_probability) {
            return Err(ChannelError::InvalidProbability {
                value: self.flip_probability,
            }
            .into());
        }
        Ok(())
    }
}

/// Noise channel applying independent per-bit flips.
///
/// # Thread Safety
/// Not thread-safe; use one instance per thread or synchronize externally.
pub struct BitFlipChannel {
    config: ChannelConfig,
    rng: ChaCha8Rng,

    // Statistics
    bits_sent: u64,
    bits_flipped: u64,
}

impl BitFlipChannel {
    /// Create a new channel from a validated configuration.
    ///
    /// # Errors
    /// Returns `ChannelError::InvalidProbability` for probabilities
    /// outside [0.0, 1.0].
    pub fn new(config: ChannelConfig) -> Result<Self> {
        config.validate()?;
        let rng = ChaCha8Rng::seed_from_u64(config.seed);

        Ok(Self {
            config,
            rng,
            bits_sent: 0,
            bits_flipped: 0,
        })
    }

    /// Transmit a bitstream through the channel.
    ///
    /// For each bit, a uniform value in [0, 1) is drawn and the bit is
    /// flipped when the draw falls below the configured probability:
    /// - probability 0.0 returns an identical stream
    /// - probability 1.0 returns the exact logical complement
    /// - an empty stream returns an empty stream
    pub fn transmit(&mut self, input: &Bitstream) -> Bitstream {
        let p = self.config.flip_probability;
        let mut output = Vec::with_capacity(input.len());

        for &bit in input.as_slice() {
            self.bits_sent += 1;

            let roll: f64 = self.rng.gen();
            if roll < p {
                self.bits_flipped += 1;
                output.push(1 - bit);
            } else {
                output.push(bit);
            }
        }

        Bitstream::from_raw(output)
    }

    /// Get statistics about channel behavior.
    pub fn stats(&self) -> ChannelStats {
        ChannelStats {
            bits_sent: self.bits_sent,
            bits_flipped: self.bits_flipped,
        }
    }
}

/// Statistics about channel behavior.
#[derive(Debug, Clone, Copy)]
pub struct ChannelStats {
    /// Total bits transmitted through the channel
    pub bits_sent: u64,

    /// Bits inverted by noise
    pub bits_flipped: u64,
}

impl ChannelStats {
    /// Fraction of transmitted bits that were flipped.
    pub fn observed_flip_rate(&self) -> f64 {
        if self.bits_sent == 0 {
            0.0
        } else {
            self.bits_flipped as f64 / self.bits_sent as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ones(n: usize) -> Bitstream {
        Bitstream::from_bits(vec![1; n]).unwrap()
    }

    #[test]
    fn test_perfect_channel_is_identity() {
        let mut channel = BitFlipChannel::new(ChannelConfig::perfect(42)).unwrap();

        let input = Bitstream::from_bits(vec![1, 0, 1, 1, 0, 0, 1, 0]).unwrap();
        let output = channel.transmit(&input);

        assert_eq!(output, input);
        assert_eq!(channel.stats().bits_flipped, 0);
    }

    #[test]
    fn test_probability_one_is_complement() {
        let mut channel = BitFlipChannel::new(ChannelConfig::new(1.0, 7)).unwrap();

        let input = Bitstream::from_bits(vec![1, 0, 1, 0, 0, 1]).unwrap();
        let output = channel.transmit(&input);

        assert_eq!(output, input.complement());
        assert_eq!(channel.stats().bits_flipped, 6);
    }

    #[test]
    fn test_empty_stream() {
        let mut channel = BitFlipChannel::new(ChannelConfig::new(0.5, 1)).unwrap();

        let output = channel.transmit(&Bitstream::empty());
        assert!(output.is_empty());
        assert_eq!(channel.stats().bits_sent, 0);
    }

    #[test]
    fn test_invalid_probability() {
        for p in [-0.1, 1.5, f64::NAN] {
            let result = BitFlipChannel::new(ChannelConfig::new(p, 0));
            assert!(matches!(
                result,
                Err(crate::error::Error::Channel(
                    ChannelError::InvalidProbability { .. }
                ))
            ));
        }
    }

    #[test]
    fn test_flip_rate_converges() {
        let mut channel = BitFlipChannel::new(ChannelConfig::new(0.25, 42)).unwrap();

        channel.transmit(&ones(100_000));

        // Should be approximately 0.25 (allow slack for randomness)
        let rate = channel.stats().observed_flip_rate();
        assert!(rate > 0.22 && rate < 0.28, "observed rate {rate}");
    }

    #[test]
    fn test_determinism() {
        let config = ChannelConfig::new(0.3, 12345);
        let input = ones(1024);

        let mut channel1 = BitFlipChannel::new(config).unwrap();
        let mut channel2 = BitFlipChannel::new(config).unwrap();

        assert_eq!(channel1.transmit(&input), channel2.transmit(&input));
    }

    #[test]
    fn test_different_seeds_differ() {
        let input = ones(1024);

        let mut channel1 = BitFlipChannel::new(ChannelConfig::new(0.5, 1)).unwrap();
        let mut channel2 = BitFlipChannel::new(ChannelConfig::new(0.5, 2)).unwrap();

        assert_ne!(channel1.transmit(&input), channel2.transmit(&input));
    }

    #[test]
    fn test_bits_independent_across_calls() {
        // Stats accumulate over multiple transmissions
        let mut channel = BitFlipChannel::new(ChannelConfig::new(1.0, 9)).unwrap();

        channel.transmit(&ones(10));
        channel.transmit(&ones(5));

        let stats = channel.stats();
        assert_eq!(stats.bits_sent, 15);
        assert_eq!(stats.bits_flipped, 15);
        assert_eq!(stats.observed_flip_rate(), 1.0);
    }
}
