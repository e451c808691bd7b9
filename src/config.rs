use bounded_integer::BoundedUsize;
use core::fmt;
use fugit::MillisDurationU32;

use crate::handoff::MAX_BURST_SIZE;

/// Number of samples per burst.
pub type BurstSize = BoundedUsize<1, MAX_BURST_SIZE>;

const DEFAULT_BURST_SIZE: BurstSize = match BurstSize::new(3) {
    Some(size) => size,
    None => panic!("default burst size out of range"),
};

/// Acquisition settings, built the same way as the HAL serial configs:
///
/// ```
/// use adc_uart::{BurstSize, Config};
/// use fugit::ExtU32;
///
/// let config = Config::default()
///     .burst_threshold(5)
///     .throttle_delay(250.millis())
///     .burst_size(BurstSize::new(4).unwrap());
/// assert_eq!(config.bytes_per_burst(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Bursts sent back to back before the throttle pause.
    pub burst_threshold: u32,
    /// Length of the throttle pause.
    pub throttle_delay: MillisDurationU32,
    pub burst_size: BurstSize,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            burst_threshold: 10,
            throttle_delay: MillisDurationU32::from_ticks(1000),
            burst_size: DEFAULT_BURST_SIZE,
        }
    }

    pub const fn burst_threshold(mut self, bursts: u32) -> Self {
        self.burst_threshold = bursts;
        self
    }

    pub const fn throttle_delay(mut self, delay: MillisDurationU32) -> Self {
        self.throttle_delay = delay;
        self
    }

    pub const fn burst_size(mut self, size: BurstSize) -> Self {
        self.burst_size = size;
        self
    }

    /// Bytes put on the wire for one burst.
    pub const fn bytes_per_burst(&self) -> usize {
        2 * self.burst_size.get()
    }

    /// Checks the settings against a converter that can chain at most `max_ranks`
    /// conversions off a single trigger.
    pub fn validate(&self, max_ranks: usize) -> Result<(), ConfigError> {
        if self.burst_threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        if self.burst_size.get() > max_ranks {
            return Err(ConfigError::BurstTooLong {
                size: self.burst_size.get(),
                limit: max_ranks,
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    ZeroThreshold,
    BurstTooLong { size: usize, limit: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroThreshold => f.write_str("burst threshold must be at least 1"),
            ConfigError::BurstTooLong { size, limit } => {
                write!(f, "burst of {size} samples exceeds the {limit} chained conversions")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_board() {
        let config = Config::default();
        assert_eq!(config.burst_threshold, 10);
        assert_eq!(config.throttle_delay.ticks(), 1000);
        assert_eq!(config.burst_size.get(), 3);
        assert_eq!(config.bytes_per_burst(), 6);
        assert_eq!(config.validate(8), Ok(()));
    }

    #[test]
    fn zero_threshold_is_rejected() {
        let config = Config::default().burst_threshold(0);
        assert_eq!(config.validate(8), Err(ConfigError::ZeroThreshold));
    }

    #[test]
    fn burst_longer_than_sequencer_is_rejected() {
        let config = Config::default().burst_size(BurstSize::new(9).unwrap());
        assert_eq!(
            config.validate(8),
            Err(ConfigError::BurstTooLong { size: 9, limit: 8 })
        );
        assert_eq!(config.validate(MAX_BURST_SIZE), Ok(()));
    }

    #[test]
    fn burst_size_is_bounded() {
        assert!(BurstSize::new(0).is_none());
        assert!(BurstSize::new(MAX_BURST_SIZE + 1).is_none());
        assert!(BurstSize::new(MAX_BURST_SIZE).is_some());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::BurstTooLong { size: 9, limit: 8 }.to_string(),
            "burst of 9 samples exceeds the 8 chained conversions"
        );
    }
}
