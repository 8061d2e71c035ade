//! Configuration types for the EN8811H bring-up

use crate::error::{ConfigError, ConfigResult};
use crate::internal::constants::{IDENTIFY_ATTEMPTS, READY_ATTEMPTS, READY_POLL_INTERVAL_MS};
use crate::internal::phy_regs::en8811h::serdes;

/// SerDes lane polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Lane wired straight through
    #[default]
    Normal,
    /// Lane P/N swapped on the board
    Reversed,
}

impl Polarity {
    /// Bit pattern for the TX lane in the polarity control word
    pub const fn tx_bits(self) -> u32 {
        match self {
            Polarity::Normal => serdes::TX_NORMAL,
            Polarity::Reversed => serdes::TX_REVERSE,
        }
    }

    /// Bit pattern for the RX lane in the polarity control word
    pub const fn rx_bits(self) -> u32 {
        match self {
            Polarity::Normal => serdes::RX_NORMAL,
            Polarity::Reversed => serdes::RX_REVERSE,
        }
    }
}

/// EN8811H bring-up configuration
///
/// The defaults reproduce the reference bring-up: five identification
/// attempts, five readiness polls 100 ms apart, both SerDes lanes normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct En8811hConfig {
    /// Identification attempts before the chip is reported absent
    pub identify_attempts: u8,
    /// Readiness polls after the MCU is released
    pub ready_attempts: u8,
    /// Delay before each readiness poll, in milliseconds
    pub ready_poll_interval_ms: u32,
    /// SerDes TX lane polarity
    pub tx_polarity: Polarity,
    /// SerDes RX lane polarity
    pub rx_polarity: Polarity,
}

impl Default for En8811hConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl En8811hConfig {
    /// Create a new configuration with defaults
    #[must_use]
    pub const fn new() -> Self {
        Self {
            identify_attempts: IDENTIFY_ATTEMPTS,
            ready_attempts: READY_ATTEMPTS,
            ready_poll_interval_ms: READY_POLL_INTERVAL_MS,
            tx_polarity: Polarity::Normal,
            rx_polarity: Polarity::Normal,
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the number of identification attempts
    #[must_use]
    pub const fn with_identify_attempts(mut self, attempts: u8) -> Self {
        self.identify_attempts = attempts;
        self
    }

    /// Set the number of readiness polls
    #[must_use]
    pub const fn with_ready_attempts(mut self, attempts: u8) -> Self {
        self.ready_attempts = attempts;
        self
    }

    /// Set the delay before each readiness poll
    #[must_use]
    pub const fn with_ready_poll_interval_ms(mut self, interval_ms: u32) -> Self {
        self.ready_poll_interval_ms = interval_ms;
        self
    }

    /// Set the SerDes TX lane polarity
    #[must_use]
    pub const fn with_tx_polarity(mut self, polarity: Polarity) -> Self {
        self.tx_polarity = polarity;
        self
    }

    /// Set the SerDes RX lane polarity
    #[must_use]
    pub const fn with_rx_polarity(mut self, polarity: Polarity) -> Self {
        self.rx_polarity = polarity;
        self
    }

    // =========================================================================
    // Derived Values
    // =========================================================================

    /// Polarity control bits for both lanes
    pub const fn polarity_bits(&self) -> u32 {
        self.tx_polarity.tx_bits() | self.rx_polarity.rx_bits()
    }

    /// Check the retry budgets
    ///
    /// A zero budget would skip identification or readiness entirely.
    pub const fn validate(&self) -> ConfigResult<()> {
        if self.identify_attempts == 0 || self.ready_attempts == 0 {
            return Err(ConfigError::InvalidRetryCount);
        }
        Ok(())
    }
}
