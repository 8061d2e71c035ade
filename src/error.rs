//! Error types for the EN8811H PHY driver
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Invalid addresses, firmware images or settings
//! - [`BusError`]: MDIO transport faults reported by the bus implementation
//! - [`BringUpError`]: The chip was found but did not finish booting
//!
//! The unified [`Error`] enum wraps all domain errors and is returned
//! by most driver methods.
//!
//! A missing chip is *not* an error: bring-up reports it as
//! [`InitStatus::NotPresent`](crate::phy::InitStatus::NotPresent).

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration and argument errors
///
/// These errors are detected before any bus traffic is generated for the
/// offending operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Invalid PHY address (must be 0-31)
    InvalidPhyAddress,
    /// Invalid Clause 22 register address (must be 0-31)
    InvalidRegister,
    /// Value does not fit the target register width
    ValueOutOfRange,
    /// Firmware image length is not a multiple of 4 bytes
    FirmwareMisaligned,
    /// A retry budget of zero attempts was configured
    InvalidRetryCount,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::InvalidPhyAddress => "invalid PHY address",
            ConfigError::InvalidRegister => "invalid register address",
            ConfigError::ValueOutOfRange => "value out of range for register",
            ConfigError::FirmwareMisaligned => "firmware length not a multiple of 4",
            ConfigError::InvalidRetryCount => "retry count must be non-zero",
        }
    }
}

// =============================================================================
// Bus Errors
// =============================================================================

/// MDIO transport errors
///
/// Returned by [`MdioBus`](crate::hal::MdioBus) implementations. The driver
/// never retries these; they abort the current logical operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// The bus controller did not complete the transaction in time
    Timeout,
    /// The bus controller reported a transport-level fault
    Fault,
}

impl core::fmt::Display for BusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BusError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            BusError::Timeout => "MDIO operation timed out",
            BusError::Fault => "MDIO transport fault",
        }
    }
}

// =============================================================================
// Bring-up Errors
// =============================================================================

/// Bring-up sequence failures
///
/// The chip answered identification but the sequence could not complete.
/// Nothing is rolled back; the caller may retry bring-up from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BringUpError {
    /// Firmware never reported ready within the polling budget
    NotReady,
}

impl core::fmt::Display for BringUpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BringUpError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            BringUpError::NotReady => "firmware did not report ready",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match phy.bring_up(&mut mdio, &mut delay) {
///     Ok(InitStatus::Ready) => { /* ... */ }
///     Ok(InitStatus::NotPresent) => { /* nothing to do */ }
///     Err(Error::BringUp(BringUpError::NotReady)) => { /* retry later */ }
///     Err(Error::Bus(e)) => { /* transport problem */ }
///     Err(Error::Config(e)) => { /* programming error */ }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// MDIO transport error
    Bus(BusError),
    /// Bring-up sequence error
    BringUp(BringUpError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Bus(e) => write!(f, "bus: {}", e.as_str()),
            Error::BringUp(e) => write!(f, "bring-up: {}", e.as_str()),
        }
    }
}

// From impls for automatic conversion
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<BusError> for Error {
    fn from(e: BusError) -> Self {
        Error::Bus(e)
    }
}

impl From<BringUpError> for Error {
    fn from(e: BringUpError) -> Self {
        Error::BringUp(e)
    }
}

/// Result type alias for driver operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for raw bus operations
pub type BusResult<T> = core::result::Result<T, BusError>;

// =============================================================================
// Unit Tests
// =============================================================================
