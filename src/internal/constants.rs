//! Centralized Constants
//!
//! This module provides a single source of truth for the retry budgets and
//! timing used by the bring-up sequence.
//!
//! # Note
//!
//! Register addresses and bit definitions remain in
//! [`phy_regs`](super::phy_regs) as they are specific to the PHY.

// =============================================================================
// Retry Budgets
// =============================================================================

/// Identification attempts before the chip is reported as not present
pub const IDENTIFY_ATTEMPTS: u8 = 5;

/// Readiness polls after the MCU is released
pub const READY_ATTEMPTS: u8 = 5;

// =============================================================================
// Timing
// =============================================================================

/// Delay before each readiness poll, in milliseconds
pub const READY_POLL_INTERVAL_MS: u32 = 100;

// =============================================================================
// Identification
// =============================================================================

/// Version of the bring-up sequence, reported once the PHY is up
pub const DRIVER_VERSION: &str = "1.0.3";

// =============================================================================
// MDIO Address Space
// =============================================================================

/// Maximum valid PHY address (5-bit field)
pub const MAX_PHY_ADDR: u8 = 31;

/// Maximum valid register address (5-bit field)
pub const MAX_REG_ADDR: u8 = 31;
