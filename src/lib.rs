//! EN8811H PHY Driver
//!
//! A `no_std`, `no_alloc` Rust driver that brings the Airoha EN8811H 2.5G
//! Ethernet PHY from power-up to an operational state over MDIO.
//!
//! The EN8811H does not run on its own after reset: the host has to push
//! two firmware images into the chip, start its embedded MCU, wait for the
//! firmware to report ready and then apply a few board settings (LED
//! patterns, SerDes polarity). This crate implements that sequence on top of
//! any MDIO controller.
//!
//! # Architecture
//!
//! The driver is organized into three layers:
//!
//! 1. **PHY Layer** ([`phy`]): bring-up sequencer, firmware loader and
//!    capability reporting
//! 2. **Bridge Layer** ([`bridge`]): the paged, windowed and direct register
//!    access schemes the chip exposes
//! 3. **HAL Layer** ([`hal`]): the [`MdioBus`](hal::MdioBus) transport trait
//!
//! ## Standard Compliance
//!
//! - **IEEE 802.3 Clause 22**: identification and ability registers
//! - **IEEE 802.3 Clause 45 over Clause 22**: MMD access through registers 13/14
//! - **EN8811H-specific**: PBUS and BUCKPBUS bridges, MCU boot protocol
//!
//! # Features
//!
//! - `defmt`: Enable defmt logging of the bring-up checkpoints and defmt
//!   formatting for public types
//!
//! # Example
//!
//! ```ignore
//! use ph_en8811h::{En8811h, Firmware, InitStatus, PhyDriver};
//!
//! static DM: &[u8] = include_bytes!("EthMD32.dm.bin");
//! static PM: &[u8] = include_bytes!("EthMD32.DSP.bin");
//!
//! // `mdio` implements MdioBus, `delay` implements embedded_hal DelayNs
//! let mut phy = En8811h::new(Firmware::new(DM, PM)?);
//!
//! match phy.init(&mut mdio, &mut delay)? {
//!     InitStatus::Ready => {
//!         let caps = phy.capabilities(&mut mdio)?;
//!         // hand `caps` to the network stack
//!     }
//!     InitStatus::NotPresent => {
//!         // board variant without the PHY
//!     }
//! }
//! ```

#![no_std]
#![deny(missing_docs)]

// =============================================================================
// Modules
// =============================================================================

pub mod bridge;
pub mod config;
pub mod error;
pub mod hal;
pub mod phy;

// Internal implementation details (pub(crate) only)
mod internal;

// Test utilities (only available during testing)
#[cfg(test)]
pub mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{En8811hConfig, Polarity};
pub use error::{
    BringUpError, BusError, BusResult, ConfigError, ConfigResult, Error, Result,
};

// Re-export PHY types
pub use phy::{
    BringUpStage, EN8811H_PHY_ID, EN8811H_PHY_ID_MASK, En8811h, Firmware, FirmwareImage,
    InitStatus, PhyCapabilities, PhyDriver, matches_phy_id, restrict_link_modes,
};

/// Shared driver constants.
///
/// These are grouped into a dedicated module to keep the top-level facade
/// focused on driver types.
pub mod constants {
    pub use crate::internal::constants::{
        // Version of the bring-up sequence
        DRIVER_VERSION,
        // Retry budgets
        IDENTIFY_ATTEMPTS,
        // Address limits
        MAX_PHY_ADDR,
        MAX_REG_ADDR,
        READY_ATTEMPTS,
        // Timing
        READY_POLL_INTERVAL_MS,
    };
}
