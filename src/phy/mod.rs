//! Ethernet PHY Drivers
//!
//! This module provides the generic PHY driver trait and the EN8811H
//! bring-up driver.
//!
//! # Architecture
//!
//! The PHY layer only talks to the hardware through the
//! [`MdioBus`](crate::hal::MdioBus) trait and the [`bridge`](crate::bridge)
//! types built on it, so it can be driven by any MAC's MDIO controller and
//! tested against mock buses on the host.
//!
//! # Supported PHY Chips
//!
//! - [`En8811h`]: Airoha EN8811H 2.5G PHY (firmware loaded by the host)
//!
//! # Example
//!
//! ```ignore
//! use ph_en8811h::phy::{En8811h, Firmware, InitStatus, PhyDriver};
//!
//! let firmware = Firmware::new(DM_IMAGE, PM_IMAGE)?;
//! let mut phy = En8811h::new(firmware);
//!
//! if phy.init(&mut mdio, &mut delay)? == InitStatus::Ready {
//!     let caps = phy.capabilities(&mut mdio)?;
//!     assert!(caps.speed_2500_fd);
//! }
//! ```

pub mod en8811h;
pub mod firmware;
pub mod generic;

pub use en8811h::{
    BringUpStage, EN8811H_PHY_ID, EN8811H_PHY_ID_MASK, En8811h, matches_phy_id,
    restrict_link_modes,
};
pub use firmware::{Firmware, FirmwareImage};
pub use generic::{InitStatus, PhyCapabilities, PhyDriver};

// Re-export IEEE 802.3 standard register definitions from mdio
pub use crate::hal::mdio::{bmsr, estatus, phy_reg};
