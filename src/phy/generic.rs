//! Generic PHY Driver Trait
//!
//! This module defines the interface a host MAC/network stack uses to bring
//! up a PHY and ask what it can do, plus helpers for the IEEE 802.3
//! Clause 22 ability registers.

use embedded_hal::delay::DelayNs;

use crate::error::Result;
use crate::hal::mdio::MdioBus;

// =============================================================================
// Init Status
// =============================================================================

/// Outcome of a successful [`PhyDriver::init`]
///
/// An absent chip is a normal outcome on boards where the PHY is optional,
/// so it is reported here rather than as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitStatus {
    /// The PHY was identified and is operational
    Ready,
    /// Nothing with the expected identity answered on the bus
    NotPresent,
}

impl InitStatus {
    /// `true` for [`InitStatus::Ready`]
    pub const fn is_ready(self) -> bool {
        matches!(self, InitStatus::Ready)
    }
}

// =============================================================================
// PHY Capabilities
// =============================================================================

/// PHY link mode capabilities
///
/// Indicates which speed/duplex combinations and negotiation features the
/// PHY supports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyCapabilities {
    /// Supports 2500BASE-X Full Duplex
    pub speed_2500_fd: bool,
    /// Supports 1000BASE-T Full Duplex
    pub speed_1000_fd: bool,
    /// Supports 1000BASE-T Half Duplex
    pub speed_1000_hd: bool,
    /// Supports 100BASE-TX Full Duplex
    pub speed_100_fd: bool,
    /// Supports 100BASE-TX Half Duplex
    pub speed_100_hd: bool,
    /// Supports 10BASE-T Full Duplex
    pub speed_10_fd: bool,
    /// Supports 10BASE-T Half Duplex
    pub speed_10_hd: bool,
    /// Supports auto-negotiation
    pub auto_negotiation: bool,
    /// Supports PAUSE flow control
    pub pause: bool,
    /// Supports asymmetric PAUSE
    pub pause_asymmetric: bool,
}

// =============================================================================
// PHY Driver Trait
// =============================================================================

/// Trait for Ethernet PHY drivers
///
/// The host framework calls [`init`](Self::init) once per attach and
/// [`capabilities`](Self::capabilities) whenever it builds its list of
/// supported link modes. The bus is borrowed for the duration of each call
/// only.
///
/// # Example Implementation
///
/// ```ignore
/// struct MyPhy {
///     addr: u8,
/// }
///
/// impl PhyDriver for MyPhy {
///     fn address(&self) -> u8 { self.addr }
///
///     fn init<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, _: &mut D) -> Result<InitStatus> {
///         let id = self.phy_id(mdio)?;
///         Ok(if id == MY_ID { InitStatus::Ready } else { InitStatus::NotPresent })
///     }
///
///     // ... other methods
/// }
/// ```
pub trait PhyDriver {
    /// Get the PHY address (0-31)
    fn address(&self) -> u8;

    /// Bring the PHY into an operational state
    ///
    /// Returns [`InitStatus::NotPresent`] when no matching chip answers.
    fn init<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, delay: &mut D)
    -> Result<InitStatus>;

    /// Get PHY capabilities
    ///
    /// Returns what speed/duplex modes this PHY supports.
    fn capabilities<M: MdioBus>(&self, mdio: &mut M) -> Result<PhyCapabilities>;

    /// Read the PHY identifier (OUI + model + revision)
    ///
    /// Returns a 32-bit value: `(PHYIDR1 << 16) | PHYIDR2`
    fn phy_id<M: MdioBus>(&self, mdio: &mut M) -> Result<u32>;
}

// =============================================================================
// Default Implementations
// =============================================================================

/// Helper functions using standard IEEE 802.3 registers
pub mod ieee802_3 {
    use super::*;
    use crate::bridge::{DirectBridge, RegisterRead};
    use crate::hal::mdio::{bmsr, estatus, phy_reg};

    pub use crate::hal::mdio::read_phy_id;

    /// Read capabilities from BMSR and, if present, ESTATUS
    ///
    /// ESTATUS is only read when BMSR advertises it.
    pub fn read_capabilities<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<PhyCapabilities> {
        let mut phy = DirectBridge::new(mdio, phy_addr);
        let bmsr_val = phy.read(u32::from(phy_reg::BMSR))? as u16;

        let mut caps = PhyCapabilities {
            speed_100_fd: (bmsr_val & bmsr::TX_FD_CAPABLE) != 0,
            speed_100_hd: (bmsr_val & bmsr::TX_HD_CAPABLE) != 0,
            speed_10_fd: (bmsr_val & bmsr::T10_FD_CAPABLE) != 0,
            speed_10_hd: (bmsr_val & bmsr::T10_HD_CAPABLE) != 0,
            auto_negotiation: (bmsr_val & bmsr::AN_ABILITY) != 0,
            ..PhyCapabilities::default()
        };

        if (bmsr_val & bmsr::ESTATUS) != 0 {
            let estatus_val = phy.read(u32::from(phy_reg::ESTATUS))? as u16;
            caps.speed_1000_fd = (estatus_val & estatus::T_FD_1000) != 0;
            caps.speed_1000_hd = (estatus_val & estatus::T_HD_1000) != 0;
        }

        Ok(caps)
    }
}
