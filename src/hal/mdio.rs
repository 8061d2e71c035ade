//! MDIO (Management Data Input/Output) HAL
//!
//! This module defines the bus transport used to talk to the PHY: plain
//! Clause 22 register reads and writes addressed by `(phy_addr, reg_addr)`.
//! Anything with more structure (paged or windowed access to the 32-bit
//! vendor space) lives in [`bridge`](crate::bridge) and is built on top of
//! [`MdioBus`].
//!
//! The Clause 45 over Clause 22 helpers ([`write_mmd`], [`read_mmd`]) are
//! provided here because they only need the standard MMD access registers.

use crate::error::{ConfigError, ConfigResult, Result};
use crate::internal::constants::{MAX_PHY_ADDR, MAX_REG_ADDR};

// IEEE 802.3 standard register definitions
pub use crate::internal::phy_regs::standard::{bmsr, estatus, mmd_ctrl, phy_reg};

// =============================================================================
// MDIO Bus Trait
// =============================================================================

/// Trait for MDIO bus operations
///
/// This trait is implemented by the MAC or bit-banged MDIO controller of the
/// host platform. Implementations perform exactly one bus transaction per
/// call and report transport faults as
/// [`Error::Bus`](crate::Error::Bus); they must not retry on their own.
pub trait MdioBus {
    /// Read a PHY register
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16>;

    /// Write a PHY register
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()>;
}

impl<M: MdioBus + ?Sized> MdioBus for &mut M {
    #[inline]
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        (**self).read(phy_addr, reg_addr)
    }

    #[inline]
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        (**self).write(phy_addr, reg_addr, value)
    }
}

/// Check that a PHY and register address fit the 5-bit Clause 22 fields
pub const fn check_address(phy_addr: u8, reg_addr: u8) -> ConfigResult<()> {
    if phy_addr > MAX_PHY_ADDR {
        return Err(ConfigError::InvalidPhyAddress);
    }
    if reg_addr > MAX_REG_ADDR {
        return Err(ConfigError::InvalidRegister);
    }
    Ok(())
}

// =============================================================================
// Clause 45 over Clause 22
// =============================================================================

/// Select an MMD register through the Clause 22 indirection registers
///
/// Leaves the access control register in data mode for `devad`.
fn select_mmd<M: MdioBus>(mdio: &mut M, phy_addr: u8, devad: u8, reg: u16) -> Result<()> {
    check_address(phy_addr, phy_reg::MMD_CTRL)?;
    if u16::from(devad) > mmd_ctrl::DEVAD_MASK {
        return Err(ConfigError::ValueOutOfRange.into());
    }
    let devad = u16::from(devad);

    mdio.write(phy_addr, phy_reg::MMD_CTRL, mmd_ctrl::FUNC_ADDR | devad)?;
    mdio.write(phy_addr, phy_reg::MMD_DATA, reg)?;
    mdio.write(phy_addr, phy_reg::MMD_CTRL, mmd_ctrl::FUNC_DATA | devad)
}

/// Write an MMD register via registers 13/14
///
/// Issues four Clause 22 writes: device address, register address,
/// data-mode latch, data.
pub fn write_mmd<M: MdioBus>(
    mdio: &mut M,
    phy_addr: u8,
    devad: u8,
    reg: u16,
    value: u16,
) -> Result<()> {
    select_mmd(mdio, phy_addr, devad, reg)?;
    mdio.write(phy_addr, phy_reg::MMD_DATA, value)
}

/// Read an MMD register via registers 13/14
pub fn read_mmd<M: MdioBus>(mdio: &mut M, phy_addr: u8, devad: u8, reg: u16) -> Result<u16> {
    select_mmd(mdio, phy_addr, devad, reg)?;
    mdio.read(phy_addr, phy_reg::MMD_DATA)
}

/// Read the PHY identifier
///
/// Returns a 32-bit value: `(PHYIDR1 << 16) | PHYIDR2`
pub fn read_phy_id<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<u32> {
    let id1 = mdio.read(phy_addr, phy_reg::PHYIDR1)? as u32;
    let id2 = mdio.read(phy_addr, phy_reg::PHYIDR2)? as u32;
    Ok((id1 << 16) | id2)
}

// =============================================================================
// Unit Tests
// =============================================================================
