//! IEEE 802.3 PHY Register Definitions
//!
//! Standard Clause 22 register addresses and the bit fields the EN8811H
//! driver touches. Registers 0-15 are standardized, while 16-31 are
//! vendor-specific (see [`en8811h`](super::en8811h)).
//!
//! | Register | Name | Description |
//! |----------|------|-------------|
//! | 1 | BMSR | Basic Mode Status |
//! | 2 | PHYIDR1 | PHY Identifier 1 |
//! | 3 | PHYIDR2 | PHY Identifier 2 |
//! | 13 | MMDCTRL | MMD Access Control |
//! | 14 | MMDAAD | MMD Access Address/Data |
//! | 15 | ESTATUS | Extended Status |

// Allow unused constants - these are complete register definitions for reference
#![allow(dead_code)]

// =============================================================================
// Standard PHY Register Addresses
// =============================================================================

/// Standard PHY register addresses (IEEE 802.3 Clause 22)
pub mod phy_reg {
    /// Basic Mode Control Register
    pub const BMCR: u8 = 0;
    /// Basic Mode Status Register
    pub const BMSR: u8 = 1;
    /// PHY Identifier 1
    pub const PHYIDR1: u8 = 2;
    /// PHY Identifier 2
    pub const PHYIDR2: u8 = 3;
    /// MMD Access Control Register
    pub const MMD_CTRL: u8 = 13;
    /// MMD Access Address/Data Register
    pub const MMD_DATA: u8 = 14;
    /// Extended Status Register
    pub const ESTATUS: u8 = 15;
}

// =============================================================================
// BMSR - Basic Mode Status Register (Register 1)
// =============================================================================

/// BMSR (Basic Mode Status Register) bits
pub mod bmsr {
    /// 100BASE-T4 capable
    pub const T4_CAPABLE: u16 = 1 << 15;
    /// 100BASE-TX full duplex capable
    pub const TX_FD_CAPABLE: u16 = 1 << 14;
    /// 100BASE-TX half duplex capable
    pub const TX_HD_CAPABLE: u16 = 1 << 13;
    /// 10BASE-T full duplex capable
    pub const T10_FD_CAPABLE: u16 = 1 << 12;
    /// 10BASE-T half duplex capable
    pub const T10_HD_CAPABLE: u16 = 1 << 11;
    /// Extended status register present
    pub const ESTATUS: u16 = 1 << 8;
    /// Auto-negotiation complete
    pub const AN_COMPLETE: u16 = 1 << 5;
    /// Auto-negotiation ability
    pub const AN_ABILITY: u16 = 1 << 3;
    /// Link status (1 = link up, 0 = link down)
    pub const LINK_STATUS: u16 = 1 << 2;
    /// Extended register capabilities
    pub const EXT_CAPABLE: u16 = 1 << 0;
}

// =============================================================================
// MMD Access Control Register (Register 13)
// =============================================================================

/// MMD access control bits (Clause 45 over Clause 22 indirection)
pub mod mmd_ctrl {
    /// Device address field mask (bits 4:0)
    pub const DEVAD_MASK: u16 = 0x001F;
    /// Function: address
    pub const FUNC_ADDR: u16 = 0x0 << 14;
    /// Function: data, no post increment
    pub const FUNC_DATA: u16 = 0x1 << 14;
    /// Function field mask (bits 15:14)
    pub const FUNC_MASK: u16 = 0x3 << 14;
}

// =============================================================================
// ESTATUS - Extended Status Register (Register 15)
// =============================================================================

/// ESTATUS (Extended Status Register) bits
pub mod estatus {
    /// 1000BASE-X full duplex capable
    pub const X_FD_1000: u16 = 1 << 15;
    /// 1000BASE-X half duplex capable
    pub const X_HD_1000: u16 = 1 << 14;
    /// 1000BASE-T full duplex capable
    pub const T_FD_1000: u16 = 1 << 13;
    /// 1000BASE-T half duplex capable
    pub const T_HD_1000: u16 = 1 << 12;
}
