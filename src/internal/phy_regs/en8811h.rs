//! EN8811H Vendor-Specific Register Definitions
//!
//! Register numbers, indirect addresses and fixed values used to bring the
//! Airoha EN8811H out of reset. Constants are grouped by the access scheme
//! (bus participant / bridge) and then by bring-up phase, so the ordering
//! contract of the sequencer can be checked against this file.
//!
//! # Module Organization
//!
//! - `phy_id`: PHY identifier constants
//! - `mdio_addr`: Fixed bus participants
//! - `pbus`: Paged bridge registers (auxiliary participant)
//! - `buckpbus`: Windowed bridge registers (standard participant, page 4)
//! - `mcu`: Embedded microcontroller control and firmware layout
//! - `led`: LED enable and blink configuration
//! - `serdes`: SerDes polarity control

#![allow(dead_code)]

// =============================================================================
// EN8811H PHY Identifier
// =============================================================================

/// PHY identifier constants
pub mod phy_id {
    /// Expected PHYIDR1 value
    pub const ID1: u16 = 0x03A2;
    /// Expected PHYIDR2 value
    pub const ID2: u16 = 0xA411;
    /// Full ID: `(PHYIDR1 << 16) | PHYIDR2`
    pub const ID: u32 = ((ID1 as u32) << 16) | ID2 as u32;
    /// Device table match mask
    pub const MASK: u32 = 0x0FFF_FFF0;
}

// =============================================================================
// Bus Participants
// =============================================================================

/// Fixed MDIO participant addresses
pub mod mdio_addr {
    /// Standard management interface (Clause 22, windowed bridge, MMD)
    pub const PHY: u8 = 0x0F;
    /// Auxiliary low-level bus access participant (paged bridge)
    pub const PBUS: u8 = 0x17;
}

// =============================================================================
// Paged Bridge (PBUS)
// =============================================================================

/// Paged bridge registers on the PBUS participant
pub mod pbus {
    /// Page select register, receives `addr >> 6`
    pub const PAGE_SELECT: u8 = 0x1F;
    /// High data word register, receives `data >> 16` and commits the store
    pub const DATA_HIGH: u8 = 0x10;
    /// Right shift applied to the address for the page number
    pub const PAGE_SHIFT: u32 = 6;
    /// Right shift applied to the address for the in-page register
    pub const REG_SHIFT: u32 = 2;
    /// In-page register mask (after shifting)
    pub const REG_MASK: u32 = 0xF;

    /// Indirect address written before identification and feature probing
    pub const RESET_CONTEXT_ADDR: u32 = 0x000C_F928;
    /// Value written to [`RESET_CONTEXT_ADDR`]
    pub const RESET_CONTEXT_VALUE: u32 = 0;
}

// =============================================================================
// Windowed Bridge (BUCKPBUS, page 4)
// =============================================================================

/// Windowed bridge registers on the standard participant
pub mod buckpbus {
    /// Page select register
    pub const PAGE_SELECT: u8 = 0x1F;
    /// Page holding the window registers
    pub const WINDOW_PAGE: u16 = 4;
    /// Page expected by everything else
    pub const DEFAULT_PAGE: u16 = 0;

    /// Access mode register
    pub const MODE: u8 = 0x10;
    /// Write address, high 16 bits
    pub const WR_ADDR_HIGH: u8 = 0x11;
    /// Write address, low 16 bits
    pub const WR_ADDR_LOW: u8 = 0x12;
    /// Write data, high 16 bits
    pub const WR_DATA_HIGH: u8 = 0x13;
    /// Write data, low 16 bits (commits the store)
    pub const WR_DATA_LOW: u8 = 0x14;
    /// Read address, high 16 bits
    pub const RD_ADDR_HIGH: u8 = 0x15;
    /// Read address, low 16 bits (triggers the fetch)
    pub const RD_ADDR_LOW: u8 = 0x16;
    /// Read data, high 16 bits
    pub const RD_DATA_HIGH: u8 = 0x17;
    /// Read data, low 16 bits
    pub const RD_DATA_LOW: u8 = 0x18;

    /// Mode: one address per access
    pub const MODE_SINGLE: u16 = 0x0000;
    /// Mode: address auto-increments after every committed store
    pub const MODE_AUTO_INCREMENT: u16 = 0x8000;
}

// =============================================================================
// Microcontroller and Firmware
// =============================================================================

/// Embedded microcontroller control
pub mod mcu {
    /// MCU run control (windowed)
    pub const CONTROL_ADDR: u32 = 0x000F_0018;
    /// Hold the MCU while code is downloaded
    pub const HALT: u32 = 0x0;
    /// Start executing the downloaded firmware
    pub const RUN: u32 = 0x1;

    /// Firmware status word (windowed)
    pub const READY_ADDR: u32 = 0x0000_3B30;
    /// Status word value once the firmware has booted
    pub const READY_VALUE: u32 = 0x05;

    /// Data memory image base address
    pub const DM_BASE: u32 = 0x0000_0000;
    /// Program memory image base address
    pub const PM_BASE: u32 = 0x0010_0000;
}

// =============================================================================
// LED Configuration
// =============================================================================

/// LED enable flags and blink pattern registers
pub mod led {
    /// LED control word (windowed)
    pub const CTRL_ADDR: u32 = 0x000C_F8B8;
    /// LED enable flags set in [`CTRL_ADDR`]
    pub const ENABLE: u32 = 0x30;

    /// MMD device holding the LED pattern registers
    pub const MMD_DEVAD: u8 = 0x1F;
    /// LED0 on-condition register
    pub const LED0_ON: u16 = 0x24;
    /// LED0 blink-condition register
    pub const LED0_BLINK: u16 = 0x25;
    /// LED1 on-condition register
    pub const LED1_ON: u16 = 0x26;
    /// LED1 blink-condition register
    pub const LED1_BLINK: u16 = 0x27;

    /// Blink pattern table written after the firmware is ready
    pub const PATTERNS: [(u16, u16); 4] = [
        (LED0_ON, 0xC007),
        (LED0_BLINK, 0x003F),
        (LED1_ON, 0xC080),
        (LED1_BLINK, 0x00C0),
    ];
}

// =============================================================================
// SerDes Polarity
// =============================================================================

/// SerDes polarity control
pub mod serdes {
    /// Polarity control word (windowed)
    pub const POLARITY_ADDR: u32 = 0x000C_A0F8;
    /// Bits owned by the polarity setting
    pub const POLARITY_MASK: u32 = 0x3;

    /// TX polarity reversed
    pub const TX_REVERSE: u32 = 0x0;
    /// TX polarity normal
    pub const TX_NORMAL: u32 = 0x1;
    /// RX polarity reversed
    pub const RX_REVERSE: u32 = 0x1 << 1;
    /// RX polarity normal
    pub const RX_NORMAL: u32 = 0x0 << 1;
}
