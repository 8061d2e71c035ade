//! PHY Register Definitions
//!
//! This module contains register definitions for the PHY as seen over MDIO.
//!
//! # Module Organization
//!
//! - [`standard`] - IEEE 802.3 Clause 22 standard PHY registers (0-15)
//! - [`en8811h`] - EN8811H vendor registers and indirect addresses
//!
//! # Access Method
//!
//! Standard registers are read and written directly. Vendor space is
//! reached through the paged and windowed bridges in
//! [`bridge`](crate::bridge), which translate 32-bit addresses into
//! sequences of Clause 22 accesses.

pub mod en8811h;
pub mod standard;
