//! Register Access Bridges
//!
//! The EN8811H exposes three incompatible ways of reaching its registers, all
//! over the same MDIO bus:
//!
//! | Bridge | Participant | Address space | Read | Write |
//! |--------|-------------|---------------|------|-------|
//! | [`DirectBridge`] | any | Clause 22 register number (0-31) | yes | yes |
//! | [`PagedBridge`] | PBUS (0x17) | 32-bit, page/register split | no | yes |
//! | [`WindowedBridge`] | PHY (0x0F), page 4 | 32-bit, address/data window | yes | yes |
//!
//! Each bridge implements [`RegisterWrite`] and, where the hardware allows,
//! [`RegisterRead`]; anything that implements both gets
//! [`RegisterModify::modify`] for free. The same numeric address means
//! different things to different bridges, so addresses are never shared
//! between them.
//!
//! # Exclusive Access
//!
//! Every logical access is a fixed sequence of bus transactions
//! (setup, data, commit). A bridge holds the only mutable borrow of the bus
//! for its lifetime, so no other access can be interleaved into a sequence.
//!
//! # Example
//!
//! ```ignore
//! use ph_en8811h::bridge::{RegisterModify, RegisterRead, WindowedBridge};
//!
//! let mut buck = WindowedBridge::new(&mut mdio);
//! let value = buck.read(0x3B30)?;
//! buck.modify(0xCF8B8, 0, 0x30)?;
//! buck.restore_page()?;
//! ```

pub mod direct;
pub mod paged;
pub mod windowed;

pub use direct::DirectBridge;
pub use paged::PagedBridge;
pub use windowed::{StreamWriter, WindowedBridge};

use crate::error::Result;

// =============================================================================
// Bridge Traits
// =============================================================================

/// Store a 32-bit value at a bridge-specific address
pub trait RegisterWrite {
    /// Write `value` to `addr`
    ///
    /// The whole bus sequence completes or the first transport fault is
    /// returned.
    fn write(&mut self, addr: u32, value: u32) -> Result<()>;
}

/// Fetch a 32-bit value from a bridge-specific address
pub trait RegisterRead {
    /// Read the value at `addr`
    fn read(&mut self, addr: u32) -> Result<u32>;
}

/// Read-modify-write for bridges that can do both
pub trait RegisterModify: RegisterRead + RegisterWrite {
    /// Clear `clear`, then set `set`, preserving every other bit
    ///
    /// Returns the value written.
    fn modify(&mut self, addr: u32, clear: u32, set: u32) -> Result<u32> {
        let value = (self.read(addr)? & !clear) | set;
        self.write(addr, value)?;
        Ok(value)
    }
}

impl<T: RegisterRead + RegisterWrite + ?Sized> RegisterModify for T {}
