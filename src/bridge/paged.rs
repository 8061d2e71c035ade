//! Paged bridge (PBUS)
//!
//! The auxiliary bus-access participant maps a 32-bit address onto a page
//! select plus one of 16 in-page registers. A store is exactly three
//! Clause 22 writes:
//!
//! 1. `0x1F` ← `addr >> 6` (page)
//! 2. `(addr >> 2) & 0xF` ← low data word
//! 3. `0x10` ← high data word (commits)
//!
//! The hardware offers no read path through this participant.

use crate::error::Result;
use crate::hal::mdio::{MdioBus, check_address};
use crate::internal::phy_regs::en8811h::{mdio_addr, pbus};

use super::RegisterWrite;

/// Write-only bridge through the PBUS participant
#[derive(Debug)]
pub struct PagedBridge<M: MdioBus> {
    mdio: M,
    phy_addr: u8,
}

impl<M: MdioBus> PagedBridge<M> {
    /// Create a bridge on the fixed PBUS participant (0x17)
    pub const fn new(mdio: M) -> Self {
        Self::with_address(mdio, mdio_addr::PBUS)
    }

    /// Create a bridge on a different participant address
    pub const fn with_address(mdio: M, phy_addr: u8) -> Self {
        Self { mdio, phy_addr }
    }

    /// Participant address
    pub const fn address(&self) -> u8 {
        self.phy_addr
    }
}

impl<M: MdioBus> RegisterWrite for PagedBridge<M> {
    fn write(&mut self, addr: u32, value: u32) -> Result<()> {
        check_address(self.phy_addr, pbus::PAGE_SELECT)?;

        let page = (addr >> pbus::PAGE_SHIFT) as u16;
        let reg = ((addr >> pbus::REG_SHIFT) & pbus::REG_MASK) as u8;

        self.mdio.write(self.phy_addr, pbus::PAGE_SELECT, page)?;
        self.mdio.write(self.phy_addr, reg, value as u16)?;
        self.mdio
            .write(self.phy_addr, pbus::DATA_HIGH, (value >> 16) as u16)
    }
}
