//! Windowed bridge (BUCKPBUS)
//!
//! Registers 0x10-0x18 of page 4 on the standard participant form an
//! address/data window onto the chip's 32-bit internal bus.
//!
//! # Single access
//!
//! | Step | Write | Read |
//! |------|-------|------|
//! | 1 | `0x1F` ← 4 | `0x1F` ← 4 |
//! | 2 | `0x10` ← 0 | `0x10` ← 0 |
//! | 3 | `0x11` ← addr\[31:16\] | `0x15` ← addr\[31:16\] |
//! | 4 | `0x12` ← addr\[15:0\] | `0x16` ← addr\[15:0\] |
//! | 5 | `0x13` ← data\[31:16\] | read `0x17` → data\[31:16\] |
//! | 6 | `0x14` ← data\[15:0\] | read `0x18` → data\[15:0\] |
//!
//! Single accesses leave page 4 selected. Call
//! [`WindowedBridge::restore_page`] once a batch of accesses is done.
//!
//! # Streaming
//!
//! [`WindowedBridge::stream`] selects auto-increment mode (`0x10` ← 0x8000)
//! and writes the base address once. Each [`StreamWriter::write_word`] is
//! then only the two data writes; the chip advances its address pointer
//! after every committed store. [`StreamWriter::finish`] restores page 0.

use crate::error::Result;
use crate::hal::mdio::{MdioBus, check_address};
use crate::internal::phy_regs::en8811h::{buckpbus, mdio_addr};

use super::{RegisterRead, RegisterWrite};

/// Address/data window on page 4 of the standard participant
///
/// Tracks which page the participant currently has selected, since the
/// page register is shared with every other user of the participant.
#[derive(Debug)]
pub struct WindowedBridge<M: MdioBus> {
    mdio: M,
    phy_addr: u8,
    page: u16,
}

impl<M: MdioBus> WindowedBridge<M> {
    /// Create a bridge on the fixed standard participant (0x0F)
    ///
    /// The participant is assumed to be on page 0.
    pub const fn new(mdio: M) -> Self {
        Self::with_address(mdio, mdio_addr::PHY)
    }

    /// Create a bridge on a different participant address
    pub const fn with_address(mdio: M, phy_addr: u8) -> Self {
        Self {
            mdio,
            phy_addr,
            page: buckpbus::DEFAULT_PAGE,
        }
    }

    /// Participant address
    pub const fn address(&self) -> u8 {
        self.phy_addr
    }

    /// Page last selected through this bridge
    pub const fn page(&self) -> u16 {
        self.page
    }

    /// Direct access to the underlying bus
    ///
    /// Used for Clause 22 traffic to the same participant that must not
    /// give up the bridge's page tracking, e.g. MMD writes between windowed
    /// accesses. Registers below 0x10 are not affected by the page.
    pub fn bus(&mut self) -> &mut M {
        &mut self.mdio
    }

    /// Select page 0 again
    pub fn restore_page(&mut self) -> Result<()> {
        self.select_page(buckpbus::DEFAULT_PAGE)
    }

    /// Open an auto-increment write stream at `base`
    ///
    /// Writes page, mode and the address exactly once.
    pub fn stream(&mut self, base: u32) -> Result<StreamWriter<'_, M>> {
        self.open(buckpbus::MODE_AUTO_INCREMENT)?;
        self.write_address(base)?;
        Ok(StreamWriter {
            bridge: self,
            words: 0,
        })
    }

    fn select_page(&mut self, page: u16) -> Result<()> {
        self.mdio
            .write(self.phy_addr, buckpbus::PAGE_SELECT, page)?;
        self.page = page;
        Ok(())
    }

    fn open(&mut self, mode: u16) -> Result<()> {
        check_address(self.phy_addr, buckpbus::PAGE_SELECT)?;
        self.select_page(buckpbus::WINDOW_PAGE)?;
        self.mdio.write(self.phy_addr, buckpbus::MODE, mode)
    }

    fn write_address(&mut self, addr: u32) -> Result<()> {
        self.mdio
            .write(self.phy_addr, buckpbus::WR_ADDR_HIGH, (addr >> 16) as u16)?;
        self.mdio
            .write(self.phy_addr, buckpbus::WR_ADDR_LOW, addr as u16)
    }

    fn write_data(&mut self, value: u32) -> Result<()> {
        self.mdio
            .write(self.phy_addr, buckpbus::WR_DATA_HIGH, (value >> 16) as u16)?;
        self.mdio
            .write(self.phy_addr, buckpbus::WR_DATA_LOW, value as u16)
    }
}

impl<M: MdioBus> RegisterWrite for WindowedBridge<M> {
    fn write(&mut self, addr: u32, value: u32) -> Result<()> {
        self.open(buckpbus::MODE_SINGLE)?;
        self.write_address(addr)?;
        self.write_data(value)
    }
}

impl<M: MdioBus> RegisterRead for WindowedBridge<M> {
    fn read(&mut self, addr: u32) -> Result<u32> {
        self.open(buckpbus::MODE_SINGLE)?;
        self.mdio
            .write(self.phy_addr, buckpbus::RD_ADDR_HIGH, (addr >> 16) as u16)?;
        self.mdio
            .write(self.phy_addr, buckpbus::RD_ADDR_LOW, addr as u16)?;

        let high = self.mdio.read(self.phy_addr, buckpbus::RD_DATA_HIGH)?;
        let low = self.mdio.read(self.phy_addr, buckpbus::RD_DATA_LOW)?;
        Ok((u32::from(high) << 16) | u32::from(low))
    }
}

// =============================================================================
// Streaming Writer
// =============================================================================

/// Auto-increment write session opened by [`WindowedBridge::stream`]
///
/// Holds the bridge for the duration of the transfer. Dropping the writer
/// without calling [`finish`](Self::finish) leaves page 4 selected.
#[derive(Debug)]
pub struct StreamWriter<'b, M: MdioBus> {
    bridge: &'b mut WindowedBridge<M>,
    words: usize,
}

impl<M: MdioBus> StreamWriter<'_, M> {
    /// Store one word at the current address; the chip then advances
    pub fn write_word(&mut self, value: u32) -> Result<()> {
        self.bridge.write_data(value)?;
        self.words += 1;
        Ok(())
    }

    /// Words stored so far
    pub const fn words(&self) -> usize {
        self.words
    }

    /// Close the stream and select page 0
    ///
    /// Returns the number of words stored.
    pub fn finish(self) -> Result<usize> {
        self.bridge.restore_page()?;
        Ok(self.words)
    }
}
