//! Testing utilities and mock implementations
//!
//! This module provides mock implementations for testing the PHY driver
//! on the host without hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::vec::Vec;

use crate::error::{BusError, Result};
use crate::hal::mdio::{MdioBus, mmd_ctrl, phy_reg};
use crate::internal::phy_regs::en8811h::{buckpbus, mcu, mdio_addr, pbus, phy_id};

// =============================================================================
// Mock MDIO Bus
// =============================================================================

/// Mock MDIO bus for testing register sequences without hardware
///
/// Plain register map: no paging, no indirection. Writes are logged and
/// stored, reads return the stored value (0 if never set).
///
/// # Example
///
/// ```ignore
/// let mut mdio = MockMdioBus::new();
/// mdio.set_register(0x0F, 0x02, 0x03A2);
/// assert_eq!(mdio.read(0x0F, 0x02).unwrap(), 0x03A2);
/// ```
#[derive(Debug, Default)]
pub struct MockMdioBus {
    /// Register values: (phy_addr, reg_addr) -> value
    registers: RefCell<HashMap<(u8, u8), u16>>,
    /// Record of writes: (phy_addr, reg_addr, value)
    write_log: RefCell<Vec<(u8, u8, u16)>>,
    /// Number of operations allowed before every access faults
    fail_after: RefCell<Option<usize>>,
    /// Operations performed so far
    ops: RefCell<usize>,
}

impl MockMdioBus {
    /// Create a new mock MDIO bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a register value
    pub fn set_register(&self, phy_addr: u8, reg_addr: u8, value: u16) {
        self.registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);
    }

    /// Get the current value of a register (for test verification)
    pub fn get_register(&self, phy_addr: u8, reg_addr: u8) -> Option<u16> {
        self.registers.borrow().get(&(phy_addr, reg_addr)).copied()
    }

    /// Get all writes that have been made
    pub fn get_writes(&self) -> Vec<(u8, u8, u16)> {
        self.write_log.borrow().clone()
    }

    /// Fault every access after `ops` successful ones
    pub fn fail_after(&self, ops: usize) {
        *self.fail_after.borrow_mut() = Some(ops);
    }

    fn check_fault(&self) -> Result<()> {
        let mut ops = self.ops.borrow_mut();
        if let Some(limit) = *self.fail_after.borrow() {
            if *ops >= limit {
                return Err(BusError::Fault.into());
            }
        }
        *ops += 1;
        Ok(())
    }
}

impl MdioBus for MockMdioBus {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        self.check_fault()?;
        // Return from register map (default 0 if not set)
        Ok(self
            .registers
            .borrow()
            .get(&(phy_addr, reg_addr))
            .copied()
            .unwrap_or(0))
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        self.check_fault()?;

        // Log the write
        self.write_log
            .borrow_mut()
            .push((phy_addr, reg_addr, value));

        // Actually update the register
        self.registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);

        Ok(())
    }
}

// =============================================================================
// Simulated EN8811H
// =============================================================================

/// One transaction seen on the simulated bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusOp {
    /// Register read and the value returned
    Read { phy: u8, reg: u8, value: u16 },
    /// Register write
    Write { phy: u8, reg: u8, value: u16 },
}

impl BusOp {
    /// Shorthand for a write on the standard participant
    pub const fn phy_write(reg: u8, value: u16) -> Self {
        BusOp::Write {
            phy: mdio_addr::PHY,
            reg,
            value,
        }
    }

    /// Shorthand for a write on the PBUS participant
    pub const fn pbus_write(reg: u8, value: u16) -> Self {
        BusOp::Write {
            phy: mdio_addr::PBUS,
            reg,
            value,
        }
    }
}

/// Bus-level simulation of an EN8811H
///
/// Models the three access schemes the driver uses:
/// - PBUS participant (0x17): paged stores, decoded into `(addr, data)` pairs
/// - Standard participant (0x0F), page 4: the windowed bridge over a sparse
///   32-bit memory, including auto-increment (by 4 bytes per store)
/// - Standard participant, registers 13/14: Clause 45 MMD indirection
///
/// Every transaction is appended to an ordered [`BusOp`] log.
#[derive(Debug, Default)]
pub struct MockEn8811h {
    registers: HashMap<(u8, u8), u16>,
    scripted_reads: HashMap<(u8, u8), VecDeque<u16>>,
    log: Vec<BusOp>,
    fail_after: Option<usize>,

    // Windowed bridge state
    page: u16,
    mode: u16,
    wr_addr: u32,
    wr_data_high: u16,
    rd_addr_high: u16,
    rd_latch: u32,
    memory: HashMap<u32, u32>,
    scripted_memory: HashMap<u32, VecDeque<u32>>,
    memory_stores: Vec<(u32, u32)>,

    // Paged bridge state
    pbus_page: u16,
    pbus_low: (u8, u16),
    pbus_stores: Vec<(u32, u32)>,

    // MMD state
    mmd_ctrl: u16,
    mmd_addr: u16,
    mmd_regs: HashMap<(u8, u16), u16>,
    mmd_writes: Vec<(u8, u16, u16)>,
}

impl MockEn8811h {
    /// A bus with nothing answering: identification reads return 0
    pub fn new() -> Self {
        Self::default()
    }

    /// A chip that identifies correctly and reports ready on the first poll
    pub fn present() -> Self {
        let mut chip = Self::new();
        chip.set_register(mdio_addr::PHY, phy_reg::PHYIDR1, phy_id::ID1);
        chip.set_register(mdio_addr::PHY, phy_reg::PHYIDR2, phy_id::ID2);
        chip.set_memory(mcu::READY_ADDR, mcu::READY_VALUE);
        chip
    }

    /// Set a plain Clause 22 register
    pub fn set_register(&mut self, phy: u8, reg: u8, value: u16) {
        self.registers.insert((phy, reg), value);
    }

    /// Queue values returned by successive reads of a register
    ///
    /// Once the queue is drained, reads fall back to the register value.
    pub fn script_reads(&mut self, phy: u8, reg: u8, values: &[u16]) {
        self.scripted_reads
            .entry((phy, reg))
            .or_default()
            .extend(values.iter().copied());
    }

    /// Set a word in the windowed address space
    pub fn set_memory(&mut self, addr: u32, value: u32) {
        self.memory.insert(addr, value);
    }

    /// Word in the windowed address space
    pub fn memory(&self, addr: u32) -> Option<u32> {
        self.memory.get(&addr).copied()
    }

    /// Queue values returned by successive windowed reads of `addr`
    pub fn script_memory_reads(&mut self, addr: u32, values: &[u32]) {
        self.scripted_memory
            .entry(addr)
            .or_default()
            .extend(values.iter().copied());
    }

    /// Fault every access after `ops` successful ones
    pub fn fail_after(&mut self, ops: usize) {
        self.fail_after = Some(ops);
    }

    /// Ordered transaction log
    pub fn log(&self) -> &[BusOp] {
        &self.log
    }

    /// Forget all logged transactions and decoded stores
    pub fn clear_log(&mut self) {
        self.log.clear();
        self.memory_stores.clear();
        self.pbus_stores.clear();
        self.mmd_writes.clear();
    }

    /// Number of writes to one register
    pub fn count_writes(&self, phy: u8, reg: u8) -> usize {
        self.log
            .iter()
            .filter(|op| matches!(op, BusOp::Write { phy: p, reg: r, .. } if *p == phy && *r == reg))
            .count()
    }

    /// Number of reads of one register
    pub fn count_reads(&self, phy: u8, reg: u8) -> usize {
        self.log
            .iter()
            .filter(|op| matches!(op, BusOp::Read { phy: p, reg: r, .. } if *p == phy && *r == reg))
            .count()
    }

    /// Currently selected page on the standard participant
    pub fn page(&self) -> u16 {
        self.page
    }

    /// Windowed stores in commit order
    pub fn memory_stores(&self) -> &[(u32, u32)] {
        &self.memory_stores
    }

    /// Paged stores in commit order
    pub fn pbus_stores(&self) -> &[(u32, u32)] {
        &self.pbus_stores
    }

    /// MMD writes in order: (devad, reg, value)
    pub fn mmd_writes(&self) -> &[(u8, u16, u16)] {
        &self.mmd_writes
    }

    /// Current value of an MMD register
    pub fn mmd_register(&self, devad: u8, reg: u16) -> Option<u16> {
        self.mmd_regs.get(&(devad, reg)).copied()
    }

    fn check_fault(&self) -> Result<()> {
        match self.fail_after {
            Some(limit) if self.log.len() >= limit => Err(BusError::Fault.into()),
            _ => Ok(()),
        }
    }

    fn plain_read(&mut self, phy: u8, reg: u8) -> u16 {
        if let Some(value) = self
            .scripted_reads
            .get_mut(&(phy, reg))
            .and_then(VecDeque::pop_front)
        {
            return value;
        }
        self.registers.get(&(phy, reg)).copied().unwrap_or(0)
    }

    fn window_active(&self, reg: u8) -> bool {
        self.page == buckpbus::WINDOW_PAGE && reg >= buckpbus::MODE && reg < buckpbus::PAGE_SELECT
    }

    fn fetch(&mut self, addr: u32) -> u32 {
        if let Some(value) = self
            .scripted_memory
            .get_mut(&addr)
            .and_then(VecDeque::pop_front)
        {
            return value;
        }
        self.memory(addr).unwrap_or(0)
    }

    fn phy_read(&mut self, reg: u8) -> u16 {
        if reg == buckpbus::PAGE_SELECT {
            return self.page;
        }
        if self.window_active(reg) {
            return match reg {
                buckpbus::RD_DATA_HIGH => (self.rd_latch >> 16) as u16,
                buckpbus::RD_DATA_LOW => self.rd_latch as u16,
                buckpbus::MODE => self.mode,
                _ => 0,
            };
        }
        if reg == phy_reg::MMD_DATA && self.mmd_ctrl & mmd_ctrl::FUNC_MASK == mmd_ctrl::FUNC_DATA
        {
            let devad = (self.mmd_ctrl & mmd_ctrl::DEVAD_MASK) as u8;
            return self.mmd_register(devad, self.mmd_addr).unwrap_or(0);
        }
        self.plain_read(mdio_addr::PHY, reg)
    }

    fn phy_write(&mut self, reg: u8, value: u16) {
        if reg == buckpbus::PAGE_SELECT {
            self.page = value;
            return;
        }
        if self.window_active(reg) {
            match reg {
                buckpbus::MODE => self.mode = value,
                buckpbus::WR_ADDR_HIGH => {
                    self.wr_addr = (u32::from(value) << 16) | (self.wr_addr & 0xFFFF);
                }
                buckpbus::WR_ADDR_LOW => {
                    self.wr_addr = (self.wr_addr & 0xFFFF_0000) | u32::from(value);
                }
                buckpbus::WR_DATA_HIGH => self.wr_data_high = value,
                buckpbus::WR_DATA_LOW => {
                    let word = (u32::from(self.wr_data_high) << 16) | u32::from(value);
                    self.memory.insert(self.wr_addr, word);
                    self.memory_stores.push((self.wr_addr, word));
                    if self.mode & buckpbus::MODE_AUTO_INCREMENT != 0 {
                        self.wr_addr = self.wr_addr.wrapping_add(4);
                    }
                }
                buckpbus::RD_ADDR_HIGH => self.rd_addr_high = value,
                buckpbus::RD_ADDR_LOW => {
                    let addr = (u32::from(self.rd_addr_high) << 16) | u32::from(value);
                    self.rd_latch = self.fetch(addr);
                }
                _ => {}
            }
            return;
        }
        match reg {
            phy_reg::MMD_CTRL => self.mmd_ctrl = value,
            phy_reg::MMD_DATA if self.mmd_ctrl & mmd_ctrl::FUNC_MASK == mmd_ctrl::FUNC_ADDR => {
                self.mmd_addr = value;
            }
            phy_reg::MMD_DATA => {
                let devad = (self.mmd_ctrl & mmd_ctrl::DEVAD_MASK) as u8;
                self.mmd_regs.insert((devad, self.mmd_addr), value);
                self.mmd_writes.push((devad, self.mmd_addr, value));
            }
            _ => {
                self.registers.insert((mdio_addr::PHY, reg), value);
            }
        }
    }

    fn pbus_write(&mut self, reg: u8, value: u16) {
        match reg {
            pbus::PAGE_SELECT => self.pbus_page = value,
            pbus::DATA_HIGH => {
                let (low_reg, low) = self.pbus_low;
                let addr = (u32::from(self.pbus_page) << pbus::PAGE_SHIFT)
                    | (u32::from(low_reg) << pbus::REG_SHIFT);
                let data = (u32::from(value) << 16) | u32::from(low);
                self.pbus_stores.push((addr, data));
            }
            r if u32::from(r) <= pbus::REG_MASK => self.pbus_low = (r, value),
            _ => {
                self.registers.insert((mdio_addr::PBUS, reg), value);
            }
        }
    }
}

impl MdioBus for MockEn8811h {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        self.check_fault()?;
        let value = if phy_addr == mdio_addr::PHY {
            self.phy_read(reg_addr)
        } else {
            self.plain_read(phy_addr, reg_addr)
        };
        self.log.push(BusOp::Read {
            phy: phy_addr,
            reg: reg_addr,
            value,
        });
        Ok(value)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        self.check_fault()?;
        match phy_addr {
            mdio_addr::PHY => self.phy_write(reg_addr, value),
            mdio_addr::PBUS => self.pbus_write(reg_addr, value),
            _ => {
                self.registers.insert((phy_addr, reg_addr), value);
            }
        }
        self.log.push(BusOp::Write {
            phy: phy_addr,
            reg: reg_addr,
            value,
        });
        Ok(())
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: RefCell<u64>,
    /// Number of delay calls
    calls: RefCell<usize>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        *self.total_ns.borrow()
    }

    /// Get total milliseconds that were "delayed"
    pub fn total_ms(&self) -> u64 {
        self.total_ns() / 1_000_000
    }

    /// Number of delay calls made
    pub fn calls(&self) -> usize {
        *self.calls.borrow()
    }

    /// Reset the delay counters
    pub fn reset(&self) {
        *self.total_ns.borrow_mut() = 0;
        *self.calls.borrow_mut() = 0;
    }

    fn record(&self, ns: u64) {
        *self.total_ns.borrow_mut() += ns;
        *self.calls.borrow_mut() += 1;
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.record(u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.record(u64::from(us) * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.record(u64::from(ms) * 1_000_000);
    }
}

// =============================================================================
// Test Assertions
// =============================================================================

/// Assert that a register was written with a specific value
#[macro_export]
macro_rules! assert_reg_written {
    ($mdio:expr, $phy:expr, $reg:expr, $value:expr) => {
        let writes = $mdio.get_writes();
        assert!(
            writes
                .iter()
                .any(|w| w.0 == $phy && w.1 == $reg && w.2 == $value),
            "Expected write to PHY {} reg {} with value 0x{:04X}, but got: {:?}",
            $phy,
            $reg,
            $value,
            writes
        );
    };
}

/// Assert that a register was written (any value)
#[macro_export]
macro_rules! assert_reg_written_any {
    ($mdio:expr, $phy:expr, $reg:expr) => {
        let writes = $mdio.get_writes();
        assert!(
            writes.iter().any(|w| w.0 == $phy && w.1 == $reg),
            "Expected write to PHY {} reg {}, but got: {:?}",
            $phy,
            $reg,
            writes
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::delay::DelayNs;
    use std::vec;

    #[test]
    fn mock_mdio_read_write() {
        let mut mdio = MockMdioBus::new();

        // Initially reads 0
        assert_eq!(mdio.read(0, 1).unwrap(), 0);

        mdio.set_register(0, 1, 0x1234);
        assert_eq!(mdio.read(0, 1).unwrap(), 0x1234);

        // Write updates the value and is logged
        mdio.write(0, 1, 0x5678).unwrap();
        assert_eq!(mdio.read(0, 1).unwrap(), 0x5678);
        assert_eq!(mdio.get_writes(), vec![(0, 1, 0x5678)]);
    }

    #[test]
    fn mock_mdio_fault_injection() {
        let mut mdio = MockMdioBus::new();
        mdio.fail_after(1);

        assert!(mdio.write(0, 1, 1).is_ok());
        assert!(mdio.write(0, 1, 2).is_err());
        assert!(mdio.read(0, 1).is_err());
        assert_eq!(mdio.get_register(0, 1), Some(1));
    }

    #[test]
    fn mock_delay_tracking() {
        let mut delay = MockDelay::new();

        delay.delay_ns(1000);
        delay.delay_ms(100);

        assert_eq!(delay.calls(), 2);
        assert_eq!(delay.total_ms(), 100);

        delay.reset();
        assert_eq!(delay.calls(), 0);
        assert_eq!(delay.total_ns(), 0);
    }

    #[test]
    fn simulated_chip_scripted_reads_fall_back_to_register() {
        let mut chip = MockEn8811h::present();
        chip.script_reads(mdio_addr::PHY, phy_reg::PHYIDR1, &[0xFFFF]);

        assert_eq!(chip.read(mdio_addr::PHY, phy_reg::PHYIDR1).unwrap(), 0xFFFF);
        assert_eq!(chip.read(mdio_addr::PHY, phy_reg::PHYIDR1).unwrap(), phy_id::ID1);
    }

    #[test]
    fn simulated_chip_decodes_pbus_store() {
        let mut chip = MockEn8811h::new();

        chip.write(mdio_addr::PBUS, pbus::PAGE_SELECT, 0x33E4).unwrap();
        chip.write(mdio_addr::PBUS, 0x0A, 0x5678).unwrap();
        chip.write(mdio_addr::PBUS, pbus::DATA_HIGH, 0x1234).unwrap();

        assert_eq!(chip.pbus_stores(), &[(0x000C_F928, 0x1234_5678)]);
    }

    #[test]
    fn simulated_chip_windowed_registers_only_on_page_4() {
        let mut chip = MockEn8811h::new();

        // Page 0: register 0x10 is an ordinary register
        chip.write(mdio_addr::PHY, buckpbus::MODE, 0x8000).unwrap();
        assert_eq!(chip.read(mdio_addr::PHY, buckpbus::MODE).unwrap(), 0x8000);

        chip.write(mdio_addr::PHY, buckpbus::PAGE_SELECT, 4).unwrap();
        assert_eq!(chip.read(mdio_addr::PHY, buckpbus::MODE).unwrap(), 0);
        assert_eq!(chip.page(), 4);
    }
}
