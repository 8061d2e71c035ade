//! Direct Clause 22 access
//!
//! The trivial bridge: the address is the register number on one
//! participant, values are 16 bits wide. Used for identification and
//! capability probing so standard registers go through the same interface
//! as the vendor bridges.

use crate::error::{ConfigError, Result};
use crate::hal::mdio::{MdioBus, check_address};

use super::{RegisterRead, RegisterWrite};

/// Clause 22 registers of a single participant
#[derive(Debug)]
pub struct DirectBridge<M: MdioBus> {
    mdio: M,
    phy_addr: u8,
}

impl<M: MdioBus> DirectBridge<M> {
    /// Create a bridge for the participant at `phy_addr`
    pub const fn new(mdio: M, phy_addr: u8) -> Self {
        Self { mdio, phy_addr }
    }

    /// Participant address
    pub const fn address(&self) -> u8 {
        self.phy_addr
    }

    fn register(&self, addr: u32) -> Result<u8> {
        let reg = u8::try_from(addr).map_err(|_| ConfigError::InvalidRegister)?;
        check_address(self.phy_addr, reg)?;
        Ok(reg)
    }
}

impl<M: MdioBus> RegisterRead for DirectBridge<M> {
    fn read(&mut self, addr: u32) -> Result<u32> {
        let reg = self.register(addr)?;
        Ok(u32::from(self.mdio.read(self.phy_addr, reg)?))
    }
}

impl<M: MdioBus> RegisterWrite for DirectBridge<M> {
    fn write(&mut self, addr: u32, value: u32) -> Result<()> {
        let reg = self.register(addr)?;
        let value = u16::try_from(value).map_err(|_| ConfigError::ValueOutOfRange)?;
        self.mdio.write(self.phy_addr, reg, value)
    }
}
