//! EN8811H PHY Driver
//!
//! Bring-up driver for the Airoha EN8811H 2.5G Ethernet PHY.
//!
//! Unlike a plain Clause 22 PHY, the EN8811H runs an embedded MCU that has
//! to be loaded with firmware by the host before the link side does
//! anything. Bring-up therefore goes through three register access schemes
//! on the same MDIO bus (see [`bridge`](crate::bridge)):
//!
//! | Step | Access | Effect |
//! |------|--------|--------|
//! | Reset context | paged (PBUS) | `0xCF928` ← 0 |
//! | Identify | Clause 22 | PHYIDR1/2 == `0x03A2`/`0xA411`, up to 5 attempts |
//! | Halt MCU | windowed | `0x0F0018` ← 0 |
//! | Load firmware | windowed, streaming | DM at `0x000000`, then PM at `0x100000` |
//! | Release MCU | windowed | `0x0F0018` ← 1 |
//! | Wait ready | windowed | `0x3B30` == 5, up to 5 polls, 100 ms before each |
//! | LED enable | windowed RMW | `0xCF8B8` \|= `0x30` |
//! | LED patterns | Clause 45 (MMD 0x1F) | registers `0x24`-`0x27` |
//! | SerDes polarity | windowed RMW | `0xCA0F8` bits 1:0 |
//! | Restore page | Clause 22 | page 0 |
//!
//! The order is fixed. Nothing is rolled back on failure; running
//! [`En8811h::bring_up`] again starts over from the reset context write.
//!
//! # Bus Addresses
//!
//! The chip answers on two fixed MDIO addresses: `0x0F` for the standard
//! registers and the windowed bridge, `0x17` for the paged bridge. Boards
//! can't strap them, so the driver has no address parameter.
//!
//! # Example
//!
//! ```ignore
//! use ph_en8811h::phy::{En8811h, Firmware, InitStatus};
//!
//! static DM: &[u8] = include_bytes!("EthMD32.dm.bin");
//! static PM: &[u8] = include_bytes!("EthMD32.DSP.bin");
//!
//! let mut phy = En8811h::new(Firmware::new(DM, PM)?);
//! match phy.bring_up(&mut mdio, &mut delay)? {
//!     InitStatus::Ready => { /* register the PHY with the stack */ }
//!     InitStatus::NotPresent => { /* board without EN8811H */ }
//! }
//! ```

use embedded_hal::delay::DelayNs;

use crate::bridge::{
    DirectBridge, PagedBridge, RegisterModify, RegisterRead, RegisterWrite, WindowedBridge,
};
use crate::config::En8811hConfig;
use crate::error::{BringUpError, Result};
use crate::hal::mdio::{MdioBus, phy_reg, write_mmd};
#[cfg(feature = "defmt")]
use crate::internal::constants::DRIVER_VERSION;
use crate::internal::phy_regs::en8811h::{led, mcu, mdio_addr, pbus, phy_id, serdes};

use super::firmware::{self, Firmware};
use super::generic::{InitStatus, PhyCapabilities, PhyDriver, ieee802_3};

// =============================================================================
// EN8811H Identity
// =============================================================================

/// EN8811H PHY Identifier
///
/// - PHYIDR1 (reg 2): 0x03A2
/// - PHYIDR2 (reg 3): 0xA411
pub const EN8811H_PHY_ID: u32 = phy_id::ID;

/// PHY ID mask for device tables (ignores revision and the top nibble)
pub const EN8811H_PHY_ID_MASK: u32 = phy_id::MASK;

/// Check a PHY identifier against the EN8811H device table entry
pub const fn matches_phy_id(id: u32) -> bool {
    (id & EN8811H_PHY_ID_MASK) == (EN8811H_PHY_ID & EN8811H_PHY_ID_MASK)
}

// =============================================================================
// Bring-up Stage
// =============================================================================

/// Where the last bring-up got to
///
/// Updated as each step starts. After a failed bring-up it names the step
/// that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BringUpStage {
    /// Bring-up has not run
    #[default]
    Idle,
    /// Paged write of the reset context word
    ResetContext,
    /// Reading the identification registers
    Identify,
    /// Holding the MCU for firmware download
    HaltMcu,
    /// Streaming the DM and PM images
    LoadFirmware,
    /// Starting the MCU
    ReleaseMcu,
    /// Polling the firmware status word
    WaitReady,
    /// LED and SerDes configuration
    PostBoot,
    /// Bring-up completed
    Ready,
    /// Identification never matched
    NotPresent,
}

// =============================================================================
// Capability Reporting
// =============================================================================

/// Restrict a baseline capability set to the modes the EN8811H supports
///
/// Clears 10BASE-T half/full and sets 100BASE-TX half/full, 1000BASE-T full
/// and 2500BASE-X full. Every other field is left as it was.
pub fn restrict_link_modes(caps: &mut PhyCapabilities) {
    caps.speed_10_hd = false;
    caps.speed_10_fd = false;
    caps.speed_100_hd = true;
    caps.speed_100_fd = true;
    caps.speed_1000_fd = true;
    caps.speed_2500_fd = true;
}

// =============================================================================
// EN8811H Driver
// =============================================================================

/// EN8811H bring-up driver
///
/// Owns the firmware images and the bring-up configuration. The MDIO bus
/// and the delay source are borrowed per call.
#[derive(Debug)]
pub struct En8811h<'fw> {
    firmware: Firmware<'fw>,
    config: En8811hConfig,
    stage: BringUpStage,
}

impl<'fw> En8811h<'fw> {
    /// Create a driver with the default configuration
    pub const fn new(firmware: Firmware<'fw>) -> Self {
        Self::with_config(firmware, En8811hConfig::new())
    }

    /// Create a driver with a custom configuration
    pub const fn with_config(firmware: Firmware<'fw>, config: En8811hConfig) -> Self {
        Self {
            firmware,
            config,
            stage: BringUpStage::Idle,
        }
    }

    /// Bring-up configuration
    pub const fn config(&self) -> &En8811hConfig {
        &self.config
    }

    /// Stage reached by the last bring-up
    pub const fn stage(&self) -> BringUpStage {
        self.stage
    }

    /// Run the full bring-up sequence
    ///
    /// # Returns
    ///
    /// - `Ok(InitStatus::Ready)` once the firmware is running and configured
    /// - `Ok(InitStatus::NotPresent)` if identification never matched; only
    ///   the reset context write and the identification reads were issued
    ///
    /// # Errors
    ///
    /// - [`Error::Config`](crate::Error::Config) for a zero retry budget
    /// - [`Error::Bus`](crate::Error::Bus) on the first transport fault
    /// - [`Error::BringUp`](crate::Error::BringUp) if the firmware never
    ///   reports ready; post-boot configuration is skipped
    pub fn bring_up<M: MdioBus, D: DelayNs>(
        &mut self,
        mdio: &mut M,
        delay: &mut D,
    ) -> Result<InitStatus> {
        self.config.validate()?;

        self.enter(BringUpStage::ResetContext);
        PagedBridge::new(&mut *mdio)
            .write(pbus::RESET_CONTEXT_ADDR, pbus::RESET_CONTEXT_VALUE)?;

        self.enter(BringUpStage::Identify);
        if !self.identify(mdio)? {
            self.stage = BringUpStage::NotPresent;

            #[cfg(feature = "defmt")]
            defmt::warn!("EN8811H does not exist");

            return Ok(InitStatus::NotPresent);
        }

        let mut buck = WindowedBridge::new(&mut *mdio);

        self.enter(BringUpStage::HaltMcu);
        buck.write(mcu::CONTROL_ADDR, mcu::HALT)?;

        self.enter(BringUpStage::LoadFirmware);
        self.load_firmware(&mut buck)?;

        self.enter(BringUpStage::ReleaseMcu);
        buck.write(mcu::CONTROL_ADDR, mcu::RUN)?;

        self.enter(BringUpStage::WaitReady);
        self.wait_ready(&mut buck, delay)?;

        self.enter(BringUpStage::PostBoot);
        self.configure(&mut buck)?;

        self.stage = BringUpStage::Ready;

        #[cfg(feature = "defmt")]
        defmt::info!("EN8811H initialize OK ({=str})", DRIVER_VERSION);

        Ok(InitStatus::Ready)
    }

    fn enter(&mut self, stage: BringUpStage) {
        self.stage = stage;

        #[cfg(feature = "defmt")]
        defmt::trace!("EN8811H stage: {}", stage);
    }

    /// Read PHYIDR1/2 until both match, without delay between attempts
    #[cfg_attr(not(feature = "defmt"), allow(unused_variables))]
    fn identify<M: MdioBus>(&self, mdio: &mut M) -> Result<bool> {
        let mut phy = DirectBridge::new(mdio, mdio_addr::PHY);
        for attempt in 1..=self.config.identify_attempts {
            let id1 = phy.read(u32::from(phy_reg::PHYIDR1))?;
            let id2 = phy.read(u32::from(phy_reg::PHYIDR2))?;

            #[cfg(feature = "defmt")]
            defmt::debug!(
                "EN8811H identify attempt {}: PHY-{} = {:#06x} - {:#06x}",
                attempt,
                mdio_addr::PHY,
                id1,
                id2
            );

            if id1 == u32::from(phy_id::ID1) && id2 == u32::from(phy_id::ID2) {
                #[cfg(feature = "defmt")]
                defmt::info!("EN8811H detected");

                return Ok(true);
            }
        }
        Ok(false)
    }

    fn load_firmware<M: MdioBus>(&self, buck: &mut WindowedBridge<M>) -> Result<()> {
        #[cfg(feature = "defmt")]
        defmt::info!(
            "EN8811H firmware: DM {} bytes, PM {} bytes",
            self.firmware.dm.len(),
            self.firmware.pm.len()
        );

        firmware::load(buck, &self.firmware.dm)?;
        firmware::load(buck, &self.firmware.pm)?;

        #[cfg(feature = "defmt")]
        defmt::info!("EN8811H firmware loaded");

        Ok(())
    }

    /// Poll the firmware status word, sleeping before every poll
    #[cfg_attr(not(feature = "defmt"), allow(unused_variables))]
    fn wait_ready<M: MdioBus, D: DelayNs>(
        &self,
        buck: &mut WindowedBridge<M>,
        delay: &mut D,
    ) -> Result<()> {
        for poll in 1..=self.config.ready_attempts {
            delay.delay_ms(self.config.ready_poll_interval_ms);

            let status = buck.read(mcu::READY_ADDR)?;
            if status == mcu::READY_VALUE {
                #[cfg(feature = "defmt")]
                defmt::info!("EN8811H firmware ready after {} polls", poll);

                return Ok(());
            }

            #[cfg(feature = "defmt")]
            defmt::debug!("EN8811H status {:#010x} on poll {}", status, poll);
        }

        #[cfg(feature = "defmt")]
        defmt::error!("EN8811H initialize fail: firmware not ready");

        Err(BringUpError::NotReady.into())
    }

    /// LED enable, LED blink patterns, SerDes polarity, page 0
    fn configure<M: MdioBus>(&self, buck: &mut WindowedBridge<M>) -> Result<()> {
        buck.modify(led::CTRL_ADDR, 0, led::ENABLE)?;

        for (reg, value) in led::PATTERNS {
            write_mmd(buck.bus(), mdio_addr::PHY, led::MMD_DEVAD, reg, value)?;
        }

        let polarity = buck.modify(
            serdes::POLARITY_ADDR,
            serdes::POLARITY_MASK,
            self.config.polarity_bits(),
        )?;

        #[cfg(feature = "defmt")]
        defmt::debug!("EN8811H SerDes polarity word {:#010x}", polarity);
        #[cfg(not(feature = "defmt"))]
        let _ = polarity;

        buck.restore_page()
    }
}

impl PhyDriver for En8811h<'_> {
    fn address(&self) -> u8 {
        mdio_addr::PHY
    }

    fn init<M: MdioBus, D: DelayNs>(
        &mut self,
        mdio: &mut M,
        delay: &mut D,
    ) -> Result<InitStatus> {
        self.bring_up(mdio, delay)
    }

    /// Probe baseline abilities and restrict them to the supported modes
    ///
    /// Issues the reset context write first, like bring-up does.
    fn capabilities<M: MdioBus>(&self, mdio: &mut M) -> Result<PhyCapabilities> {
        PagedBridge::new(&mut *mdio)
            .write(pbus::RESET_CONTEXT_ADDR, pbus::RESET_CONTEXT_VALUE)?;

        let mut caps = ieee802_3::read_capabilities(mdio, mdio_addr::PHY)?;
        restrict_link_modes(&mut caps);
        Ok(caps)
    }

    fn phy_id<M: MdioBus>(&self, mdio: &mut M) -> Result<u32> {
        ieee802_3::read_phy_id(mdio, mdio_addr::PHY)
    }
}
