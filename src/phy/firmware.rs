//! Firmware Download
//!
//! The EN8811H boots its embedded MCU from two images that the host pushes
//! into chip memory while the MCU is halted: data memory (DM) and program
//! memory (PM). Both go through the windowed bridge in auto-increment mode,
//! so each image costs one address setup plus two register writes per
//! 32-bit word.
//!
//! Images are plain little-endian byte blobs, normally embedded with
//! `include_bytes!`:
//!
//! ```ignore
//! use ph_en8811h::phy::firmware::Firmware;
//!
//! static DM: &[u8] = include_bytes!("EthMD32.dm.bin");
//! static PM: &[u8] = include_bytes!("EthMD32.DSP.bin");
//!
//! let firmware = Firmware::new(DM, PM)?;
//! ```

use crate::bridge::WindowedBridge;
use crate::error::{ConfigError, ConfigResult, Result};
use crate::hal::mdio::MdioBus;
use crate::internal::phy_regs::en8811h::mcu;

/// Bytes per streamed word
const WORD_BYTES: usize = 4;

/// One firmware image and the chip address it is loaded to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FirmwareImage<'a> {
    base: u32,
    data: &'a [u8],
}

impl<'a> FirmwareImage<'a> {
    /// Wrap an image for loading at `base`
    ///
    /// An empty image is accepted; loading it only sets up the address.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::FirmwareMisaligned`] if the length is not a multiple of 4
    pub const fn new(base: u32, data: &'a [u8]) -> ConfigResult<Self> {
        if data.len() % WORD_BYTES != 0 {
            return Err(ConfigError::FirmwareMisaligned);
        }
        Ok(Self { base, data })
    }

    /// Data memory image, loaded at `0x0000_0000`
    pub const fn data_memory(data: &'a [u8]) -> ConfigResult<Self> {
        Self::new(mcu::DM_BASE, data)
    }

    /// Program memory image, loaded at `0x0010_0000`
    pub const fn program_memory(data: &'a [u8]) -> ConfigResult<Self> {
        Self::new(mcu::PM_BASE, data)
    }

    /// Chip address of the first word
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// Raw image bytes
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Image size in bytes
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` if the image holds no words
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of 32-bit words in the image
    pub const fn words(&self) -> usize {
        self.data.len() / WORD_BYTES
    }
}

/// The DM/PM image pair the MCU boots from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Firmware<'a> {
    /// Data memory image
    pub dm: FirmwareImage<'a>,
    /// Program memory image
    pub pm: FirmwareImage<'a>,
}

impl<'a> Firmware<'a> {
    /// Validate both images and place them at their fixed bases
    pub const fn new(dm: &'a [u8], pm: &'a [u8]) -> ConfigResult<Self> {
        let dm = match FirmwareImage::data_memory(dm) {
            Ok(image) => image,
            Err(e) => return Err(e),
        };
        let pm = match FirmwareImage::program_memory(pm) {
            Ok(image) => image,
            Err(e) => return Err(e),
        };
        Ok(Self { dm, pm })
    }
}

/// Stream one image into chip memory
///
/// Opens an auto-increment session at the image base, writes every 4-byte
/// chunk `b0 b1 b2 b3` as `0x13` ← `b3:b2`, `0x14` ← `b1:b0`, then selects
/// page 0 again. Returns the number of words written.
///
/// The MCU must be halted; nothing here checks that.
pub fn load<M: MdioBus>(
    bridge: &mut WindowedBridge<M>,
    image: &FirmwareImage<'_>,
) -> Result<usize> {
    let mut stream = bridge.stream(image.base())?;
    for chunk in image.data().chunks_exact(WORD_BYTES) {
        let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        stream.write_word(word)?;
    }
    stream.finish()
}
