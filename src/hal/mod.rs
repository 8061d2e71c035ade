//! Hardware Abstraction Layer
//!
//! This module holds the bus transport the whole driver is built on.
//!
//! # Modules
//!
//! - [`mdio`]: MDIO bus trait and Clause 45 over Clause 22 helpers
//!
//! # Delay Integration
//!
//! The readiness poll uses `embedded_hal::delay::DelayNs` directly.
//! Pass any delay implementation from your HAL (e.g., `esp_hal::delay::Delay`).

pub mod mdio;

// Re-export commonly used types
pub use mdio::{MdioBus, read_mmd, write_mmd};
