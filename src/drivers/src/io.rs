//! Boot media and firmware image IO.
//!
//! The image loader and FIP parser are a separate library; the boot stage
//! only drives them through these traits.

use crate::DriverError;

pub trait IoLayer {
    /// Initialise the IO layer and register the platform's IO devices.
    fn setup_backends(&mut self) -> Result<(), DriverError>;
    /// Load the firmware configuration blob `id` to its platform location.
    fn load_config_blob(&mut self, id: u32) -> Result<(), DriverError>;
}

pub trait BootMedia {
    /// Whether the table of contents of the firmware package is intact.
    fn is_toc_valid(&mut self) -> bool;
}

/// Shared library in boot ROM
pub trait RomLib {
    /// Copy the library's data to RAM and check its jump table version.
    /// Returns `false` if the library is unusable.
    fn init(&mut self, version: u32) -> bool;
}
