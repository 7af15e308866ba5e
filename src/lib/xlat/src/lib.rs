/* SPDX-License-Identifier: GPL-2.0-only */
#![cfg_attr(not(test), no_std)]

//! Memory region model for the boot stage translation tables.
//!
//! Building and installing the tables is left to the translation library
//! behind [`TranslationTables`]; this crate only describes what gets mapped.

mod check;
mod compose;
mod region;

pub use self::{
    check::check_regions,
    compose::{compose, ImageSections, RegionList, MAX_BL_REGIONS},
    region::{MemAttr, MemType, MemoryRegion, Security},
};
pub use util::error::XlatError;

/// Exception level and execution state the MMU is enabled for
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TranslationRegime {
    /// AArch64 EL3
    El3,
    /// AArch32 secure SVC/Monitor mode
    Aarch32SvcMon,
}

/// The translation table library.
pub trait TranslationTables {
    /// Add the stage's own regions followed by the platform's static regions
    /// and build the tables. Both lists may end with
    /// [`MemoryRegion::SENTINEL`].
    fn install(
        &mut self,
        bl_regions: &[MemoryRegion],
        plat_regions: &[MemoryRegion],
    ) -> Result<(), XlatError>;

    /// Turn the MMU on for `regime` using the installed tables.
    fn enable_translation(&mut self, regime: TranslationRegime) -> Result<(), XlatError>;
}
