/* SPDX-License-Identifier: GPL-2.0-only */

//! Standard BL1 phase bodies for the Arm platforms.
//!
//! A board implements [`Bl1Platform`] once, hands out its devices through
//! the accessor methods and keeps or overrides each phase. The free
//! `arm_bl1_*` functions are the standard bodies, so an override can still
//! call them and add its own steps around them.

use bl1_cpu::arm64::hang;
use drivers::{
    console::Console,
    cpu::CpuOps,
    interconnect::Interconnect,
    io::{BootMedia, IoLayer, RomLib},
    mailbox::Mailbox,
    timer::SysTimer,
    watchdog::Watchdog,
};
use log::{debug, info};
use meminfo::TrustedMemoryLayout;
use util::error::ConfigError;
use xlat::{compose, ImageSections, MemoryRegion, TranslationTables};

use super::{
    config::Bl1Config,
    def::{
        ARM_BL_RAM_BASE, ARM_BL_RAM_SIZE, ARM_ROMLIB_REGIONS, ARM_TWDG_LOAD_VAL, BL1_RW_BASE,
        BL1_RW_LIMIT, PLAT_ARM_MMAP_BL1, ROMLIB_VERSION,
    },
    error::Bl1Error,
    image::{select_next_image, EntryPointInfo, NextImageDecision, TB_FW_CONFIG_ID},
};

/// Everything the boot stage needs from a board.
pub trait Bl1Platform {
    type Watchdog: Watchdog;
    type Console: Console;
    type Interconnect: Interconnect;
    type Xlat: TranslationTables;
    type Io: IoLayer + BootMedia;
    type RomLib: RomLib;
    type Timer: SysTimer;
    type Mailbox: Mailbox;
    type Cpu: CpuOps;

    fn config(&self) -> &Bl1Config;

    fn watchdog(&mut self) -> &mut Self::Watchdog;
    fn console(&mut self) -> &mut Self::Console;
    fn interconnect(&mut self) -> &mut Self::Interconnect;
    fn xlat(&mut self) -> &mut Self::Xlat;
    fn io(&mut self) -> &mut Self::Io;
    fn romlib(&mut self) -> &mut Self::RomLib;
    fn timer(&mut self) -> &mut Self::Timer;
    fn mailbox(&mut self) -> &mut Self::Mailbox;
    fn cpu(&mut self) -> &mut Self::Cpu;

    /// Link-time boundaries of the running image
    fn image_sections(&self) -> ImageSections;

    /// Static platform regions, terminated by [`MemoryRegion::SENTINEL`]
    fn plat_regions(&self) -> &'static [MemoryRegion] {
        &PLAT_ARM_MMAP_BL1
    }

    /// Regions appended to the stage's own list
    fn extra_regions(&self) -> &'static [MemoryRegion] {
        if self.config().use_romlib {
            &ARM_ROMLIB_REGIONS
        } else {
            &[]
        }
    }

    fn early_platform_setup(&mut self) -> Result<TrustedMemoryLayout, Bl1Error> {
        let layout = arm_bl1_early_platform_setup(self)?;
        if self.config().multi_cluster {
            arm_bl1_enter_coherency(self)?;
        }
        Ok(layout)
    }

    fn arch_setup(&mut self, layout: &TrustedMemoryLayout) -> Result<(), Bl1Error> {
        arm_bl1_arch_setup(self, layout)
    }

    fn platform_setup(&mut self) -> Result<(), Bl1Error> {
        arm_bl1_platform_setup(self)
    }

    /// Called once, after platform setup.
    fn next_image_id(&mut self) -> NextImageDecision {
        select_next_image(self.io().is_toc_valid())
    }

    fn entry_point_info(&self, decision: NextImageDecision) -> EntryPointInfo {
        match self.config().el3_payload_base {
            Some(pc) => EntryPointInfo::el3_payload(pc),
            None => EntryPointInfo::for_decision(decision),
        }
    }

    fn prepare_exit(&mut self, ep: &EntryPointInfo) {
        arm_bl1_prepare_exit(self, ep)
    }

    /// Stop on an unrecoverable error. The watchdog is left running and
    /// resets the system.
    fn fatal_error(&mut self, _err: &Bl1Error) -> ! {
        hang()
    }
}

/// Arm the watchdog, bring up the console and work out how much trusted
/// SRAM the stage leaves to its successors.
pub fn arm_bl1_early_platform_setup<P: Bl1Platform + ?Sized>(
    plat: &mut P,
) -> Result<TrustedMemoryLayout, Bl1Error> {
    if plat.config().trusted_watchdog {
        plat.watchdog().arm(ARM_TWDG_LOAD_VAL);
    }
    plat.console().init()?;
    info!("BL1: early platform setup");

    let mut layout = TrustedMemoryLayout::new(ARM_BL_RAM_BASE, ARM_BL_RAM_SIZE);
    layout.reserve(BL1_RW_BASE, BL1_RW_LIMIT - BL1_RW_BASE)?;
    debug!("BL1: trusted SRAM {layout}");
    Ok(layout)
}

/// Join the boot cluster to the coherent interconnect. Nothing else runs
/// yet, so no locking.
pub fn arm_bl1_enter_coherency<P: Bl1Platform + ?Sized>(plat: &mut P) -> Result<(), Bl1Error> {
    plat.interconnect().init_for_cluster()?;
    plat.interconnect().enable_coherency_for_current_processor()?;
    plat.cpu().full_barrier();
    Ok(())
}

/// Map the stage and turn the MMU on.
pub fn arm_bl1_arch_setup<P: Bl1Platform + ?Sized>(
    plat: &mut P,
    layout: &TrustedMemoryLayout,
) -> Result<(), Bl1Error> {
    let config = *plat.config();
    let sections = plat.image_sections();
    if !sections.coherent.is_empty() {
        return Err(ConfigError::CoherentMemory.into());
    }

    let extra = plat.extra_regions();
    let regions = compose(layout, &sections, extra, config.separate_code_and_rodata)?;
    let plat_regions = plat.plat_regions();
    plat.xlat().install(regions.as_slice(), plat_regions)?;
    plat.xlat().enable_translation(config.regime)?;
    debug!("BL1: MMU enabled for {:?}", config.regime);

    if config.use_romlib {
        arm_setup_romlib(plat)?;
    }
    Ok(())
}

pub fn arm_setup_romlib<P: Bl1Platform + ?Sized>(plat: &mut P) -> Result<(), Bl1Error> {
    if !plat.romlib().init(ROMLIB_VERSION) {
        return Err(ConfigError::RomLibVersion.into());
    }
    Ok(())
}

/// IO, firmware configuration and the system counter.
pub fn arm_bl1_platform_setup<P: Bl1Platform + ?Sized>(plat: &mut P) -> Result<(), Bl1Error> {
    plat.io().setup_backends()?;
    if plat.config().load_tb_fw_config {
        plat.io()
            .load_config_blob(TB_FW_CONFIG_ID.0)
            .map_err(|_| ConfigError::MissingConfig)?;
    }

    // Non-secure images run during firmware update need the counter too
    let timer = plat.timer();
    timer.configure_secure_access();
    let freq = timer.frequency();
    timer.write_frequency_register(freq);
    debug!("BL1: system counter at {freq} Hz");
    Ok(())
}

pub fn arm_bl1_prepare_exit<P: Bl1Platform + ?Sized>(plat: &mut P, ep: &EntryPointInfo) {
    if plat.config().trusted_watchdog {
        plat.watchdog().disarm();
    }
    if plat.config().el3_payload_base.is_some() {
        // Secondaries sit in the holding pen until the mailbox is set
        plat.mailbox().program(ep.pc);
        plat.cpu().full_barrier();
        plat.cpu().send_event();
        info!("BL1: released secondaries to {:#x}", ep.pc);
    }
}
