//! Whole-stage runs on a board that replaces the standard early setup.

#[macro_use]
mod common;

use bl1::try_run_bl_stage;
use bl1_soc::arm::{
    image::{BL2_IMAGE_ID, NS_BL1U_IMAGE_ID},
    Bl1Error, Bl1Platform, NextImageDecision,
};
use common::{default_config, Devices, Event};
use drivers::{console::Console, watchdog::Watchdog};
use meminfo::TrustedMemoryLayout;
use xlat::{MemAttr, MemoryRegion};

static BOARD_REGIONS: [MemoryRegion; 2] = [
    MemoryRegion::flat(0x1000_0000, 0x1000, MemAttr::DEVICE),
    MemoryRegion::SENTINEL,
];

/// 1 MiB of trusted RAM at address zero, the stage image in its first
/// 64 KiB.
struct SmallBoard {
    dev: Devices,
}

impl SmallBoard {
    fn new(toc_valid: bool) -> Self {
        let mut config = default_config();
        config.multi_cluster = false;
        config.load_tb_fw_config = false;
        let mut dev = Devices::new(config);
        dev.io.toc_valid = toc_valid;
        Self { dev }
    }
}

impl Bl1Platform for SmallBoard {
    fake_devices!(dev);

    fn plat_regions(&self) -> &'static [MemoryRegion] {
        &BOARD_REGIONS
    }

    fn early_platform_setup(&mut self) -> Result<TrustedMemoryLayout, Bl1Error> {
        self.watchdog().arm(0x1000);
        self.console().init()?;
        let mut layout = TrustedMemoryLayout::new(0x0, 0x10_0000);
        layout.reserve(0x0, 0x1_0000)?;
        Ok(layout)
    }

    fn fatal_error(&mut self, err: &Bl1Error) -> ! {
        panic!("fatal: {err}");
    }
}

#[test]
fn own_image_reserved_from_bottom() {
    let mut board = SmallBoard::new(true);
    let outcome = try_run_bl_stage(&mut board).unwrap();
    assert_eq!(outcome.layout.total(), (0x0, 0x10_0000));
    assert_eq!(outcome.layout.free(), (0x1_0000, 0xf_0000));
}

#[test]
fn combined_code_region() {
    let mut board = SmallBoard::new(true);
    try_run_bl_stage(&mut board).unwrap();
    let events = board.dev.log.events();
    let Some(Event::Install(regions)) = events.into_iter().find(|e| matches!(e, Event::Install(_)))
    else {
        panic!("tables never installed");
    };
    assert_eq!(
        regions,
        vec![
            MemoryRegion::flat(0x0, 0x10_0000, MemAttr::RW_DATA),
            MemoryRegion::flat(0x0, 0x8000, MemAttr::CODE),
            MemoryRegion::SENTINEL,
        ]
    );
    assert_eq!(board.dev.xlat.plat_regions, 1);
}

#[test]
fn invalid_toc_boots_firmware_update() {
    let mut board = SmallBoard::new(false);
    let outcome = try_run_bl_stage(&mut board).unwrap();
    assert_eq!(outcome.decision, NextImageDecision::FirmwareUpdate);
    assert_eq!(outcome.decision.image_id(), NS_BL1U_IMAGE_ID);
}

#[test]
fn valid_toc_boots_bl2() {
    let mut board = SmallBoard::new(true);
    let outcome = try_run_bl_stage(&mut board).unwrap();
    assert_eq!(outcome.decision, NextImageDecision::NormalNextStage);
    assert_eq!(outcome.decision.image_id(), BL2_IMAGE_ID);
    assert_eq!(outcome.entry_point.pc, bl1_soc::arm::def::BL2_BASE as u64);
}

#[test]
fn overridden_setup_keeps_standard_exit() {
    let mut board = SmallBoard::new(true);
    try_run_bl_stage(&mut board).unwrap();
    let events = board.dev.log.events();
    assert_eq!(events.first(), Some(&Event::WatchdogArm(0x1000)));
    assert_eq!(events.last(), Some(&Event::WatchdogDisarm));
    assert!(!board.dev.watchdog.armed);
}
