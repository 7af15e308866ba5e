//! Recording stand-ins for every device the stage drives.

#![allow(dead_code)]

use std::{cell::RefCell, rc::Rc};

use bl1_soc::arm::Bl1Config;
use drivers::{
    console::Console,
    cpu::CpuOps,
    interconnect::Interconnect,
    io::{BootMedia, IoLayer, RomLib},
    mailbox::Mailbox,
    timer::SysTimer,
    watchdog::Watchdog,
    DriverError,
};
use xlat::{
    check_regions, ImageSections, MemoryRegion, TranslationRegime, TranslationTables, XlatError,
};

pub const TIMER_FREQ: u64 = 100_000_000;

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    WatchdogArm(u32),
    WatchdogDisarm,
    ConsoleInit,
    InterconnectInit,
    CoherencyEnable,
    Barrier,
    Sev,
    Install(Vec<MemoryRegion>),
    EnableMmu(TranslationRegime),
    RomLibInit(u32),
    IoSetup,
    LoadConfig(u32),
    TimerSecureAccess,
    WriteFreq(u64),
    TocQuery,
    Mailbox(u64),
}

#[derive(Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<Event>>>);

impl EventLog {
    pub fn push(&self, e: Event) {
        self.0.borrow_mut().push(e);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn position(&self, f: impl Fn(&Event) -> bool) -> Option<usize> {
        self.0.borrow().iter().position(f)
    }

    pub fn contains(&self, e: &Event) -> bool {
        self.0.borrow().contains(e)
    }
}

pub struct FakeWatchdog {
    log: EventLog,
    pub armed: bool,
}

impl Watchdog for FakeWatchdog {
    fn arm(&mut self, load: u32) {
        self.armed = true;
        self.log.push(Event::WatchdogArm(load));
    }

    fn disarm(&mut self) {
        self.armed = false;
        self.log.push(Event::WatchdogDisarm);
    }
}

pub struct FakeConsole {
    log: EventLog,
    pub fail: bool,
}

impl Console for FakeConsole {
    fn init(&mut self) -> Result<(), DriverError> {
        if self.fail {
            return Err(DriverError::Unsupported);
        }
        self.log.push(Event::ConsoleInit);
        Ok(())
    }
}

pub struct FakeInterconnect {
    log: EventLog,
    pub timeout: bool,
}

impl Interconnect for FakeInterconnect {
    fn init_for_cluster(&mut self) -> Result<(), DriverError> {
        self.log.push(Event::InterconnectInit);
        Ok(())
    }

    fn enable_coherency_for_current_processor(&mut self) -> Result<(), DriverError> {
        if self.timeout {
            return Err(DriverError::Timeout);
        }
        self.log.push(Event::CoherencyEnable);
        Ok(())
    }
}

/// Checks both region lists the way the translation library would.
pub struct FakeXlat {
    log: EventLog,
    pub reject: bool,
    pub plat_regions: usize,
}

impl TranslationTables for FakeXlat {
    fn install(
        &mut self,
        bl_regions: &[MemoryRegion],
        plat_regions: &[MemoryRegion],
    ) -> Result<(), XlatError> {
        if self.reject {
            return Err(XlatError::Rejected);
        }
        check_regions(bl_regions)?;
        check_regions(plat_regions)?;
        self.plat_regions = plat_regions.iter().take_while(|r| !r.is_sentinel()).count();
        self.log.push(Event::Install(bl_regions.to_vec()));
        Ok(())
    }

    fn enable_translation(&mut self, regime: TranslationRegime) -> Result<(), XlatError> {
        self.log.push(Event::EnableMmu(regime));
        Ok(())
    }
}

pub struct FakeIo {
    log: EventLog,
    pub toc_valid: bool,
    pub config_present: bool,
}

impl IoLayer for FakeIo {
    fn setup_backends(&mut self) -> Result<(), DriverError> {
        self.log.push(Event::IoSetup);
        Ok(())
    }

    fn load_config_blob(&mut self, id: u32) -> Result<(), DriverError> {
        self.log.push(Event::LoadConfig(id));
        if self.config_present {
            Ok(())
        } else {
            Err(DriverError::Unsupported)
        }
    }
}

impl BootMedia for FakeIo {
    fn is_toc_valid(&mut self) -> bool {
        self.log.push(Event::TocQuery);
        self.toc_valid
    }
}

pub struct FakeRomLib {
    log: EventLog,
    pub version: u32,
}

impl RomLib for FakeRomLib {
    fn init(&mut self, version: u32) -> bool {
        self.log.push(Event::RomLibInit(version));
        version == self.version
    }
}

pub struct FakeTimer {
    log: EventLog,
}

impl SysTimer for FakeTimer {
    fn configure_secure_access(&mut self) {
        self.log.push(Event::TimerSecureAccess);
    }

    fn frequency(&self) -> u64 {
        TIMER_FREQ
    }

    fn write_frequency_register(&mut self, freq: u64) {
        self.log.push(Event::WriteFreq(freq));
    }
}

pub struct FakeMailbox {
    log: EventLog,
}

impl Mailbox for FakeMailbox {
    fn program(&mut self, entry: u64) {
        self.log.push(Event::Mailbox(entry));
    }
}

pub struct FakeCpu {
    log: EventLog,
}

impl CpuOps for FakeCpu {
    fn full_barrier(&mut self) {
        self.log.push(Event::Barrier);
    }

    fn send_event(&mut self) {
        self.log.push(Event::Sev);
    }
}

/// Build options most tests start from
pub fn default_config() -> Bl1Config {
    Bl1Config {
        trusted_watchdog: true,
        separate_code_and_rodata: false,
        use_romlib: false,
        load_tb_fw_config: true,
        multi_cluster: true,
        regime: TranslationRegime::El3,
        el3_payload_base: None,
    }
}

pub struct Devices {
    pub log: EventLog,
    pub config: Bl1Config,
    pub sections: ImageSections,
    pub watchdog: FakeWatchdog,
    pub console: FakeConsole,
    pub interconnect: FakeInterconnect,
    pub xlat: FakeXlat,
    pub io: FakeIo,
    pub romlib: FakeRomLib,
    pub timer: FakeTimer,
    pub mailbox: FakeMailbox,
    pub cpu: FakeCpu,
}

impl Devices {
    pub fn new(config: Bl1Config) -> Self {
        let log = EventLog::default();
        Self {
            config,
            sections: ImageSections {
                code: 0x0000..0x6000,
                rodata: 0x6000..0x8000,
                coherent: 0..0,
            },
            watchdog: FakeWatchdog {
                log: log.clone(),
                armed: false,
            },
            console: FakeConsole {
                log: log.clone(),
                fail: false,
            },
            interconnect: FakeInterconnect {
                log: log.clone(),
                timeout: false,
            },
            xlat: FakeXlat {
                log: log.clone(),
                reject: false,
                plat_regions: 0,
            },
            io: FakeIo {
                log: log.clone(),
                toc_valid: true,
                config_present: true,
            },
            romlib: FakeRomLib {
                log: log.clone(),
                version: bl1_soc::arm::def::ROMLIB_VERSION,
            },
            timer: FakeTimer { log: log.clone() },
            mailbox: FakeMailbox { log: log.clone() },
            cpu: FakeCpu { log: log.clone() },
            log,
        }
    }
}

/// Associated types and accessors of a `Bl1Platform` backed by the
/// `Devices` in field `$d`.
macro_rules! fake_devices {
    ($d:ident) => {
        type Watchdog = $crate::common::FakeWatchdog;
        type Console = $crate::common::FakeConsole;
        type Interconnect = $crate::common::FakeInterconnect;
        type Xlat = $crate::common::FakeXlat;
        type Io = $crate::common::FakeIo;
        type RomLib = $crate::common::FakeRomLib;
        type Timer = $crate::common::FakeTimer;
        type Mailbox = $crate::common::FakeMailbox;
        type Cpu = $crate::common::FakeCpu;

        fn config(&self) -> &bl1_soc::arm::Bl1Config {
            &self.$d.config
        }
        fn watchdog(&mut self) -> &mut Self::Watchdog {
            &mut self.$d.watchdog
        }
        fn console(&mut self) -> &mut Self::Console {
            &mut self.$d.console
        }
        fn interconnect(&mut self) -> &mut Self::Interconnect {
            &mut self.$d.interconnect
        }
        fn xlat(&mut self) -> &mut Self::Xlat {
            &mut self.$d.xlat
        }
        fn io(&mut self) -> &mut Self::Io {
            &mut self.$d.io
        }
        fn romlib(&mut self) -> &mut Self::RomLib {
            &mut self.$d.romlib
        }
        fn timer(&mut self) -> &mut Self::Timer {
            &mut self.$d.timer
        }
        fn mailbox(&mut self) -> &mut Self::Mailbox {
            &mut self.$d.mailbox
        }
        fn cpu(&mut self) -> &mut Self::Cpu {
            &mut self.$d.cpu
        }
        fn image_sections(&self) -> xlat::ImageSections {
            self.$d.sections.clone()
        }
    };
}

/// The standard Arm platform: every phase left at its default.
pub struct StandardPlatform {
    pub dev: Devices,
}

impl StandardPlatform {
    pub fn new(config: Bl1Config) -> Self {
        Self {
            dev: Devices::new(config),
        }
    }
}

impl bl1_soc::arm::Bl1Platform for StandardPlatform {
    fake_devices!(dev);

    fn fatal_error(&mut self, err: &bl1_soc::arm::Bl1Error) -> ! {
        panic!("fatal: {err}");
    }
}
