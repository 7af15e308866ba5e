/* SPDX-License-Identifier: GPL-2.0-only */

use bl1_soc::arm::{
    bl1_setup::{arm_bl1_early_platform_setup, arm_bl1_enter_coherency},
    def::{
        ARM_SP805_TWDG_BASE, ARM_SYS_CNTCTL_BASE, ARM_SYS_TIMCTL_BASE, PLAT_ARM_CCI_BASE,
        PLAT_ARM_CCI_MAP, PLAT_ARM_NSTIMER_FRAME_ID, PLAT_ARM_TRUSTED_MAILBOX_BASE,
        V2M_SYSREGS_BASE,
    },
    Bl1Config, Bl1Error, Bl1Platform,
};
use drivers::{
    cpu::Arm64Cpu, interconnect::Cci, mailbox::TrustedMailbox, timer::ArmSysTimer,
    watchdog::Sp805, DriverError,
};
use log::{error, info};
use meminfo::TrustedMemoryLayout;
use tock_registers::{
    interfaces::Readable, register_bitfields, register_structs, registers::ReadOnly,
    LocalRegisterCopy,
};
use xlat::ImageSections;

use crate::{
    ffi::{TfaIo, TfaRomLib, TfaXlat},
    layout,
    logger::BootConsole,
};

register_bitfields! [
    u32,
    SysId [
        ARCH OFFSET(8) NUMBITS(4) [],
        BUILD OFFSET(12) NUMBITS(4) [],
        HBI OFFSET(16) NUMBITS(12) [],
        REV OFFSET(28) NUMBITS(4) [],
    ],
];

register_structs! {
    V2mSysRegs {
        (0x00 => id: ReadOnly<u32, SysId::Register>),
        (0x04 => @END),
    }
}

const HBI_BASE_FVP: u32 = 0x020;
const HBI_FOUNDATION_FVP: u32 = 0x010;
const ARCH_MODEL: u32 = 0x1;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Model {
    Base,
    Foundation,
}

/// Identify the model from the motherboard's SYS_ID register.
pub fn decode_sys_id(id: u32) -> Result<Model, DriverError> {
    let id = LocalRegisterCopy::<u32, SysId::Register>::new(id);
    if id.read(SysId::ARCH) != ARCH_MODEL {
        return Err(DriverError::Unsupported);
    }
    match id.read(SysId::HBI) {
        HBI_BASE_FVP => Ok(Model::Base),
        HBI_FOUNDATION_FVP => Ok(Model::Foundation),
        _ => Err(DriverError::Unsupported),
    }
}

pub struct Fvp {
    config: Bl1Config,
    watchdog: Sp805,
    console: BootConsole,
    interconnect: Cci,
    xlat: TfaXlat,
    io: TfaIo,
    romlib: TfaRomLib,
    timer: ArmSysTimer,
    mailbox: TrustedMailbox,
    cpu: Arm64Cpu,
}

impl Fvp {
    pub fn new(config: Bl1Config) -> Option<Self> {
        unsafe {
            Some(Self {
                config,
                watchdog: Sp805::new(ARM_SP805_TWDG_BASE),
                console: BootConsole,
                interconnect: Cci::new(PLAT_ARM_CCI_BASE, &PLAT_ARM_CCI_MAP),
                xlat: TfaXlat,
                io: TfaIo,
                romlib: TfaRomLib,
                timer: ArmSysTimer::new(
                    ARM_SYS_CNTCTL_BASE,
                    ARM_SYS_TIMCTL_BASE,
                    PLAT_ARM_NSTIMER_FRAME_ID,
                ),
                mailbox: TrustedMailbox::new(PLAT_ARM_TRUSTED_MAILBOX_BASE)?,
                cpu: Arm64Cpu,
            })
        }
    }

    fn config_setup(&self) -> Result<Model, DriverError> {
        let regs = unsafe { &*(V2M_SYSREGS_BASE as *const V2mSysRegs) };
        let id = regs.id.get();
        let model = decode_sys_id(id).map_err(|e| {
            error!("FVP: unsupported SYS_ID {id:#010x}");
            e
        })?;
        info!(
            "FVP: {model:?} model, rev {} build {}",
            regs.id.read(SysId::REV),
            regs.id.read(SysId::BUILD)
        );
        Ok(model)
    }
}

impl Bl1Platform for Fvp {
    type Watchdog = Sp805;
    type Console = BootConsole;
    type Interconnect = Cci;
    type Xlat = TfaXlat;
    type Io = TfaIo;
    type RomLib = TfaRomLib;
    type Timer = ArmSysTimer;
    type Mailbox = TrustedMailbox;
    type Cpu = Arm64Cpu;

    fn config(&self) -> &Bl1Config {
        &self.config
    }

    fn watchdog(&mut self) -> &mut Sp805 {
        &mut self.watchdog
    }

    fn console(&mut self) -> &mut BootConsole {
        &mut self.console
    }

    fn interconnect(&mut self) -> &mut Cci {
        &mut self.interconnect
    }

    fn xlat(&mut self) -> &mut TfaXlat {
        &mut self.xlat
    }

    fn io(&mut self) -> &mut TfaIo {
        &mut self.io
    }

    fn romlib(&mut self) -> &mut TfaRomLib {
        &mut self.romlib
    }

    fn timer(&mut self) -> &mut ArmSysTimer {
        &mut self.timer
    }

    fn mailbox(&mut self) -> &mut TrustedMailbox {
        &mut self.mailbox
    }

    fn cpu(&mut self) -> &mut Arm64Cpu {
        &mut self.cpu
    }

    fn image_sections(&self) -> ImageSections {
        layout::image_sections()
    }

    /// The standard setup, with the model checked before the CCI is touched.
    fn early_platform_setup(&mut self) -> Result<TrustedMemoryLayout, Bl1Error> {
        let layout = arm_bl1_early_platform_setup(self)?;
        self.config_setup()?;
        if self.config.multi_cluster {
            arm_bl1_enter_coherency(self)?;
        }
        Ok(layout)
    }
}
