use bl1_cpu::arm64::sysreg::write_cntfrq_el0;
use log::trace;
use tock_registers::{
    interfaces::{Readable, Writeable},
    register_bitfields, register_structs,
    registers::{ReadOnly, ReadWrite},
};

use super::SysTimer;

register_bitfields! [
    u32,
    Cntacr [
        /// Read physical count
        RPCT OFFSET(0) NUMBITS(1) [],
        /// Read virtual count
        RVCT OFFSET(1) NUMBITS(1) [],
        /// Read frequency
        RFRQ OFFSET(2) NUMBITS(1) [],
        /// Read virtual offset
        RVOFF OFFSET(3) NUMBITS(1) [],
        /// Read/write virtual timer
        RWVT OFFSET(4) NUMBITS(1) [],
        /// Read/write physical timer
        RWPT OFFSET(5) NUMBITS(1) []
    ]
];

register_structs! {
    /// CNTControlBase: the counter module control frame
    pub CntControlRegs {
        (0x00 => cntcr: ReadWrite<u32>),
        (0x04 => cntsr: ReadOnly<u32>),
        (0x08 => cntcv_lo: ReadWrite<u32>),
        (0x0c => cntcv_hi: ReadWrite<u32>),
        (0x10 => _reserved0),
        (0x20 => cntfid0: ReadOnly<u32>),
        (0x24 => @END),
    },
    /// CNTCTLBase: the timer control frame
    pub CntCtlRegs {
        (0x00 => cntfrq: ReadWrite<u32>),
        (0x04 => cntnsar: ReadWrite<u32>),
        (0x08 => cnttidr: ReadOnly<u32>),
        (0x0c => _reserved0),
        (0x40 => cntacr: [ReadWrite<u32, Cntacr::Register>; 8]),
        (0x60 => @END),
    }
}

/// Arm generic system counter with its CNTCTLBase timer frame controller.
pub struct ArmSysTimer {
    control: &'static CntControlRegs,
    ctl: &'static CntCtlRegs,
    ns_frame: usize,
}

impl ArmSysTimer {
    /// # Safety
    ///
    /// `cntcontrol_base` and `cntctl_base` must be the addresses of the
    /// counter control frame and the timer control frame.
    pub unsafe fn new(cntcontrol_base: usize, cntctl_base: usize, ns_frame: usize) -> Self {
        assert!(ns_frame < 8);
        Self {
            control: &*(cntcontrol_base as *const CntControlRegs),
            ctl: &*(cntctl_base as *const CntCtlRegs),
            ns_frame,
        }
    }
}

impl SysTimer for ArmSysTimer {
    fn configure_secure_access(&mut self) {
        trace!("sys timer: open frame {} to non-secure", self.ns_frame);
        self.ctl.cntacr[self.ns_frame].write(
            Cntacr::RPCT::SET
                + Cntacr::RVCT::SET
                + Cntacr::RFRQ::SET
                + Cntacr::RVOFF::SET
                + Cntacr::RWVT::SET
                + Cntacr::RWPT::SET,
        );
        self.ctl.cntnsar.set(1 << self.ns_frame);
    }

    fn frequency(&self) -> u64 {
        self.control.cntfid0.get() as u64
    }

    fn write_frequency_register(&mut self, freq: u64) {
        // CNTCTLBase.CNTFRQ is only 32 bits wide
        self.ctl.cntfrq.set(freq as u32);
        write_cntfrq_el0(freq);
    }
}
