use bl1_cpu::arm64::{barrier::dsb_ish, sysreg::cluster_id};
use log::{debug, trace};
use tock_registers::{
    interfaces::{Readable, Writeable},
    register_bitfields, register_structs,
    registers::{ReadOnly, ReadWrite},
};

use super::Interconnect;
use crate::DriverError;

/// Slave interface register frames start one 4 KiB page into the block.
const SLAVE_IFACE_OFFSET: usize = 0x1000;
const SLAVE_IFACE_STRIDE: usize = 0x1000;
/// Polls of the change pending bit before giving up.
const CHANGE_PENDING_POLLS: usize = 100_000;

register_bitfields! [
    u32,
    SnoopCtrl [
        SNOOP_EN OFFSET(0) NUMBITS(1) [],
        DVM_EN OFFSET(1) NUMBITS(1) []
    ],
    Status [
        CHANGE_PENDING OFFSET(0) NUMBITS(1) []
    ]
];

register_structs! {
    pub CciRegs {
        (0x00 => control_override: ReadWrite<u32>),
        (0x04 => speculation_ctrl: ReadWrite<u32>),
        (0x08 => secure_access: ReadWrite<u32>),
        (0x0c => status: ReadOnly<u32, Status::Register>),
        (0x10 => @END),
    },
    pub CciSlaveRegs {
        (0x00 => snoop_ctrl: ReadWrite<u32, SnoopCtrl::Register>),
        (0x04 => @END),
    }
}

/// ARM CCI-400/CCI-500 cache coherent interconnect.
///
/// `map[cluster]` is the slave interface the cluster's ACE port is wired to.
pub struct Cci {
    base: usize,
    map: &'static [usize],
    initialized: bool,
}

impl Cci {
    /// # Safety
    ///
    /// `base` must be the address of a CCI register block with at least
    /// `map.iter().max() + 1` slave interfaces.
    pub const unsafe fn new(base: usize, map: &'static [usize]) -> Self {
        Self {
            base,
            map,
            initialized: false,
        }
    }

    fn regs(&self) -> &CciRegs {
        unsafe { &*(self.base as *const CciRegs) }
    }

    fn slave(&self, iface: usize) -> &CciSlaveRegs {
        let addr = self.base + SLAVE_IFACE_OFFSET + iface * SLAVE_IFACE_STRIDE;
        unsafe { &*(addr as *const CciSlaveRegs) }
    }

    /// Enable snoops and DVM messages on the interface of `cluster`.
    pub fn enable_snoop_dvm_reqs(&mut self, cluster: usize) -> Result<(), DriverError> {
        if !self.initialized {
            return Err(DriverError::Unsupported);
        }
        let iface = *self.map.get(cluster).ok_or(DriverError::Unsupported)?;
        trace!("cci: cluster {cluster} -> slave interface {iface}");

        self.slave(iface)
            .snoop_ctrl
            .write(SnoopCtrl::DVM_EN::SET + SnoopCtrl::SNOOP_EN::SET);
        dsb_ish();

        for _ in 0..CHANGE_PENDING_POLLS {
            if !self.regs().status.is_set(Status::CHANGE_PENDING) {
                debug!("cci: cluster {cluster} coherent");
                return Ok(());
            }
            core::hint::spin_loop();
        }
        Err(DriverError::Timeout)
    }
}

impl Interconnect for Cci {
    fn init_for_cluster(&mut self) -> Result<(), DriverError> {
        if self.base == 0 || self.map.is_empty() {
            return Err(DriverError::Unsupported);
        }
        self.initialized = true;
        Ok(())
    }

    fn enable_coherency_for_current_processor(&mut self) -> Result<(), DriverError> {
        self.enable_snoop_dvm_reqs(cluster_id())
    }
}
