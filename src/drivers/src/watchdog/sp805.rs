use log::trace;
use tock_registers::{
    interfaces::{Readable, Writeable},
    register_bitfields, register_structs,
    registers::{ReadOnly, ReadWrite, WriteOnly},
};

use super::Watchdog;

/// Writing this to WDOGLOCK enables write access to all other registers.
const WDOG_UNLOCK_KEY: u32 = 0x1ACC_E551;

register_bitfields! [
    u32,
    Control [
        /// Enable the counter and the interrupt
        INTEN OFFSET(0) NUMBITS(1) [],
        /// Enable the reset output
        RESEN OFFSET(1) NUMBITS(1) []
    ]
];

register_structs! {
    pub Sp805Regs {
        (0x000 => load: ReadWrite<u32>),
        (0x004 => value: ReadOnly<u32>),
        (0x008 => control: ReadWrite<u32, Control::Register>),
        (0x00c => intclr: WriteOnly<u32>),
        (0x010 => ris: ReadOnly<u32>),
        (0x014 => mis: ReadOnly<u32>),
        (0x018 => _reserved0),
        (0xc00 => lock: ReadWrite<u32>),
        (0xc04 => @END),
    }
}

/// ARM SP805 watchdog module
pub struct Sp805 {
    regs: &'static Sp805Regs,
}

impl Sp805 {
    /// # Safety
    ///
    /// `base` must be the address of an SP805 register block.
    pub unsafe fn new(base: usize) -> Self {
        Self {
            regs: &*(base as *const Sp805Regs),
        }
    }

    pub fn is_running(&self) -> bool {
        self.regs.control.is_set(Control::INTEN)
    }

    fn unlocked(&mut self, f: impl FnOnce(&Sp805Regs)) {
        self.regs.lock.set(WDOG_UNLOCK_KEY);
        f(self.regs);
        self.regs.lock.set(0);
    }
}

impl Watchdog for Sp805 {
    fn arm(&mut self, load: u32) {
        trace!("sp805: arm, load {load:#x}");
        self.unlocked(|r| {
            r.load.set(load);
            r.control.write(Control::INTEN::SET + Control::RESEN::SET);
        });
    }

    fn disarm(&mut self) {
        trace!("sp805: disarm");
        self.unlocked(|r| r.control.set(0));
    }
}
