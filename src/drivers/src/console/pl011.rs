use core::fmt;

use tock_registers::{
    interfaces::{Readable, Writeable},
    register_bitfields, register_structs,
    registers::{ReadOnly, ReadWrite, WriteOnly},
};

use super::Console;
use crate::DriverError;

register_bitfields! [
    u32,
    Flag [
        /// Transmit FIFO full
        TXFF OFFSET(5) NUMBITS(1) [],
        /// UART busy transmitting
        BUSY OFFSET(3) NUMBITS(1) []
    ],
    LineControl [
        /// Enable FIFOs
        FEN OFFSET(4) NUMBITS(1) [],
        /// Word length
        WLEN OFFSET(5) NUMBITS(2) [
            FiveBit = 0b00,
            SixBit = 0b01,
            SevenBit = 0b10,
            EightBit = 0b11
        ]
    ],
    Control [
        UARTEN OFFSET(0) NUMBITS(1) [],
        TXE OFFSET(8) NUMBITS(1) [],
        RXE OFFSET(9) NUMBITS(1) []
    ]
];

register_structs! {
    pub Pl011Regs {
        (0x00 => dr: ReadWrite<u32>),
        (0x04 => rsr_ecr: ReadWrite<u32>),
        (0x08 => _reserved0),
        (0x18 => fr: ReadOnly<u32, Flag::Register>),
        (0x1c => _reserved1),
        (0x24 => ibrd: ReadWrite<u32>),
        (0x28 => fbrd: ReadWrite<u32>),
        (0x2c => lcr_h: ReadWrite<u32, LineControl::Register>),
        (0x30 => cr: ReadWrite<u32, Control::Register>),
        (0x34 => _reserved2),
        (0x44 => icr: WriteOnly<u32>),
        (0x48 => @END),
    }
}

/// ARM PL011 UART used as the boot console
pub struct Pl011 {
    regs: &'static Pl011Regs,
    clock: u32,
    baud: u32,
    ready: bool,
}

// Only reachable through `&mut Pl011`, so it may move to the logger's lock.
unsafe impl Send for Pl011 {}

impl Pl011 {
    /// # Safety
    ///
    /// `base` must be the address of a PL011 register block.
    pub unsafe fn new(base: usize, clock: u32, baud: u32) -> Self {
        Self {
            regs: &*(base as *const Pl011Regs),
            clock,
            baud,
            ready: false,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn putc(&mut self, c: u8) {
        if !self.ready {
            return;
        }
        while self.regs.fr.is_set(Flag::TXFF) {
            core::hint::spin_loop();
        }
        self.regs.dr.set(c as u32);
    }

    pub fn flush(&self) {
        if !self.ready {
            return;
        }
        while self.regs.fr.is_set(Flag::BUSY) {
            core::hint::spin_loop();
        }
    }
}

impl Console for Pl011 {
    fn init(&mut self) -> Result<(), DriverError> {
        if self.baud == 0 || self.clock == 0 {
            return Err(DriverError::Unsupported);
        }
        // 64ths of the baud rate divisor
        let div = (self.clock as u64 * 4) / self.baud as u64;
        if div >> 6 == 0 || div >> 6 > 0xffff {
            return Err(DriverError::Unsupported);
        }

        self.regs.cr.set(0);
        self.regs.ibrd.set((div >> 6) as u32);
        self.regs.fbrd.set((div & 0x3f) as u32);
        self.regs
            .lcr_h
            .write(LineControl::WLEN::EightBit + LineControl::FEN::SET);
        self.regs.rsr_ecr.set(0);
        self.regs.icr.set(0x7ff);
        self.regs
            .cr
            .write(Control::UARTEN::SET + Control::TXE::SET + Control::RXE::SET);
        self.ready = true;
        Ok(())
    }
}

impl fmt::Write for Pl011 {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for b in s.bytes() {
            if b == b'\n' {
                self.putc(b'\r');
            }
            self.putc(b);
        }
        Ok(())
    }
}
