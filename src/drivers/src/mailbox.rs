use core::{mem::align_of, ptr::write_volatile};
use log::trace;

/// Location secondary processors poll for their entry address.
pub trait Mailbox {
    fn program(&mut self, entry: u64);
}

/// The trusted mailbox in shared SRAM: one naturally aligned 64-bit entry
/// address, read by secondaries in their holding pen.
pub struct TrustedMailbox {
    base: usize,
}

impl TrustedMailbox {
    /// Returns `None` if `base` is not 8-byte aligned.
    ///
    /// # Safety
    ///
    /// `base` must be writable memory reserved for the mailbox.
    pub unsafe fn new(base: usize) -> Option<Self> {
        if base % align_of::<u64>() != 0 {
            return None;
        }
        Some(Self { base })
    }
}

impl Mailbox for TrustedMailbox {
    fn program(&mut self, entry: u64) {
        trace!("mailbox {:#x} <- {entry:#x}", self.base);
        unsafe { write_volatile(self.base as *mut u64, entry) };
    }
}
