#![cfg_attr(not(test), no_std)]

//! Device interfaces used by the boot stage, and the MMIO drivers found on
//! Arm standard platforms.
//!
//! Every driver takes its base address at construction time. Constructors
//! are `unsafe`: the caller promises the address maps the device and that
//! nothing else drives it.

pub mod console;
pub mod cpu;
pub mod interconnect;
pub mod io;
pub mod mailbox;
pub mod timer;
pub mod watchdog;

pub use util::error::DriverError;
