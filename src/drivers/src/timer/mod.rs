mod arm_sys_timer;

pub use arm_sys_timer::ArmSysTimer;

/// The system counter and its memory-mapped timer frames.
pub trait SysTimer {
    /// Open the non-secure timer frame to non-secure software.
    fn configure_secure_access(&mut self);
    /// Counter frequency in Hz.
    fn frequency(&self) -> u64;
    /// Program `freq` into the processor's counter frequency register.
    fn write_frequency_register(&mut self, freq: u64);
}
