mod sp805;

pub use sp805::Sp805;

/// A watchdog that resets the system unless disarmed in time.
pub trait Watchdog {
    /// Start counting down from `load` ticks.
    fn arm(&mut self, load: u32);
    /// Stop the countdown.
    fn disarm(&mut self);
}
