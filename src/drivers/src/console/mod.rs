mod pl011;

pub use pl011::Pl011;

use crate::DriverError;

/// Early diagnostic console.
pub trait Console {
    /// Bring the console up. Output written before this is lost.
    fn init(&mut self) -> Result<(), DriverError>;
}
