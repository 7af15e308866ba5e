mod cci;

pub use cci::Cci;

use crate::DriverError;

/// Cache coherent interconnect between processor clusters.
///
/// Called on the boot processor before any other processor runs, so no
/// locking is needed.
pub trait Interconnect {
    /// Prepare the interconnect for the cluster the boot processor is in.
    fn init_for_cluster(&mut self) -> Result<(), DriverError>;
    /// Let the executing processor's cluster take part in coherency. Must
    /// complete before translation tables in shared memory are trusted.
    fn enable_coherency_for_current_processor(&mut self) -> Result<(), DriverError>;
}
