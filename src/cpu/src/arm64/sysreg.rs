//! System register accessors

#[cfg(all(feature = "arm64", target_arch = "aarch64"))]
use aarch64_cpu::registers::{Readable, Writeable, CNTFRQ_EL0, CurrentEL, MPIDR_EL1};

/// Program the counter frequency seen by software at every exception level.
pub fn write_cntfrq_el0(freq: u64) {
    #[cfg(all(feature = "arm64", target_arch = "aarch64"))]
    CNTFRQ_EL0.set(freq);
    #[cfg(not(all(feature = "arm64", target_arch = "aarch64")))]
    let _ = freq;
}

/// Cluster number (affinity level 1) of the executing core.
pub fn cluster_id() -> usize {
    #[cfg(all(feature = "arm64", target_arch = "aarch64"))]
    return ((MPIDR_EL1.get() >> 8) & 0xff) as usize;
    #[cfg(not(all(feature = "arm64", target_arch = "aarch64")))]
    0
}

/// Current exception level, 0..=3.
pub fn current_el() -> u8 {
    #[cfg(all(feature = "arm64", target_arch = "aarch64"))]
    return ((CurrentEL.get() >> 2) & 0x3) as u8;
    #[cfg(not(all(feature = "arm64", target_arch = "aarch64")))]
    3
}
