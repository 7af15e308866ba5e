#[cfg(not(all(feature = "arm64", target_arch = "aarch64")))]
use core::sync::atomic::{fence, Ordering};

/// Full system data synchronization barrier (`dsb sy`).
#[inline(always)]
pub fn dsb_sy() {
    #[cfg(all(feature = "arm64", target_arch = "aarch64"))]
    aarch64_cpu::asm::barrier::dsb(aarch64_cpu::asm::barrier::SY);
    #[cfg(not(all(feature = "arm64", target_arch = "aarch64")))]
    fence(Ordering::SeqCst);
}

/// Inner shareable data synchronization barrier (`dsb ish`).
#[inline(always)]
pub fn dsb_ish() {
    #[cfg(all(feature = "arm64", target_arch = "aarch64"))]
    aarch64_cpu::asm::barrier::dsb(aarch64_cpu::asm::barrier::ISH);
    #[cfg(not(all(feature = "arm64", target_arch = "aarch64")))]
    fence(Ordering::SeqCst);
}
