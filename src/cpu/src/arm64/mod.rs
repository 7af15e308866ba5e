//! AArch64 primitives the boot stage needs.
//!
//! With the `arm64` feature on an AArch64 target these are the real
//! instructions. Otherwise (host builds, unit tests) barriers fall back to
//! compiler/CPU fences and the event instructions are no-ops.

pub mod barrier;
pub mod sysreg;

/// Park the core forever. Used as the terminal trap after a fatal error.
pub fn hang() -> ! {
    loop {
        wfe();
    }
}

/// Wait for event.
#[inline(always)]
pub fn wfe() {
    #[cfg(all(feature = "arm64", target_arch = "aarch64"))]
    aarch64_cpu::asm::wfe();
    #[cfg(not(all(feature = "arm64", target_arch = "aarch64")))]
    core::hint::spin_loop();
}

/// Send event: wakes every core sitting in `wfe`.
#[inline(always)]
pub fn sev() {
    #[cfg(all(feature = "arm64", target_arch = "aarch64"))]
    unsafe {
        core::arch::asm!("sev", options(nomem, nostack, preserves_flags));
    }
}
