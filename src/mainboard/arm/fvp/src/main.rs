#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]

mod ffi;
mod fvp;
#[cfg_attr(test, path = "layout_fake.rs")]
mod layout;
mod logger;

use core::panic::PanicInfo;

use bl1_cpu::arm64::hang;
use log::error;

#[cfg(all(target_arch = "aarch64", not(test)))]
core::arch::global_asm!(
    include_str!("start.S"),
    MAILBOX = const bl1_soc::arm::def::PLAT_ARM_TRUSTED_MAILBOX_BASE,
);

#[cfg(not(test))]
#[no_mangle]
extern "C" fn bl1_main() -> ! {
    let Some(mut fvp) = fvp::Fvp::new(bl1_soc::arm::BUILD_CONFIG) else {
        hang()
    };
    let outcome = bl1::run(&mut fvp);
    log::info!("BL1: booting {}", outcome.decision);
    unsafe { ffi::bl1_run_next_image(outcome.decision.image_id().0, &outcome.entry_point) }
}

#[cfg_attr(not(test), panic_handler)]
fn panic(info: &PanicInfo) -> ! {
    if let Some(location) = info.location() {
        error!("panic in '{}' line {}", location.file(), location.line());
    } else {
        error!("panic at unknown location");
    }
    hang()
}
