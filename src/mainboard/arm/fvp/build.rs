use std::{env, fs, path::PathBuf};

/* Must agree with bl1_soc::arm::def */
const ROM_BASE: u64 = 0x0000_0000;
const ROM_SIZE: u64 = 0x0400_0000;
const BL_RAM_END: u64 = 0x0404_0000;
const BL1_RW_SIZE: u64 = 0xb000;
const ROMLIB_RO_SIZE: u64 = 0x1000;
const ROMLIB_RW_SIZE: u64 = 0xe000;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=link.ld");
    println!("cargo:rerun-if-changed=src/start.S");
    println!("cargo:rerun-if-env-changed=EL3_PAYLOAD_BASE");

    let target = env::var("TARGET").unwrap_or_default();
    if !target.ends_with("-none") {
        return;
    }

    let romlib = env::var_os("CARGO_FEATURE_USE_ROMLIB").is_some();
    let (ro_reserved, rw_reserved) = if romlib {
        (ROMLIB_RO_SIZE, ROMLIB_RW_SIZE)
    } else {
        (0, 0)
    };
    let rw_limit = BL_RAM_END - rw_reserved;
    let memory = format!(
        concat!(
            "MEMORY {{\n",
            "  ROM (rx) : ORIGIN = {:#x}, LENGTH = {:#x}\n",
            "  RAM (rw) : ORIGIN = {:#x}, LENGTH = {:#x}\n",
            "}}\n",
        ),
        ROM_BASE,
        ROM_SIZE - ro_reserved,
        rw_limit - BL1_RW_SIZE,
        BL1_RW_SIZE,
    );

    let out = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    fs::write(out.join("memory.ld"), memory).expect("cannot write memory.ld");
    let manifest = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("no manifest dir"));

    println!("cargo:rustc-link-search={}", out.display());
    println!("cargo:rustc-link-arg=-T{}", manifest.join("link.ld").display());
    println!("cargo:rustc-link-arg=--gc-sections");
}
