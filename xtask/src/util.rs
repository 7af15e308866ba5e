use crate::Env;
use log::{error, info, trace};
use std::{
    path::{Path, PathBuf},
    process::{self, Command},
};

pub(crate) fn project_root() -> PathBuf {
    Path::new(&env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(1)
        .unwrap()
        .to_path_buf()
}

pub(crate) fn dist_dir(env: &Env, target: &str) -> PathBuf {
    let mut dir = project_root().join("target").join(target);
    dir = if env.release {
        dir.join("release")
    } else {
        dir.join("debug")
    };
    dir
}

pub(crate) fn get_cargo_cmd_in(env: &Env, root: PathBuf, command: &str) -> Command {
    let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
    trace!("cargo {command} in {}", root.display());
    let mut cmd = Command::new(cargo);
    cmd.current_dir(root);
    cmd.arg(command);
    if env.release {
        cmd.arg("--release");
    }
    cmd
}

fn tool_exists(name: &str) -> bool {
    Command::new(name)
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// cargo-binutils first, then a GNU cross toolchain for `arch`.
pub(crate) fn find_binutils_prefix(arch: &str) -> Option<String> {
    let candidates = [
        "rust-".to_string(),
        format!("{arch}-none-elf-"),
        format!("{arch}-linux-gnu-"),
    ];
    candidates
        .into_iter()
        .find(|prefix| tool_exists(&format!("{prefix}objcopy")))
}

pub(crate) fn find_binutils_prefix_or_fail(arch: &str) -> String {
    trace!("find binutils for {arch}");
    match find_binutils_prefix(arch) {
        Some(prefix) => {
            trace!("using {prefix}objcopy");
            prefix
        }
        None => {
            error!("no binutils found for {arch}, try: cargo install cargo-binutils");
            process::exit(1);
        }
    }
}

pub(crate) fn objcopy(env: &Env, prefix: &str, target: &str, arch: &str, elf: &str, bin: &str) {
    let dir = dist_dir(env, target);
    trace!("objcopy {elf} -> {bin} in {}", dir.display());
    let status = Command::new(format!("{prefix}objcopy"))
        .current_dir(&dir)
        .arg(elf)
        .arg(format!("--binary-architecture={arch}"))
        .args(["--strip-all", "-O", "binary", bin])
        .status()
        .unwrap();
    if !status.success() {
        error!("objcopy failed with {status}");
        process::exit(1);
    }
    info!("wrote {}", dir.join(bin).display());
}

pub(crate) fn objdump(env: &Env, prefix: &str, target: &str, elf: &str) {
    let status = Command::new(format!("{prefix}objdump"))
        .current_dir(dist_dir(env, target))
        .args(["-d", elf])
        .status()
        .unwrap();
    if !status.success() {
        error!("objdump failed with {status}");
        process::exit(1);
    }
}
