use crate::util::{
    dist_dir, find_binutils_prefix_or_fail, get_cargo_cmd_in, objcopy, objdump, project_root,
};
use crate::{Cli, Commands, Env};
use log::{error, info, trace};
use std::process;

const ARCH: &str = "aarch64";
const TARGET: &str = "aarch64-unknown-none";

const BL1_ELF: &str = "bl1";
const BL1_BIN: &str = "bl1.bin";

pub(crate) fn execute_command(args: &Cli, features: Vec<String>) {
    match args.command {
        Commands::Make => {
            info!("building Arm FVP BL1");
            // Get binutils first so we can fail early
            let binutils_prefix = &find_binutils_prefix_or_fail(ARCH);
            xtask_build_fvp_bl1(&args.env, &features);
            objcopy(&args.env, binutils_prefix, TARGET, ARCH, BL1_ELF, BL1_BIN);

            println!("======= DONE =======");
            println!(
                "Output file: {:?}",
                dist_dir(&args.env, TARGET).join(BL1_BIN).into_os_string()
            );
        }
        Commands::Asm => {
            let binutils_prefix = &find_binutils_prefix_or_fail(ARCH);
            objdump(&args.env, binutils_prefix, TARGET, BL1_ELF);
        }
    }
}

fn xtask_build_fvp_bl1(env: &Env, features: &[String]) {
    trace!("build FVP BL1");
    let mut command = get_cargo_cmd_in(env, board_project_root(), "build");
    command.args(["--target", TARGET]);
    if !features.is_empty() {
        let command_line_features = features.join(",");
        trace!("append command line features: {command_line_features}");
        command.arg("--no-default-features");
        command.args(["--features", &command_line_features]);
    } else {
        trace!("no command line features appended");
    }
    match env.el3_payload_base {
        Some(base) => {
            info!("EL3 payload at {base:#x}");
            command.env("EL3_PAYLOAD_BASE", format!("{base:#x}"));
        }
        None => {
            command.env_remove("EL3_PAYLOAD_BASE");
        }
    }
    let status = command.status().unwrap();
    trace!("cargo returned {status}");
    if !status.success() {
        error!("cargo build failed with {status}");
        process::exit(1);
    }
}

fn board_project_root() -> std::path::PathBuf {
    project_root().join("src/mainboard/arm/fvp")
}
