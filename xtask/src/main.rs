mod arm;
mod util;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::Verbosity;
use log::trace;

#[derive(Debug, Parser)]
#[command(author, version, about = "Build the first boot stage", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[clap(flatten)]
    env: Env,
    #[clap(flatten)]
    verbose: Verbosity,
}

#[derive(Clone, Copy, Debug, Subcommand)]
enum Commands {
    /// Build the board image
    Make,
    /// Disassemble the board image
    Asm,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum Board {
    /// Arm Fixed Virtual Platform (Base and Foundation models)
    Fvp,
}

#[derive(Clone, Debug, Args)]
struct Env {
    /// Board to build for
    #[arg(long, short, global = true, value_enum, default_value_t = Board::Fvp)]
    board: Board,
    /// Build in release mode
    #[arg(long, global = true)]
    release: bool,
    /// Board crate features, replacing the defaults
    #[arg(long, global = true, value_delimiter = ',')]
    features: Vec<String>,
    /// Boot an EL3 payload at this address instead of BL2
    #[arg(long, global = true, value_parser = parse_address)]
    el3_payload_base: Option<u64>,
}

fn parse_address(s: &str) -> Result<u64, String> {
    ::util::hexstr::parse_hex_u64(s).ok_or_else(|| format!("'{s}' is not a hex address"))
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();
    trace!("{cli:?}");

    match cli.env.board {
        Board::Fvp => arm::fvp::execute_command(&cli, cli.env.features.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn make_with_payload() {
        let cli = Cli::try_parse_from([
            "xtask",
            "make",
            "--release",
            "--features",
            "use-romlib,separate-code-and-rodata",
            "--el3-payload-base",
            "0x8000_0000",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Make));
        assert!(cli.env.release);
        assert_eq!(cli.env.board, Board::Fvp);
        assert_eq!(cli.env.features, ["use-romlib", "separate-code-and-rodata"]);
        assert_eq!(cli.env.el3_payload_base, Some(0x8000_0000));
    }

    #[test]
    fn bad_payload_address() {
        assert!(Cli::try_parse_from(["xtask", "make", "--el3-payload-base", "zz"]).is_err());
    }
}
