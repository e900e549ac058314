//! Flags accepted anywhere on the command line.

use std::path::PathBuf;

use clap::{ArgAction, Args, builder::FalseyValueParser};

#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Log more: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase log verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Only errors are printed and prompts are skipped.
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Print errors only; never prompt"
    )]
    pub quiet: bool,

    /// Plain output.  `NO_COLOR` (<https://no-color.org>) has the same effect
    /// when set to anything but an empty or falsey value (`0`, `false`, `no`).
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Read settings from this TOML file instead of the per-user one.
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        env = "APIFORGE_CONFIG",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,
}
