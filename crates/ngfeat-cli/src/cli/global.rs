//! Flags accepted by every `ngfeat` command.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

/// Flattened into [`super::Cli`]; every flag is `global`, so it may appear
/// before or after the command.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Log more: `-v` reports each scaffold step, `-vv` every file written,
    /// `-vvv` everything.
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Log scaffold steps (-v), written files (-vv), everything (-vvv)"
    )]
    pub verbose: u8,

    /// Print errors only. The confirmation line and the report are skipped;
    /// `--output-format json` output is still written.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// No ANSI colours in messages or errors. Also set by `NO_COLOR`.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Extra configuration file, applied over `.ngfeat.toml` and the global
    /// file. It must exist.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How results are printed. `auto` uses `output.format` from the
    /// configuration, then whether stdout is a terminal.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,

    /// Append logs, without colours, to FILE as well as stderr.
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

/// Rendering of messages and scaffold reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Decide from configuration and terminal.
    #[default]
    Auto,
    /// Coloured confirmation with ✓ and the list of written files.
    Human,
    /// The same lines without colour or symbols.
    Plain,
    /// One JSON document describing the written (or planned) tree.
    Json,
}
