//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use ngfeat_core::domain::ChildLayout;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "ngfeat",
    bin_name = "ngfeat",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold Angular feature folders",
    long_about = "ngfeat asks for a feature name and writes a data/ui/feature \
                  folder set with service, store, and component files. Nested \
                  features get a child folder registered in the parent's \
                  routes file.",
    after_help = "EXAMPLES:\n\
        \x20 ngfeat                                   # ask interactively\n\
        \x20 ngfeat new widgets\n\
        \x20 ngfeat new orders --nested --child list\n\
        \x20 ngfeat completions bash > /usr/share/bash-completion/completions/ngfeat",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute. Without one, `new` runs interactively.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a feature.
    #[command(
        visible_alias = "n",
        about = "Scaffold a feature",
        after_help = "EXAMPLES:\n\
            \x20 ngfeat new                              # ask for everything\n\
            \x20 ngfeat new widgets\n\
            \x20 ngfeat new orders --nested --child list\n\
            \x20 ngfeat new orders --nested --child list --layout under-feature --dry-run"
    )]
    New(NewArgs),

    /// Initialise an ngfeat configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 ngfeat init           # global config\n\
            \x20 ngfeat init --local   # .ngfeat.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 ngfeat completions bash > ~/.local/share/bash-completion/completions/ngfeat\n\
            \x20 ngfeat completions zsh  > ~/.zfunc/_ngfeat\n\
            \x20 ngfeat completions fish > ~/.config/fish/completions/ngfeat.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the ngfeat configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 ngfeat config get scaffold.layout\n\
            \x20 ngfeat config list\n\
            \x20 ngfeat config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `ngfeat new`.
#[derive(Debug, Clone, Default, Args)]
pub struct NewArgs {
    /// Feature (and folder) name. When omitted, all questions are asked.
    #[arg(value_name = "NAME", help = "Feature name (camelCase)")]
    pub name: Option<String>,

    /// Treat the feature as a parent with a routed child.
    #[arg(long = "nested", help = "Create a nested feature")]
    pub nested: bool,

    /// Child component of a nested feature.
    #[arg(
        long = "child",
        value_name = "NAME",
        requires = "nested",
        help = "Name of the child component"
    )]
    pub child: Option<String>,

    /// Where child folders go inside the parent.
    #[arg(long = "layout", value_enum, help = "Child folder layout")]
    pub layout: Option<LayoutArg>,

    /// Directory features are created in.
    #[arg(
        long = "app-root",
        value_name = "DIR",
        help = "Application root (default: src/app)"
    )]
    pub app_root: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

/// Child folder layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// `<parent>/<child>`
    Flat,
    /// `<parent>/feature/<child>`
    UnderFeature,
}

impl From<LayoutArg> for ChildLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Flat => ChildLayout::Flat,
            LayoutArg::UnderFeature => ChildLayout::UnderFeature,
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `ngfeat init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.ngfeat.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `ngfeat completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: clap_complete::Shell,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `ngfeat config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `scaffold.app_root`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the configuration file locations.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
