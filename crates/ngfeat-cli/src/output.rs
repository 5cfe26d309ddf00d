//! Output management and formatting.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::CliResult;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let stdout_is_tty = io::stdout().is_terminal();
        let resolved_format = resolve_format(args.output_format, &config.output.format, stdout_is_tty);

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || !stdout_is_tty
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>` in human mode, the bare message otherwise.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = match (self.resolved_format, self.no_color) {
            (OutputFormat::Human, false) => {
                format!("{} {}", "\u{2713}".green().bold(), msg.green())
            }
            (OutputFormat::Human, true) => format!("\u{2713} {msg}"), // ✓
            _ => msg.to_owned(),
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty JSON document on stdout. Written even in quiet mode.
    pub fn json<T: Serialize>(&self, value: &T) -> CliResult<()> {
        let text = serde_json::to_string_pretty(value)?;
        self.term.write_line(&text)?;
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    pub fn is_json(&self) -> bool {
        self.format() == OutputFormat::Json
    }
}

/// Flag wins; `auto` falls back to the configured format, then to TTY
/// detection.
fn resolve_format(flag: OutputFormat, configured: &str, stdout_is_tty: bool) -> OutputFormat {
    let detected = if stdout_is_tty {
        OutputFormat::Human
    } else {
        OutputFormat::Plain
    };

    match flag {
        OutputFormat::Auto => match OutputFormat::from_str(configured, true) {
            Ok(OutputFormat::Auto) | Err(_) => detected,
            Ok(format) => format,
        },
        explicit => explicit,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("not encodable"))
        }
    }

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            quiet,
            no_color,
            output_format: OutputFormat::Plain, // avoid TTY detection in tests
            ..GlobalArgs::default()
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true);
        assert!(out.print("hello").is_ok());
        assert!(out.quiet);
    }

    #[test]
    fn plain_format_never_colors() {
        assert!(make_manager(false, false).no_color);
    }

    #[test]
    fn explicit_flag_wins() {
        assert_eq!(
            resolve_format(OutputFormat::Json, "plain", true),
            OutputFormat::Json
        );
    }

    #[test]
    fn auto_uses_configured_format() {
        assert_eq!(
            resolve_format(OutputFormat::Auto, "json", true),
            OutputFormat::Json
        );
        assert_eq!(
            resolve_format(OutputFormat::Auto, "HUMAN", false),
            OutputFormat::Human
        );
    }

    #[test]
    fn auto_with_unknown_config_detects_terminal() {
        assert_eq!(
            resolve_format(OutputFormat::Auto, "fancy", false),
            OutputFormat::Plain
        );
        assert_eq!(
            resolve_format(OutputFormat::Auto, "auto", true),
            OutputFormat::Human
        );
    }

    #[test]
    fn json_encoding_failure_exits_as_internal_error() {
        let err = make_manager(false, true).json(&Unencodable).unwrap_err();
        assert!(matches!(err, CliError::JsonEncode(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn format_accessor_returns_resolved() {
        let out = make_manager(false, false);
        assert_eq!(out.format(), OutputFormat::Plain);
        assert!(!out.is_json());
    }
}
