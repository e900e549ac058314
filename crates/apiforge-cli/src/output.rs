//! Terminal output: status lines on stdout, warnings and spinners on stderr.

use std::io::{self, IsTerminal};
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{AnsiColors, OwoColorize};

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

const SPINNER_TICK: Duration = Duration::from_millis(100);

/// Kinds of status line, each with its own marker and colour.
#[derive(Debug, Clone, Copy)]
enum Tone {
    Success,
    Warning,
    Info,
}

impl Tone {
    fn marker(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Warning => "\u{26a0}",
            Self::Info => "\u{2139}",
        }
    }

    fn color(self) -> AnsiColors {
        match self {
            Self::Success => AnsiColors::Green,
            Self::Warning => AnsiColors::Yellow,
            Self::Info => AnsiColors::Blue,
        }
    }
}

/// Writes user-facing output, honouring `--quiet` and `--no-color`.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    stdout: Term,
    stderr: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            stdout: Term::stdout(),
            stderr: Term::stderr(),
        }
    }

    /// Unadorned line.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.stdout.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(&self.stdout, Tone::Success, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(&self.stdout, Tone::Info, msg)
    }

    /// Goes to stderr so it survives a redirected stdout.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status(&self.stderr, Tone::Warning, msg)
    }

    /// Bold cyan heading.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.no_color {
            self.stdout.write_line(text)
        } else {
            self.stdout.write_line(&text.cyan().bold().to_string())
        }
    }

    /// Spinner on stderr.  Hidden when quiet or when stderr is not a
    /// terminal, so piped output stays clean.
    pub fn spinner(&self, msg: impl Into<String>) -> ProgressBar {
        if self.quiet || !io::stderr().is_terminal() {
            return ProgressBar::hidden();
        }

        let template = if self.no_color {
            "{spinner} {msg}"
        } else {
            "{spinner:.cyan} {msg}"
        };
        let style = ProgressStyle::with_template(template)
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let bar = ProgressBar::new_spinner()
            .with_style(style)
            .with_message(msg.into());
        bar.enable_steady_tick(SPINNER_TICK);
        bar
    }

    fn status(&self, term: &Term, tone: Tone, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        term.write_line(&self.render(tone, msg))
    }

    fn render(&self, tone: Tone, msg: &str) -> String {
        if self.no_color {
            format!("{} {msg}", tone.marker())
        } else {
            format!(
                "{} {}",
                tone.marker().color(tone.color()).bold(),
                msg.color(tone.color())
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            quiet,
            no_color,
            ..GlobalArgs::default()
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn plain_lines_carry_only_the_marker() {
        let out = manager(false, true);
        assert_eq!(out.render(Tone::Success, "done"), "\u{2713} done");
        assert_eq!(out.render(Tone::Warning, "careful"), "\u{26a0} careful");
    }

    #[test]
    fn colored_lines_contain_escape_codes() {
        let out = manager(false, false);
        let line = out.render(Tone::Info, "hello");
        assert!(line.contains('\u{1b}'));
        assert!(line.contains("hello"));
    }

    #[test]
    fn config_can_disable_color() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        let out = OutputManager::new(&GlobalArgs::default(), &config);
        assert!(!out.render(Tone::Info, "x").contains('\u{1b}'));
    }

    #[test]
    fn quiet_writes_nothing() {
        let out = manager(true, true);
        assert!(out.print("hello").is_ok());
        assert!(out.warning("careful").is_ok());
        assert!(out.spinner("installing").is_hidden());
    }
}
