use std::error::Error;
use std::io::IsTerminal;

use owo_colors::OwoColorize;

use super::code::ErrorCode;
use super::VfmError;

/// Formats VfmError for CLI output
pub struct ErrorFormatter {
    verbose: bool,
    use_color: bool,
}

impl ErrorFormatter {
    /// Creates a new ErrorFormatter with default TTY detection
    pub fn new(verbose: bool) -> Self {
        Self::with_color_detection(verbose, Self::default_should_use_color)
    }

    /// Creates a new ErrorFormatter with injectable TTY detection for testing
    pub fn with_color_detection(verbose: bool, detect_color: fn() -> bool) -> Self {
        let use_color = detect_color();
        Self { verbose, use_color }
    }

    fn default_should_use_color() -> bool {
        std::io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err()
    }

    /// Formats the error for display
    pub fn format(&self, error: &VfmError) -> String {
        let plain = if self.verbose {
            self.format_verbose_plain(error)
        } else {
            format!("error[{}]: {}", error.code().as_str(), error)
        };

        if self.use_color {
            self.apply_color(&plain, error.code())
        } else {
            plain
        }
    }

    fn format_verbose_plain(&self, error: &VfmError) -> String {
        let code = error.code();
        let mut output = format!("error[{}]: {}", code.as_str(), error);

        output.push_str("\n  |");
        output.push_str(&format!("\n  | Cause: {}", code.cause()));

        output.push_str("\n  |");
        output.push_str("\n  | Remediation:");
        for line in code.remediation().lines() {
            output.push_str(&format!("\n  |   {}", line));
        }

        let source_chain = self.format_source_chain(error);
        if !source_chain.is_empty() {
            output.push_str("\n  |");
            output.push_str(&format!("\n  | Source chain:\n{}", source_chain));
        }

        output.push_str("\n  |");
        output.push_str("\n  = note: use `vfm --help` for more information");

        output
    }

    fn format_source_chain(&self, error: &VfmError) -> String {
        let mut chain = Vec::new();
        let mut current: Option<&(dyn Error + 'static)> = error.source();

        while let Some(err) = current {
            chain.push(format!("  |   - {}", err));
            current = err.source();
        }

        chain.join("\n")
    }

    fn apply_color(&self, text: &str, code: ErrorCode) -> String {
        let header = format!("error[{}]", code.as_str());
        match text.strip_prefix(&header) {
            Some(rest) => format!("{}{}", header.red().bold(), rest),
            None => text.to_string(),
        }
    }
}
