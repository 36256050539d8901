//! Console colors for progress output.
//!
//! Colors are only emitted when stdout is a terminal and `NO_COLOR` is not set,
//! so redirected output and test captures stay plain.

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

/// Styles progress lines for the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Colors on for an interactive stdout without `NO_COLOR`.
    pub fn detect() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::new(!no_color && atty::is(atty::Stream::Stdout))
    }

    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn success_text(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    pub fn warning_text(&self, text: &str) -> String {
        self.paint(YELLOW, text)
    }

    pub fn error_text(&self, text: &str) -> String {
        self.paint(RED, text)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }
}
