//! Terminal colours and screen control.

use colored::Colorize;

/// ANSI sequence that clears the screen and moves the cursor home.
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Applies colours when enabled, otherwise passes text through unchanged.
#[derive(Clone, Copy, Debug)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Colour unless disabled here or through the `NO_COLOR` convention.
    pub fn from_env(enabled: bool) -> Self {
        Self::new(enabled && std::env::var_os("NO_COLOR").is_none())
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint(text, |t| t.cyan().bold().to_string())
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green().to_string())
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, |t| t.red().to_string())
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed().to_string())
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> String) -> String {
        if self.enabled {
            style(text)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_painter_is_plain() {
        let painter = Painter::new(false);
        assert_eq!(painter.error("Invalid index."), "Invalid index.");
        assert_eq!(painter.heading("Menu:"), "Menu:");
    }
}
