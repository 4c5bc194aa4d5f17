//! Color output support for terminal formatting

use nu_ansi_term::Color;

/// Color scheme for output highlighting
#[derive(Debug, Clone, Copy)]
pub struct Colorizer {
    /// Enable colors
    enabled: bool,
}

impl Colorizer {
    /// Create a new colorizer
    ///
    /// # Arguments
    /// * `enabled` - Enable color output
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Colorize text as success (green)
    pub fn success(&self, text: &str) -> String {
        self.paint(Color::Green, text)
    }

    /// Colorize text as error (red)
    pub fn error(&self, text: &str) -> String {
        self.paint(Color::Red, text)
    }

    /// Colorize a section heading (bold cyan)
    pub fn heading(&self, text: &str) -> String {
        if self.enabled {
            Color::Cyan.bold().paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn paint(&self, color: Color, text: &str) -> String {
        if self.enabled {
            color.paint(text).to_string()
        } else {
            text.to_string()
        }
    }
}
