use console::Term;
use serde::{Deserialize, Serialize};

/// Column budget used when none is given and stdout is not a terminal.
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Settings an [`Application`](crate::app::Application) is built from.
///
/// Serde-derived so a host can embed it in its own configuration. Nothing here
/// reads files or environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Terminal columns available to the help renderer
    #[serde(default = "default_terminal_width")]
    pub max_terminal_width: usize,
}

fn default_terminal_width() -> usize {
    DEFAULT_TERMINAL_WIDTH
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            max_terminal_width: DEFAULT_TERMINAL_WIDTH,
        }
    }
}

impl AppConfig {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        max_terminal_width: usize,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            max_terminal_width,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_max_terminal_width(mut self, width: usize) -> Self {
        self.max_terminal_width = width;
        self
    }

    /// Width of the attached terminal, or [`DEFAULT_TERMINAL_WIDTH`] when stdout is not a tty.
    pub fn detect_terminal_width() -> usize {
        let term = Term::stdout();
        if !term.is_term() {
            return DEFAULT_TERMINAL_WIDTH;
        }
        match term.size_checked() {
            Some((_rows, cols)) if cols > 0 => cols as usize,
            _ => DEFAULT_TERMINAL_WIDTH,
        }
    }
}
