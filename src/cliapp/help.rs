//! # Help Rendering
//!
//! Composes the help block for an [`Application`]: an optional star banner, the
//! application description, then every registered command description reshaped
//! to fit the terminal.
//!
//! ## Layout cache
//!
//! The first call to [`Application::reshape_text`] computes a [`Layout`]:
//!
//! ```text
//! margin    = min(longest command name, max_terminal_width - 30)
//! delimiter = " - "
//! threshold = max_terminal_width - margin - width(delimiter)
//! ```
//!
//! The layout is stored once and never recomputed. Commands registered after
//! the first render do not move the margin. `margin` may be negative when the
//! terminal is narrower than 30 columns; it is not clamped.
//!
//! ## Reshaping
//!
//! - Descriptions narrower than `threshold` get a fixed 30-column indent, which
//!   is independent of `margin`.
//! - Wider descriptions are packed greedily into lines that start with
//!   `threshold` spaces. The line being packed when the words run out is not
//!   emitted.

use crate::app::Application;
use crate::error::Result;
use log::trace;
use std::io::Write;
use unicode_width::UnicodeWidthStr;

/// Separator between a command name column and its description.
pub const DELIMITER: &str = " - ";

/// Columns kept free of the command-name margin.
const RESERVED_COLUMNS: isize = 30;

/// Left indent given to descriptions that fit on one line.
const SHORT_DESCRIPTION_INDENT: isize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub margin: isize,
    pub delimiter: &'static str,
}

impl Application {
    fn layout(&self) -> &Layout {
        self.layout.get_or_init(|| {
            let longest = self.registry.longest_name_width() as isize;
            let margin = longest.min(self.max_terminal_width as isize - RESERVED_COLUMNS);
            trace!(
                "help layout computed: margin={} delimiter={:?}",
                margin,
                DELIMITER
            );
            Layout {
                margin,
                delimiter: DELIMITER,
            }
        })
    }

    /// Cached margin, `None` until the first reshape.
    pub fn margin(&self) -> Option<isize> {
        self.layout.get().map(|layout| layout.margin)
    }

    /// Cached delimiter, `None` until the first reshape.
    pub fn delimiter(&self) -> Option<&'static str> {
        self.layout.get().map(|layout| layout.delimiter)
    }

    /// Content width available to one line of description text.
    fn threshold(&self, layout: &Layout) -> isize {
        self.max_terminal_width as isize - layout.margin - layout.delimiter.width() as isize
    }

    /// Fits a single command description to the terminal.
    pub fn reshape_text(&self, text: &str) -> String {
        let threshold = self.threshold(self.layout());
        let text = text.trim_matches(' ');

        if (text.width() as isize) < threshold {
            return pad_spaces(SHORT_DESCRIPTION_INDENT) + text;
        }

        let indent = pad_spaces(threshold);
        let mut lines = Vec::new();
        let mut line = indent.clone();
        let mut content_width: isize = 0;

        for word in text.split(' ') {
            let word_width = word.width() as isize;
            if content_width + word_width < threshold {
                line.push_str(word);
                line.push(' ');
                content_width += word_width + 1;
            } else {
                lines.push(line.trim_end_matches(' ').to_string());
                line = format!("{indent}{word} ");
                content_width = word_width + 1;
            }
        }
        // `line` still holds the last partial line; it is dropped.

        lines.join("\n")
    }

    /// Centers `text` within the terminal width. Text wider than the terminal is
    /// returned as-is; an odd leftover column is dropped.
    pub fn center_pad_text(&self, text: &str) -> String {
        let width = text.width();
        if width > self.max_terminal_width {
            return text.to_string();
        }
        let padding = pad_spaces(((self.max_terminal_width - width) / 2) as isize);
        format!("{padding}{text}{padding}")
    }

    /// The exact block [`show_help`](Self::show_help) prints.
    pub fn help_text(&self) -> String {
        let mut output = String::new();

        if !self.name.is_empty() {
            let stars = pad_stars(self.max_terminal_width as isize);
            output.push_str(&stars);
            output.push_str("\n\n");
            output.push_str("\n\n");
            output.push_str(&stars);
            output.push_str("\n\n");
        }

        if !self.description.is_empty() {
            output.push_str(&self.description);
            output.push_str("\n\n");
        }

        output.push_str(&self.command_help());
        output
    }

    fn command_help(&self) -> String {
        self.registry
            .iter()
            .map(|entry| self.reshape_text(&entry.description))
            .collect()
    }

    pub fn write_help<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(self.help_text().as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Prints the help block to stdout.
    pub fn show_help(&self) {
        print!("{}", self.help_text());
    }
}

fn pad_spaces(count: isize) -> String {
    pad_char(' ', count)
}

fn pad_stars(count: isize) -> String {
    pad_char('*', count)
}

/// `count` copies of `ch`; non-positive counts yield an empty string.
fn pad_char(ch: char, count: isize) -> String {
    let count = usize::try_from(count).unwrap_or(0);
    ch.to_string().repeat(count)
}
