//! # Command Registry
//!
//! An ordered list of [`CommandEntry`] values. Insertion order is the only order:
//! dispatch scans front to back and help renders front to back.
//!
//! Names are not required to be unique. [`Registry::find`] returns the first
//! case-insensitive match, while [`Registry::as_map`] collapses duplicates with
//! the *last* entry winning, since it is built by a forward pass that overwrites
//! on insert. Nothing is deduplicated at append time.

use crate::error::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use unicode_width::UnicodeWidthStr;

/// Capacity reserved by the first append into an empty registry.
const INITIAL_CAPACITY: usize = 5;

/// An opaque argument forwarded verbatim from the caller to a handler.
pub type Arg = Value;

/// A command handler. Receives the caller's arguments and returns `Ok(())` or an error.
pub type Handler = Arc<dyn Fn(&[Arg]) -> Result<()> + Send + Sync>;

/// A registered (name, description, handler) triple.
#[derive(Clone)]
pub struct CommandEntry {
    pub name: String,
    pub description: String,
    pub handler: Option<Handler>,
}

impl CommandEntry {
    pub fn new<F>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&[Arg]) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: String::new(),
            handler: Some(Arc::new(handler)),
        }
    }

    /// An entry with no handler. Only reachable through the unvalidated bulk `add` path.
    pub fn without_handler(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            handler: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Case-insensitive name comparison used for dispatch (Unicode case folding).
    pub fn matches(&self, name: &str) -> bool {
        unicase::eq(self.name.as_str(), name)
    }
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("handler", &self.handler.as_ref().map(|_| "Fn"))
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<CommandEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends entries to the end, preserving their order.
    pub fn append<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = CommandEntry>,
    {
        if self.entries.is_empty() {
            self.entries.reserve(INITIAL_CAPACITY);
        }
        self.entries.extend(entries);
    }

    /// Name-keyed view of the registry. Duplicate names collapse to the last appended entry.
    pub fn as_map(&self) -> HashMap<String, CommandEntry> {
        let mut map = HashMap::new();
        for entry in &self.entries {
            map.insert(entry.name.clone(), entry.clone());
        }
        map
    }

    /// First entry whose name matches `name` case-insensitively.
    pub fn find(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|entry| entry.matches(name))
    }

    /// Display width of the longest command name, 0 when empty.
    pub fn longest_name_width(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.name.width())
            .max()
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
