//! # Application
//!
//! Owns the configuration and the [`Registry`], and provides registration and
//! dispatch on top of it. Help rendering lives in [`crate::help`].
//!
//! ## Registration paths
//!
//! - [`Application::add_option`] validates: the name must be non-empty and the
//!   handler present.
//! - [`Application::add`] is a bulk passthrough with no validation, so entries
//!   with an empty name or no handler get in this way.
//!
//! ## Dispatch
//!
//! [`Application::run`] invokes exactly one handler (the first case-insensitive
//! match) and hands back whatever it returned. Handler errors are never wrapped.

use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::help::Layout;
use crate::registry::{Arg, CommandEntry, Handler, Registry};
use log::{debug, warn};
use once_cell::unsync::OnceCell;
use std::sync::Arc;

#[derive(Debug)]
pub struct Application {
    pub name: String,
    pub description: String,
    pub(crate) max_terminal_width: usize,
    pub(crate) registry: Registry,
    /// Filled on the first help render and never invalidated.
    pub(crate) layout: OnceCell<Layout>,
}

impl Application {
    pub fn new(config: AppConfig) -> Self {
        Self {
            name: config.name,
            description: config.description,
            max_terminal_width: config.max_terminal_width,
            registry: Registry::default(),
            layout: OnceCell::new(),
        }
    }

    pub fn with_settings(
        name: impl Into<String>,
        description: impl Into<String>,
        max_terminal_width: usize,
    ) -> Self {
        Self::new(AppConfig::new(name, description, max_terminal_width))
    }

    pub fn max_terminal_width(&self) -> usize {
        self.max_terminal_width
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Appends entries as-is. No validation.
    pub fn add<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = CommandEntry>,
    {
        let before = self.registry.len();
        self.registry.append(entries);
        debug!(
            "added {} command(s), registry now holds {}",
            self.registry.len() - before,
            self.registry.len()
        );
    }

    /// Registers `cmd` with an empty description.
    pub fn add_option<F>(&mut self, cmd: &str, handler: Option<F>) -> Result<()>
    where
        F: Fn(&[Arg]) -> Result<()> + Send + Sync + 'static,
    {
        let handler = handler.map(|f| Arc::new(f) as Handler);
        self.add_handler(cmd, handler)
    }

    /// Like [`add_option`](Self::add_option) for an already shared handler.
    pub fn add_handler(&mut self, cmd: &str, handler: Option<Handler>) -> Result<()> {
        if cmd.is_empty() {
            return Err(CliError::InvalidArgument("no command name was given".into()));
        }
        let Some(handler) = handler else {
            return Err(CliError::InvalidArgument("no function was given".into()));
        };

        self.registry.append([CommandEntry {
            name: cmd.to_string(),
            description: String::new(),
            handler: Some(handler),
        }]);
        debug!("registered command '{}'", cmd);
        Ok(())
    }

    /// Dispatches to the first entry whose name matches `cmd` case-insensitively.
    pub fn run(&self, cmd: &str, args: &[Arg]) -> Result<()> {
        let Some(entry) = self.registry.find(cmd) else {
            warn!("no command matches '{}'", cmd);
            return Err(CliError::NotFound(cmd.to_string()));
        };
        debug!("dispatching '{}' to '{}'", cmd, entry.name);

        match &entry.handler {
            Some(handler) => handler(args),
            None => Err(CliError::MissingHandler(entry.name.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn app() -> Application {
        Application::with_settings("tool", "", 80)
    }

    fn counting(counter: &Arc<AtomicUsize>) -> impl Fn(&[Arg]) -> Result<()> + Send + Sync {
        let counter = Arc::clone(counter);
        move |_: &[Arg]| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn run_is_case_insensitive() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut app = app();
        app.add_option("Deploy", Some(counting(&hits))).unwrap();

        app.run("Deploy", &[]).unwrap();
        app.run("deploy", &[]).unwrap();
        app.run("DEPLOY", &[]).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn run_folds_unicode_case() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut app = app();
        app.add_option("Σ", Some(counting(&hits))).unwrap();

        app.run("ς", &[]).unwrap();
        app.run("σ", &[]).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn run_invokes_first_match_only() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let mut app = app();
        app.add_option("go", Some(counting(&first))).unwrap();
        app.add_option("GO", Some(counting(&second))).unwrap();

        app.run("Go", &[]).unwrap();
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn run_forwards_arguments_verbatim() {
        let seen: Arc<Mutex<Vec<Arg>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut app = app();
        app.add_option(
            "echo",
            Some(move |args: &[Arg]| {
                sink.lock().unwrap().extend_from_slice(args);
                Ok(())
            }),
        )
        .unwrap();

        let args = vec![json!("a"), json!(2), json!({"k": true}), json!(null)];
        app.run("echo", &args).unwrap();
        assert_eq!(*seen.lock().unwrap(), args);
    }

    #[test]
    fn run_unknown_command_is_not_found() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut app = app();
        app.add_option("build", Some(counting(&hits))).unwrap();

        let err = app.run("bulid", &[]).unwrap_err();
        assert!(matches!(&err, CliError::NotFound(name) if name == "bulid"));
        assert!(err.to_string().contains("bulid"));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn run_on_empty_registry_is_not_found() {
        let err = app().run("anything", &[]).unwrap_err();
        assert!(matches!(err, CliError::NotFound(_)));
    }

    #[test]
    fn run_passes_handler_error_through_unwrapped() {
        let mut app = app();
        app.add_option(
            "fail",
            Some(|_: &[Arg]| Err(CliError::InvalidArgument("bad input".into()))),
        )
        .unwrap();
        app.add_option("boom", Some(|_: &[Arg]| Err(CliError::handler("kaboom"))))
            .unwrap();

        let err = app.run("fail", &[]).unwrap_err();
        assert!(matches!(&err, CliError::InvalidArgument(msg) if msg == "bad input"));

        let err = app.run("boom", &[]).unwrap_err();
        assert!(matches!(err, CliError::Handler(_)));
        assert_eq!(err.to_string(), "kaboom");
    }

    #[test]
    fn add_option_rejects_empty_name() {
        let mut app = app();
        let err = app.add_option("", Some(|_: &[Arg]| Ok(()))).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "no command name was given");
        assert_eq!(app.registry().len(), 0);
    }

    #[test]
    fn add_option_rejects_missing_handler() {
        let mut app = app();
        app.add_option("keep", Some(|_: &[Arg]| Ok(()))).unwrap();

        let none: Option<fn(&[Arg]) -> Result<()>> = None;
        let err = app.add_option("lost", none).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "no function was given");
        assert_eq!(app.registry().len(), 1);
    }

    #[test]
    fn add_option_appends_with_empty_description() {
        let mut app = app();
        app.add_option("init", Some(|_: &[Arg]| Ok(()))).unwrap();

        let entry = app.registry().find("init").unwrap();
        assert_eq!(entry.description, "");
        assert!(entry.handler.is_some());
    }

    #[test]
    fn add_skips_validation() {
        let mut app = app();
        app.add([
            CommandEntry::without_handler(""),
            CommandEntry::without_handler("ghost").with_description("no handler"),
        ]);
        assert_eq!(app.registry().len(), 2);
    }

    #[test]
    fn run_entry_without_handler_fails() {
        let mut app = app();
        app.add([CommandEntry::without_handler("ghost")]);

        let err = app.run("GHOST", &[]).unwrap_err();
        assert!(matches!(&err, CliError::MissingHandler(name) if name == "ghost"));
    }

    #[test]
    fn new_uses_config_fields() {
        let app = Application::new(AppConfig::new("tool", "about", 100));
        assert_eq!(app.name, "tool");
        assert_eq!(app.description, "about");
        assert_eq!(app.max_terminal_width(), 100);
        assert!(app.registry().is_empty());
    }
}
