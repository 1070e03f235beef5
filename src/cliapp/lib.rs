//! # cliapp
//!
//! A command registry with dispatch and a help-text formatter. It is not an
//! argument parser: the host turns raw process input into a command name plus
//! a list of arguments and hands those to [`Application::run`].
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Host / binary (main.rs)                                 │
//! │  - Parses process arguments, owns stdout/stderr/exit     │
//! └──────────────────────────────────────────────────────────┘
//!                             │  run(cmd, args)  show_help()
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Application (app.rs, help.rs)                           │
//! │  - Validated and bulk registration                       │
//! │  - Case-insensitive dispatch                             │
//! │  - Word-wrapped help with a cached layout                │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Registry (registry.rs)                                  │
//! │  - Ordered entries, duplicates allowed                   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use cliapp::{Application, Arg, CliError};
//! use serde_json::json;
//!
//! let mut app = Application::with_settings("tool", "Does things", 80);
//! app.add_option("greet", Some(|args: &[Arg]| {
//!     println!("hello {:?}", args);
//!     Ok(())
//! }))
//! .unwrap();
//!
//! app.run("GREET", &[json!("world")]).unwrap();
//! assert!(matches!(app.run("nope", &[]), Err(CliError::NotFound(_))));
//! ```
//!
//! The library logs through the `log` facade and never installs a logger.
//!
//! ## Module Overview
//!
//! - [`app`]: [`Application`], registration and dispatch
//! - [`help`]: help composition, text reshaping and centering
//! - [`registry`]: [`CommandEntry`] and the ordered [`Registry`]
//! - [`config`]: [`AppConfig`] and terminal width detection
//! - [`error`]: Error types

pub mod app;
pub mod config;
pub mod error;
pub mod help;
pub mod registry;

pub use app::Application;
pub use config::AppConfig;
pub use error::{CliError, Result};
pub use registry::{Arg, CommandEntry, Handler, Registry};
