//! `stale_policy` - declarative staleness policies for issue-tracker hygiene bots.
//!
//! An issue-staleness bot works through a small set of named policies: after
//! `stale_days` of inactivity an issue enters the warning phase
//! (`warning_label` is applied and `warning_comment` posted), and after
//! `warning_days` more the terminal action fires (`done_label`,
//! `done_comment`). This crate owns that configuration: it locates and parses
//! the YAML document, validates every invariant up front (reporting all
//! violations at once), and exposes the result as an immutable
//! [`PolicySet`] with renderable comment templates.
//!
//! The canonical five-policy document ships with the crate; see
//! [`PolicySet::builtin`].

// Declare modules following the file structure
pub mod config;
pub mod error;
pub mod load;
pub mod model;
pub mod template;

// Re-export key public types for easier use by library consumers.
pub use config::PolicySet;
pub use error::{Error, Result, ValidationReport, Violation};
pub use model::{PolicyField, StalePolicy};
pub use template::{CommentTemplate, TemplateError};

// Public loading functions
pub use load::{find_config_file, load_from_file, load_from_str};
