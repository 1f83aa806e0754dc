//! Markdown documentation for GitHub Actions and workflows.
//!
//! Definitions are read from `action.yml` files and workflow files, decoded
//! leniently and rendered through a small Markdown builder. Every list that
//! reaches the output is sorted first, so the same inputs always produce the
//! same bytes.
//!
//! ```
//! use action_docs::action::Action;
//! use action_docs::diagnostics::TracingSink;
//!
//! let source = b"name: Greet\ndescription: Says hello\n";
//! let action = Action::parse(source, "greet/action.yml", &TracingSink);
//! assert!(action.markdown().starts_with("# Greet\n\nSays hello\n\n"));
//! ```

pub mod action;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod discovery;
pub mod error;
pub mod generate;
pub mod markdown;
pub mod metadata;
pub mod output;
pub mod workflow;
