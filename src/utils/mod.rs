//! Shared utilities: shell quoting for generated commands.

pub mod shell;

pub use shell::{comment_text, escape_double_quoted, escape_single_quoted};
