//! Utility functions for the mnemo restore wizard.

pub mod config;
pub mod phrase;

pub use config::{WordCountsError, parse_word_counts};
pub use phrase::{normalize_word, tokenize_phrase};
