//! Decoration-specific error handling.

use thiserror::Error;

/// Errors raised by the decoration pipeline.
#[derive(Error, Debug)]
pub enum DecorateError {
    /// Title matches neither the colon grammar nor the bracket grammar.
    #[error("title '{0}' has no 'tag:' prefix and no bracketed tag")]
    PatternMismatch(String),
}

// Note: anyhow already has a blanket impl for thiserror::Error types
