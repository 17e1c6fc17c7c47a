//! # pr-polish
//!
//! Normalizes and decorates pull request titles and bodies.
//!
//! ## Features
//!
//! - Extracts conventional-commit tags from free-form titles
//! - Wraps numeric tokens, filenames, and repository keywords in inline code
//! - Special-cases dependency-bump pull requests
//!
//! ## Quick Start
//!
//! ```rust
//! use pr_polish::decorate::decorate_numbers;
//!
//! assert_eq!(decorate_numbers("retry 42 times"), "retry `42` times");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod decorate;
pub mod github;
pub mod utils;

pub use crate::cli::Cli;

/// The current version of pr-polish.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
