//! Pull request title and body decoration.
//!
//! The pipeline extracts a conventional-commit tag from the raw title, wraps
//! numeric tokens and filenames in inline code, and highlights keywords drawn
//! from a repository-specific vocabulary. Dependency-bump pull requests take a
//! reduced path that only decorates the title.

pub mod error;
pub mod keywords;
pub mod pipeline;
pub mod text;
pub mod title;

pub use error::DecorateError;
pub use keywords::KeywordSet;
pub use pipeline::{decorate_pull_request, DecoratedResult};
pub use text::{decorate_bump, decorate_filenames, decorate_numbers, highlight, is_bump};
pub use title::{parse_title, ParsedTitle, TAGS};
