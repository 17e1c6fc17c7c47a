//! Utility functions and helpers.

pub mod files;
pub mod settings;

pub use files::list_file_names;
