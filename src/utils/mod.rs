//! Utility functions.

mod date;
mod text;

pub use date::format_date;
pub use text::contains_quoted_trailing_whitespace;
