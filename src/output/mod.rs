//! Output formatting
//!
//! - **text**: human-readable summary on stdout
//! - **json**: structured report for scripts, to stdout or a file

pub mod json;
pub mod text;
