//! Text catalog
//!
//! Reading texts grouped by proficiency level, parsed from a flat file.

pub mod level;
pub mod operations;
pub mod text;

pub use level::Level;
pub use operations::{filter_by_level, load_texts};
pub use text::{DELIMITER, Text, parse_line};
