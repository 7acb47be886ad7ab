//! Parser layer: delimiter resolution and text parsing

mod delimiter;
mod text;

pub use delimiter::{resolve_delimiters, COLUMN_DELIMITER_CANDIDATES, ROW_DELIMITER_CANDIDATES};
pub(crate) use delimiter::{split_lines, strip_carriage_returns};
pub use text::parse_str;
