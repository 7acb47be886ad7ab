//! csvdata - Schema-typed delimiter-separated text tables
//!
//! Parses delimiter-separated text into a table whose columns are a fixed, caller-declared
//! schema, mutates it, and renders it back to text with an optional column selection.

pub mod config;
pub mod error;
pub mod inspect;
pub mod io;
pub mod model;
pub mod output;
pub mod parser;

pub use config::{Delimiters, ParseOptions};
pub use error::{ParseError, TableError};
pub use model::{ColumnSelection, Row, Schema, Table};
