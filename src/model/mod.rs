//! Data model for schema-typed tables

mod schema;
mod table;

pub use schema::{ColumnSelection, Schema};
pub use table::{Row, Table};
