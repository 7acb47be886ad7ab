//! Delimiter-separated text serializer

use crate::model::{ColumnSelection, Schema, Table};

/// Render a table's header and rows for the selected columns.
///
/// Fields are joined by the table's column delimiter without a trailing delimiter and each
/// line, the last included, ends with the row delimiter. Unset values render empty.
pub fn render<S: Schema>(table: &Table<S>, selection: &ColumnSelection<S>) -> String {
    let columns = selection.columns();
    let delimiters = table.delimiters();
    let mut text = String::new();

    push_line(
        &mut text,
        columns.iter().map(|column| column.title()),
        delimiters.column,
        delimiters.row,
    );

    for row in table {
        push_line(
            &mut text,
            columns.iter().map(|&column| row.value_or_empty(column)),
            delimiters.column,
            delimiters.row,
        );
    }

    text
}

fn push_line<'a>(
    text: &mut String,
    fields: impl Iterator<Item = &'a str>,
    column_delimiter: char,
    row_delimiter: char,
) {
    for (index, field) in fields.enumerate() {
        if index > 0 {
            text.push(column_delimiter);
        }
        text.push_str(field);
    }
    text.push(row_delimiter);
}
