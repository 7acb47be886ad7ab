//! Delimiter-separated text parser

use crate::config::{Delimiters, ParseOptions};
use crate::error::ParseError;
use crate::model::{Row, Schema, Table};

use super::delimiter::{resolve_delimiters, split_lines, strip_carriage_returns};

/// Parse text into a table of schema `S`.
///
/// Fields map to columns by position; the header is only checked for its field count.
/// Any failure discards the rows parsed so far.
pub fn parse_str<S: Schema>(text: &str, options: &ParseOptions) -> Result<Table<S>, ParseError> {
    let text = strip_carriage_returns(text);
    let delimiters = resolve_delimiters(&text, options.row_delimiter, options.column_delimiter);
    parse_with_delimiters(&text, delimiters, options.continue_on_invalid_row)
}

fn parse_with_delimiters<S: Schema>(
    text: &str,
    delimiters: Delimiters,
    continue_on_invalid_row: bool,
) -> Result<Table<S>, ParseError> {
    let expected = S::column_count();
    let mut lines = split_lines(text, delimiters.row).into_iter();

    let Some(header) = lines.next() else {
        return Ok(Table::with_delimiters(delimiters));
    };

    let found = header.split(delimiters.column).count();
    if found != expected {
        return Err(ParseError::InvalidHeaderFormat { expected, found });
    }

    let mut rows = Vec::with_capacity(lines.len());
    for (line_num, line) in lines.enumerate() {
        let fields: Vec<&str> = line.split(delimiters.column).collect();

        if fields.len() != expected {
            if continue_on_invalid_row {
                continue;
            }
            return Err(ParseError::InvalidRowFormat {
                line: line_num + 2, // +2 for 1-indexing and header
                expected,
                found: fields.len(),
            });
        }

        let row: Row<S> = S::COLUMNS
            .iter()
            .zip(fields)
            .map(|(&column, field)| (column, field.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(Table::from_rows(rows, delimiters))
}
