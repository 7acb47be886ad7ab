//! Schema-less inspection of delimiter-separated text

use serde::Serialize;

use crate::config::ParseOptions;
use crate::parser::{resolve_delimiters, split_lines, strip_carriage_returns};

/// A data line whose field count differs from the expected one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InconsistentLine {
    /// 1-based line number, header included
    pub line: usize,
    pub fields: usize,
}

/// Structure found in a text blob before binding it to a schema
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    pub row_delimiter: char,
    pub column_delimiter: char,
    /// Header fields, verbatim
    pub header: Vec<String>,
    /// Field count every data line is checked against
    pub expected_fields: usize,
    pub data_lines: usize,
    pub inconsistent_lines: Vec<InconsistentLine>,
}

impl Inspection {
    /// Check whether every data line has the expected field count
    pub fn is_consistent(&self) -> bool {
        self.inconsistent_lines.is_empty()
    }

    /// Number of data lines a lenient parse would keep
    pub fn valid_lines(&self) -> usize {
        self.data_lines - self.inconsistent_lines.len()
    }
}

/// Inspect `text` the way the parser would see it.
///
/// Data lines are checked against `expected_fields` when given, otherwise against the
/// header's field count.
pub fn inspect(text: &str, options: &ParseOptions, expected_fields: Option<usize>) -> Inspection {
    let text = strip_carriage_returns(text);
    let delimiters = resolve_delimiters(&text, options.row_delimiter, options.column_delimiter);
    let mut lines = split_lines(&text, delimiters.row).into_iter();

    let header: Vec<String> = lines
        .next()
        .map(|line| line.split(delimiters.column).map(str::to_string).collect())
        .unwrap_or_default();
    let expected_fields = expected_fields.unwrap_or(header.len());

    let mut data_lines = 0;
    let mut inconsistent_lines = Vec::new();
    for (line_num, line) in lines.enumerate() {
        data_lines += 1;
        let fields = line.split(delimiters.column).count();
        if fields != expected_fields {
            inconsistent_lines.push(InconsistentLine {
                line: line_num + 2,
                fields,
            });
        }
    }

    Inspection {
        row_delimiter: delimiters.row,
        column_delimiter: delimiters.column,
        header,
        expected_fields,
        data_lines,
        inconsistent_lines,
    }
}
