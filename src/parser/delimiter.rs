//! Row and column delimiter resolution

use std::borrow::Cow;

use crate::config::{Delimiters, DEFAULT_COLUMN_DELIMITER, DEFAULT_ROW_DELIMITER};

/// Row delimiters tried in priority order when none is given
pub const ROW_DELIMITER_CANDIDATES: &[char] = &['\n', '\t'];

/// Column delimiters tried in priority order when none is given
pub const COLUMN_DELIMITER_CANDIDATES: &[char] = &[',', ';', '\t', '|', '#'];

/// Resolve the effective delimiters for `text`.
///
/// Explicit delimiters are used as given. A missing row delimiter is the first candidate
/// that splits the text into more than one line. A missing column delimiter is the first
/// candidate that splits the header into more than one field and the first data line into
/// the same number of fields. Defaults apply when detection finds nothing.
pub fn resolve_delimiters(text: &str, row: Option<char>, column: Option<char>) -> Delimiters {
    let text = strip_carriage_returns(text);

    let (row, lines) = match row {
        Some(row) => (row, split_lines(&text, row)),
        None => detect_row_delimiter(&text),
    };

    let column = column.unwrap_or_else(|| detect_column_delimiter(&lines, row));

    Delimiters { row, column }
}

/// Remove every carriage return from the text
pub(crate) fn strip_carriage_returns(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace('\r', ""))
    } else {
        Cow::Borrowed(text)
    }
}

/// Split text into its non-empty lines
pub(crate) fn split_lines(text: &str, row: char) -> Vec<&str> {
    text.split(row).filter(|line| !line.is_empty()).collect()
}

fn detect_row_delimiter(text: &str) -> (char, Vec<&str>) {
    for &candidate in ROW_DELIMITER_CANDIDATES {
        let lines = split_lines(text, candidate);
        if lines.len() > 1 {
            return (candidate, lines);
        }
    }

    (DEFAULT_ROW_DELIMITER, split_lines(text, DEFAULT_ROW_DELIMITER))
}

fn detect_column_delimiter(lines: &[&str], row: char) -> char {
    let (header, first_row) = match lines {
        [header, first_row, ..] => (header, first_row),
        _ => return DEFAULT_COLUMN_DELIMITER,
    };

    COLUMN_DELIMITER_CANDIDATES
        .iter()
        .copied()
        .filter(|&candidate| candidate != row)
        .find(|&candidate| {
            let header_fields = header.split(candidate).count();
            header_fields > 1 && header_fields == first_row.split(candidate).count()
        })
        .unwrap_or(DEFAULT_COLUMN_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOPPING: &str = "id,name,Price\n1,Bananas,1.20\n2,Sugar,2.30\n3,Milk,1.99";
    const CUSTOM: &str = "id#name#price\t1#Bananas#1.20\t2#Sugar#2.30\t3#Milk#1.99";

    #[test]
    fn test_detect_both() {
        assert_eq!(resolve_delimiters(SHOPPING, None, None), Delimiters::new('\n', ','));
        assert_eq!(resolve_delimiters(CUSTOM, None, None), Delimiters::new('\t', '#'));
    }

    #[test]
    fn test_detect_column_with_row_given() {
        assert_eq!(resolve_delimiters(SHOPPING, Some('\n'), None), Delimiters::new('\n', ','));
        assert_eq!(resolve_delimiters(CUSTOM, Some('\t'), None), Delimiters::new('\t', '#'));
    }

    #[test]
    fn test_explicit_delimiters_are_kept() {
        assert_eq!(
            resolve_delimiters(SHOPPING, Some('\n'), Some('|')),
            Delimiters::new('\n', '|')
        );
    }

    #[test]
    fn test_detect_row_with_column_given() {
        assert_eq!(resolve_delimiters(CUSTOM, None, Some('#')), Delimiters::new('\t', '#'));
    }

    #[test]
    fn test_single_line_falls_back_to_defaults() {
        assert_eq!(resolve_delimiters("test", None, None), Delimiters::default());
        assert_eq!(resolve_delimiters("test", Some('\n'), None), Delimiters::default());
        assert_eq!(resolve_delimiters("", None, None), Delimiters::default());
    }

    #[test]
    fn test_mismatched_field_counts_fall_back_to_default_column() {
        let text = "a,b,c\n1,2";
        assert_eq!(resolve_delimiters(text, None, None), Delimiters::new('\n', ';'));
    }

    #[test]
    fn test_carriage_returns_are_ignored() {
        let text = "a|b\r\n1|2\r\n";
        assert_eq!(resolve_delimiters(text, None, None), Delimiters::new('\n', '|'));
    }

    #[test]
    fn test_semicolon_preferred_over_later_candidates() {
        let text = "a;b|c\n1;2|3";
        assert_eq!(resolve_delimiters(text, None, None).column, ';');
    }
}
