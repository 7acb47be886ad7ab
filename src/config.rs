//! Configuration handling for csvdata

/// Default row delimiter
pub const DEFAULT_ROW_DELIMITER: char = '\n';

/// Default column delimiter
pub const DEFAULT_COLUMN_DELIMITER: char = ';';

/// Row and column delimiter pair shared by every row of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub row: char,
    pub column: char,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            row: DEFAULT_ROW_DELIMITER,
            column: DEFAULT_COLUMN_DELIMITER,
        }
    }
}

impl Delimiters {
    /// Create a delimiter pair
    pub fn new(row: char, column: char) -> Self {
        Self { row, column }
    }
}

/// Output format for inspection reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

/// Options for parsing text into a table
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Explicit row delimiter; detected from the text when absent
    pub row_delimiter: Option<char>,
    /// Explicit column delimiter; detected from the text when absent
    pub column_delimiter: Option<char>,
    /// Skip malformed data lines instead of failing the parse
    pub continue_on_invalid_row: bool,
}

impl ParseOptions {
    /// Options with both delimiters auto-detected and strict row checking
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit row delimiter
    pub fn with_row_delimiter(mut self, delimiter: char) -> Self {
        self.row_delimiter = Some(delimiter);
        self
    }

    /// Set an explicit column delimiter
    pub fn with_column_delimiter(mut self, delimiter: char) -> Self {
        self.column_delimiter = Some(delimiter);
        self
    }

    /// Set both delimiters explicitly
    pub fn with_delimiters(self, delimiters: Delimiters) -> Self {
        self.with_row_delimiter(delimiters.row)
            .with_column_delimiter(delimiters.column)
    }

    /// Skip malformed data lines instead of failing
    pub fn with_continue_on_invalid_row(mut self, continue_on_invalid_row: bool) -> Self {
        self.continue_on_invalid_row = continue_on_invalid_row;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delimiters() {
        let delimiters = Delimiters::default();
        assert_eq!(delimiters.row, '\n');
        assert_eq!(delimiters.column, ';');
    }

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .with_delimiters(Delimiters::new('\t', '#'))
            .with_continue_on_invalid_row(true);

        assert_eq!(options.row_delimiter, Some('\t'));
        assert_eq!(options.column_delimiter, Some('#'));
        assert!(options.continue_on_invalid_row);
    }
}
