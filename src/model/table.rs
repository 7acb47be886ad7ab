//! Table and Row data structures

use std::ops::{Index, IndexMut};
use std::path::Path;

use indexmap::IndexMap;

use super::schema::{ColumnSelection, Schema};
use crate::config::{Delimiters, ParseOptions};
use crate::error::{ParseError, TableError};

/// A single record: text values keyed by schema column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<S: Schema> {
    values: IndexMap<S, String>,
}

impl<S: Schema> Default for Row<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Schema> Row<S> {
    /// Create a row without any values
    pub fn new() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }

    /// Build a row by asking for the value of every schema column
    pub fn from_fn<F>(mut value_for_column: F) -> Self
    where
        F: FnMut(S) -> String,
    {
        S::COLUMNS
            .iter()
            .map(|&column| (column, value_for_column(column)))
            .collect()
    }

    /// Get the value of a column, if set
    pub fn get(&self, column: S) -> Option<&str> {
        self.values.get(&column).map(String::as_str)
    }

    /// Get the value of a column, or an empty string if unset
    pub fn value_or_empty(&self, column: S) -> &str {
        self.get(column).unwrap_or("")
    }

    /// Set the value of a column, returning the previous value
    pub fn set(&mut self, column: S, value: impl Into<String>) -> Option<String> {
        self.values.insert(column, value.into())
    }

    /// Remove the value of a column
    pub fn remove(&mut self, column: S) -> Option<String> {
        self.values.shift_remove(&column)
    }

    /// Check whether a column has a value
    pub fn contains(&self, column: S) -> bool {
        self.values.contains_key(&column)
    }

    /// Number of columns with a value
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over set values in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (S, &str)> {
        self.values.iter().map(|(&column, value)| (column, value.as_str()))
    }
}

impl<S: Schema> FromIterator<(S, String)> for Row<S> {
    fn from_iter<I: IntoIterator<Item = (S, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// An ordered sequence of rows sharing one delimiter configuration
#[derive(Debug, Clone)]
pub struct Table<S: Schema> {
    rows: Vec<Row<S>>,
    delimiters: Delimiters,
}

impl<S: Schema> Default for Table<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Schema> Table<S> {
    /// Create an empty table with default delimiters
    pub fn new() -> Self {
        Self::with_delimiters(Delimiters::default())
    }

    /// Create an empty table with the given delimiters
    pub fn with_delimiters(delimiters: Delimiters) -> Self {
        Self {
            rows: Vec::new(),
            delimiters,
        }
    }

    /// Build a table with one row per item
    pub fn from_items<I, F>(
        items: impl IntoIterator<Item = I>,
        value_for_item_in_column: F,
        delimiters: Delimiters,
    ) -> Self
    where
        F: FnMut(&I, S) -> String,
    {
        let mut table = Self::with_delimiters(delimiters);
        table.append_rows(items, value_for_item_in_column);
        table
    }

    /// Build a table from already constructed rows
    pub(crate) fn from_rows(rows: Vec<Row<S>>, delimiters: Delimiters) -> Self {
        Self { rows, delimiters }
    }

    /// Parse text into a table, detecting delimiters not given in `options`
    pub fn parse(text: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        crate::parser::parse_str(text, options)
    }

    /// Read a file and parse its contents like [`Table::parse`]
    pub fn from_path(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Self, ParseError> {
        let text = crate::io::read_text(path.as_ref())?;
        Self::parse(&text, options)
    }

    /// Render every column to text.
    ///
    /// Parsing skips empty lines, so in a single-column schema a row whose value is empty
    /// does not come back when the text is parsed again.
    pub fn to_text(&self) -> String {
        self.render(&ColumnSelection::All)
    }

    /// Render the selected columns to text
    pub fn render(&self, selection: &ColumnSelection<S>) -> String {
        crate::output::render(self, selection)
    }

    /// Render the selected columns and write them to a file
    pub fn write_to_path(
        &self,
        path: impl AsRef<Path>,
        selection: &ColumnSelection<S>,
    ) -> std::io::Result<()> {
        crate::io::write_text(path.as_ref(), &self.render(selection))
    }

    pub fn delimiters(&self) -> Delimiters {
        self.delimiters
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in order
    pub fn rows(&self) -> &[Row<S>] {
        &self.rows
    }

    /// The row collection, for arbitrary sequence operations
    pub fn rows_mut(&mut self) -> &mut Vec<Row<S>> {
        &mut self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row<S>> {
        self.rows.iter()
    }

    /// Get a row by index
    pub fn row(&self, index: usize) -> Option<&Row<S>> {
        self.rows.get(index)
    }

    /// Get a mutable row by index
    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row<S>> {
        self.rows.get_mut(index)
    }

    /// Replace the row at `index`, returning the old one
    pub fn set_row(&mut self, index: usize, row: Row<S>) -> Result<Row<S>, TableError> {
        let len = self.rows.len();
        let slot = self
            .rows
            .get_mut(index)
            .ok_or(TableError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, row))
    }

    /// Append one row built from a per-column value function
    pub fn append_row<F>(&mut self, value_for_column: F)
    where
        F: FnMut(S) -> String,
    {
        self.rows.push(Row::from_fn(value_for_column));
    }

    /// Append one row per item, in item order
    pub fn append_rows<I, F>(&mut self, items: impl IntoIterator<Item = I>, value_for_item_in_column: F)
    where
        F: FnMut(&I, S) -> String,
    {
        let rows = build_rows(items, value_for_item_in_column);
        self.rows.extend(rows);
    }

    /// Insert one row at `index`, shifting later rows back
    pub fn insert_row<F>(&mut self, index: usize, value_for_column: F) -> Result<(), TableError>
    where
        F: FnMut(S) -> String,
    {
        self.check_insert_index(index)?;
        self.rows.insert(index, Row::from_fn(value_for_column));
        Ok(())
    }

    /// Insert one row per item starting at `index`, keeping item order
    pub fn insert_rows<I, F>(
        &mut self,
        items: impl IntoIterator<Item = I>,
        index: usize,
        value_for_item_in_column: F,
    ) -> Result<(), TableError>
    where
        F: FnMut(&I, S) -> String,
    {
        self.check_insert_index(index)?;
        let rows = build_rows(items, value_for_item_in_column);
        self.rows.splice(index..index, rows);
        Ok(())
    }

    /// Remove and return the row at `index`
    pub fn remove_row(&mut self, index: usize) -> Result<Row<S>, TableError> {
        if index >= self.rows.len() {
            return Err(TableError::IndexOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        Ok(self.rows.remove(index))
    }

    /// Remove every row matching `predicate`, returning how many were removed
    pub fn remove_rows_where<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&Row<S>) -> bool,
    {
        let before = self.rows.len();
        self.rows.retain(|row| !predicate(row));
        before - self.rows.len()
    }

    fn check_insert_index(&self, index: usize) -> Result<(), TableError> {
        if index > self.rows.len() {
            return Err(TableError::IndexOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        Ok(())
    }
}

fn build_rows<S, I, F>(items: impl IntoIterator<Item = I>, mut value_for_item_in_column: F) -> Vec<Row<S>>
where
    S: Schema,
    F: FnMut(&I, S) -> String,
{
    items
        .into_iter()
        .map(|item| Row::from_fn(|column| value_for_item_in_column(&item, column)))
        .collect()
}

impl<S: Schema> Index<usize> for Table<S> {
    type Output = Row<S>;

    fn index(&self, index: usize) -> &Row<S> {
        &self.rows[index]
    }
}

impl<S: Schema> IndexMut<usize> for Table<S> {
    fn index_mut(&mut self, index: usize) -> &mut Row<S> {
        &mut self.rows[index]
    }
}

impl<'a, S: Schema> IntoIterator for &'a Table<S> {
    type Item = &'a Row<S>;
    type IntoIter = std::slice::Iter<'a, Row<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::csv_schema! {
        enum Item {
            Id = "id",
            Name = "name",
        }
    }

    fn item_value(index: &usize, column: Item) -> String {
        match column {
            Item::Id => index.to_string(),
            Item::Name => format!("Item {}", index),
        }
    }

    #[test]
    fn test_row_from_fn_covers_every_column() {
        let row = Row::from_fn(|column: Item| column.name().to_uppercase());
        assert_eq!(row.get(Item::Id), Some("ID"));
        assert_eq!(row.get(Item::Name), Some("NAME"));
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn test_row_missing_value_is_empty() {
        let mut row = Row::new();
        row.set(Item::Id, "7");
        assert_eq!(row.value_or_empty(Item::Name), "");
        assert_eq!(row.remove(Item::Id), Some("7".to_string()));
        assert!(row.is_empty());
    }

    #[test]
    fn test_from_items_keeps_order() {
        let table = Table::from_items(0..5usize, item_value, Delimiters::default());
        assert_eq!(table.len(), 5);
        assert_eq!(table[3].get(Item::Name), Some("Item 3"));
    }

    #[test]
    fn test_insert_rows_shifts_later_rows() {
        let mut table = Table::from_items(0..3usize, item_value, Delimiters::default());
        table.insert_rows(10..12usize, 1, item_value).unwrap();

        let ids: Vec<_> = table.iter().map(|row| row.value_or_empty(Item::Id)).collect();
        assert_eq!(ids, vec!["0", "10", "11", "1", "2"]);
    }

    #[test]
    fn test_insert_at_end_is_allowed() {
        let mut table: Table<Item> = Table::new();
        table.insert_row(0, |column| column.name().to_string()).unwrap();
        table.insert_row(1, |_| "x".to_string()).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let mut table = Table::from_items(0..2usize, item_value, Delimiters::default());

        assert_eq!(
            table.insert_row(3, |_| String::new()),
            Err(TableError::IndexOutOfRange { index: 3, len: 2 })
        );
        assert!(table.set_row(2, Row::new()).is_err());
        assert!(table.remove_row(2).is_err());
        assert!(table.row(2).is_none());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_set_row_returns_previous() {
        let mut table = Table::from_items(0..2usize, item_value, Delimiters::default());
        let old = table.set_row(1, Row::from_fn(|_| "new".to_string())).unwrap();

        assert_eq!(old.get(Item::Id), Some("1"));
        assert_eq!(table[1].get(Item::Id), Some("new"));
    }

    #[test]
    fn test_remove_rows_where_preserves_order() {
        let mut table = Table::from_items(0..6usize, item_value, Delimiters::default());
        let removed = table.remove_rows_where(|row| {
            row.get(Item::Id)
                .and_then(|id| id.parse::<usize>().ok())
                .is_some_and(|id| id % 2 == 0)
        });

        assert_eq!(removed, 3);
        let ids: Vec<_> = table.iter().map(|row| row.value_or_empty(Item::Id)).collect();
        assert_eq!(ids, vec!["1", "3", "5"]);
    }
}
