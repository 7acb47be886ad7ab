//! Column schema contract and serialization-time column selection

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashSet;

/// A closed, ordered set of columns a table conforms to.
///
/// Implementors are usually fieldless enums; [`csv_schema!`](crate::csv_schema) declares one
/// together with its implementation. `COLUMNS` is the canonical order used for the header and
/// for mapping parsed fields to columns.
pub trait Schema: Copy + Eq + Hash + Debug + 'static {
    /// Every column, in canonical order
    const COLUMNS: &'static [Self];

    /// Textual identifier of the column
    fn name(&self) -> &'static str;

    /// Header title of the column
    fn title(&self) -> &str {
        self.name()
    }

    /// Number of columns in the schema
    fn column_count() -> usize {
        Self::COLUMNS.len()
    }
}

/// Declare a fieldless enum implementing [`Schema`].
///
/// Each variant maps to its column name; `as "Title"` overrides the header title.
/// The enum derives `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq` and `Hash`.
///
/// ```
/// csvdata::csv_schema! {
///     pub enum Shopping {
///         Id = "id",
///         Name = "name",
///         Price = "price" as "Price",
///     }
/// }
///
/// use csvdata::Schema;
/// assert_eq!(Shopping::COLUMNS.len(), 3);
/// assert_eq!(Shopping::Price.title(), "Price");
/// assert_eq!(Shopping::Name.title(), "name");
/// ```
#[macro_export]
macro_rules! csv_schema {
    (@title $column:literal) => {
        $column
    };
    (@title $column:literal, $title:literal) => {
        $title
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident = $column:literal $(as $title:literal)? ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant ),+
        }

        impl $crate::Schema for $name {
            const COLUMNS: &'static [Self] = &[ $( Self::$variant ),+ ];

            fn name(&self) -> &'static str {
                match self {
                    $( Self::$variant => $column ),+
                }
            }

            fn title(&self) -> &str {
                match self {
                    $( Self::$variant => $crate::csv_schema!(@title $column $(, $title)?) ),+
                }
            }
        }
    };
}

/// Which columns to emit when rendering a table, and in which order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelection<S> {
    /// Every schema column in schema order
    All,
    /// Every schema column except the given ones, in schema order
    AllBut(Vec<S>),
    /// Exactly the given columns, in the given order
    Only(Vec<S>),
}

impl<S> Default for ColumnSelection<S> {
    fn default() -> Self {
        ColumnSelection::All
    }
}

impl<S: Schema> ColumnSelection<S> {
    /// Resolve the ordered list of columns to emit
    pub fn columns(&self) -> Vec<S> {
        match self {
            ColumnSelection::All => S::COLUMNS.to_vec(),
            ColumnSelection::AllBut(excluded) => {
                let excluded: FxHashSet<S> = excluded.iter().copied().collect();
                S::COLUMNS
                    .iter()
                    .copied()
                    .filter(|column| !excluded.contains(column))
                    .collect()
            }
            ColumnSelection::Only(columns) => columns.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::csv_schema! {
        enum Fruit {
            Id = "id",
            Name = "name",
            Price = "price" as "Price",
        }
    }

    #[test]
    fn test_columns_in_declaration_order() {
        assert_eq!(Fruit::COLUMNS, &[Fruit::Id, Fruit::Name, Fruit::Price]);
        assert_eq!(Fruit::column_count(), 3);
    }

    #[test]
    fn test_title_defaults_to_name() {
        assert_eq!(Fruit::Id.title(), "id");
        assert_eq!(Fruit::Price.name(), "price");
        assert_eq!(Fruit::Price.title(), "Price");
    }

    #[test]
    fn test_selection_all_but_keeps_schema_order() {
        let selection = ColumnSelection::AllBut(vec![Fruit::Name]);
        assert_eq!(selection.columns(), vec![Fruit::Id, Fruit::Price]);
    }

    #[test]
    fn test_selection_only_keeps_caller_order() {
        let selection = ColumnSelection::Only(vec![Fruit::Price, Fruit::Id]);
        assert_eq!(selection.columns(), vec![Fruit::Price, Fruit::Id]);
        assert_eq!(ColumnSelection::<Fruit>::default().columns().len(), 3);
    }
}
