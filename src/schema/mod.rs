//! The fixed air-quality export schema, shared read-only by every check.

pub mod types;

use once_cell::sync::Lazy;
use std::collections::BTreeSet;

pub use types::{HeaderMismatch, NameSet, EXPECTED_COLUMNS, NUMERIC_COLUMNS, YEAR_COLUMN};

/// Loaded once per process; nothing hands out mutable access.
pub static STANDARD_SCHEMA: Lazy<StandardSchema> = Lazy::new(StandardSchema::air_quality);

#[derive(Debug, Clone)]
pub struct StandardSchema {
    columns: Vec<String>,
    numeric: Vec<String>,
}

impl StandardSchema {
    /// The European air-quality statistics layout.
    pub fn air_quality() -> Self {
        Self::new(&EXPECTED_COLUMNS, &NUMERIC_COLUMNS)
    }

    pub fn new(columns: &[&str], numeric: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            numeric: numeric.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Numeric columns in definition order.
    pub fn numeric_columns(&self) -> &[String] {
        &self.numeric
    }

    /// Compare a file header against the schema.
    ///
    /// Returns `None` on an exact ordered match. A pure reordering is only
    /// reported when no column is missing or unexpected.
    pub fn compare_header(&self, actual: &[String]) -> Option<HeaderMismatch> {
        if actual == self.columns.as_slice() {
            return None;
        }

        let expected: BTreeSet<&String> = self.columns.iter().collect();
        let actual_set: BTreeSet<&String> = actual.iter().collect();

        let missing: BTreeSet<String> = expected
            .difference(&actual_set)
            .map(|s| s.to_string())
            .collect();
        let unexpected: BTreeSet<String> = actual_set
            .difference(&expected)
            .map(|s| s.to_string())
            .collect();

        if missing.is_empty() && unexpected.is_empty() {
            Some(HeaderMismatch::Order)
        } else {
            Some(HeaderMismatch::Columns {
                missing,
                unexpected,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn schema_has_expected_shape() {
        assert_eq!(STANDARD_SCHEMA.columns().len(), 27);
        assert_eq!(STANDARD_SCHEMA.numeric_columns().len(), 8);
        for col in STANDARD_SCHEMA.numeric_columns() {
            assert!(STANDARD_SCHEMA.columns().contains(col), "{col} not in schema");
        }
    }

    #[test]
    fn exact_header_matches() {
        let actual = header(&EXPECTED_COLUMNS);
        assert_eq!(STANDARD_SCHEMA.compare_header(&actual), None);
    }

    #[test]
    fn reordered_header_is_order_mismatch() {
        let mut actual = header(&EXPECTED_COLUMNS);
        actual.swap(0, 1);
        assert_eq!(
            STANDARD_SCHEMA.compare_header(&actual),
            Some(HeaderMismatch::Order)
        );
    }

    #[test]
    fn missing_and_extra_columns_suppress_order_message() {
        let schema = StandardSchema::new(&["A", "B", "C"], &["B"]);
        let actual = header(&["C", "B", "D"]);
        match schema.compare_header(&actual) {
            Some(HeaderMismatch::Columns {
                missing,
                unexpected,
            }) => {
                assert_eq!(missing.into_iter().collect::<Vec<_>>(), vec!["A"]);
                assert_eq!(unexpected.into_iter().collect::<Vec<_>>(), vec!["D"]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn name_set_renders_sorted_and_quoted() {
        let set: BTreeSet<String> = ["City", "Altitude"].iter().map(|s| s.to_string()).collect();
        assert_eq!(NameSet(&set).to_string(), "{'Altitude', 'City'}");
    }
}
