use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

use crate::schema::NameSet;

/// Report line for a file with nothing to flag.
pub const PASSED: &str = "Integrity Check Passed";

/// A recoverable finding. Checking continues after any of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Issue {
    MissingColumns(BTreeSet<String>),
    UnexpectedColumns(BTreeSet<String>),
    ColumnOrder,
    NonNumeric { column: String, count: usize },
    YearMismatch { expected: i64, found: Vec<String> },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::MissingColumns(cols) => write!(f, "Missing columns: {}", NameSet(cols)),
            Issue::UnexpectedColumns(cols) => write!(f, "Unexpected columns: {}", NameSet(cols)),
            Issue::ColumnOrder => {
                f.write_str("Column order is inconsistent with the standard schema.")
            }
            Issue::NonNumeric { column, count } => write!(
                f,
                "Format Error: Column '{}' has {} non-numeric values.",
                column, count
            ),
            Issue::YearMismatch { expected, found } => write!(
                f,
                "Data Consistency: Found years {{{}}} in a {} file.",
                found.join(", "),
                expected
            ),
        }
    }
}

/// A failure that ends checking for one file. Any issues gathered before it are dropped.
#[derive(Debug, Error)]
pub enum FileFailure {
    #[error("Error: File not found")]
    NotFound,
    #[error("Critical Error: {0:#}")]
    Critical(anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Context};

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn issue_messages() {
        assert_eq!(
            Issue::MissingColumns(set(&["Latitude", "Altitude"])).to_string(),
            "Missing columns: {'Altitude', 'Latitude'}"
        );
        assert_eq!(
            Issue::UnexpectedColumns(set(&["Extra"])).to_string(),
            "Unexpected columns: {'Extra'}"
        );
        assert_eq!(
            Issue::ColumnOrder.to_string(),
            "Column order is inconsistent with the standard schema."
        );
        assert_eq!(
            Issue::NonNumeric {
                column: "Altitude".into(),
                count: 1
            }
            .to_string(),
            "Format Error: Column 'Altitude' has 1 non-numeric values."
        );
        assert_eq!(
            Issue::YearMismatch {
                expected: 2023,
                found: vec!["2022".into()]
            }
            .to_string(),
            "Data Consistency: Found years {2022} in a 2023 file."
        );
    }

    #[test]
    fn failure_messages() {
        assert_eq!(FileFailure::NotFound.to_string(), "Error: File not found");

        let err: anyhow::Result<()> = Err(anyhow!("bad byte")).context("reading data row");
        let failure = FileFailure::Critical(err.unwrap_err());
        assert_eq!(
            failure.to_string(),
            "Critical Error: reading data row: bad byte"
        );
    }
}
