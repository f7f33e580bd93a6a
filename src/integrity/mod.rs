//! Per-file integrity checks for air-quality CSV exports.
//!
//! Each file goes through: existence, header against the standard schema,
//! full load, numeric format of the numeric columns, and agreement of the
//! `Year` column with the year in the file name. Files are handled one at a
//! time, in input order, and a bad file never stops the run.

mod issue;

use std::{cmp::Ordering, collections::HashSet, fmt, path::Path};
use tracing::{debug, info, warn};

use crate::process::{self, classify_cell, year_from_file_name, CellValue, Dataset};
use crate::report::IssueReport;
use crate::schema::{HeaderMismatch, StandardSchema, STANDARD_SCHEMA, YEAR_COLUMN};

pub use issue::{FileFailure, Issue, PASSED};

/// Check every file against the standard schema.
pub fn check_dataset_integrity<I, P>(files: I) -> IssueReport
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    check_with_schema(files, &STANDARD_SCHEMA)
}

/// Same as [`check_dataset_integrity`] with an explicit schema.
pub fn check_with_schema<I, P>(files: I, schema: &StandardSchema) -> IssueReport
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut report = IssueReport::new();
    for file in files {
        let path = file.as_ref();
        let lines = match check_file(path, schema) {
            Ok(issues) if issues.is_empty() => {
                info!(path = %path.display(), "passed");
                vec![PASSED.to_string()]
            }
            Ok(issues) => {
                info!(path = %path.display(), issues = issues.len(), "issues found");
                issues.iter().map(ToString::to_string).collect()
            }
            Err(failure) => {
                warn!(path = %path.display(), "{}", failure);
                vec![failure.to_string()]
            }
        };
        report.insert(path.to_path_buf(), lines);
    }
    report
}

/// Run all checks on one file. Issues come back in report order:
/// header, then numeric format per column, then year consistency.
#[tracing::instrument(level = "debug", skip(path, schema), fields(path = %path.display()))]
pub fn check_file(path: &Path, schema: &StandardSchema) -> Result<Vec<Issue>, FileFailure> {
    if !path.is_file() {
        return Err(FileFailure::NotFound);
    }

    let header = process::read_header(path).map_err(FileFailure::Critical)?;
    let mut issues = header_issues(schema, &header);

    let dataset = Dataset::load(path).map_err(FileFailure::Critical)?;
    issues.extend(format_issues(schema, &dataset));

    if let Some(issue) = year_issue(path, &dataset) {
        issues.push(issue);
    }
    Ok(issues)
}

fn header_issues(schema: &StandardSchema, header: &[String]) -> Vec<Issue> {
    match schema.compare_header(header) {
        None => Vec::new(),
        Some(HeaderMismatch::Order) => vec![Issue::ColumnOrder],
        Some(HeaderMismatch::Columns {
            missing,
            unexpected,
        }) => {
            let mut out = Vec::with_capacity(2);
            if !missing.is_empty() {
                out.push(Issue::MissingColumns(missing));
            }
            if !unexpected.is_empty() {
                out.push(Issue::UnexpectedColumns(unexpected));
            }
            out
        }
    }
}

fn format_issues(schema: &StandardSchema, dataset: &Dataset) -> Vec<Issue> {
    let mut out = Vec::new();
    for name in schema.numeric_columns() {
        let Some(column) = dataset.column(name) else {
            continue;
        };
        let count = column
            .iter()
            .filter(|cell| classify_cell(*cell) == CellValue::Invalid)
            .count();
        debug!(column = %name, invalid = count, "numeric format");
        if count > 0 {
            out.push(Issue::NonNumeric {
                column: name.clone(),
                count,
            });
        }
    }
    out
}

fn year_issue(path: &Path, dataset: &Dataset) -> Option<Issue> {
    let column = dataset.column(YEAR_COLUMN)?;
    let Some(expected) = year_from_file_name(path) else {
        debug!("file name carries no year; skipping year check");
        return None;
    };

    let mut found: Vec<FoundYear> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for cell in column.iter() {
        let entry = match classify_cell(cell) {
            CellValue::Numeric(v) if v == expected as f64 => continue,
            CellValue::Numeric(v) => FoundYear::Number(v),
            CellValue::Invalid => FoundYear::Text(cell.unwrap_or_default().trim().to_string()),
            // a blank year never equals the expected one
            CellValue::Missing => FoundYear::Missing,
        };
        if seen.insert(entry.to_string()) {
            found.push(entry);
        }
    }

    if found.is_empty() {
        return None;
    }
    found.sort_by(FoundYear::cmp_for_report);
    Some(Issue::YearMismatch {
        expected,
        found: found.iter().map(ToString::to_string).collect(),
    })
}

/// A `Year` cell that disagrees with the file name.
#[derive(Debug, Clone, PartialEq)]
enum FoundYear {
    Number(f64),
    Text(String),
    Missing,
}

impl FoundYear {
    /// Numbers ascending, then text, then missing.
    fn cmp_for_report(a: &Self, b: &Self) -> Ordering {
        match (a, b) {
            (FoundYear::Number(x), FoundYear::Number(y)) => x.total_cmp(y),
            (FoundYear::Text(x), FoundYear::Text(y)) => x.cmp(y),
            _ => a.rank().cmp(&b.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            FoundYear::Number(_) => 0,
            FoundYear::Text(_) => 1,
            FoundYear::Missing => 2,
        }
    }
}

impl fmt::Display for FoundYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoundYear::Number(v) => f.write_str(&render_year(*v)),
            FoundYear::Text(t) => f.write_str(t),
            FoundYear::Missing => f.write_str("nan"),
        }
    }
}

fn render_year(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}
