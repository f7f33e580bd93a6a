//! The per-file outcome of a run, kept in input order.

pub mod render;

use serde::{Deserialize, Serialize, Serializer};
use std::path::{Path, PathBuf};

pub use render::{render_json, render_table};

/// Issues (or the pass line) for one input path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    #[serde(serialize_with = "path_as_text")]
    pub file: PathBuf,
    pub issues: Vec<String>,
}

// non-UTF-8 names are written lossily so JSON output never fails
fn path_as_text<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

/// One entry per distinct input path, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueReport {
    entries: Vec<FileEntry>,
}

impl IssueReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the issues for `file`. A path seen before keeps its position and
    /// takes the new issues.
    pub fn insert(&mut self, file: impl Into<PathBuf>, issues: Vec<String>) {
        let file = file.into();
        match self.entries.iter_mut().find(|e| e.file == file) {
            Some(entry) => entry.issues = issues,
            None => self.entries.push(FileEntry { file, issues }),
        }
    }

    pub fn get(&self, file: impl AsRef<Path>) -> Option<&[String]> {
        let file = file.as_ref();
        self.entries
            .iter()
            .find(|e| e.file == file)
            .map(|e| e.issues.as_slice())
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_path_keeps_first_position() {
        let mut report = IssueReport::new();
        report.insert("a.csv", vec!["one".into()]);
        report.insert("b.csv", vec!["two".into()]);
        report.insert("a.csv", vec!["three".into()]);

        assert_eq!(report.len(), 2);
        assert_eq!(report.entries()[0].file, Path::new("a.csv"));
        assert_eq!(report.get("a.csv"), Some(&["three".to_string()][..]));
        assert_eq!(report.get("c.csv"), None);
    }
}
