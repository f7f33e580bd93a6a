// src/config.rs

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use glob::glob;
use std::path::PathBuf;
use tracing::debug;

/// Files checked when no inputs are given on the command line.
pub const DEFAULT_FILES: [&str; 8] = [
    "2023_NO2_IT.csv",
    "2023_O3_IT.csv",
    "2023_PM10_IT.csv",
    "2023_PM25_IT.csv",
    "2024_NO2_IT.csv",
    "2024_O3_IT.csv",
    "2024_PM10_IT.csv",
    "2024_PM25_IT.csv",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "aqcheck")]
#[command(about = "Check air-quality CSV exports against the standard column schema")]
#[command(
    after_help = "With no paths, the eight 2023/2024 IT exports in the working directory are checked.\n\nEnvironment:\n  RUST_LOG         Log filter\n  AQCHECK_FORMAT   Default output format"
)]
pub struct Config {
    /// Output format.
    #[arg(long, env = "AQCHECK_FORMAT", value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Base directory for relative inputs.
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Files or glob patterns to check, in order.
    #[arg(value_name = "PATH_OR_GLOB")]
    pub inputs: Vec<String>,
}

impl Config {
    fn inputs(&self) -> Vec<String> {
        if self.inputs.is_empty() {
            DEFAULT_FILES.iter().map(|s| s.to_string()).collect()
        } else {
            self.inputs.clone()
        }
    }

    /// Resolve inputs to the ordered list of paths to check.
    ///
    /// Glob patterns expand in sorted order; a pattern matching nothing is kept
    /// as a literal path so it still gets a report entry.
    pub fn files(&self) -> Result<Vec<PathBuf>> {
        let inputs = self.inputs();
        let mut files = Vec::with_capacity(inputs.len());
        for input in &inputs {
            let path = match &self.dir {
                Some(dir) => dir.join(input),
                None => PathBuf::from(input),
            };
            if !is_pattern(input) {
                files.push(path);
                continue;
            }

            let pattern = path.to_string_lossy().into_owned();
            let mut matched: Vec<PathBuf> = glob(&pattern)
                .with_context(|| format!("invalid glob pattern `{}`", pattern))?
                .filter_map(|entry| entry.ok())
                .collect();
            matched.sort();
            debug!(pattern = %pattern, matches = matched.len(), "expanded input");

            if matched.is_empty() {
                files.push(path);
            } else {
                files.extend(matched);
            }
        }
        Ok(files)
    }
}

fn is_pattern(input: &str) -> bool {
    input.contains(|c| matches!(c, '*' | '?' | '['))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use clap::error::ErrorKind;
    use std::fs;
    use tempfile::tempdir;

    fn run(args: &[&str]) -> Result<Config> {
        let argv = std::iter::once("aqcheck").chain(args.iter().copied());
        Ok(Config::try_parse_from(argv)?)
    }

    #[test]
    fn no_inputs_uses_default_list() -> Result<()> {
        let cfg = run(&["--format", "table"])?;
        assert!(cfg.inputs.is_empty());
        assert_eq!(cfg.format, OutputFormat::Table);
        let files = cfg.files()?;
        assert_eq!(files.len(), 8);
        assert_eq!(files[0], PathBuf::from("2023_NO2_IT.csv"));
        Ok(())
    }

    #[test]
    fn flags_are_parsed() -> Result<()> {
        let cfg = run(&["--format", "json", "--dir", "data", "a.csv", "--", "--odd.csv"])?;
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(cfg.dir, Some(PathBuf::from("data")));
        assert_eq!(cfg.inputs, vec!["a.csv", "--odd.csv"]);
        assert_eq!(
            cfg.files()?,
            vec![PathBuf::from("data/a.csv"), PathBuf::from("data/--odd.csv")]
        );
        Ok(())
    }

    #[test]
    fn help_and_bad_flags() {
        let err = Config::try_parse_from(["aqcheck", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(run(&["--verbose"]).is_err());
        assert!(run(&["--format", "xml"]).is_err());
        assert!(run(&["--dir"]).is_err());
    }

    #[test]
    fn globs_expand_sorted_and_misses_stay_literal() -> Result<()> {
        let dir = tempdir()?;
        for name in ["2024_O3_IT.csv", "2023_NO2_IT.csv", "notes.txt"] {
            fs::write(dir.path().join(name), "x\n")?;
        }
        let root = dir.path().to_string_lossy().into_owned();
        let cfg = run(&["--dir", root.as_str(), "*.csv", "*.parquet"])?;
        assert_eq!(
            cfg.files()?,
            vec![
                dir.path().join("2023_NO2_IT.csv"),
                dir.path().join("2024_O3_IT.csv"),
                dir.path().join("*.parquet"),
            ]
        );
        Ok(())
    }
}
