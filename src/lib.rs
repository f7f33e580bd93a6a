pub mod config;
pub mod integrity;
pub mod process;
pub mod report;
pub mod schema;

pub use integrity::{check_dataset_integrity, check_file, FileFailure, Issue};
pub use report::IssueReport;
pub use schema::{StandardSchema, STANDARD_SCHEMA};
