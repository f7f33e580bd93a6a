// src/process/mod.rs
pub mod utils;

use anyhow::{bail, Context, Result};
use arrow::{
    array::{Array, ArrayRef, StringArray, StringBuilder},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use csv::{Reader, ReaderBuilder, StringRecord};
use std::{
    fs::File,
    io::{Cursor, Read},
    path::Path,
    sync::Arc,
};
use tracing::debug;

pub use utils::{
    classify_cell, is_missing, normalize_headers, unterminated_quote_line, year_from_file_name,
    CellValue,
};

const NO_COLUMNS: &str = "No columns to parse from file";

fn csv_reader<R: Read>(rdr: R) -> Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        // ragged rows are checked by hand so the message can name the line
        .flexible(true)
        .from_reader(rdr)
}

fn is_blank(record: &StringRecord) -> bool {
    record.is_empty() || (record.len() == 1 && record.get(0) == Some(""))
}

fn first_record<R: Read>(rdr: &mut Reader<R>) -> Result<StringRecord> {
    for result in rdr.records() {
        let record = result.context("reading header row")?;
        if !is_blank(&record) {
            return Ok(record);
        }
    }
    bail!(NO_COLUMNS)
}

/// Read only the header row of `path`. The file handle is dropped on return.
pub fn read_header<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(&path)
        .with_context(|| format!("opening {}", path.as_ref().display()))?;
    let mut rdr = csv_reader(file);
    let header = first_record(&mut rdr)?;
    Ok(normalize_headers(header.iter()))
}

/// One file's rows held column-wise; every column is nullable UTF-8.
/// Missing-value markers are stored as nulls.
#[derive(Debug, Clone)]
pub struct Dataset {
    batch: RecordBatch,
}

impl Dataset {
    /// Read the whole CSV at `path`.
    #[tracing::instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path)
            .with_context(|| format!("opening {}", path.as_ref().display()))?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(mut input: R) -> Result<Self> {
        // buffer the file so a quote left open at EOF can be caught before parsing;
        // the csv reader would otherwise close the field silently
        let mut data = Vec::new();
        input.read_to_end(&mut data).context("reading input")?;
        if let Some(line) = unterminated_quote_line(&data) {
            bail!(
                "Error tokenizing data. EOF inside string starting at line {}",
                line
            );
        }

        let mut rdr = csv_reader(Cursor::new(data));
        let headers = normalize_headers(first_record(&mut rdr)?.iter());

        let mut builders: Vec<StringBuilder> =
            headers.iter().map(|_| StringBuilder::new()).collect();
        let mut num_rows = 0usize;

        for result in rdr.records() {
            let record = result.context("reading data row")?;
            if is_blank(&record) {
                continue;
            }
            if record.len() > headers.len() {
                let line = record.position().map_or(0, |p| p.line());
                bail!(
                    "Error tokenizing data. Expected {} fields in line {}, saw {}",
                    headers.len(),
                    line,
                    record.len()
                );
            }
            // short rows are padded with nulls
            for (i, builder) in builders.iter_mut().enumerate() {
                match record.get(i) {
                    Some(v) if !is_missing(v) => builder.append_value(v),
                    _ => builder.append_null(),
                }
            }
            num_rows += 1;
        }

        let fields: Vec<Field> = headers
            .iter()
            .map(|name| Field::new(name, DataType::Utf8, true))
            .collect();
        let columns: Vec<ArrayRef> = builders
            .iter_mut()
            .map(|b| Arc::new(b.finish()) as ArrayRef)
            .collect();
        let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)
            .context("building dataset")?;

        debug!(rows = num_rows, columns = headers.len(), "dataset loaded");
        Ok(Self { batch })
    }

    pub fn headers(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.batch.schema().index_of(name).is_ok()
    }

    pub fn column(&self, name: &str) -> Option<&StringArray> {
        self.batch
            .column_by_name(name)
            .and_then(|c| c.as_any().downcast_ref::<StringArray>())
    }
}
