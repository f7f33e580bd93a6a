use std::collections::HashSet;
use std::path::Path;

/// Cell texts the loader treats as missing values rather than data.
pub const MISSING_MARKERS: [&str; 19] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null", "",
];

/// Result of coercing one cell to a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue {
    Numeric(f64),
    Missing,
    Invalid,
}

pub fn is_missing(raw: &str) -> bool {
    MISSING_MARKERS.contains(&raw)
}

/// Parse-or-mark-invalid for a single (possibly null) cell.
pub fn classify_cell(cell: Option<&str>) -> CellValue {
    match cell {
        None => CellValue::Missing,
        Some(raw) if is_missing(raw) => CellValue::Missing,
        Some(raw) => match raw.trim().parse::<f64>() {
            Ok(v) => CellValue::Numeric(v),
            Err(_) => CellValue::Invalid,
        },
    }
}

/// Header names as the rest of the pipeline sees them:
/// blanks become `Unnamed: <idx>`, repeats get `.1`, `.2`, ... suffixes.
pub fn normalize_headers<'a, I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let raw: Vec<String> = raw
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            if name.is_empty() {
                format!("Unnamed: {}", i)
            } else {
                name.to_string()
            }
        })
        .collect();

    let mut taken: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut out = Vec::with_capacity(raw.len());
    for name in raw {
        if taken.insert(name.clone()) {
            out.push(name);
            continue;
        }
        let mut n = 1;
        let renamed = loop {
            let candidate = format!("{}.{}", name, n);
            if !taken.contains(&candidate) {
                break candidate;
            }
            n += 1;
        };
        taken.insert(renamed.clone());
        out.push(renamed);
    }
    out
}

/// Line (1-based) of a quoted field still open at end of input, if any.
///
/// A quote only opens a field when it is the field's first byte; inside a
/// quoted field `""` is an escaped quote.
pub fn unterminated_quote_line(data: &[u8]) -> Option<usize> {
    let mut line = 1;
    let mut opened_at = None;
    let mut field_start = true;
    let mut bytes = data.iter().peekable();

    while let Some(&b) = bytes.next() {
        if opened_at.is_some() {
            if b == b'"' {
                if bytes.peek() == Some(&&b'"') {
                    bytes.next();
                } else {
                    opened_at = None;
                }
            } else if b == b'\n' {
                line += 1;
            }
            continue;
        }
        match b {
            b'"' if field_start => {
                opened_at = Some(line);
                field_start = false;
            }
            b',' | b'\r' => field_start = true,
            b'\n' => {
                line += 1;
                field_start = true;
            }
            _ => field_start = false,
        }
    }
    opened_at
}

/// Year encoded as the leading `<year>_` of a file's base name, e.g. `2023_NO2_IT.csv`.
/// Returns `None` when the name does not follow that convention.
pub fn year_from_file_name(path: &Path) -> Option<i64> {
    let name = path.file_name()?.to_str()?;
    let prefix = name.split('_').next()?;
    prefix.trim().parse::<i64>().ok()
}
