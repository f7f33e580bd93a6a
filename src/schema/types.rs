// src/schema/types.rs

use std::collections::BTreeSet;
use std::fmt;

/// Column names every air-quality export must carry, in file order.
pub const EXPECTED_COLUMNS: [&str; 27] = [
    "Country",
    "Air Quality Network",
    "Air Quality Network Name",
    "Air Quality Station EoI Code",
    "Air Quality Station Name",
    "Sampling Point Id",
    "Air Pollutant",
    "Air Pollutant Description",
    "Data Aggregation Process Id",
    "Data Aggregation Process",
    "Year",
    "Air Pollution Level",
    "Unit Of Air Pollution Level",
    "Data Coverage",
    "Verification",
    "Air Quality Station Type",
    "Air Quality Station Area",
    "Longitude",
    "Latitude",
    "Altitude",
    "City",
    "City Code",
    "City Population",
    "Source Of Data Flow",
    "Calculation Time",
    "Link to raw data (only E1a/validated data from AQ e-Reporting)",
    "Observation Frequency",
];

/// Columns whose non-missing cells must parse as numbers.
pub const NUMERIC_COLUMNS: [&str; 8] = [
    "Year",
    "Air Pollution Level",
    "Data Coverage",
    "Verification",
    "Longitude",
    "Latitude",
    "Altitude",
    "City Population",
];

/// Column holding the measurement year.
pub const YEAR_COLUMN: &str = "Year";

/// How a file header deviates from the standard schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderMismatch {
    /// Same names, different order.
    Order,
    /// Name sets differ. At least one side is non-empty.
    Columns {
        missing: BTreeSet<String>,
        unexpected: BTreeSet<String>,
    },
}

/// Renders a set of names as `{'a', 'b'}`, sorted.
pub struct NameSet<'a>(pub &'a BTreeSet<String>);

impl fmt::Display for NameSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{}'", name)?;
        }
        f.write_str("}")
    }
}
