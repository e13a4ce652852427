use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::isotherm::{Isotherm, IsothermPoint};
use crate::{BetError, Result};

#[derive(Deserialize)]
struct Row(f64, f64);

/// Read an isotherm from two-column CSV data.
///
/// Any row that is not exactly two finite numbers, with non-negative uptake, is skipped. Header
/// and comment lines from instrument exports fall out this way. The surviving points are sorted
/// ascending by pressure ratio, ties by uptake.
///
/// # Errors
/// Returns an error if the underlying reader fails, or [`BetError::EmptyDataset`] if no row
/// survives.
pub fn load_isotherm_from_reader<R: Read>(reader: R) -> Result<Isotherm> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut points = vec![];
    let mut dropped = 0usize;

    for (line, result) in rdr.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                log::debug!("dropping row {line}: {e}");
                dropped += 1;
                continue;
            }
        };

        if record.len() != 2 {
            log::debug!("dropping row {line}: expected 2 fields, found {}", record.len());
            dropped += 1;
            continue;
        }

        let point = record
            .deserialize::<Row>(None)
            .map_err(BetError::from)
            .and_then(|Row(x, y)| IsothermPoint::new(x, y));

        match point {
            Ok(point) => points.push(point),
            Err(e) => {
                log::debug!("dropping row {line}: {e}");
                dropped += 1;
            }
        }
    }

    log::info!(
        "loaded {} isotherm points ({dropped} rows dropped)",
        points.len()
    );

    Isotherm::new(points)
}

/// Read an isotherm from an in-memory string. See [`load_isotherm_from_reader`].
///
/// # Errors
/// Returns [`BetError::EmptyDataset`] if no row parses as a pair of numbers.
pub fn load_isotherm_from_str(data: &str) -> Result<Isotherm> {
    load_isotherm_from_reader(data.as_bytes())
}

/// Read an isotherm from a CSV file on disk. See [`load_isotherm_from_reader`].
///
/// # Errors
/// Returns an error if the file cannot be read or contains no usable rows.
pub fn load_isotherm_from_file(filepath: &Path) -> Result<Isotherm> {
    log::info!("reading isotherm from {filepath:?}");
    let file = fs::read(filepath)?;
    load_isotherm_from_reader(&file[..])
}
