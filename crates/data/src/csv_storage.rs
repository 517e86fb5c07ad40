use crate::error::StorageError;
use rollsig_core::PriceSeries;
use std::path::Path;
use tracing::debug;

/// Cell spellings read as a missing value.
const MISSING_MARKERS: [&str; 4] = ["nan", "na", "null", "none"];

pub struct CsvStorage;

impl CsvStorage {
    /// Reads one numeric column of a headed CSV file into a [`PriceSeries`].
    ///
    /// Empty cells, `NaN`/`NA`/`null`, infinities (including literals that
    /// overflow `f64`), and cells missing from a short row become missing
    /// values.
    ///
    /// # Errors
    /// Returns error if:
    /// - The file does not exist
    /// - The file has no data rows
    /// - The header lacks `column`
    /// - A non-empty cell is not a number
    pub fn read_column(path: &Path, column: &str) -> Result<PriceSeries, StorageError> {
        if !path.exists() {
            return Err(StorageError::NotFound(path.to_path_buf()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)?;

        let headers = reader.headers()?.clone();
        let records = reader.records().collect::<Result<Vec<_>, _>>()?;

        if records.is_empty() {
            return Err(StorageError::Empty);
        }

        let index = headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| StorageError::MissingColumn(column.to_string()))?;

        let values = records
            .iter()
            .enumerate()
            .map(|(i, record)| parse_cell(record.get(index), i + 1, column))
            .collect::<Result<Vec<_>, _>>()?;

        let series = PriceSeries::new(values);
        debug!(
            path = %path.display(),
            column,
            rows = series.len(),
            missing = series.missing_count(),
            "Read price column"
        );

        Ok(series)
    }
}

fn parse_cell(cell: Option<&str>, row: usize, column: &str) -> Result<Option<f64>, StorageError> {
    match cell {
        None | Some("") => Ok(None),
        Some(raw) if MISSING_MARKERS.iter().any(|m| raw.eq_ignore_ascii_case(m)) => Ok(None),
        Some(raw) => raw.parse::<f64>().map(Some).map_err(|_| StorageError::Parse {
            row,
            column: column.to_string(),
            value: raw.to_string(),
        }),
    }
}
