use std::io::Read;
use std::path::Path;

use skyboard_core::AirportRecord;

use crate::{StoreError, StoreResult};

/// Loads the airport dataset from a CSV file with a header row.
pub fn load_airports(path: &Path) -> StoreResult<Vec<AirportRecord>> {
    if !path.exists() {
        return Err(StoreError::MissingDataFile(path.to_path_buf()));
    }

    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    let airports = read_airports(file)?;
    tracing::info!("Loaded {} airports from {}", airports.len(), path.display());
    Ok(airports)
}

/// Parses CSV airport rows from any reader.
///
/// Short rows are padded with empty values; surplus cells past the header
/// width are dropped.
pub fn read_airports<R: Read>(reader: R) -> StoreResult<Vec<AirportRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut airports = Vec::new();

    for row in csv_reader.records() {
        let row = row?;
        let pairs = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| (header.to_string(), row.get(idx).unwrap_or("")));
        airports.push(AirportRecord::from_pairs(pairs));
    }

    Ok(airports)
}
