use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use skyboard_core::{search, AirportRecord};

use crate::loader::load_airports;
use crate::StoreResult;

/// Process-wide, read-mostly airport table.
///
/// Readers take an `Arc` snapshot and keep it for the whole request. A reload
/// parses the new file completely before the shared reference is swapped, so
/// a reader never observes a half-built table.
#[derive(Debug)]
pub struct AirportTable {
    airports: RwLock<Arc<[AirportRecord]>>,
}

impl Default for AirportTable {
    fn default() -> Self {
        Self::from_records(Vec::new())
    }
}

impl AirportTable {
    pub fn from_records(records: Vec<AirportRecord>) -> Self {
        Self {
            airports: RwLock::new(records.into()),
        }
    }

    pub fn load(path: &Path) -> StoreResult<Self> {
        Ok(Self::from_records(load_airports(path)?))
    }

    /// Current contents. Later reloads do not affect the returned snapshot.
    pub fn snapshot(&self) -> Arc<[AirportRecord]> {
        self.airports.read().clone()
    }

    /// Re-reads `path` and swaps it in. On error the current table is kept.
    pub fn reload(&self, path: &Path) -> StoreResult<usize> {
        let fresh: Arc<[AirportRecord]> = load_airports(path)?.into();
        let count = fresh.len();
        *self.airports.write() = fresh;
        tracing::info!("Airport table reloaded with {} entries", count);
        Ok(count)
    }

    pub fn find_by_iata(&self, code: &str) -> Option<AirportRecord> {
        search::find_by_iata(&self.snapshot(), code).cloned()
    }

    pub fn len(&self) -> usize {
        self.airports.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyboard_core::airport::{FIELD_CITY, FIELD_IATA};
    use std::path::PathBuf;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    #[test]
    fn test_load_fixture() {
        let table = AirportTable::load(&fixture("airports.csv")).expect("Failed to load fixture");
        assert_eq!(table.len(), 8);
        assert_eq!(table.find_by_iata("sfo").unwrap().city(), "San Francisco");
    }

    #[test]
    fn test_snapshot_survives_reload() {
        let table = AirportTable::from_records(vec![AirportRecord::from_pairs([
            (FIELD_CITY, "Nowhere"),
            (FIELD_IATA, "NWH"),
        ])]);
        let before = table.snapshot();

        let count = table.reload(&fixture("airports.csv")).unwrap();

        assert_eq!(count, 8);
        assert_eq!(before.len(), 1);
        assert_eq!(before[0].iata(), "NWH");
        assert!(table.find_by_iata("NWH").is_none());
    }

    #[test]
    fn test_failed_reload_keeps_current_table() {
        let table = AirportTable::load(&fixture("airports.csv")).unwrap();
        assert!(table.reload(&fixture("missing.csv")).is_err());
        assert_eq!(table.len(), 8);
    }

    #[test]
    fn test_default_table_is_empty() {
        let table = AirportTable::default();
        assert!(table.is_empty());
        assert!(table.find_by_iata("ATL").is_none());
    }
}
