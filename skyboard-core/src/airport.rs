use std::collections::HashMap;

// ============================================================================
// Dataset column names
// ============================================================================

pub const FIELD_CITY: &str = "City";
pub const FIELD_STATE: &str = "State";
pub const FIELD_ICAO: &str = "ICAO";
pub const FIELD_IATA: &str = "IATA";
pub const FIELD_AIRPORT_NAME: &str = "Airport Name";
pub const FIELD_AIRLINES: &str = "Airlines";
pub const FIELD_DESTINATIONS: &str = "Destinations";

/// One row of the airport dataset, keyed by header name.
///
/// Values are stored trimmed. Columns the dataset does not carry read back as
/// the empty string, so callers never have to deal with a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AirportRecord {
    fields: HashMap<String, String>,
}

impl AirportRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from raw `(header, value)` pairs, trimming every value
    /// and normalizing the IATA column.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut record = Self::new();
        for (key, value) in pairs {
            record.set(key, value.as_ref());
        }
        record.normalize_iata();
        record
    }

    /// Stores `value` under `field`, stripped of surrounding whitespace.
    pub fn set(&mut self, field: impl Into<String>, value: &str) {
        self.fields.insert(field.into(), value.trim().to_string());
    }

    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn city(&self) -> &str {
        self.get(FIELD_CITY)
    }

    pub fn state(&self) -> &str {
        self.get(FIELD_STATE)
    }

    pub fn icao(&self) -> &str {
        self.get(FIELD_ICAO)
    }

    pub fn iata(&self) -> &str {
        self.get(FIELD_IATA)
    }

    pub fn name(&self) -> &str {
        self.get(FIELD_AIRPORT_NAME)
    }

    pub fn airlines(&self) -> &str {
        self.get(FIELD_AIRLINES)
    }

    pub fn destinations(&self) -> &str {
        self.get(FIELD_DESTINATIONS)
    }

    pub fn has_iata(&self) -> bool {
        !self.iata().is_empty()
    }

    /// Replaces placeholder IATA values (`-`, `N/A`, blank or absent) with
    /// the empty string.
    pub fn normalize_iata(&mut self) {
        let normalized = normalize_iata(self.iata());
        self.fields.insert(FIELD_IATA.to_string(), normalized);
    }
}

/// Maps the dataset's "no code" markers to an empty string.
pub fn normalize_iata(raw: &str) -> String {
    let code = raw.trim();
    if code.is_empty() || code == "-" || code.eq_ignore_ascii_case("N/A") {
        String::new()
    } else {
        code.to_string()
    }
}
