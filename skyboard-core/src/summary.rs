use serde::Serialize;

use crate::airport::AirportRecord;
use crate::flight::FlightRecord;

// ============================================================================
// Public response shapes
// ============================================================================

/// Row of the full airport listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AirportListing {
    pub city: String,
    pub state: String,
    pub icao: String,
    pub iata: String,
    pub name: String,
}

/// Search hit: listing fields plus carrier information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AirportSummary {
    pub city: String,
    pub state: String,
    pub icao: String,
    pub iata: String,
    pub name: String,
    pub airlines: String,
    pub destinations: String,
}

/// Single-airport view with its generated departures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AirportDetail {
    #[serde(flatten)]
    pub airport: AirportSummary,
    pub flights: Vec<FlightRecord>,
}

impl From<&AirportRecord> for AirportListing {
    fn from(record: &AirportRecord) -> Self {
        Self {
            city: record.city().to_string(),
            state: record.state().to_string(),
            icao: record.icao().to_string(),
            iata: record.iata().to_string(),
            name: record.name().to_string(),
        }
    }
}

impl From<&AirportRecord> for AirportSummary {
    fn from(record: &AirportRecord) -> Self {
        Self {
            city: record.city().to_string(),
            state: record.state().to_string(),
            icao: record.icao().to_string(),
            iata: record.iata().to_string(),
            name: record.name().to_string(),
            airlines: record.airlines().to_string(),
            destinations: record.destinations().to_string(),
        }
    }
}

impl AirportDetail {
    pub fn new(record: &AirportRecord, flights: Vec<FlightRecord>) -> Self {
        Self {
            airport: AirportSummary::from(record),
            flights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airport::{FIELD_AIRPORT_NAME, FIELD_CITY, FIELD_IATA};

    #[test]
    fn test_missing_fields_serialize_as_empty_strings() {
        let record = AirportRecord::from_pairs([(FIELD_CITY, "Boston"), (FIELD_IATA, "BOS")]);
        let json = serde_json::to_value(AirportSummary::from(&record)).unwrap();

        assert_eq!(json["city"], "Boston");
        assert_eq!(json["state"], "");
        assert_eq!(json["airlines"], "");
        assert_eq!(json["destinations"], "");
        assert_eq!(json.as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_listing_omits_carrier_fields() {
        let record = AirportRecord::from_pairs([(FIELD_AIRPORT_NAME, "Logan International")]);
        let json = serde_json::to_value(AirportListing::from(&record)).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();

        assert_eq!(keys.len(), 5);
        assert!(json.get("airlines").is_none());
        assert_eq!(json["name"], "Logan International");
    }

    #[test]
    fn test_detail_is_flat_with_flights() {
        let record = AirportRecord::from_pairs([(FIELD_IATA, "BOS")]);
        let json = serde_json::to_value(AirportDetail::new(&record, Vec::new())).unwrap();

        assert_eq!(json["iata"], "BOS");
        assert_eq!(json["flights"], serde_json::json!([]));
        assert_eq!(json.as_object().unwrap().len(), 8);
    }
}
