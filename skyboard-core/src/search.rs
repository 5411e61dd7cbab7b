use crate::airport::{
    AirportRecord, FIELD_AIRPORT_NAME, FIELD_CITY, FIELD_IATA, FIELD_ICAO, FIELD_STATE,
};
use crate::{CoreError, CoreResult};

/// Columns a free-text query is matched against.
pub const SEARCH_FIELDS: [&str; 5] = [
    FIELD_CITY,
    FIELD_STATE,
    FIELD_IATA,
    FIELD_ICAO,
    FIELD_AIRPORT_NAME,
];

pub const NO_IATA_MESSAGE: &str = "No IATA provided";
pub const NOT_FOUND_MESSAGE: &str = "Airport not found";

/// Case-insensitive substring search over [`SEARCH_FIELDS`].
///
/// The query is trimmed first; a blank query matches nothing. Results keep
/// dataset order.
pub fn search_airports<'a>(airports: &'a [AirportRecord], query: &str) -> Vec<&'a AirportRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let results: Vec<&AirportRecord> = airports
        .iter()
        .filter(|airport| {
            SEARCH_FIELDS
                .iter()
                .any(|field| airport.get(field).to_lowercase().contains(&needle))
        })
        .collect();

    tracing::debug!("Search {:?} matched {} airports", needle, results.len());
    results
}

/// First airport whose IATA code equals `code`, ignoring ASCII case.
pub fn find_by_iata<'a>(airports: &'a [AirportRecord], code: &str) -> Option<&'a AirportRecord> {
    if code.is_empty() {
        return None;
    }
    airports
        .iter()
        .find(|airport| airport.iata().eq_ignore_ascii_case(code))
}

/// Resolves the airport behind a user-supplied IATA segment.
pub fn lookup_airport<'a>(airports: &'a [AirportRecord], code: &str) -> CoreResult<&'a AirportRecord> {
    if code.is_empty() {
        return Err(CoreError::InvalidInput(NO_IATA_MESSAGE.to_string()));
    }
    find_by_iata(airports, code).ok_or_else(|| CoreError::NotFound(NOT_FOUND_MESSAGE.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airport::FIELD_AIRLINES;

    fn airport(city: &str, state: &str, iata: &str, icao: &str, name: &str) -> AirportRecord {
        AirportRecord::from_pairs([
            (FIELD_CITY, city),
            (FIELD_STATE, state),
            (FIELD_IATA, iata),
            (FIELD_ICAO, icao),
            (FIELD_AIRPORT_NAME, name),
            (FIELD_AIRLINES, "Delta"),
        ])
    }

    fn dataset() -> Vec<AirportRecord> {
        vec![
            airport("Atlanta", "Georgia", "ATL", "KATL", "Hartsfield-Jackson Atlanta International"),
            airport("Boston", "Massachusetts", "BOS", "KBOS", "Logan International"),
            airport("Austin", "Texas", "AUS", "KAUS", "Austin-Bergstrom International"),
            airport("Marfa", "Texas", "N/A", "KMRF", "Marfa Municipal"),
        ]
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        let airports = dataset();
        assert!(search_airports(&airports, "").is_empty());
        assert!(search_airports(&airports, "   \t").is_empty());
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let airports = dataset();
        let results = search_airports(&airports, "  tExAs ");
        let codes: Vec<&str> = results.iter().map(|a| a.icao()).collect();
        assert_eq!(codes, vec!["KAUS", "KMRF"]);
    }

    #[test]
    fn test_every_result_matches_a_search_field() {
        let airports = dataset();
        for query in ["at", "kb", "international", "os"] {
            for result in search_airports(&airports, query) {
                assert!(SEARCH_FIELDS
                    .iter()
                    .any(|field| result.get(field).to_lowercase().contains(query)));
            }
        }
    }

    #[test]
    fn test_non_search_fields_are_ignored() {
        let airports = dataset();
        assert!(search_airports(&airports, "delta").is_empty());
    }

    #[test]
    fn test_results_keep_dataset_order() {
        let airports = dataset();
        let results = search_airports(&airports, "international");
        let codes: Vec<&str> = results.iter().map(|a| a.iata()).collect();
        assert_eq!(codes, vec!["ATL", "BOS", "AUS"]);
    }

    #[test]
    fn test_lookup_airport() {
        let airports = dataset();
        assert_eq!(lookup_airport(&airports, "bos").unwrap().city(), "Boston");
        assert_eq!(
            lookup_airport(&airports, ""),
            Err(CoreError::InvalidInput(NO_IATA_MESSAGE.to_string()))
        );
        assert_eq!(
            lookup_airport(&airports, "ZZZZ"),
            Err(CoreError::NotFound(NOT_FOUND_MESSAGE.to_string()))
        );
    }

    #[test]
    fn test_blank_iata_never_matches() {
        let airports = dataset();
        assert!(find_by_iata(&airports, "").is_none());
    }
}
