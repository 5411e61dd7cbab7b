use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// A synthetic outbound departure. Built per request and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightRecord {
    pub flight_number: String,
    pub airline: String,
    pub from_iata: String,
    pub from_city: String,
    pub to_iata: String,
    pub to_city: String,
    pub to_airport: String,
    #[serde(serialize_with = "serialize_utc")]
    pub departure_utc: DateTime<Utc>,
}

/// Renders a timestamp as ISO-8601 with microseconds and a `Z` suffix.
pub fn format_utc(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn serialize_utc<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_utc(ts))
}
