use chrono::{DateTime, Duration, Utc};
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use skyboard_core::{AirportRecord, FlightRecord};

/// Placeholder carriers used for mock departures.
pub const AIRLINE_SAMPLES: [&str; 6] = [
    "Air Example",
    "Example Air",
    "TransExample",
    "Global Wings",
    "SkyConnect",
    "FlyDemo",
];

pub const DEFAULT_FLIGHT_COUNT: usize = 8;
pub const AIRPORT_DETAIL_FLIGHT_COUNT: usize = 12;

/// Departure window, in minutes after the reference instant.
const MIN_OFFSET_MINUTES: i64 = 30;
const MAX_OFFSET_MINUTES: i64 = 12 * 60;

const FALLBACK_SEED: &str = "XXX";

/// Generates mock outbound departures from the loaded airport table.
///
/// Output depends only on the origin code and the reference instant: the
/// random stream is ChaCha8 seeded from the uppercased origin, which is stable
/// across platforms and releases.
pub struct FlightGenerator<'a> {
    airports: &'a [AirportRecord],
}

impl<'a> FlightGenerator<'a> {
    pub fn new(airports: &'a [AirportRecord]) -> Self {
        Self { airports }
    }

    /// Up to `count` departures leaving from `origin`, relative to now.
    pub fn generate(&self, origin: &str, count: usize) -> Vec<FlightRecord> {
        self.generate_at(origin, count, Utc::now())
    }

    /// Up to `count` departures leaving from `origin` in the 30 minute to
    /// 12 hour window after `now`.
    pub fn generate_at(&self, origin: &str, count: usize, now: DateTime<Utc>) -> Vec<FlightRecord> {
        let candidates: Vec<&AirportRecord> = self
            .airports
            .iter()
            .filter(|airport| airport.has_iata() && airport.iata() != origin)
            .collect();

        if candidates.is_empty() {
            tracing::debug!("No destinations available for {:?}", origin);
            return Vec::new();
        }

        let mut rng = seeded_rng(origin);
        let amount = count.min(candidates.len());
        let picks = index::sample(&mut rng, candidates.len(), amount);

        let from_city = self
            .airports
            .iter()
            .find(|airport| airport.iata() == origin)
            .map(|airport| airport.city())
            .unwrap_or("");

        let mut flights = Vec::with_capacity(amount);
        for idx in picks.into_iter() {
            let dest = candidates[idx];

            let offset = rng.gen_range(MIN_OFFSET_MINUTES..=MAX_OFFSET_MINUTES);
            // u32 draw: a usize draw consumes a different amount of stream on 32-bit targets
            let airline = AIRLINE_SAMPLES[rng.gen_range(0..AIRLINE_SAMPLES.len() as u32) as usize];
            let number: u16 = rng.gen_range(100..=999);

            flights.push(FlightRecord {
                flight_number: format!("{}{}", carrier_prefix(airline), number),
                airline: airline.to_string(),
                from_iata: origin.to_string(),
                from_city: from_city.to_string(),
                to_iata: dest.iata().to_string(),
                to_city: dest.city().to_string(),
                to_airport: dest.name().to_string(),
                departure_utc: now + Duration::minutes(offset),
            });
        }

        tracing::debug!("Generated {} flights for {:?}", flights.len(), origin);
        flights
    }
}

fn seeded_rng(origin: &str) -> ChaCha8Rng {
    let key = if origin.is_empty() {
        FALLBACK_SEED.to_string()
    } else {
        origin.to_uppercase()
    };
    ChaCha8Rng::seed_from_u64(fnv1a(key.as_bytes()))
}

// 64-bit FNV-1a; std's hashers are not stable across releases.
fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    bytes.iter().fold(OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(PRIME)
    })
}

/// First two letters of the carrier's first word, uppercased.
fn carrier_prefix(airline: &str) -> String {
    airline
        .split_whitespace()
        .next()
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_alphabetic())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}
