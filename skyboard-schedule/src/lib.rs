pub mod generator;

pub use generator::{
    FlightGenerator, AIRLINE_SAMPLES, AIRPORT_DETAIL_FLIGHT_COUNT, DEFAULT_FLIGHT_COUNT,
};
