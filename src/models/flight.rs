use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Filters for a flight-data lookup. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightQuery {
    pub flight_iata: Option<String>,
    pub dep_iata: Option<String>,
    pub arr_iata: Option<String>,
    pub flight_date: Option<NaiveDate>,
}

impl FlightQuery {
    pub fn by_flight(flight_iata: &str) -> Self {
        Self {
            flight_iata: Some(flight_iata.to_string()),
            ..Default::default()
        }
    }

    pub fn by_route(dep_iata: &str, arr_iata: &str, date: NaiveDate) -> Self {
        Self {
            dep_iata: Some(dep_iata.to_string()),
            arr_iata: Some(arr_iata.to_string()),
            flight_date: Some(date),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FlightRecord {
    pub airline: Option<String>,
    pub flight_iata: Option<String>,
    pub status: Option<String>,
    pub departure_airport: Option<String>,
    pub departure_iata: Option<String>,
    pub departure_terminal: Option<String>,
    pub departure_gate: Option<String>,
    pub departure_scheduled: Option<String>,
    pub arrival_airport: Option<String>,
    pub arrival_iata: Option<String>,
    pub arrival_terminal: Option<String>,
    pub arrival_gate: Option<String>,
    pub arrival_scheduled: Option<String>,
}

impl FlightRecord {
    pub fn airline_or_default(&self) -> &str {
        self.airline.as_deref().unwrap_or("Unknown Airline")
    }

    pub fn flight_iata_or_default(&self) -> &str {
        self.flight_iata.as_deref().unwrap_or("Unknown Flight")
    }

    pub fn status_or_default(&self) -> &str {
        self.status.as_deref().unwrap_or("Status not available")
    }

    pub fn departure_airport_or_default(&self) -> &str {
        self.departure_airport
            .as_deref()
            .unwrap_or("Unknown Departure Airport")
    }

    pub fn arrival_airport_or_default(&self) -> &str {
        self.arrival_airport
            .as_deref()
            .unwrap_or("Unknown Arrival Airport")
    }

    pub fn departure_scheduled_or_default(&self) -> &str {
        self.departure_scheduled
            .as_deref()
            .unwrap_or("Unknown Departure Time")
    }

    pub fn arrival_scheduled_or_default(&self) -> &str {
        self.arrival_scheduled
            .as_deref()
            .unwrap_or("Unknown Arrival Time")
    }
}
