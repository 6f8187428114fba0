use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::FlightDataProvider;
use crate::errors::LookupError;
use crate::models::{FlightQuery, FlightRecord};
use crate::services::http_client;

pub struct AviationStackProvider {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl AviationStackProvider {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: http_client(timeout)?,
        })
    }

    fn params(&self, query: &FlightQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![("access_key", self.api_key.clone())];
        if let Some(flight) = &query.flight_iata {
            params.push(("flight_iata", flight.clone()));
        }
        if let Some(dep) = &query.dep_iata {
            params.push(("dep_iata", dep.clone()));
        }
        if let Some(arr) = &query.arr_iata {
            params.push(("arr_iata", arr.clone()));
        }
        if let Some(date) = query.flight_date {
            params.push(("flight_date", date.format("%Y-%m-%d").to_string()));
        }
        params
    }
}

#[async_trait]
impl FlightDataProvider for AviationStackProvider {
    async fn lookup(&self, query: &FlightQuery) -> Result<Vec<FlightRecord>, LookupError> {
        let resp = self
            .client
            .get(format!("{}/flights", self.base_url))
            .query(&self.params(query))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body: FlightsResponse = resp.json().await?;
        parse_flights(body)
    }
}

#[derive(Debug, Deserialize)]
struct FlightsResponse {
    #[serde(default)]
    data: Option<Vec<FlightData>>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FlightData {
    #[serde(default)]
    flight_status: Option<String>,
    #[serde(default)]
    departure: Option<Endpoint>,
    #[serde(default)]
    arrival: Option<Endpoint>,
    #[serde(default)]
    airline: Option<Named>,
    #[serde(default)]
    flight: Option<FlightCode>,
}

#[derive(Debug, Default, Deserialize)]
struct Endpoint {
    #[serde(default)]
    airport: Option<String>,
    #[serde(default)]
    iata: Option<String>,
    #[serde(default)]
    terminal: Option<String>,
    #[serde(default)]
    gate: Option<String>,
    #[serde(default)]
    scheduled: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Named {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FlightCode {
    #[serde(default)]
    iata: Option<String>,
}

fn parse_flights(body: FlightsResponse) -> Result<Vec<FlightRecord>, LookupError> {
    if let Some(error) = body.error {
        let message = error
            .message
            .unwrap_or_else(|| "unknown error".to_string());
        return Err(LookupError::Api(message));
    }

    Ok(body
        .data
        .unwrap_or_default()
        .into_iter()
        .map(FlightRecord::from)
        .collect())
}

impl From<FlightData> for FlightRecord {
    fn from(data: FlightData) -> Self {
        let departure = data.departure.unwrap_or_default();
        let arrival = data.arrival.unwrap_or_default();
        FlightRecord {
            airline: data.airline.and_then(|a| a.name),
            flight_iata: data.flight.and_then(|f| f.iata),
            status: data.flight_status,
            departure_airport: departure.airport,
            departure_iata: departure.iata,
            departure_terminal: departure.terminal,
            departure_gate: departure.gate,
            departure_scheduled: departure.scheduled,
            arrival_airport: arrival.airport,
            arrival_iata: arrival.iata,
            arrival_terminal: arrival.terminal,
            arrival_gate: arrival.gate,
            arrival_scheduled: arrival.scheduled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Vec<FlightRecord>, LookupError> {
        parse_flights(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn test_parse_flight_record() {
        let json = r#"{
            "pagination": {"limit": 100, "offset": 0, "count": 1, "total": 1},
            "data": [{
                "flight_date": "2025-06-01",
                "flight_status": "active",
                "departure": {"airport": "John F Kennedy International", "iata": "JFK", "terminal": "8", "gate": null, "scheduled": "2025-06-01T08:00:00+00:00"},
                "arrival": {"airport": "Los Angeles International", "iata": "LAX", "terminal": "4", "gate": "45B", "scheduled": "2025-06-01T11:30:00+00:00"},
                "airline": {"name": "American Airlines", "iata": "AA"},
                "flight": {"number": "1", "iata": "AA1"}
            }]
        }"#;
        let flights = parse(json).unwrap();
        assert_eq!(flights.len(), 1);
        let f = &flights[0];
        assert_eq!(f.airline.as_deref(), Some("American Airlines"));
        assert_eq!(f.flight_iata.as_deref(), Some("AA1"));
        assert_eq!(f.departure_iata.as_deref(), Some("JFK"));
        assert_eq!(f.departure_gate, None);
        assert_eq!(f.arrival_gate.as_deref(), Some("45B"));
    }

    #[test]
    fn test_parse_empty_data() {
        assert!(parse(r#"{"data": []}"#).unwrap().is_empty());
        assert!(parse(r#"{}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_api_error() {
        let json = r#"{"error": {"code": "usage_limit_reached", "message": "Your monthly usage limit has been reached."}}"#;
        match parse(json) {
            Err(LookupError::Api(msg)) => {
                assert_eq!(msg, "Your monthly usage limit has been reached.")
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }
}
