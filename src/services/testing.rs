//! In-memory collaborators for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::errors::LookupError;
use crate::models::{FlightQuery, FlightRecord, WeatherReport};
use crate::services::ai::{LlmProvider, Message};
use crate::services::flights::FlightDataProvider;
use crate::services::weather::WeatherProvider;

pub fn test_config() -> AppConfig {
    AppConfig {
        port: 3000,
        llm_provider: "openai".to_string(),
        openai_api_key: String::new(),
        openai_model: "gpt-3.5-turbo".to_string(),
        openai_url: "http://localhost".to_string(),
        ollama_url: "http://localhost:11434".to_string(),
        ollama_model: "llama3.2".to_string(),
        aviationstack_api_key: String::new(),
        aviationstack_url: "http://localhost".to_string(),
        openweather_api_key: String::new(),
        openweather_url: "http://localhost".to_string(),
        request_timeout_secs: 1,
        session_idle_secs: 1800,
        max_sessions: 100,
    }
}

/// A transport failure built without touching the network: the URL never parses.
pub fn transport_error() -> LookupError {
    let err = reqwest::Client::new()
        .get("not a url")
        .build()
        .expect_err("unparseable url must fail to build");
    LookupError::from(err)
}

pub fn sample_flight() -> FlightRecord {
    FlightRecord {
        airline: Some("American Airlines".to_string()),
        flight_iata: Some("AA1".to_string()),
        status: Some("active".to_string()),
        departure_airport: Some("John F Kennedy International".to_string()),
        departure_iata: Some("JFK".to_string()),
        departure_terminal: Some("8".to_string()),
        departure_gate: None,
        departure_scheduled: Some("2025-06-01T08:00:00+00:00".to_string()),
        arrival_airport: Some("Los Angeles International".to_string()),
        arrival_iata: Some("LAX".to_string()),
        arrival_terminal: Some("4".to_string()),
        arrival_gate: Some("45B".to_string()),
        arrival_scheduled: Some("2025-06-01T11:30:00+00:00".to_string()),
    }
}

enum FlightsOutcome {
    Found(Vec<FlightRecord>),
    Status(u16),
    Api(String),
    Transport,
}

pub struct MockFlights {
    outcome: FlightsOutcome,
    queries: Mutex<Vec<FlightQuery>>,
}

impl MockFlights {
    fn with(outcome: FlightsOutcome) -> Self {
        Self {
            outcome,
            queries: Mutex::new(vec![]),
        }
    }

    pub fn found(records: Vec<FlightRecord>) -> Self {
        Self::with(FlightsOutcome::Found(records))
    }

    pub fn status(code: u16) -> Self {
        Self::with(FlightsOutcome::Status(code))
    }

    pub fn api(message: &str) -> Self {
        Self::with(FlightsOutcome::Api(message.to_string()))
    }

    pub fn transport() -> Self {
        Self::with(FlightsOutcome::Transport)
    }

    pub fn queries(&self) -> Vec<FlightQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl FlightDataProvider for MockFlights {
    async fn lookup(&self, query: &FlightQuery) -> Result<Vec<FlightRecord>, LookupError> {
        self.queries.lock().unwrap().push(query.clone());
        match &self.outcome {
            FlightsOutcome::Found(records) => Ok(records.clone()),
            FlightsOutcome::Status(code) => Err(LookupError::Status(*code)),
            FlightsOutcome::Api(message) => Err(LookupError::Api(message.clone())),
            FlightsOutcome::Transport => Err(transport_error()),
        }
    }
}

pub struct MockWeather {
    available: bool,
    queried: Mutex<Vec<String>>,
}

impl MockWeather {
    pub fn new() -> Self {
        Self {
            available: true,
            queried: Mutex::new(vec![]),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            queried: Mutex::new(vec![]),
        }
    }

    pub fn queried(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherProvider for MockWeather {
    async fn current(&self, city: &str) -> Result<WeatherReport, LookupError> {
        self.queried.lock().unwrap().push(city.to_string());
        if !self.available {
            return Err(LookupError::Status(404));
        }
        Ok(WeatherReport {
            description: "clear sky".to_string(),
            temperature_celsius: 21.5,
            humidity_percent: 40.0,
        })
    }
}

pub struct FailingLlm;

#[async_trait]
impl LlmProvider for FailingLlm {
    async fn chat(&self, _system_prompt: &str, _messages: &[Message]) -> anyhow::Result<String> {
        anyhow::bail!("model offline")
    }
}

/// Replies with a fixed line and remembers what it was sent.
pub struct RecordingLlm {
    pub calls: Mutex<Vec<(String, Vec<Message>)>>,
}

impl RecordingLlm {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(vec![]),
        }
    }
}

#[async_trait]
impl LlmProvider for RecordingLlm {
    async fn chat(&self, system_prompt: &str, messages: &[Message]) -> anyhow::Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), messages.to_vec()));
        Ok("Happy to help with that!".to_string())
    }
}
