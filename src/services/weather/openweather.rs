use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::WeatherProvider;
use crate::errors::LookupError;
use crate::models::WeatherReport;
use crate::services::http_client;

pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: http_client(timeout)?,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &str) -> Result<WeatherReport, LookupError> {
        let resp = self
            .client
            .get(format!("{}/weather", self.base_url))
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body: CurrentWeather = resp.json().await?;
        body.try_into()
    }
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    #[serde(default)]
    weather: Vec<Condition>,
    main: MainReadings,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
    humidity: f64,
}

impl TryFrom<CurrentWeather> for WeatherReport {
    type Error = LookupError;

    fn try_from(body: CurrentWeather) -> Result<Self, Self::Error> {
        let description = body
            .weather
            .into_iter()
            .next()
            .map(|c| c.description)
            .ok_or_else(|| LookupError::Api("missing weather conditions".to_string()))?;

        Ok(WeatherReport {
            description,
            temperature_celsius: body.main.temp,
            humidity_percent: body.main.humidity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_current_weather() {
        let json = r#"{
            "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
            "main": {"temp": 18.4, "feels_like": 17.9, "humidity": 72},
            "name": "Boston"
        }"#;
        let body: CurrentWeather = serde_json::from_str(json).unwrap();
        let report = WeatherReport::try_from(body).unwrap();
        assert_eq!(report.description, "light rain");
        assert_eq!(report.temperature_celsius, 18.4);
        assert_eq!(report.humidity_percent, 72.0);
    }

    #[test]
    fn test_missing_conditions_is_an_error() {
        let json = r#"{"weather": [], "main": {"temp": 1.0, "humidity": 50}}"#;
        let body: CurrentWeather = serde_json::from_str(json).unwrap();
        assert!(matches!(
            WeatherReport::try_from(body),
            Err(LookupError::Api(_))
        ));
    }
}
