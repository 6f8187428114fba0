pub mod openweather;

use async_trait::async_trait;

use crate::errors::LookupError;
use crate::models::WeatherReport;

/// Current-conditions collaborator, looked up by city name.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, city: &str) -> Result<WeatherReport, LookupError>;
}
