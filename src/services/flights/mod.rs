pub mod aviationstack;

use async_trait::async_trait;

use crate::errors::LookupError;
use crate::models::{FlightQuery, FlightRecord};

/// Flight-data collaborator. An empty list means the lookup succeeded but
/// matched nothing.
#[async_trait]
pub trait FlightDataProvider: Send + Sync {
    async fn lookup(&self, query: &FlightQuery) -> Result<Vec<FlightRecord>, LookupError>;
}
