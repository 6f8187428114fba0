use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ExtractedSlots {
    pub flight_number: Option<String>,
    pub departure: Option<String>,
    pub arrival: Option<String>,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
}
