use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    FlightStatus,
    Weather,
    Baggage,
    Cancellation,
    FrequentFlyer,
}

impl Intent {
    pub const ALL: [Intent; 5] = [
        Intent::FlightStatus,
        Intent::Weather,
        Intent::Baggage,
        Intent::Cancellation,
        Intent::FrequentFlyer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::FlightStatus => "flight_status",
            Intent::Weather => "weather",
            Intent::Baggage => "baggage",
            Intent::Cancellation => "cancellation",
            Intent::FrequentFlyer => "frequent_flyer",
        }
    }
}

/// Which intents an utterance mentions. Flags are independent.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct IntentFlags {
    pub flight_status: bool,
    pub weather: bool,
    pub baggage: bool,
    pub cancellation: bool,
    pub frequent_flyer: bool,
}

impl IntentFlags {
    pub fn get(&self, intent: Intent) -> bool {
        match intent {
            Intent::FlightStatus => self.flight_status,
            Intent::Weather => self.weather,
            Intent::Baggage => self.baggage,
            Intent::Cancellation => self.cancellation,
            Intent::FrequentFlyer => self.frequent_flyer,
        }
    }

    pub fn set(&mut self, intent: Intent, value: bool) {
        match intent {
            Intent::FlightStatus => self.flight_status = value,
            Intent::Weather => self.weather = value,
            Intent::Baggage => self.baggage = value,
            Intent::Cancellation => self.cancellation = value,
            Intent::FrequentFlyer => self.frequent_flyer = value,
        }
    }
}
