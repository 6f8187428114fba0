use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{ExtractedSlots, IntentFlags};
use crate::services::extract::extract_slots;
use crate::services::intent::classify;

/// Which responder handles an utterance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    FlightStatus {
        flight_number: String,
        with_weather: bool,
    },
    FlightSchedules {
        departure: String,
        arrival: String,
        date: NaiveDate,
    },
    Weather {
        location: String,
    },
    Baggage,
    Cancellation,
    FrequentFlyer,
    GenericChat,
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::FlightStatus { .. } => "flight_status",
            Route::FlightSchedules { .. } => "flight_schedules",
            Route::Weather { .. } => "weather",
            Route::Baggage => "baggage",
            Route::Cancellation => "cancellation",
            Route::FrequentFlyer => "frequent_flyer",
            Route::GenericChat => "generic_chat",
        }
    }
}

pub fn choose_route(text: &str) -> Route {
    let slots = extract_slots(text);
    let flags = classify(text);
    route_for(&slots, &flags)
}

/// Fixed priority: structured lookups first, keyword-only intents next, the
/// chat model last.
pub fn route_for(slots: &ExtractedSlots, flags: &IntentFlags) -> Route {
    if let Some(flight_number) = &slots.flight_number {
        if flags.flight_status {
            return Route::FlightStatus {
                flight_number: flight_number.clone(),
                with_weather: flags.weather,
            };
        }
    }

    if let (Some(departure), Some(arrival), Some(date)) =
        (&slots.departure, &slots.arrival, slots.date)
    {
        return Route::FlightSchedules {
            departure: departure.clone(),
            arrival: arrival.clone(),
            date,
        };
    }

    if flags.weather && slots.flight_number.is_none() {
        return Route::Weather {
            location: slots.location.clone().unwrap_or_default(),
        };
    }

    if flags.baggage {
        Route::Baggage
    } else if flags.cancellation {
        Route::Cancellation
    } else if flags.frequent_flyer {
        Route::FrequentFlyer
    } else {
        Route::GenericChat
    }
}
