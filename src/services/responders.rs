use chrono::NaiveDate;

use crate::errors::LookupError;
use crate::models::{Conversation, FlightQuery, FlightRecord, FlightStatusReply, Reply, Role};
use crate::services::ai::{LlmProvider, Message};
use crate::services::airports::city_for_iata;
use crate::services::flights::FlightDataProvider;
use crate::services::weather::WeatherProvider;

const WEATHER_NOT_AVAILABLE: &str = "Weather information not available.";

const FLIGHT_NOT_FOUND: &str = "I'm sorry, I couldn't find any data for that flight number. Please double-check the flight number and try again.";

const LOCATION_UNKNOWN: &str = "I'm sorry, I couldn't determine the location for the weather information. Please specify the city or airport.";

const DESTINATION_UNKNOWN: &str =
    "I'm sorry, I couldn't determine the destination for the weather information.";

const BAGGAGE_POLICY: &str = "**Baggage Policy Information:**\n\
- **Carry-on Baggage:** Passengers are allowed one carry-on bag and one personal item.\n\
- **Checked Baggage:** The allowance for checked bags depends on your ticket class.\n  \
- Economy Class: 1 bag up to 23 kg (50 lbs)\n  \
- Business Class: 2 bags up to 32 kg (70 lbs) each\n\
- **Excess Baggage Fees:** Additional fees apply for overweight or extra bags.\n\
- **Special Items:** Sports equipment and musical instruments may have special regulations.\n\
\nFor more detailed information, please visit our [Baggage Policy](https://www.exampleairline.com/baggage-policy) page or let me know if you have specific questions!";

const CANCELLATION_POLICY: &str = "**Cancellation and Change Policy:**\n\
- **24-Hour Flexibility:** You can change or cancel your flight within 24 hours of booking without any fees.\n\
- **Fees:** After 24 hours, fees may apply depending on your fare type.\n  \
- Economy Saver: Changes and cancellations are subject to a fee of $200.\n  \
- Economy Flex: Changes are free; cancellations are subject to a fee of $100.\n  \
- Business Class: Changes and cancellations are free.\n\
- **Refunds:** Refunds will be processed to the original form of payment within 7-10 business days.\n\
\nIf you need assistance with changing or cancelling your flight, please provide your booking reference or contact our customer service at 1-800-EXAMPLE.";

const FREQUENT_FLYER_INFO: &str = "**Frequent Flyer Program Information:**\n\
- **Enrollment:** Join our Frequent Flyer Program for free and start earning miles today!\n\
- **Earning Miles:** Earn miles on flights, hotel stays, car rentals, and with our partners.\n\
- **Redeeming Miles:** Redeem miles for flights, seat upgrades, and other rewards.\n\
- **Tier Benefits:** Enjoy exclusive benefits like priority boarding, lounge access, and extra baggage allowance as you move up tiers.\n\
\nTo enroll or learn more, visit our [Frequent Flyer Program](https://www.exampleairline.com/frequent-flyer) page or let me know if you have questions!";

pub async fn flight_status(
    flights: &dyn FlightDataProvider,
    weather: &dyn WeatherProvider,
    flight_number: &str,
) -> FlightStatusReply {
    let query = FlightQuery::by_flight(&flight_number.to_uppercase());

    let flight = match flights.lookup(&query).await {
        Ok(records) => match records.into_iter().next() {
            Some(flight) => flight,
            None => {
                tracing::info!(flight = flight_number, "no flight data found");
                return FlightStatusReply {
                    reply: Reply::not_found(FLIGHT_NOT_FOUND),
                    arrival_airport: None,
                    arrival_iata: None,
                };
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, flight = flight_number, "flight status lookup failed");
            return FlightStatusReply {
                reply: Reply::failed(flight_lookup_failure(&e)),
                arrival_airport: None,
                arrival_iata: None,
            };
        }
    };

    let departure_weather = weather_at(weather, flight.departure_iata.as_deref().unwrap_or("")).await;
    let arrival_weather = weather_at(weather, flight.arrival_iata.as_deref().unwrap_or("")).await;

    let text = format!(
        "**Flight Status for {}:**\n{}\n**Departure Weather at {}:**\n{}\n**Arrival Weather at {}:**\n{}",
        flight.flight_iata_or_default(),
        render_flight_details(&flight),
        flight.departure_airport_or_default(),
        departure_weather.text,
        flight.arrival_airport_or_default(),
        arrival_weather.text,
    );

    FlightStatusReply {
        reply: Reply::success(text),
        arrival_airport: Some(flight.arrival_airport_or_default().to_string()),
        arrival_iata: flight.arrival_iata,
    }
}

pub async fn flight_schedules(
    flights: &dyn FlightDataProvider,
    departure: &str,
    arrival: &str,
    date: NaiveDate,
) -> Reply {
    let departure = departure.to_uppercase();
    let arrival = arrival.to_uppercase();
    let query = FlightQuery::by_route(&departure, &arrival, date);
    let date = date.format("%Y-%m-%d").to_string();

    let records = match flights.lookup(&query).await {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(error = %e, %departure, %arrival, %date, "flight schedule lookup failed");
            return Reply::failed(flight_lookup_failure(&e));
        }
    };

    if records.is_empty() {
        return Reply::not_found(format!(
            "I'm sorry, I couldn't find any flights from {departure} to {arrival} on {date}."
        ));
    }

    let entries: Vec<String> = records.iter().map(render_schedule_entry).collect();
    Reply::success(format!(
        "Here are the available flights from {departure} to {arrival} on {date}:\n\n{}",
        entries.join("\n")
    ))
}

/// Current conditions for a city or IATA code. Codes in the airport table
/// are translated to their city before the lookup.
pub async fn weather_at(weather: &dyn WeatherProvider, location: &str) -> Reply {
    let location = location.trim();
    if location.is_empty() {
        return Reply::not_found(WEATHER_NOT_AVAILABLE);
    }

    let city = city_for_iata(location).unwrap_or(location);

    match weather.current(city).await {
        Ok(report) => Reply::success(format!(
            "- **Condition:** {}\n- **Temperature:** {}°C\n- **Humidity:** {}%",
            capitalize(&report.description),
            report.temperature_celsius,
            report.humidity_percent,
        )),
        Err(e) => {
            tracing::warn!(error = %e, city, "weather lookup failed");
            Reply::failed(WEATHER_NOT_AVAILABLE)
        }
    }
}

/// Standalone weather answer for a location pulled from the user's text.
pub async fn weather_for_location(weather: &dyn WeatherProvider, location: &str) -> Reply {
    if location.trim().is_empty() {
        return Reply::not_found(LOCATION_UNKNOWN);
    }

    let info = weather_at(weather, location).await;
    Reply {
        text: format!(
            "**Current weather at {}:**\n{}",
            title_case(location),
            info.text
        ),
        status: info.status,
    }
}

/// Weather at the arrival airport of a flight-status answer.
pub async fn destination_weather(
    weather: &dyn WeatherProvider,
    status: &FlightStatusReply,
) -> Reply {
    let Some(airport) = status.arrival_airport.as_deref() else {
        return Reply::not_found(DESTINATION_UNKNOWN);
    };

    let target = status.arrival_iata.as_deref().unwrap_or(airport);
    let info = weather_at(weather, target).await;
    Reply {
        text: format!("**Weather at {airport}:**\n{}", info.text),
        status: info.status,
    }
}

pub fn baggage_policy() -> Reply {
    Reply::success(BAGGAGE_POLICY)
}

pub fn cancellation_policy() -> Reply {
    Reply::success(CANCELLATION_POLICY)
}

pub fn frequent_flyer_info() -> Reply {
    Reply::success(FREQUENT_FLYER_INFO)
}

pub async fn generic_chat(llm: &dyn LlmProvider, conversation: &Conversation) -> Reply {
    let messages: Vec<Message> = conversation
        .turns()
        .iter()
        .filter(|t| t.role != Role::System)
        .map(Message::from)
        .collect();

    match llm.chat(conversation.system_prompt(), &messages).await {
        Ok(text) => Reply::success(text),
        Err(e) => {
            tracing::error!(error = %e, "chat completion failed");
            Reply::failed(format!("Error: {e:#}"))
        }
    }
}

fn flight_lookup_failure(err: &LookupError) -> String {
    match err {
        LookupError::Status(code) => format!(
            "Error: Unable to retrieve data (Status Code: {code}). Please try again later."
        ),
        LookupError::Api(message) => {
            format!("Sorry, there was an error retrieving flight data: {message}")
        }
        LookupError::Transport(_) => {
            "Error: Unable to retrieve data (the flight data service did not respond). Please try again later."
                .to_string()
        }
    }
}

fn render_flight_details(flight: &FlightRecord) -> String {
    format!(
        "- **Airline:** {}\n\
         - **Status:** {}\n\
         - **Departure Airport:** {}\n  \
         - **Terminal:** {}\n  \
         - **Gate:** {}\n\
         - **Scheduled Departure:** {}\n\
         - **Arrival Airport:** {}\n  \
         - **Terminal:** {}\n  \
         - **Gate:** {}\n\
         - **Scheduled Arrival:** {}\n",
        flight.airline_or_default(),
        capitalize(flight.status_or_default()),
        flight.departure_airport_or_default(),
        or_na(&flight.departure_terminal),
        or_na(&flight.departure_gate),
        flight.departure_scheduled_or_default(),
        flight.arrival_airport_or_default(),
        or_na(&flight.arrival_terminal),
        or_na(&flight.arrival_gate),
        flight.arrival_scheduled_or_default(),
    )
}

fn render_schedule_entry(flight: &FlightRecord) -> String {
    format!(
        "- **Airline:** {}\n  \
         **Flight Number:** {}\n  \
         **Status:** {}\n  \
         **Departure Airport:** {}\n    \
         - **Terminal:** {}\n    \
         - **Gate:** {}\n  \
         **Scheduled Departure:** {}\n  \
         **Arrival Airport:** {}\n    \
         - **Terminal:** {}\n    \
         - **Gate:** {}\n  \
         **Scheduled Arrival:** {}\n",
        flight.airline_or_default(),
        flight.flight_iata_or_default(),
        capitalize(flight.status_or_default()),
        flight.departure_airport_or_default(),
        or_na(&flight.departure_terminal),
        or_na(&flight.departure_gate),
        flight.departure_scheduled_or_default(),
        flight.arrival_airport_or_default(),
        or_na(&flight.arrival_terminal),
        or_na(&flight.arrival_gate),
        flight.arrival_scheduled_or_default(),
    )
}

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("N/A")
}

/// First letter upper-cased, the rest lower-cased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}
