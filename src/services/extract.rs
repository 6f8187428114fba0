//! Slot extraction from raw user text.
//!
//! Every extractor is a pure function that returns `None` (or an empty
//! string) when nothing usable is found. Nothing here touches the network.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ExtractedSlots;
use crate::services::airports::CITY_TO_IATA;

static FLIGHT_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Za-z]{2}\s?\d{1,4})\b").expect("invalid flight number regex"));

static ORDINAL_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)(?:st|nd|rd|th)").expect("invalid ordinal regex"));

/// Tried in order. Each candidate is normalised (commas dropped, whitespace
/// collapsed) before being parsed with the paired format.
static DATE_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"\b[a-z]+\s+\d{1,2}(?:,\s*|\s+)\d{4}\b", "%B %d %Y"),
        (r"\b\d{4}/\d{2}/\d{2}\b", "%Y/%m/%d"),
        (r"\b\d{4}-\d{2}-\d{2}\b", "%Y-%m-%d"),
        (r"\b\d{1,2}/\d{1,2}/\d{4}\b", "%m/%d/%Y"),
    ]
    .into_iter()
    .map(|(pattern, format)| (Regex::new(pattern).expect("invalid date regex"), format))
    .collect()
});

static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("invalid punctuation regex"));

static WEATHER_PHRASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bweather\s+(.+)").expect("invalid weather regex"));

static ARRIVAL_AIRPORT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*Arrival Airport:\*\*[ \t]+(.+)").expect("invalid arrival airport regex")
});

const DEPARTURE_PREFIXES: &[&str] = &["from ", "leaving ", "departing "];

const ARRIVAL_PREFIXES: &[&str] = &[
    "to ",
    "arriving at ",
    "going to ",
    "destination ",
    "arriving in ",
];

const LOCATION_PREPOSITIONS: &[&str] = &["at", "in", "for"];

pub fn extract_flight_number(text: &str) -> Option<String> {
    FLIGHT_NUMBER
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().chars().filter(|c| !c.is_whitespace()).collect())
}

pub fn extract_date(text: &str) -> Option<NaiveDate> {
    let lowered = text.to_lowercase();
    let text = ORDINAL_SUFFIX.replace_all(&lowered, "${1}");

    for (pattern, format) in DATE_PATTERNS.iter() {
        for m in pattern.find_iter(&text) {
            let candidate = m
                .as_str()
                .replace(',', " ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            if let Ok(date) = NaiveDate::parse_from_str(&candidate, format) {
                return Some(date);
            }
        }
    }

    None
}

/// Returns `(departure, arrival)` IATA codes. A known city counts only when
/// it directly follows one of the role prefixes; when several cities claim
/// the same role, the one that appears first in the text wins.
pub fn extract_route_cities(text: &str) -> (Option<String>, Option<String>) {
    let lower = text.to_lowercase();
    let mut departure: Option<(usize, &str)> = None;
    let mut arrival: Option<(usize, &str)> = None;

    for &(city, iata) in CITY_TO_IATA {
        for (pos, _) in lower.match_indices(city) {
            let before = &lower[..pos];
            let slot = if DEPARTURE_PREFIXES.iter().any(|p| before.ends_with(p)) {
                &mut departure
            } else if ARRIVAL_PREFIXES.iter().any(|p| before.ends_with(p)) {
                &mut arrival
            } else {
                continue;
            };

            match *slot {
                Some((best, _)) if best <= pos => {}
                _ => *slot = Some((pos, iata)),
            }
        }
    }

    (
        departure.map(|(_, iata)| iata.to_string()),
        arrival.map(|(_, iata)| iata.to_string()),
    )
}

/// Best-effort location for a weather question. Empty when the text has no
/// words at all.
pub fn extract_weather_location(text: &str) -> String {
    let lowered = text.to_lowercase();
    let cleaned = PUNCTUATION.replace_all(&lowered, "");
    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    if let Some(rest) = WEATHER_PHRASE.captures(&cleaned).and_then(|c| c.get(1)) {
        let mut words: Vec<&str> = rest.as_str().split_whitespace().collect();
        // the place name follows the last preposition; filler words before it are dropped
        if let Some(idx) = words
            .iter()
            .rposition(|w| LOCATION_PREPOSITIONS.contains(w))
        {
            words.drain(..=idx);
        } else if words.first() == Some(&"like") {
            words.remove(0);
        }
        if words.last() == Some(&"airport") {
            words.pop();
        }
        if !words.is_empty() {
            return words.join(" ");
        }
    }

    cleaned
        .split_whitespace()
        .last()
        .map(str::to_string)
        .unwrap_or_default()
}

/// Reads the arrival airport back out of a rendered flight-status reply.
pub fn extract_destination_airport_name(status_text: &str) -> Option<String> {
    ARRIVAL_AIRPORT_LINE
        .captures(status_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|name| !name.is_empty())
}

pub fn extract_slots(text: &str) -> ExtractedSlots {
    let (departure, arrival) = extract_route_cities(text);
    let location = extract_weather_location(text);

    ExtractedSlots {
        flight_number: extract_flight_number(text),
        departure,
        arrival,
        date: extract_date(text),
        location: (!location.is_empty()).then_some(location),
    }
}
