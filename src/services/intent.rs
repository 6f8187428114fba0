use crate::models::{Intent, IntentFlags};

/// Keyword table driving the classifiers. Matching is case-insensitive
/// substring containment, so false positives are expected.
pub const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (Intent::FlightStatus, &["status", "delayed", "delay"]),
    (
        Intent::Weather,
        &["weather", "temperature", "forecast", "weather like"],
    ),
    (
        Intent::Baggage,
        &[
            "baggage",
            "luggage",
            "bag",
            "carry-on",
            "checked bag",
            "baggage allowance",
            "baggage policy",
            "baggage fees",
        ],
    ),
    (
        Intent::Cancellation,
        &[
            "cancel",
            "change",
            "refund",
            "reschedule",
            "cancellation policy",
            "change flight",
        ],
    ),
    (
        Intent::FrequentFlyer,
        &[
            "frequent flyer",
            "loyalty program",
            "miles",
            "points",
            "membership",
            "reward program",
        ],
    ),
];

pub fn keywords(intent: Intent) -> &'static [&'static str] {
    INTENT_KEYWORDS
        .iter()
        .find(|(i, _)| *i == intent)
        .map(|(_, words)| *words)
        .unwrap_or(&[])
}

pub fn matches(intent: Intent, text: &str) -> bool {
    let lower = text.to_lowercase();
    contains_any(&lower, keywords(intent))
}

pub fn classify(text: &str) -> IntentFlags {
    let lower = text.to_lowercase();
    let mut flags = IntentFlags::default();
    for (intent, words) in INTENT_KEYWORDS {
        flags.set(*intent, contains_any(&lower, words));
    }
    flags
}

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_intent_has_keywords() {
        for intent in Intent::ALL {
            assert!(!keywords(intent).is_empty(), "{} has no keywords", intent.as_str());
        }
    }

    #[test]
    fn test_every_keyword_flags_its_intent() {
        for (intent, words) in INTENT_KEYWORDS {
            for word in *words {
                let text = format!("Question about {}", word.to_uppercase());
                assert!(matches(*intent, &text), "{word:?} should flag {intent:?}");
                assert!(classify(&text).get(*intent), "{word:?} should flag {intent:?}");
            }
        }
    }

    #[test]
    fn test_flags_are_independent() {
        let flags = classify("Is my flight delayed, and what's the weather? Also my bag.");
        assert!(flags.flight_status);
        assert!(flags.weather);
        assert!(flags.baggage);
        assert!(!flags.cancellation);
        assert!(!flags.frequent_flyer);
    }

    #[test]
    fn test_substring_false_positive_is_accepted() {
        // "exchange" contains "change"
        assert!(matches(Intent::Cancellation, "currency exchange at the airport"));
    }

    #[test]
    fn test_plain_greeting_flags_nothing() {
        assert_eq!(classify("hello there"), IntentFlags::default());
    }
}
