/// City names (lowercase) to IATA codes, in lookup order.
pub const CITY_TO_IATA: &[(&str, &str)] = &[
    ("new york", "JFK"),
    ("los angeles", "LAX"),
    ("san francisco", "SFO"),
    ("chicago", "ORD"),
    ("miami", "MIA"),
    ("california", "LAX"),
    ("atlanta", "ATL"),
    ("dallas", "DFW"),
    ("denver", "DEN"),
    ("seattle", "SEA"),
    ("boston", "BOS"),
];

/// IATA codes (uppercase) to the city name the weather service expects.
pub const IATA_TO_CITY: &[(&str, &str)] = &[
    ("JFK", "New York"),
    ("LAX", "Los Angeles"),
    ("SFO", "San Francisco"),
    ("ORD", "Chicago"),
    ("MIA", "Miami"),
    ("ATL", "Atlanta"),
    ("DFW", "Dallas"),
    ("DEN", "Denver"),
    ("SEA", "Seattle"),
    ("BOS", "Boston"),
];

pub fn city_for_iata(code: &str) -> Option<&'static str> {
    let code = code.trim();
    IATA_TO_CITY
        .iter()
        .find(|(iata, _)| iata.eq_ignore_ascii_case(code))
        .map(|(_, city)| *city)
}
