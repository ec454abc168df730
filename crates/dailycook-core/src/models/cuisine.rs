// ABOUTME: Supported cuisine names with a one-line fact for each
// ABOUTME: Used by cuisine listings; recipe matching compares cuisines case-insensitively
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook

/// Cuisines the catalog is curated for, paired with their fact line
pub const SUPPORTED_CUISINES: [(&str, &str); 7] = [
    (
        "Indian",
        "One of the world's most diverse cuisines with distinct regional flavors from Kashmir to Kerala.",
    ),
    (
        "Japanese",
        "Known for precision, seasonality, and umami - the fifth taste discovered in Japan.",
    ),
    ("Chinese", "8 great culinary traditions spanning 5000 years of history."),
    ("Italian", "Mediterranean freshness meets generations of regional traditions."),
    ("Mexican", "UNESCO-recognized cuisine blending indigenous and Spanish influences."),
    ("Thai", "Perfect balance of sweet, sour, salty, and spicy in every dish."),
    ("Global", "Fusion and modern interpretations from around the world."),
];

/// Look up the fact line for a cuisine, ignoring case
#[must_use]
pub fn cuisine_fact(cuisine: &str) -> Option<&'static str> {
    SUPPORTED_CUISINES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(cuisine.trim()))
        .map(|(_, fact)| *fact)
}
