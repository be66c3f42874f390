//! Raw provider record → [`Candidate`] conversion helpers

use crate::{Candidate, CardSource};

/// Parse price text such as `"$12.50"` or `"USD 7"`.
///
/// Everything except ASCII digits and `.` is dropped before parsing.
/// Returns `None` for empty, unparsable or non-finite input.
pub fn parse_price(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    // "$12.50.99" keeps both dots and fails to parse
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// [`parse_price`] with missing or malformed values mapped to 0.
pub fn price_or_zero(text: Option<&str>) -> f64 {
    text.and_then(parse_price).unwrap_or(0.0)
}

impl Candidate {
    /// Start a candidate with no price or image. Returns `None` for a blank
    /// name.
    pub fn new(name: impl Into<String>, source: CardSource) -> Option<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name,
            price: 0.0,
            image: None,
            source,
            set: None,
            number: None,
            rarity: None,
            low_price: None,
            high_price: None,
            loose_price: None,
            last_sold_price: None,
        })
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = if price.is_finite() && price >= 0.0 {
            price
        } else {
            0.0
        };
        self
    }

    pub fn with_image(mut self, image: Option<impl Into<String>>) -> Self {
        self.image = image.map(Into::into).filter(|s: &String| !s.is_empty());
        self
    }

    pub fn with_set(mut self, set: Option<String>) -> Self {
        self.set = non_blank(set);
        self
    }

    pub fn with_number(mut self, number: Option<String>) -> Self {
        self.number = non_blank(number);
        self
    }

    pub fn with_rarity(mut self, rarity: Option<String>) -> Self {
        self.rarity = non_blank(rarity);
        self
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
