//! Synthetic candidate for degraded lookups

use std::ops::Range;

use rand::Rng;

use crate::{Candidate, CardSource};

const DEFAULT_PRICE_RANGE: Range<u32> = 10..110;
const DEFAULT_PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=200&width=150";

/// Builds the placeholder returned when providers failed and nothing was
/// found. The price is a random whole number in `price_range`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockFallback {
    price_range: Range<u32>,
    placeholder_image: String,
}

impl Default for MockFallback {
    fn default() -> Self {
        Self {
            price_range: DEFAULT_PRICE_RANGE,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl MockFallback {
    /// An empty range collapses to its start.
    pub fn new(price_range: Range<u32>, placeholder_image: impl Into<String>) -> Self {
        Self {
            price_range,
            placeholder_image: placeholder_image.into(),
        }
    }

    pub fn price_range(&self) -> &Range<u32> {
        &self.price_range
    }

    pub(crate) fn candidate(&self, term: &str) -> Candidate {
        let price = if self.price_range.is_empty() {
            self.price_range.start
        } else {
            rand::thread_rng().gen_range(self.price_range.clone())
        };

        Candidate {
            name: term.trim().to_string(),
            price: f64::from(price),
            image: Some(self.placeholder_image.clone()),
            source: CardSource::Mock,
            set: None,
            number: None,
            rarity: None,
            low_price: None,
            high_price: None,
            loose_price: None,
            last_sold_price: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_candidate_in_range() {
        let fallback = MockFallback::default();
        for _ in 0..200 {
            let candidate = fallback.candidate("Charizard");
            assert_eq!(candidate.source, CardSource::Mock);
            assert_eq!(candidate.name, "Charizard");
            assert!((10.0..110.0).contains(&candidate.price));
            assert_eq!(candidate.price.fract(), 0.0);
            assert_eq!(candidate.image.as_deref(), Some(DEFAULT_PLACEHOLDER_IMAGE));
        }
    }

    #[test]
    fn test_empty_range_uses_start() {
        let fallback = MockFallback::new(25..25, "/img.svg");
        let candidate = fallback.candidate("Pikachu");
        assert_eq!(candidate.price, 25.0);
        assert_eq!(candidate.image.as_deref(), Some("/img.svg"));
    }
}
