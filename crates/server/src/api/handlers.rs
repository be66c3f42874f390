mod cards;
mod health;

use serde::Deserialize;

/// Query parameters for card lookups
#[derive(Debug, Deserialize)]
pub struct CardQuery {
    /// Card name to look up
    pub name: Option<String>,
}

impl CardQuery {
    /// The trimmed name, or `None` when missing or blank
    pub fn term(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

pub use cards::{get_corrections, lookup_card, market_card};
pub use health::health;
