use serde::{Deserialize, Serialize};

/// One product row of the price search table.
///
/// Prices are kept as the text shown on the page; turning them into numbers
/// is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRow {
    pub name: String,
    /// "Loose" (ungraded) price column
    pub loose_price: Option<String>,
    /// Most recent sale column
    pub last_sold_price: Option<String>,
    pub image: Option<String>,
}

impl PriceRow {
    /// The price text to show for this row: last sold wins over loose.
    pub fn display_price(&self) -> Option<&str> {
        self.last_sold_price
            .as_deref()
            .or(self.loose_price.as_deref())
    }
}

/// Parsed search page together with the body it was parsed from.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub rows: Vec<PriceRow>,
    pub html: String,
}
