use serde::{Deserialize, Serialize};

/// A product card from the marketplace search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductListing {
    pub name: String,
    /// Market price text, e.g. "$4.99"
    pub price: String,
    pub set_name: Option<String>,
    pub low_price: Option<String>,
    pub high_price: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub listings: Vec<ProductListing>,
    pub html: String,
}
