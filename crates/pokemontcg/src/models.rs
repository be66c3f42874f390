use serde::{Deserialize, Serialize};

/// Response of GET /v2/cards
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardsResponse {
    #[serde(default)]
    pub data: Vec<Card>,
    #[serde(default)]
    pub page: i64,
    #[serde(default, rename = "totalCount")]
    pub total_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub number: Option<String>,
    pub rarity: Option<String>,
    pub images: Option<CardImages>,
    pub set: Option<CardSet>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardImages {
    pub small: Option<String>,
    pub large: Option<String>,
}

impl CardImages {
    /// Large scan if available, otherwise the small one.
    pub fn preferred(&self) -> Option<&str> {
        self.large.as_deref().or(self.small.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSet {
    pub id: String,
    pub name: String,
}

/// Cards matching a search plus the response body they came from.
#[derive(Debug, Clone, Default)]
pub struct CardSearch {
    pub cards: Vec<Card>,
    pub body: String,
}
