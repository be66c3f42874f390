use serde::{Deserialize, Serialize};

/// Which provider produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSource {
    /// Price aggregation site (HTML price tables)
    #[serde(rename = "pricecharting")]
    PriceAggregation,
    /// Marketplace search results
    #[serde(rename = "tcgplayer")]
    MarketData,
    /// Structured card metadata API
    #[serde(rename = "pokemontcg.io")]
    CardMetadataApi,
    /// Species artwork, used only as a visual placeholder
    #[serde(rename = "pokeapi")]
    SpeciesFallback,
    /// Synthetic result returned when providers were unreachable
    #[serde(rename = "mock")]
    Mock,
}

impl CardSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardSource::PriceAggregation => "pricecharting",
            CardSource::MarketData => "tcgplayer",
            CardSource::CardMetadataApi => "pokemontcg.io",
            CardSource::SpeciesFallback => "pokeapi",
            CardSource::Mock => "mock",
        }
    }
}

impl std::fmt::Display for CardSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized lookup result.
///
/// `name` is never empty and `price` is always finite and non-negative.
/// Enrichment fields are only serialized when the provider supplied them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub name: String,
    pub price: f64,
    pub image: Option<String>,
    pub source: CardSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loose_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sold_price: Option<f64>,
}

/// What one provider call produced.
#[derive(Debug, Clone, Default)]
pub struct ProviderOutput {
    pub candidates: Vec<Candidate>,
    /// Unparsed response body
    pub raw: String,
}

impl ProviderOutput {
    pub fn new(candidates: Vec<Candidate>, raw: impl Into<String>) -> Self {
        Self {
            candidates,
            raw: raw.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Record of one provider call, returned when a lookup found nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDiagnostic {
    pub provider: String,
    pub term: String,
    pub raw: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    pub candidates: Vec<Candidate>,
    pub used_correction: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<ProviderDiagnostic>,
}

impl LookupResponse {
    /// True when the candidates are synthetic placeholders.
    pub fn is_degraded(&self) -> bool {
        self.candidates.iter().any(|c| c.source == CardSource::Mock)
    }
}
