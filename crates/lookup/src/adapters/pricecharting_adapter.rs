//! PriceCharting provider adapter (price aggregation)

use std::sync::Arc;

use async_trait::async_trait;
use pricecharting::{PriceRow, PricechartingClient};

use crate::{
    parse_price, price_or_zero, Candidate, CardProvider, CardSource, ProviderError, ProviderOutput,
};

pub struct PricechartingProvider {
    client: Arc<PricechartingClient>,
}

impl PricechartingProvider {
    pub fn new(client: Arc<PricechartingClient>) -> Self {
        Self { client }
    }

    pub fn with_http_client(http_client: reqwest::Client) -> Self {
        Self {
            client: Arc::new(PricechartingClient::new(http_client)),
        }
    }
}

#[async_trait]
impl CardProvider for PricechartingProvider {
    async fn search(&self, term: &str) -> Result<ProviderOutput, ProviderError> {
        let page = self.client.search(term).await?;
        let candidates = page.rows.iter()
            .filter_map(|row| normalize_row(row, self.source()))
            .collect();
        Ok(ProviderOutput::new(candidates, page.html))
    }

    fn source(&self) -> CardSource {
        CardSource::PriceAggregation
    }

    fn name(&self) -> &'static str {
        "pricecharting"
    }
}

/// Headline price is the last sold price, falling back to the loose price.
fn normalize_row(row: &PriceRow, source: CardSource) -> Option<Candidate> {
    let candidate = Candidate::new(&row.name, source)?
        .with_price(price_or_zero(row.display_price()))
        .with_image(row.image.as_deref());

    Some(Candidate {
        loose_price: row.loose_price.as_deref().and_then(parse_price),
        last_sold_price: row.last_sold_price.as_deref().and_then(parse_price),
        ..candidate
    })
}
