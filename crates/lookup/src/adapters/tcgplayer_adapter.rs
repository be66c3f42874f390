//! TCGplayer provider adapter (marketplace data)

use std::sync::Arc;

use async_trait::async_trait;
use tcgplayer::{ProductListing, TcgplayerClient};

use crate::{
    parse_price, price_or_zero, Candidate, CardProvider, CardSource, ProviderError, ProviderOutput,
};

pub struct TcgplayerProvider {
    client: Arc<TcgplayerClient>,
}

impl TcgplayerProvider {
    pub fn new(client: Arc<TcgplayerClient>) -> Self {
        Self { client }
    }

    pub fn with_http_client(http_client: reqwest::Client) -> Self {
        Self {
            client: Arc::new(TcgplayerClient::new(http_client)),
        }
    }
}

#[async_trait]
impl CardProvider for TcgplayerProvider {
    async fn search(&self, term: &str) -> Result<ProviderOutput, ProviderError> {
        let page = self.client.search(term).await?;
        let candidates = page.listings.iter()
            .filter_map(|listing| normalize_listing(listing, self.source()))
            .collect();
        Ok(ProviderOutput::new(candidates, page.html))
    }

    fn source(&self) -> CardSource {
        CardSource::MarketData
    }

    fn name(&self) -> &'static str {
        "tcgplayer"
    }
}

fn normalize_listing(listing: &ProductListing, source: CardSource) -> Option<Candidate> {
    let candidate = Candidate::new(&listing.name, source)?
        .with_price(price_or_zero(Some(listing.price.as_str())))
        .with_image(listing.image.as_deref())
        .with_set(listing.set_name.clone());

    Some(Candidate {
        low_price: listing.low_price.as_deref().and_then(parse_price),
        high_price: listing.high_price.as_deref().and_then(parse_price),
        ..candidate
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_listing() {
        let listing = ProductListing {
            name: "Umbreon VMAX".to_string(),
            price: "$1,020.00".to_string(),
            set_name: Some("Evolving Skies".to_string()),
            low_price: Some("$899.99".to_string()),
            high_price: Some("--".to_string()),
            image: Some("https://cdn.example/umbreon.jpg".to_string()),
        };

        let candidate = normalize_listing(&listing, CardSource::MarketData).unwrap();
        assert_eq!(candidate.name, "Umbreon VMAX");
        assert_eq!(candidate.price, 1020.0);
        assert_eq!(candidate.set.as_deref(), Some("Evolving Skies"));
        assert_eq!(candidate.low_price, Some(899.99));
        assert_eq!(candidate.high_price, None);
        assert_eq!(candidate.source, CardSource::MarketData);
    }

    #[test]
    fn test_normalize_listing_is_pure() {
        let listing = ProductListing {
            name: "Pikachu".to_string(),
            price: "USD 7".to_string(),
            set_name: None,
            low_price: None,
            high_price: None,
            image: None,
        };
        assert_eq!(normalize_listing(&listing, CardSource::MarketData), normalize_listing(&listing, CardSource::MarketData));
        assert_eq!(normalize_listing(&listing, CardSource::MarketData).unwrap().price, 7.0);
    }
}
