//! Pokemon TCG API provider adapter (card metadata and scans)

use std::sync::Arc;

use async_trait::async_trait;
use pokemontcg::{Card, PokemonTcgClient};

use crate::{Candidate, CardProvider, CardSource, ProviderError, ProviderOutput};

pub struct PokemonTcgProvider {
    client: Arc<PokemonTcgClient>,
}

impl PokemonTcgProvider {
    pub fn new(client: Arc<PokemonTcgClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CardProvider for PokemonTcgProvider {
    async fn search(&self, term: &str) -> Result<ProviderOutput, ProviderError> {
        let search = self.client.search_cards(term).await?;
        let candidates = search.cards.iter()
            .filter_map(|card| normalize_card(card, self.source()))
            .collect();
        Ok(ProviderOutput::new(candidates, search.body))
    }

    fn source(&self) -> CardSource {
        CardSource::CardMetadataApi
    }

    fn name(&self) -> &'static str {
        "pokemontcg"
    }
}

/// The API carries no prices; candidates are priced at 0.
fn normalize_card(card: &Card, source: CardSource) -> Option<Candidate> {
    Some(
        Candidate::new(&card.name, source)?
            .with_image(card.images.as_ref().and_then(|i| i.preferred()))
            .with_set(card.set.as_ref().map(|s| s.name.clone()))
            .with_number(card.number.clone())
            .with_rarity(card.rarity.clone()),
    )
}
