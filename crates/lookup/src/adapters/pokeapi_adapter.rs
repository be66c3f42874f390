//! PokeAPI provider adapter, last-resort artwork

use std::sync::Arc;

use async_trait::async_trait;
use pokeapi::{PokeApiClient, Pokemon};

use crate::{Candidate, CardProvider, CardSource, ProviderError, ProviderOutput};

pub struct PokeApiProvider {
    client: Arc<PokeApiClient>,
}

impl PokeApiProvider {
    pub fn new(client: Arc<PokeApiClient>) -> Self {
        Self { client }
    }

    pub fn with_http_client(http_client: reqwest::Client) -> Self {
        Self {
            client: Arc::new(PokeApiClient::new(http_client)),
        }
    }
}

#[async_trait]
impl CardProvider for PokeApiProvider {
    async fn search(&self, term: &str) -> Result<ProviderOutput, ProviderError> {
        let lookup = self.client.get_pokemon(term).await?;
        let candidates = lookup
            .pokemon
            .as_ref()
            .and_then(|pokemon| normalize_pokemon(pokemon, self.source()));
        Ok(ProviderOutput::new(candidates.into_iter().collect(), lookup.body))
    }

    fn source(&self) -> CardSource {
        CardSource::SpeciesFallback
    }

    fn name(&self) -> &'static str {
        "pokeapi"
    }
}

fn normalize_pokemon(pokemon: &Pokemon, source: CardSource) -> Option<Candidate> {
    Some(Candidate::new(&pokemon.name, source)?.with_image(pokemon.artwork_url()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_returns_single_placeholder() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v2/pokemon/eevee")
            .with_status(200)
            .with_body(
                r#"{"id": 133, "name": "eevee", "sprites": {"front_default": "https://sprites.example/133.png"}}"#,
            )
            .create_async()
            .await;

        let provider = PokeApiProvider::new(Arc::new(PokeApiClient::with_base_url(
            reqwest::Client::new(),
            server.url(),
        )));
        let output = provider.search("Eevee").await.unwrap();

        assert_eq!(output.candidates.len(), 1);
        let candidate = &output.candidates[0];
        assert_eq!(candidate.name, "eevee");
        assert_eq!(candidate.price, 0.0);
        assert_eq!(candidate.image.as_deref(), Some("https://sprites.example/133.png"));
        assert_eq!(candidate.source, CardSource::SpeciesFallback);
    }

    #[tokio::test]
    async fn test_unknown_species_is_empty() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v2/pokemon/notamon")
            .with_status(404)
            .with_body("Not Found")
            .create_async()
            .await;

        let provider = PokeApiProvider::new(Arc::new(PokeApiClient::with_base_url(
            reqwest::Client::new(),
            server.url(),
        )));
        let output = provider.search("notamon").await.unwrap();
        assert!(output.is_empty());
        assert_eq!(output.raw, "Not Found");
    }
}
