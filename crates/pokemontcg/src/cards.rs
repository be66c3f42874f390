use crate::{
    models::{CardSearch, CardsResponse},
    PokemonTcgClient,
};

impl PokemonTcgClient {
    /// Search cards by name.
    ///
    /// Multi-word names are quoted so the query engine treats them as one
    /// phrase.
    pub async fn search_cards(&self, name: &str) -> crate::Result<CardSearch> {
        let query = name_query(name);
        tracing::debug!("Pokemon TCG API search: {}", query);

        let response = self.get("/v2/cards").query(&[("q", query)]).send().await?;

        Ok(match self.handle_response::<CardsResponse>(response).await? {
            Some((parsed, body)) => CardSearch {
                cards: parsed.data,
                body,
            },
            None => CardSearch::default(),
        })
    }
}

fn name_query(name: &str) -> String {
    let name = name.trim();
    if name.contains(char::is_whitespace) {
        format!("name:\"{}\"", name)
    } else {
        format!("name:{}", name)
    }
}
