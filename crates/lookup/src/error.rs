//! Error types for card lookups

/// Transport-level failure of a single provider call.
///
/// "No results" is never an error; providers return an empty
/// [`ProviderOutput`](crate::ProviderOutput) instead.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("PriceCharting error: {0}")]
    Pricecharting(#[from] pricecharting::PricechartingError),

    #[error("TCGplayer error: {0}")]
    Tcgplayer(#[from] tcgplayer::TcgplayerError),

    #[error("Pokemon TCG API error: {0}")]
    PokemonTcg(#[from] pokemontcg::PokemonTcgError),

    #[error("PokeAPI error: {0}")]
    PokeApi(#[from] pokeapi::PokeApiError),
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Card name is required")]
    EmptyTerm,
}
