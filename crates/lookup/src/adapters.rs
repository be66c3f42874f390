//! Card provider adapters for the supported data sources

mod pokeapi_adapter;
mod pokemontcg_adapter;
mod pricecharting_adapter;
mod tcgplayer_adapter;

pub use pokeapi_adapter::PokeApiProvider;
pub use pokemontcg_adapter::PokemonTcgProvider;
pub use pricecharting_adapter::PricechartingProvider;
pub use tcgplayer_adapter::TcgplayerProvider;
