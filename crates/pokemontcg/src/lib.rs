mod cards;
mod client;
mod error;
pub mod models;

pub use client::PokemonTcgClient;
pub use error::PokemonTcgError;
pub use models::{Card, CardImages, CardSearch, CardSet, CardsResponse};

pub type Result<T> = std::result::Result<T, PokemonTcgError>;
