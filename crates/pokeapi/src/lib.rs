mod client;
mod error;
pub mod models;

pub use client::PokeApiClient;
pub use error::PokeApiError;
pub use models::{Pokemon, Sprites, SpeciesLookup};

pub type Result<T> = std::result::Result<T, PokeApiError>;
