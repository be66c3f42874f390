mod client;
mod error;
pub mod models;

pub use client::{TcgplayerClient, BROWSER_USER_AGENT};
pub use error::TcgplayerError;
pub use models::{ProductListing, SearchPage};

pub type Result<T> = std::result::Result<T, TcgplayerError>;
