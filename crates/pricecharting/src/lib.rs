mod client;
mod error;
pub mod models;

pub use client::{PricechartingClient, BROWSER_USER_AGENT};
pub use error::PricechartingError;
pub use models::{PriceRow, SearchPage};

pub type Result<T> = std::result::Result<T, PricechartingError>;
