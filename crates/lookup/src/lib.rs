//! Multi-source card lookup
//!
//! Searches a chain of card data providers for a free-text card name and
//! returns normalized [`Candidate`]s.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  CardLookup                  │
//! │  stages: [A (+correction retry), B, C]       │
//! │  corrections: Arc<CorrectionTable>           │
//! │  fallback: MockFallback                      │
//! └──────────────────────────────────────────────┘
//!                       │ CardProvider::search
//!     ┌─────────────┬───┴──────────┬─────────────┐
//!     ▼             ▼              ▼             ▼
//! PriceCharting  PokemonTcg     PokeApi      Tcgplayer
//!  (A, HTML)    (B, JSON API)  (C, JSON)   (market data)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use lookup::{CardLookup, CorrectionTable, PricechartingProvider};
//!
//! let lookup = CardLookup::new(Arc::new(CorrectionTable::builtin()))
//!     .corrected_stage(Arc::new(PricechartingProvider::with_http_client(client)));
//! let response = lookup.lookup("ninetails").await?;
//! ```

mod adapters;
mod corrections;
mod error;
mod mock;
mod models;
mod normalize;
mod orchestrator;
mod provider;

pub use adapters::{PokeApiProvider, PokemonTcgProvider, PricechartingProvider, TcgplayerProvider};
pub use corrections::CorrectionTable;
pub use error::{LookupError, ProviderError};
pub use mock::MockFallback;
pub use models::{Candidate, CardSource, LookupResponse, ProviderDiagnostic, ProviderOutput};
pub use normalize::{parse_price, price_or_zero};
pub use orchestrator::{CardLookup, LookupStage};
pub use provider::CardProvider;
