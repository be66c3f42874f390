//! Card provider trait definition

use async_trait::async_trait;

use crate::{CardSource, ProviderError, ProviderOutput};

/// Uniform contract over one external card data source.
///
/// Implementations issue one outbound request per call and never retry.
/// An empty [`ProviderOutput`] means "nothing found"; `Err` is reserved for
/// transport failures (unreachable host, timeout, non-success status).
#[async_trait]
pub trait CardProvider: Send + Sync {
    async fn search(&self, term: &str) -> Result<ProviderOutput, ProviderError>;

    /// Tag stamped on every candidate this provider returns
    fn source(&self) -> CardSource;

    /// Provider name for logging and diagnostics
    fn name(&self) -> &'static str;
}
