//! Provider chain orchestration

use std::sync::Arc;

use crate::{
    CardProvider, CorrectionTable, LookupError, LookupResponse, MockFallback, ProviderDiagnostic,
};

/// One step of the provider chain.
#[derive(Clone)]
pub struct LookupStage {
    provider: Arc<dyn CardProvider>,
    /// Retry once with the corrected name when the raw name finds nothing
    retry_with_correction: bool,
}

impl LookupStage {
    pub fn new(provider: Arc<dyn CardProvider>) -> Self {
        Self {
            provider,
            retry_with_correction: false,
        }
    }

    pub fn with_correction(provider: Arc<dyn CardProvider>) -> Self {
        Self {
            provider,
            retry_with_correction: true,
        }
    }

    pub fn provider(&self) -> &dyn CardProvider {
        self.provider.as_ref()
    }
}

/// Searches providers in order until one returns candidates.
///
/// Stateless across calls: nothing is cached and concurrent lookups for the
/// same name run independently.
#[derive(Clone)]
pub struct CardLookup {
    stages: Vec<LookupStage>,
    corrections: Arc<CorrectionTable>,
    fallback: MockFallback,
}

/// Mutable bookkeeping for one `lookup` call
#[derive(Default)]
struct Attempts {
    diagnostics: Vec<ProviderDiagnostic>,
    failures: usize,
}

impl CardLookup {
    pub fn new(corrections: Arc<CorrectionTable>) -> Self {
        Self {
            stages: Vec::new(),
            corrections,
            fallback: MockFallback::default(),
        }
    }

    /// Append a stage without name correction.
    pub fn stage(mut self, provider: Arc<dyn CardProvider>) -> Self {
        self.stages.push(LookupStage::new(provider));
        self
    }

    /// Append a stage that retries with the corrected name.
    pub fn corrected_stage(mut self, provider: Arc<dyn CardProvider>) -> Self {
        self.stages.push(LookupStage::with_correction(provider));
        self
    }

    pub fn fallback(mut self, fallback: MockFallback) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn stages(&self) -> &[LookupStage] {
        &self.stages
    }

    pub fn corrections(&self) -> &CorrectionTable {
        &self.corrections
    }

    /// Look up `name` across the chain.
    ///
    /// Only a blank name is an error. A lookup where every provider came back
    /// empty returns no candidates plus per-call diagnostics. If nothing was
    /// found and at least one provider failed, a single mock candidate is
    /// returned instead.
    pub async fn lookup(&self, name: &str) -> Result<LookupResponse, LookupError> {
        let term = name.trim();
        if term.is_empty() {
            return Err(LookupError::EmptyTerm);
        }

        let mut attempts = Attempts::default();
        let mut used_correction = None;

        for stage in &self.stages {
            let mut candidates = attempts.run(stage.provider(), term).await;

            if candidates.is_empty() && stage.retry_with_correction {
                if let Some(corrected) = self.correction_for(term) {
                    tracing::debug!("Retrying '{}' as '{}'", term, corrected);
                    used_correction = Some(corrected.to_string());
                    candidates = attempts.run(stage.provider(), corrected).await;
                }
            }

            if !candidates.is_empty() {
                tracing::debug!(
                    "Lookup '{}' answered by {} ({} results)",
                    term,
                    stage.provider().name(),
                    candidates.len()
                );
                return Ok(LookupResponse {
                    candidates,
                    used_correction,
                    diagnostics: Vec::new(),
                });
            }
        }

        if attempts.failures > 0 {
            tracing::warn!(
                "Lookup '{}' found nothing with {} provider failure(s), returning mock data",
                term,
                attempts.failures
            );
            return Ok(LookupResponse {
                candidates: vec![self.fallback.candidate(term)],
                used_correction,
                diagnostics: attempts.diagnostics,
            });
        }

        tracing::debug!("Lookup '{}' found no matches", term);
        Ok(LookupResponse {
            candidates: Vec::new(),
            used_correction,
            diagnostics: attempts.diagnostics,
        })
    }

    fn correction_for(&self, term: &str) -> Option<&str> {
        self.corrections
            .lookup(term)
            .filter(|corrected| !corrected.eq_ignore_ascii_case(term))
    }
}

impl Attempts {
    /// Call one provider, recording the outcome. Failures count as empty.
    async fn run(
        &mut self,
        provider: &dyn CardProvider,
        term: &str,
    ) -> Vec<crate::Candidate> {
        match provider.search(term).await {
            Ok(output) => {
                self.diagnostics.push(ProviderDiagnostic {
                    provider: provider.name().to_string(),
                    term: term.to_string(),
                    raw: output.raw,
                    error: None,
                });
                output.candidates
            }
            Err(e) => {
                tracing::warn!("Provider {} failed for '{}': {}", provider.name(), term, e);
                self.failures += 1;
                self.diagnostics.push(ProviderDiagnostic {
                    provider: provider.name().to_string(),
                    term: term.to_string(),
                    raw: String::new(),
                    error: Some(e.to_string()),
                });
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::{Candidate, CardSource, ProviderError, ProviderOutput};

    /// Deterministic provider answering from a fixed term → names map
    struct StubProvider {
        name: &'static str,
        source: CardSource,
        results: HashMap<String, Vec<(&'static str, f64)>>,
        fail: bool,
        calls: Mutex<Vec<String>>,
    }

    impl StubProvider {
        fn new(name: &'static str, source: CardSource) -> Self {
            Self {
                name,
                source,
                results: HashMap::new(),
                fail: false,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn answer(mut self, term: &str, cards: Vec<(&'static str, f64)>) -> Self {
            self.results.insert(term.to_string(), cards);
            self
        }

        fn failing(mut self) -> Self {
            self.fail = true;
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CardProvider for StubProvider {
        async fn search(&self, term: &str) -> Result<ProviderOutput, ProviderError> {
            self.calls.lock().unwrap().push(term.to_string());
            if self.fail {
                return Err(ProviderError::Pricecharting(
                    pricecharting::PricechartingError::Api { status_code: 503 },
                ));
            }
            let candidates = self
                .results
                .get(term)
                .map(|cards| {
                    cards
                        .iter()
                        .filter_map(|(name, price)| {
                            Candidate::new(*name, self.source).map(|c| c.with_price(*price))
                        })
                        .collect()
                })
                .unwrap_or_default();
            Ok(ProviderOutput::new(candidates, format!("<{} raw for {}>", self.name, term)))
        }

        fn source(&self) -> CardSource {
            self.source
        }

        fn name(&self) -> &'static str {
            self.name
        }
    }

    fn chain(
        a: Arc<StubProvider>,
        b: Arc<StubProvider>,
        c: Arc<StubProvider>,
    ) -> CardLookup {
        CardLookup::new(Arc::new(CorrectionTable::builtin()))
            .corrected_stage(a)
            .stage(b)
            .stage(c)
    }

    fn price_aggregation() -> StubProvider {
        StubProvider::new("pricecharting", CardSource::PriceAggregation)
    }

    fn card_api() -> StubProvider {
        StubProvider::new("pokemontcg", CardSource::CardMetadataApi)
    }

    fn species() -> StubProvider {
        StubProvider::new("pokeapi", CardSource::SpeciesFallback)
    }

    #[tokio::test]
    async fn test_first_stage_hit_skips_rest() {
        let a = Arc::new(price_aggregation().answer("Charizard", vec![("Charizard #4", 350.0), ("Charizard #11", 12.0)]));
        let b = Arc::new(card_api());
        let c = Arc::new(species());
        let lookup = chain(a.clone(), b.clone(), c.clone());

        let response = lookup.lookup("Charizard").await.unwrap();

        assert_eq!(response.candidates.len(), 2);
        assert_eq!(response.candidates[0].price, 350.0);
        assert_eq!(response.candidates[1].price, 12.0);
        assert!(response
            .candidates
            .iter()
            .all(|c| c.source == CardSource::PriceAggregation));
        assert_eq!(response.used_correction, None);
        assert!(response.diagnostics.is_empty());
        assert!(b.calls().is_empty());
        assert!(c.calls().is_empty());
    }

    #[tokio::test]
    async fn test_correction_retry() {
        let a = Arc::new(price_aggregation().answer("ninetales", vec![("Ninetales #12", 20.0)]));
        let b = Arc::new(card_api());
        let c = Arc::new(species());
        let lookup = chain(a.clone(), b.clone(), c.clone());

        let response = lookup.lookup("ninetails").await.unwrap();

        assert_eq!(response.candidates.len(), 1);
        assert_eq!(response.candidates[0].name, "Ninetales #12");
        assert_eq!(response.used_correction.as_deref(), Some("ninetales"));
        assert_eq!(a.calls(), vec!["ninetails", "ninetales"]);
        assert!(b.calls().is_empty());
    }

    #[tokio::test]
    async fn test_later_stages_use_raw_term() {
        let a = Arc::new(price_aggregation());
        let b = Arc::new(card_api());
        let c = Arc::new(species().answer("ninetails", vec![("ninetales", 0.0)]));
        let lookup = chain(a.clone(), b.clone(), c.clone());

        let response = lookup.lookup("  ninetails ").await.unwrap();

        assert_eq!(response.candidates.len(), 1);
        assert_eq!(response.candidates[0].source, CardSource::SpeciesFallback);
        assert_eq!(response.used_correction.as_deref(), Some("ninetales"));
        assert_eq!(a.calls(), vec!["ninetails", "ninetales"]);
        assert_eq!(b.calls(), vec!["ninetails"]);
        assert_eq!(c.calls(), vec!["ninetails"]);
    }

    #[tokio::test]
    async fn test_all_empty_returns_diagnostics() {
        let lookup = chain(
            Arc::new(price_aggregation()),
            Arc::new(card_api()),
            Arc::new(species()),
        );

        let response = lookup.lookup("missingno").await.unwrap();

        assert!(response.candidates.is_empty());
        assert!(!response.is_degraded());
        assert_eq!(response.used_correction, None);
        let providers: Vec<_> = response
            .diagnostics
            .iter()
            .map(|d| d.provider.as_str())
            .collect();
        assert_eq!(providers, vec!["pricecharting", "pokemontcg", "pokeapi"]);
        assert_eq!(response.diagnostics[0].raw, "<pricecharting raw for missingno>");
        assert!(response.diagnostics.iter().all(|d| d.error.is_none()));
    }

    #[tokio::test]
    async fn test_only_provider_failing_returns_mock() {
        let lookup = CardLookup::new(Arc::new(CorrectionTable::empty()))
            .stage(Arc::new(price_aggregation().failing()));

        let response = lookup.lookup("Charizard").await.unwrap();

        assert_eq!(response.candidates.len(), 1);
        let mock = &response.candidates[0];
        assert_eq!(mock.source, CardSource::Mock);
        assert_eq!(mock.name, "Charizard");
        assert!((10.0..110.0).contains(&mock.price));
        assert!(response.is_degraded());
        assert!(response.diagnostics[0].error.is_some());
    }

    #[tokio::test]
    async fn test_failed_stage_does_not_abort_chain() {
        let a = Arc::new(price_aggregation().failing());
        let b = Arc::new(card_api().answer("Pikachu", vec![("Pikachu", 0.0)]));
        let lookup = chain(a.clone(), b.clone(), Arc::new(species()));

        let response = lookup.lookup("Pikachu").await.unwrap();

        assert_eq!(response.candidates.len(), 1);
        assert_eq!(response.candidates[0].source, CardSource::CardMetadataApi);
        assert!(!response.is_degraded());
    }

    #[tokio::test]
    async fn test_failure_then_empty_chain_degrades_to_mock() {
        let lookup = chain(
            Arc::new(price_aggregation().failing()),
            Arc::new(card_api()),
            Arc::new(species()),
        );

        let response = lookup.lookup("Pikachu").await.unwrap();

        assert_eq!(response.candidates.len(), 1);
        assert!(response.is_degraded());
        assert_eq!(response.diagnostics.len(), 3);
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let lookup = chain(
            Arc::new(price_aggregation()),
            Arc::new(card_api()),
            Arc::new(species()),
        );
        assert!(matches!(lookup.lookup("   ").await, Err(LookupError::EmptyTerm)));
    }

    #[tokio::test]
    async fn test_blank_name_never_reaches_mock() {
        let failing = Arc::new(price_aggregation().failing());
        let lookup =
            CardLookup::new(Arc::new(CorrectionTable::empty())).stage(failing.clone());

        assert!(matches!(lookup.lookup(" \t ").await, Err(LookupError::EmptyTerm)));
        assert!(failing.calls().is_empty());

        let response = lookup.lookup("  Charizard  ").await.unwrap();
        assert_eq!(response.candidates[0].source, CardSource::Mock);
        assert_eq!(response.candidates[0].name, "Charizard");
    }

    #[tokio::test]
    async fn test_lookup_is_idempotent() {
        let lookup = chain(
            Arc::new(price_aggregation().answer("Mew", vec![("Mew #8", 45.5), ("Mew ex", 3.0)])),
            Arc::new(card_api()),
            Arc::new(species()),
        );

        let first = lookup.lookup("Mew").await.unwrap();
        let second = lookup.lookup("Mew").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_self_correction_is_not_retried() {
        let a = Arc::new(price_aggregation());
        let lookup = CardLookup::new(Arc::new(CorrectionTable::from_entries([("eevee", "eevee")])))
            .corrected_stage(a.clone());

        let response = lookup.lookup("Eevee").await.unwrap();

        assert!(response.candidates.is_empty());
        assert_eq!(response.used_correction, None);
        assert_eq!(a.calls(), vec!["Eevee"]);
    }
}
