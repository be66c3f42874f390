use std::sync::Arc;

use lookup::{
    CardLookup, CorrectionTable, MockFallback, PokeApiProvider, PokemonTcgProvider,
    PricechartingProvider, TcgplayerProvider,
};
use pokeapi::PokeApiClient;
use pokemontcg::PokemonTcgClient;
use pricecharting::PricechartingClient;
use reqwest::Client;
use tcgplayer::TcgplayerClient;

use crate::config::Config;
use crate::models::{ProviderSettings, Settings};
use crate::services::{HttpClientError, HttpClientService, SettingsService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub settings: Arc<SettingsService>,
    pub http_client_service: Arc<HttpClientService>,
    pub corrections: Arc<CorrectionTable>,
    /// Full chain: price aggregation (with name correction), card API,
    /// species artwork
    pub lookup: Arc<CardLookup>,
    /// Marketplace-only chain
    pub market: Arc<CardLookup>,
}

impl AppState {
    pub fn new(config: Config, settings: SettingsService) -> Result<Self, HttpClientError> {
        let http_client_service = Arc::new(HttpClientService::new(&settings.get().http)?);
        let client = http_client_service.get_client();

        let corrections = Arc::new(
            CorrectionTable::builtin().with_overrides(settings.get().corrections.iter()),
        );
        let lookup = Arc::new(build_lookup(settings.get(), &client, Arc::clone(&corrections)));
        let market = Arc::new(build_market_lookup(settings.get(), &client));

        Ok(Self {
            config: Arc::new(config),
            settings: Arc::new(settings),
            http_client_service,
            corrections,
            lookup,
            market,
        })
    }
}

fn mock_fallback(settings: &Settings) -> MockFallback {
    MockFallback::new(
        settings.mock.min_price..settings.mock.max_price,
        settings.mock.image.clone(),
    )
}

/// Price aggregation first (retried with the corrected name), then the card
/// metadata API, then species artwork.
pub fn build_lookup(
    settings: &Settings,
    client: &Client,
    corrections: Arc<CorrectionTable>,
) -> CardLookup {
    let providers = &settings.providers;

    CardLookup::new(corrections)
        .corrected_stage(Arc::new(PricechartingProvider::new(Arc::new(
            pricecharting_client(settings, client),
        ))))
        .stage(Arc::new(PokemonTcgProvider::new(Arc::new(
            pokemontcg_client(providers, client),
        ))))
        .stage(Arc::new(PokeApiProvider::new(Arc::new(pokeapi_client(
            providers, client,
        )))))
        .fallback(mock_fallback(settings))
}

/// Marketplace search alone; any failure degrades straight to mock data.
pub fn build_market_lookup(settings: &Settings, client: &Client) -> CardLookup {
    CardLookup::new(Arc::new(CorrectionTable::empty()))
        .stage(Arc::new(TcgplayerProvider::new(Arc::new(tcgplayer_client(
            settings, client,
        )))))
        .fallback(mock_fallback(settings))
}

fn pricecharting_client(settings: &Settings, client: &Client) -> PricechartingClient {
    let scraper = match settings.providers.pricecharting_url.as_str() {
        "" => PricechartingClient::new(client.clone()),
        url => PricechartingClient::with_base_url(client.clone(), url),
    };
    scraper.user_agent(settings.http.user_agent.as_str())
}

fn tcgplayer_client(settings: &Settings, client: &Client) -> TcgplayerClient {
    let scraper = match settings.providers.tcgplayer_url.as_str() {
        "" => TcgplayerClient::new(client.clone()),
        url => TcgplayerClient::with_base_url(client.clone(), url),
    };
    scraper.user_agent(settings.http.user_agent.as_str())
}

fn pokemontcg_client(providers: &ProviderSettings, client: &Client) -> PokemonTcgClient {
    let api = match providers.pokemontcg_url.as_str() {
        "" => PokemonTcgClient::new(client.clone()),
        url => PokemonTcgClient::with_base_url(client.clone(), url),
    };
    api.api_key(providers.pokemontcg_api_key.as_str())
}

fn pokeapi_client(providers: &ProviderSettings, client: &Client) -> PokeApiClient {
    match providers.pokeapi_url.as_str() {
        "" => PokeApiClient::new(client.clone()),
        url => PokeApiClient::with_base_url(client.clone(), url),
    }
}
