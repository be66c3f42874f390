mod http_client;
mod settings;

pub use http_client::{HttpClientError, HttpClientService};
pub use settings::{SettingsError, SettingsService};
