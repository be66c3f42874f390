use reqwest::header::USER_AGENT;
use scraper::{ElementRef, Html, Selector};

use crate::{
    models::{ProductListing, SearchPage},
    Result, TcgplayerError,
};

const BASE_URL: &str = "https://www.tcgplayer.com";
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub struct TcgplayerClient {
    client: reqwest::Client,
    base_url: String,
    user_agent: String,
}

impl TcgplayerClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_string(),
            user_agent: BROWSER_USER_AGENT.to_string(),
        }
    }

    pub fn with_base_url(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            user_agent: BROWSER_USER_AGENT.to_string(),
        }
    }

    /// Override the browser User-Agent sent with searches. Blank keeps the
    /// current one.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        let user_agent = user_agent.into();
        if !user_agent.trim().is_empty() {
            self.user_agent = user_agent;
        }
        self
    }

    pub async fn search(&self, keyword: &str) -> Result<SearchPage> {
        let url = format!("{}/search/pokemon/product", self.base_url);
        tracing::debug!("TCGplayer search: {}", keyword);

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, self.user_agent.as_str())
            .query(&[("q", keyword)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TcgplayerError::Api {
                status_code: status.as_u16(),
            });
        }

        let html = response.text().await?;
        let listings = parse_search_results(&html)?;
        Ok(SearchPage { listings, html })
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| TcgplayerError::Parse(e.to_string()))
}

fn text_of(item: &ElementRef<'_>, selector: &Selector) -> Option<String> {
    item.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extract `.search-result` items. Items missing a name or a price are dropped.
pub fn parse_search_results(html: &str) -> Result<Vec<ProductListing>> {
    let document = Html::parse_document(html);
    let item_selector = selector(".search-result")?;
    let name_selector = selector(".product-name")?;
    let price_selector = selector(".price")?;
    let set_selector = selector(".set-name")?;
    let low_selector = selector(".low-price")?;
    let high_selector = selector(".high-price")?;
    let img_selector = selector("img")?;

    let listings = document
        .select(&item_selector)
        .filter_map(|item| {
            let name = text_of(&item, &name_selector)?;
            let price = text_of(&item, &price_selector)?;
            Some(ProductListing {
                name,
                price,
                set_name: text_of(&item, &set_selector),
                low_price: text_of(&item, &low_selector),
                high_price: text_of(&item, &high_selector),
                image: item
                    .select(&img_selector)
                    .next()
                    .and_then(|img| img.value().attr("src"))
                    .map(|s| s.to_string()),
            })
        })
        .collect();

    Ok(listings)
}
