use reqwest::header::USER_AGENT;
use scraper::{ElementRef, Html, Selector};

use crate::{
    models::{PriceRow, SearchPage},
    PricechartingError, Result,
};

const BASE_URL: &str = "https://www.pricecharting.com";
const CATEGORY: &str = "pokemon-cards";

/// The search page serves an empty table to unknown clients.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub struct PricechartingClient {
    client: reqwest::Client,
    base_url: String,
    user_agent: String,
}

impl PricechartingClient {
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

    /// Fetch the price search page for `keyword` and parse its product table.
    pub async fn search(&self, keyword: &str) -> Result<SearchPage> {
        let url = format!("{}/search-products", self.base_url);
        tracing::debug!("PriceCharting search: {}", keyword);

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, self.user_agent.as_str())
            .query(&[("type", "prices"), ("q", keyword), ("category", CATEGORY)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PricechartingError::Api {
                status_code: status.as_u16(),
            });
        }

        let html = response.text().await?;
        let rows = parse_search_page(&html)?;
        Ok(SearchPage { rows, html })
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| PricechartingError::Parse(e.to_string()))
}

fn cell_text(row: &ElementRef<'_>, selector: &Selector) -> Option<String> {
    row.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extract product rows from `#games_table`.
///
/// Column 4 holds the loose price and column 5 the last sold price. Rows
/// without a title or without any price are skipped (header, ads).
pub fn parse_search_page(html: &str) -> Result<Vec<PriceRow>> {
    let document = Html::parse_document(html);
    let row_selector = selector("#games_table tr")?;
    let title_selector = selector("a.title")?;
    let loose_selector = selector("td:nth-child(4)")?;
    let last_sold_selector = selector("td:nth-child(5)")?;
    let img_selector = selector("img")?;

    let mut rows = Vec::new();
    for row in document.select(&row_selector) {
        let Some(name) = cell_text(&row, &title_selector) else {
            continue;
        };

        let loose_price = cell_text(&row, &loose_selector);
        let last_sold_price = cell_text(&row, &last_sold_selector);
        if loose_price.is_none() && last_sold_price.is_none() {
            continue;
        }

        let image = row
            .select(&img_selector)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(|s| s.to_string());

        rows.push(PriceRow {
            name,
            loose_price,
            last_sold_price,
            image,
        });
    }

    Ok(rows)
}
