use reqwest::Client;
use url::Url;

use crate::config::AppConfig;
use crate::domain::model::{FoodRecord, KeywordRecord, MenuRecord};
use crate::utils::error::{AlertError, Result};

pub const FOODS_PATH: &str = "/cu_dining/rest/meals";
pub const MENUS_PATH: &str = "/cu_dining/rest/menus/nested";
pub const KEYWORDS_PATH: &str = "/json/keywords";

/// HTTP access to the dining site: the two structured REST feeds, the
/// site-wide keyword index, and rendered menu pages.
#[derive(Debug, Clone)]
pub struct DiningClient {
    client: Client,
    base_url: Url,
}

impl DiningClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let base_url =
            Url::parse(&config.base_url).map_err(|e| AlertError::InvalidConfigValueError {
                field: "DINING_BASE_URL".to_string(),
                value: config.base_url.clone(),
                reason: format!("Invalid URL format: {}", e),
            })?;
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub async fn food_items(&self) -> Result<Vec<FoodRecord>> {
        let body = self.fetch_text(FOODS_PATH).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn nested_menus(&self) -> Result<Vec<MenuRecord>> {
        let body = self.fetch_text(MENUS_PATH).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn menu_keywords(&self) -> Result<Vec<KeywordRecord>> {
        let body = self.fetch_text(KEYWORDS_PATH).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Raw HTML of one menu page, addressed by its site path.
    pub async fn menu_page(&self, path: &str) -> Result<String> {
        self.fetch_text(path).await
    }

    /// GET with the body kept on failure; the site reports outages as HTML
    /// error pages and their text is the only clue to what went wrong.
    async fn fetch_text(&self, path: &str) -> Result<String> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| AlertError::ParseError {
                message: format!("Bad menu path {:?}: {}", path, e),
            })?;

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;
        tracing::debug!("API response status: {}", response.status());

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AlertError::RetrievalError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}
