use async_trait::async_trait;

use crate::adapters::dining_api::DiningClient;
use crate::core::date_window::DateWindow;
use crate::core::extractor::{extract_page, KeywordPattern};
use crate::core::resolver::resolve_keywords;
use crate::domain::model::KeywordMatch;
use crate::domain::ports::MenuScan;
use crate::utils::error::Result;

/// Scraping scan: resolve today's menu pages through the site-wide keyword
/// index, then fetch and search each hall's page.
pub struct PageMenuScan {
    client: DiningClient,
    pattern: KeywordPattern,
}

impl PageMenuScan {
    pub fn new(client: DiningClient) -> Self {
        Self {
            client,
            pattern: KeywordPattern::target(),
        }
    }
}

#[async_trait]
impl MenuScan for PageMenuScan {
    async fn scan(&self, window: &DateWindow) -> Result<Vec<KeywordMatch>> {
        let keywords = self.client.menu_keywords().await?;
        let resolved = resolve_keywords(&keywords, window);
        tracing::debug!("{} menu page(s) cover {}", resolved.len(), window.the_date());

        // One page at a time, in resolution order.
        let mut matches = Vec::new();
        for (hall, record) in resolved {
            tracing::debug!("Fetching menu page for {}: {}", hall.name, record.path);
            let html = self.client.menu_page(&record.path).await?;
            matches.extend(extract_page(hall, &html, window, &self.pattern)?);
        }
        Ok(matches)
    }
}
