use async_trait::async_trait;

use crate::adapters::dining_api::DiningClient;
use crate::core::date_window::DateWindow;
use crate::core::extractor::{build_keyword_index, extract_structured, KeywordPattern};
use crate::core::resolver::resolve_menus;
use crate::domain::model::KeywordMatch;
use crate::domain::ports::MenuScan;
use crate::utils::error::Result;

/// Structured scan: the foods feed supplies titles, the nested menus feed
/// supplies what each hall serves and when.
pub struct RestMenuScan {
    client: DiningClient,
    pattern: KeywordPattern,
}

impl RestMenuScan {
    pub fn new(client: DiningClient) -> Self {
        Self {
            client,
            pattern: KeywordPattern::target(),
        }
    }
}

#[async_trait]
impl MenuScan for RestMenuScan {
    async fn scan(&self, window: &DateWindow) -> Result<Vec<KeywordMatch>> {
        let foods = self.client.food_items().await?;
        let index = build_keyword_index(&foods, &self.pattern);
        tracing::debug!("Keyword index holds {} food(s)", index.len());

        let menus = self.client.nested_menus().await?;
        let resolved = resolve_menus(&menus, window)?;
        tracing::debug!("{} menu document(s) cover {}", resolved.len(), window.the_date());

        Ok(extract_structured(&resolved, &index))
    }
}
