use crate::core::date_window::DateWindow;
use crate::domain::model::KeywordMatch;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local};

/// One strategy for turning the day's published menus into keyword matches.
/// The structured REST feeds and the scraped menu pages both implement this.
#[async_trait]
pub trait MenuScan: Send + Sync {
    async fn scan(&self, window: &DateWindow) -> Result<Vec<KeywordMatch>>;
}

#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, text: &str) -> Result<()>;
}

/// Durable record of failed runs, kept outside the process logs.
#[async_trait]
pub trait ErrorSink: Send + Sync {
    async fn record(&self, event: &str, timestamp: DateTime<Local>) -> Result<()>;
}
