use std::env;

use chrono::NaiveDate;

use crate::utils::error::{AlertError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};

pub const DEFAULT_DINING_BASE_URL: &str = "https://dining.columbia.edu";
pub const DEFAULT_PUBLISH_URL: &str = "https://api.twitter.com/2/tweets";
pub const DEFAULT_ERROR_LOG: &str = "errors.log";

/// Which menu surface a run reads. The structured REST feeds are the default;
/// the rendered menu pages are the fallback for when the feeds go dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSourceKind {
    Rest,
    Pages,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
    pub publish_url: String,
    pub access_token: String,
    pub menu_source: MenuSourceKind,
    pub error_log: String,
    /// Fixed day to check instead of today, mainly for reruns and tests.
    pub target_date: Option<NaiveDate>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let menu_source = match env::var("MENU_SOURCE").as_deref() {
            Err(_) | Ok("rest") => MenuSourceKind::Rest,
            Ok("pages") => MenuSourceKind::Pages,
            Ok(other) => {
                return Err(AlertError::InvalidConfigValueError {
                    field: "MENU_SOURCE".to_string(),
                    value: other.to_string(),
                    reason: "Expected \"rest\" or \"pages\"".to_string(),
                })
            }
        };

        let target_date = match env::var("TARGET_DATE") {
            Ok(raw) => Some(NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|e| {
                AlertError::InvalidConfigValueError {
                    field: "TARGET_DATE".to_string(),
                    value: raw.clone(),
                    reason: format!("Expected YYYY-MM-DD: {}", e),
                }
            })?),
            Err(_) => None,
        };

        Ok(Self {
            base_url: env::var("DINING_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_DINING_BASE_URL.to_string()),
            publish_url: env::var("PUBLISH_URL").unwrap_or_else(|_| DEFAULT_PUBLISH_URL.to_string()),
            access_token: env::var("ACCESS_TOKEN").map_err(|_| AlertError::MissingConfigError {
                field: "ACCESS_TOKEN".to_string(),
            })?,
            menu_source,
            error_log: env::var("ERROR_LOG").unwrap_or_else(|_| DEFAULT_ERROR_LOG.to_string()),
            target_date,
        })
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("DINING_BASE_URL", &self.base_url)?;
        validate_url("PUBLISH_URL", &self.publish_url)?;
        validate_non_empty_string("ACCESS_TOKEN", &self.access_token)?;
        validate_non_empty_string("ERROR_LOG", &self.error_log)?;

        tracing::info!("✅ Configuration validation passed");
        Ok(())
    }
}
