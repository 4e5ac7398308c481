pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::dining_api::DiningClient;
pub use crate::adapters::error_log::FileErrorSink;
pub use crate::adapters::page_menus::PageMenuScan;
pub use crate::adapters::publisher::StatusPublisher;
pub use crate::adapters::rest_menus::RestMenuScan;
pub use crate::config::{AppConfig, MenuSourceKind};
pub use crate::core::checker::Checker;
pub use crate::core::date_window::DateWindow;
pub use crate::utils::error::{AlertError, Result};
