// Adapters layer: concrete implementations for external systems (http feeds, publishing, error log).

pub mod dining_api;
pub mod error_log;
pub mod page_menus;
pub mod publisher;
pub mod rest_menus;
