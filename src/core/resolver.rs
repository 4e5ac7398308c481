use std::collections::HashSet;

use crate::core::date_window::DateWindow;
use crate::domain::model::{DiningHall, KeywordRecord, MenuPeriod, MenuRecord};
use crate::utils::error::Result;

/// Keyword index entries for dining menus carry this type marker; the index
/// also lists articles, event pages and so on.
pub const MENU_KEYWORD_TYPE: &str = "menu";

/// A menu document reduced to the hall it belongs to and the serving periods
/// that fall on the target day.
#[derive(Debug, Clone)]
pub struct ResolvedMenu {
    pub hall: &'static DiningHall,
    pub periods: Vec<MenuPeriod>,
}

/// Picks, for each hall, the first menu document with periods on the target
/// day. The feed repeats documents and keeps stale weeks around, so a hall is
/// marked as covered only once a document actually matched the date. A stale
/// document must not block a later, current one for the same hall.
pub fn resolve_menus(menus: &[MenuRecord], window: &DateWindow) -> Result<Vec<ResolvedMenu>> {
    let mut resolved = Vec::new();
    let mut covered: HashSet<&'static str> = HashSet::new();

    for menu in menus {
        let Some(hall) = menu
            .date_range_fields
            .iter()
            .find_map(|period| DiningHall::find(&period.title))
        else {
            continue; // not a hall the checker reports on
        };
        if covered.contains(hall.name) {
            tracing::debug!("Skipping repeated menu document for {}", hall.name);
            continue;
        }

        let mut periods = Vec::new();
        for period in &menu.date_range_fields {
            if window.matches_timestamp(&period.date_from)? {
                periods.push(period.clone());
            }
        }
        if periods.is_empty() {
            continue;
        }

        covered.insert(hall.name);
        resolved.push(ResolvedMenu { hall, periods });
    }
    Ok(resolved)
}

/// Same per-hall selection over the site-wide keyword index: menu entries
/// only, recognized halls only, and a path that embeds the target date.
/// Returns the index records to fetch, paired with their hall.
pub fn resolve_keywords<'a>(
    keywords: &'a [KeywordRecord],
    window: &DateWindow,
) -> Vec<(&'static DiningHall, &'a KeywordRecord)> {
    let mut resolved = Vec::new();
    let mut covered: HashSet<&'static str> = HashSet::new();

    for record in keywords {
        if record.kind != MENU_KEYWORD_TYPE {
            continue;
        }
        let Some(hall) = DiningHall::find(&record.title) else {
            continue;
        };
        if covered.contains(hall.name) {
            tracing::debug!("Skipping repeated keyword entry for {}", hall.name);
            continue;
        }
        if !window.matches_path(&record.path) {
            continue;
        }
        covered.insert(hall.name);
        resolved.push((hall, record));
    }
    resolved
}
