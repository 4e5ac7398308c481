use std::sync::OnceLock;

use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::utils::error::{AlertError, Result};

/// Lazily parsed CSS selector for `static` items. The selectors are
/// compile-time literals, so a parse failure is a programming error.
#[derive(Debug)]
pub struct StaticSelector {
    cell: OnceLock<Selector>,
    selector: &'static str,
}

impl StaticSelector {
    pub const fn new(selector: &'static str) -> Self {
        Self {
            cell: OnceLock::new(),
            selector,
        }
    }
}

impl std::ops::Deref for StaticSelector {
    type Target = Selector;

    fn deref(&self) -> &Self::Target {
        self.cell
            .get_or_init(|| match Selector::parse(self.selector) {
                Ok(sel) => sel,
                Err(e) => panic!("Error parsing static selector {}: {:?}", self.selector, e),
            })
    }
}

#[macro_export]
macro_rules! static_selector {
    ($x: ident <- $sel: literal) => {
        static $x: $crate::core::html::StaticSelector =
            $crate::core::html::StaticSelector::new($sel);
    };
}

/// Text of the first element `selector` matches under `element`, with the
/// whitespace the site's nested markup leaves behind collapsed away.
pub fn text_from_selection(
    selector: &Selector,
    element: ElementRef<'_>,
    parent_label: &str,
    child_label: &str,
) -> Result<String> {
    let found = element.select(selector).next().ok_or_else(|| {
        AlertError::ParseError {
            message: format!("Every {parent_label} element should have a {child_label}."),
        }
    })?;
    let text: String = found.text().collect();
    Ok(collapse_whitespace(&text))
}

pub fn collapse_whitespace(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+").expect("regex should be valid"));
    re.replace_all(s.trim(), " ").into_owned()
}
