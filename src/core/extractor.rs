use std::collections::HashMap;

use regex::{Regex, RegexBuilder};
use scraper::{ElementRef, Html, Selector};

use crate::core::date_window::DateWindow;
use crate::core::html::{collapse_whitespace, text_from_selection};
use crate::core::resolver::ResolvedMenu;
use crate::domain::model::{DiningHall, FoodRecord, KeywordMatch, MealOfDay};
use crate::static_selector;
use crate::utils::error::{AlertError, Result};

/// The phrase this whole service exists to detect.
pub const TARGET_PHRASE: &str = "jerk chicken";

/// Case-insensitive matcher for the target phrase. Menu editors sometimes
/// drop the space ("jerkchicken"), so each gap in the phrase is optional.
#[derive(Debug, Clone)]
pub struct KeywordPattern {
    regex: Regex,
}

impl KeywordPattern {
    pub fn new(phrase: &str) -> Self {
        let pattern = phrase
            .split_whitespace()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(r"\s?");
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .expect("regex using escaped input should be valid");
        Self { regex }
    }

    pub fn target() -> Self {
        Self::new(TARGET_PHRASE)
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Builds the id -> display title index of foods that name the phrase,
/// rebuilt from the live feed on every run. Food ids drift as the menu
/// system changes, so nothing here is hardcoded.
pub fn build_keyword_index(
    foods: &[FoodRecord],
    pattern: &KeywordPattern,
) -> HashMap<String, String> {
    let mut index = HashMap::new();
    for food in foods {
        let title = decode_entities(&food.title);
        let title = title.trim();
        if pattern.is_match(title) {
            index.insert(food.id.clone(), title.to_string());
        }
    }
    index
}

/// Feed titles arrive with their HTML entities still encoded ("JJ&#039;s").
/// Parsing the title as a fragment and taking its text decodes them.
fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    let fragment = Html::parse_fragment(s);
    fragment.root_element().text().collect()
}

/// Walks resolved menu documents and reports every meal slot whose id is in
/// the keyword index. Multi-meal halls get the meal of day read from the
/// period title; single-menu halls always report without one.
pub fn extract_structured(
    resolved: &[ResolvedMenu],
    index: &HashMap<String, String>,
) -> Vec<KeywordMatch> {
    let mut matches = Vec::new();
    for menu in resolved {
        for period in &menu.periods {
            let meal = if menu.hall.multi_meal {
                meal_from_title(&period.title)
            } else {
                None
            };
            for station in &period.stations {
                for meal_id in &station.meals {
                    if let Some(food) = index.get(meal_id) {
                        matches.push(KeywordMatch {
                            food: food.clone(),
                            hall: menu.hall,
                            meal,
                        });
                    }
                }
            }
        }
    }
    matches
}

fn meal_from_title(title: &str) -> Option<MealOfDay> {
    MealOfDay::ALL
        .into_iter()
        .find(|meal| title.contains(meal.label()))
}

static_selector!(DATE_RANGE_SELECTOR <- ".paragraph--type--cu-dining-date-range");
static_selector!(DATE_FROM_SELECTOR <- ".field--name-field-cu-dining-date-from time");
static_selector!(DATE_TO_SELECTOR <- ".field--name-field-cu-dining-date-to time");
static_selector!(MEAL_TYPE_SELECTOR <- ".field--name-field-cu-dining-menu-type a");
static_selector!(MEAL_BLOCK_SELECTOR <- ".paragraph--type--cu-dining-meal");
static_selector!(MEAL_TITLE_SELECTOR <- ".field--name-field-cu-title");
static_selector!(MEAL_TEXT_SELECTOR <- ".field--name-field-cu-dining-meal-text");

/// Scrapes one hall's menu page. A page stacks date-range sections (one per
/// serving period, often covering several days); only sections whose range
/// covers the target day are searched. A meal matches on its title or,
/// failing that, on its description text.
pub fn extract_page(
    hall: &'static DiningHall,
    html: &str,
    window: &DateWindow,
    pattern: &KeywordPattern,
) -> Result<Vec<KeywordMatch>> {
    let document = Html::parse_document(html);
    let mut matches = Vec::new();
    let mut saw_section = false;

    for section in document.select(&DATE_RANGE_SELECTOR) {
        saw_section = true;
        let from = datetime_attr(section, &DATE_FROM_SELECTOR, "date-from")?;
        let to = datetime_attr(section, &DATE_TO_SELECTOR, "date-to")?;
        if !window.matches_range(&from, &to)? {
            continue;
        }

        let label = text_from_selection(&MEAL_TYPE_SELECTOR, section, "date range", "meal type")?;
        let meal = MealOfDay::parse_label(&label);

        for block in section.select(&MEAL_BLOCK_SELECTOR) {
            let raw = text_from_selection(&MEAL_TITLE_SELECTOR, block, "meal", "title")?;
            let name = strip_title_label(&raw);
            if pattern.is_match(&name) {
                matches.push(KeywordMatch {
                    food: name,
                    hall,
                    meal,
                });
                continue;
            }
            if let Some(text_el) = block.select(&MEAL_TEXT_SELECTOR).next() {
                let description: String = text_el.text().collect();
                if pattern.is_match(&description) {
                    matches.push(KeywordMatch {
                        food: name,
                        hall,
                        meal,
                    });
                }
            }
        }
    }

    if !saw_section {
        return Err(AlertError::ParseError {
            message: format!("Menu page for {} has no date range sections", hall.name),
        });
    }
    Ok(matches)
}

/// The title field renders as label + value, so its collapsed text starts
/// with a literal "Title " that is not part of the dish name.
fn strip_title_label(text: &str) -> String {
    let text = collapse_whitespace(text);
    match text.strip_prefix("Title ") {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

fn datetime_attr(
    section: ElementRef<'_>,
    selector: &Selector,
    label: &str,
) -> Result<String> {
    let element = section
        .select(selector)
        .next()
        .ok_or_else(|| AlertError::ParseError {
            message: format!("Every date range should have a {label} field."),
        })?;
    element
        .attr("datetime")
        .map(str::to_string)
        .ok_or_else(|| AlertError::ParseError {
            message: format!("The {label} field has no datetime attribute."),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{MenuPeriod, Station};
    use chrono::NaiveDate;

    fn jjs() -> &'static DiningHall {
        DiningHall::find("JJs").unwrap()
    }

    #[test]
    fn pattern_matches_spacing_and_case_variants() {
        let pattern = KeywordPattern::target();
        assert!(pattern.is_match("Jerk Chicken"));
        assert!(pattern.is_match("JERK CHICKEN WRAP"));
        assert!(pattern.is_match("our famous jerkchicken platter"));
        assert!(pattern.is_match("Jerk\nChicken"));
        assert!(!pattern.is_match("Chicken Parmesan"));
        assert!(!pattern.is_match("Jerky Chicken"));
    }

    #[test]
    fn index_keeps_only_matching_foods_and_decodes_entities() {
        let foods = [
            FoodRecord {
                id: "3585".to_string(),
                title: "JJ&#039;s Jerk Chicken Quesadilla with Tamarind Sauce".to_string(),
            },
            FoodRecord {
                id: "4102".to_string(),
                title: "Garden Salad".to_string(),
            },
            FoodRecord {
                id: "4413".to_string(),
                title: "Mac &amp; Cheese with Jerk Chicken".to_string(),
            },
        ];
        let index = build_keyword_index(&foods, &KeywordPattern::target());
        assert_eq!(index.len(), 2);
        assert_eq!(
            index.get("3585").map(String::as_str),
            Some("JJ's Jerk Chicken Quesadilla with Tamarind Sauce")
        );
        assert_eq!(
            index.get("4413").map(String::as_str),
            Some("Mac & Cheese with Jerk Chicken")
        );
    }

    #[test]
    fn structured_extraction_reports_indexed_slots() {
        let resolved = [ResolvedMenu {
            hall: jjs(),
            periods: vec![MenuPeriod {
                date_from: "2023-02-05T11:00:00".to_string(),
                title: "JJs Week 3_Sunday_Lunch & Dinner_02-05-2023".to_string(),
                stations: vec![Station {
                    meals: vec!["3585".to_string(), "4102".to_string()],
                }],
            }],
        }];
        let mut index = HashMap::new();
        index.insert(
            "3585".to_string(),
            "JJ's Jerk Chicken Quesadilla with Tamarind Sauce".to_string(),
        );

        let matches = extract_structured(&resolved, &index);
        assert_eq!(matches.len(), 1);
        assert_eq!(
            matches[0].food,
            "JJ's Jerk Chicken Quesadilla with Tamarind Sauce"
        );
        assert_eq!(matches[0].hall.name, "JJs");
        // single-menu hall: no meal of day even though the title names two
        assert_eq!(matches[0].meal, None);
    }

    #[test]
    fn structured_extraction_reads_meal_from_multi_meal_titles() {
        let john_jay = DiningHall::find("John Jay").unwrap();
        let resolved = [ResolvedMenu {
            hall: john_jay,
            periods: vec![MenuPeriod {
                date_from: "2023-02-05T11:00:00".to_string(),
                title: "John Jay_Sunday_Lunch_02-05-2023".to_string(),
                stations: vec![Station {
                    meals: vec!["77".to_string()],
                }],
            }],
        }];
        let mut index = HashMap::new();
        index.insert("77".to_string(), "Jerk Chicken".to_string());

        let matches = extract_structured(&resolved, &index);
        assert_eq!(matches[0].meal, Some(MealOfDay::Lunch));
    }

    const SAMPLE_PAGE: &str = r#"<html><body>
      <div class="paragraph--type--cu-dining-date-range">
        <div class="field--name-field-cu-dining-date-from">
          <time datetime="2024-02-03T11:00:00Z">February 3</time>
        </div>
        <div class="field--name-field-cu-dining-date-to">
          <time datetime="2024-02-03T15:00:00Z">February 3</time>
        </div>
        <div class="field--name-field-cu-dining-menu-type"><a href="/t/lunch">Lunch</a></div>
        <div class="paragraph--type--cu-dining-meal">
          <div class="field--name-field-cu-title">
            <div class="field--label">Title</div>
            <div class="field--item">
              Jerk Chicken
            </div>
          </div>
        </div>
        <div class="paragraph--type--cu-dining-meal">
          <div class="field--name-field-cu-title">
            <div class="field--label">Title</div>
            <div class="field--item">Roasted Potatoes</div>
          </div>
          <div class="field--name-field-cu-dining-meal-text">
            <div class="field--item">Served beside our jerkchicken platter</div>
          </div>
        </div>
        <div class="paragraph--type--cu-dining-meal">
          <div class="field--name-field-cu-title">
            <div class="field--label">Title</div>
            <div class="field--item">Fruit Cup</div>
          </div>
        </div>
      </div>
      <div class="paragraph--type--cu-dining-date-range">
        <div class="field--name-field-cu-dining-date-from">
          <time datetime="2024-02-10T11:00:00Z">February 10</time>
        </div>
        <div class="field--name-field-cu-dining-date-to">
          <time datetime="2024-02-10T15:00:00Z">February 10</time>
        </div>
        <div class="field--name-field-cu-dining-menu-type"><a href="/t/lunch">Lunch</a></div>
        <div class="paragraph--type--cu-dining-meal">
          <div class="field--name-field-cu-title">
            <div class="field--label">Title</div>
            <div class="field--item">Jerk Chicken Encore</div>
          </div>
        </div>
      </div>
    </body></html>"#;

    #[test]
    fn page_extraction_matches_titles_and_descriptions_in_range() {
        let window = DateWindow::new(NaiveDate::from_ymd_opt(2024, 2, 3).unwrap());
        let john_jay = DiningHall::find("John Jay").unwrap();
        let matches =
            extract_page(john_jay, SAMPLE_PAGE, &window, &KeywordPattern::target()).unwrap();

        let foods: Vec<&str> = matches.iter().map(|m| m.food.as_str()).collect();
        assert_eq!(foods, ["Jerk Chicken", "Roasted Potatoes"]);
        assert!(matches.iter().all(|m| m.meal == Some(MealOfDay::Lunch)));
        assert!(matches.iter().all(|m| m.hall.name == "John Jay"));
    }

    #[test]
    fn non_meal_section_labels_leave_the_meal_unset() {
        let page = r##"<div class="paragraph--type--cu-dining-date-range">
            <div class="field--name-field-cu-dining-date-from">
              <time datetime="2024-02-03T10:00:00Z">start</time>
            </div>
            <div class="field--name-field-cu-dining-date-to">
              <time datetime="2024-02-03T20:00:00Z">end</time>
            </div>
            <div class="field--name-field-cu-dining-menu-type"><a href="#">Menu</a></div>
            <div class="paragraph--type--cu-dining-meal">
              <div class="field--name-field-cu-title">
                <div class="field--label">Title</div>
                <div class="field--item">Jerk Chicken Sub</div>
              </div>
            </div>
        </div>"##;
        let window = DateWindow::new(NaiveDate::from_ymd_opt(2024, 2, 3).unwrap());
        let matches = extract_page(jjs(), page, &window, &KeywordPattern::target()).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].meal, None);
    }

    #[test]
    fn page_extraction_errors_on_pages_without_sections() {
        let window = DateWindow::new(NaiveDate::from_ymd_opt(2024, 2, 3).unwrap());
        let result = extract_page(
            jjs(),
            "<html><body><p>Closed for break</p></body></html>",
            &window,
            &KeywordPattern::target(),
        );
        assert!(matches!(result, Err(AlertError::ParseError { .. })));
    }

    #[test]
    fn page_extraction_errors_on_missing_date_fields() {
        let window = DateWindow::new(NaiveDate::from_ymd_opt(2024, 2, 3).unwrap());
        let page = r#"<div class="paragraph--type--cu-dining-date-range">
            <div class="field--name-field-cu-dining-menu-type"><a>Lunch</a></div>
        </div>"#;
        let result = extract_page(jjs(), page, &window, &KeywordPattern::target());
        assert!(matches!(result, Err(AlertError::ParseError { .. })));
    }
}
