use serde::{Deserialize, Serialize};

/// Campus dining locations the checker reports on, in lookup priority order.
/// Feed titles name a hall loosely ("JJs Week 3_Sunday_Lunch & Dinner_02-05-2023"),
/// so matching is a case-insensitive substring scan over this table. "John Jay"
/// must come before "JJs": both substrings can appear in the same title.
pub static DINING_HALLS: [DiningHall; 8] = [
    DiningHall {
        name: "John Jay",
        multi_meal: true,
    },
    DiningHall {
        name: "Ferris",
        multi_meal: true,
    },
    DiningHall {
        name: "JJs",
        multi_meal: false,
    },
    DiningHall {
        name: "Chef Mike's",
        multi_meal: false,
    },
    DiningHall {
        name: "Chef Don's",
        multi_meal: false,
    },
    DiningHall {
        name: "Grace Dodge",
        multi_meal: false,
    },
    DiningHall {
        name: "Faculty House",
        multi_meal: false,
    },
    DiningHall {
        name: "Fac Shack",
        multi_meal: false,
    },
];

#[derive(Debug, PartialEq, Eq)]
pub struct DiningHall {
    pub name: &'static str,
    /// Halls that publish separate breakfast/lunch/dinner menus; the rest
    /// serve one running menu and report without a meal-of-day.
    pub multi_meal: bool,
}

impl DiningHall {
    /// First hall whose name appears in `text`, ignoring case.
    pub fn find(text: &str) -> Option<&'static DiningHall> {
        let lowered = text.to_lowercase();
        DINING_HALLS
            .iter()
            .find(|hall| lowered.contains(hall.name.to_lowercase().as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MealOfDay {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealOfDay {
    pub const ALL: [MealOfDay; 3] = [MealOfDay::Breakfast, MealOfDay::Lunch, MealOfDay::Dinner];

    pub fn label(self) -> &'static str {
        match self {
            MealOfDay::Breakfast => "Breakfast",
            MealOfDay::Lunch => "Lunch",
            MealOfDay::Dinner => "Dinner",
        }
    }

    pub fn parse_label(label: &str) -> Option<MealOfDay> {
        match label.trim().to_lowercase().as_str() {
            "breakfast" => Some(MealOfDay::Breakfast),
            "lunch" => Some(MealOfDay::Lunch),
            "dinner" => Some(MealOfDay::Dinner),
            _ => None,
        }
    }
}

/// One food from the `/cu_dining/rest/meals` feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodRecord {
    pub id: String,
    pub title: String,
}

/// One document from the `/cu_dining/rest/menus/nested` feed. Each document
/// carries every serving period the site currently publishes for one hall.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuRecord {
    pub date_range_fields: Vec<MenuPeriod>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuPeriod {
    pub date_from: String,
    pub title: String,
    pub stations: Vec<Station>,
}

/// A serving station lists its foods by id; titles live in the foods feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    pub meals: Vec<String>,
}

/// One entry from the site-wide `/json/keywords` index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordRecord {
    pub title: String,
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub path: String,
}

/// A food that named the target phrase, tied to where it is served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch {
    pub food: String,
    pub hall: &'static DiningHall,
    pub meal: Option<MealOfDay>,
}

/// Matches collected under one (hall, meal) heading, deduplicated by title.
#[derive(Debug, Clone)]
pub struct MealGroup {
    pub hall: &'static DiningHall,
    pub meal: Option<MealOfDay>,
    foods: Vec<String>,
}

impl MealGroup {
    pub fn new(hall: &'static DiningHall, meal: Option<MealOfDay>) -> Self {
        Self {
            hall,
            meal,
            foods: Vec::new(),
        }
    }

    /// Adds a food unless an identical title is already in the group.
    pub fn push_unique(&mut self, food: &str) {
        if !self.foods.iter().any(|existing| existing == food) {
            self.foods.push(food.to_string());
        }
    }

    pub fn foods(&self) -> &[String] {
        &self.foods
    }
}
