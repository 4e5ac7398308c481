use crate::core::date_window::DateWindow;
use crate::domain::model::{KeywordMatch, MealGroup, MealOfDay};

/// Folds raw matches into per-(hall, meal) groups, sorted for stable output:
/// halls alphabetically, meals in breakfast/lunch/dinner order with unlabeled
/// menus last. Group order follows first appearance until the sort.
pub fn group_matches(matches: &[KeywordMatch]) -> Vec<MealGroup> {
    let mut groups: Vec<MealGroup> = Vec::new();
    for found in matches {
        match groups
            .iter_mut()
            .find(|group| group.hall.name == found.hall.name && group.meal == found.meal)
        {
            Some(group) => group.push_unique(&found.food),
            None => {
                let mut group = MealGroup::new(found.hall, found.meal);
                group.push_unique(&found.food);
                groups.push(group);
            }
        }
    }
    groups.sort_by(|a, b| {
        a.hall
            .name
            .cmp(b.hall.name)
            .then(meal_ordinal(a.meal).cmp(&meal_ordinal(b.meal)))
    });
    groups
}

fn meal_ordinal(meal: Option<MealOfDay>) -> u8 {
    match meal {
        Some(MealOfDay::Breakfast) => 0,
        Some(MealOfDay::Lunch) => 1,
        Some(MealOfDay::Dinner) => 2,
        None => 3,
    }
}

/// Natural-language list: "A", "A and B", "A, B, and C".
pub fn comma_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} and {}", first, second),
        [head @ .., last] => format!("{}, and {}", head.join(", "), last),
    }
}

/// Composes the day's post. No matches is still news and still gets
/// published.
pub fn compose_message(matches: &[KeywordMatch], window: &DateWindow) -> String {
    let the_date = window.the_date();
    if matches.is_empty() {
        return format!("✅ No jerk chicken today ({})", the_date);
    }

    let mut lines = vec![format!("🚨 Jerk chicken today ({})\n", the_date)];
    let mut previous_hall: Option<&str> = None;
    for group in group_matches(matches) {
        let mut foods = group.foods().to_vec();
        foods.sort();

        let mut line = format!("🍗 {} at {}", comma_list(&foods), group.hall.name);
        if let Some(meal) = group.meal {
            line.push_str(&format!(" for {}", meal.label().to_lowercase()));
        }
        if previous_hall.is_some_and(|name| name != group.hall.name) {
            line.insert(0, '\n');
        }
        previous_hall = Some(group.hall.name);
        lines.push(line);
    }
    lines.join("\n")
}
