//! Category classification
//!
//! Maps arbitrary text onto a category with keyword matching. The steps run
//! in a fixed order and the first one that produces an answer wins:
//!
//! 1. a category name appears in the text
//! 2. the category with the most keyword hits
//! 3. whole-word transport and grocery heuristics
//! 4. the text itself, title-cased, as a custom category

use std::sync::LazyLock;

use regex::Regex;

use crate::models::Category;

/// Keyword table, in category declaration order
static CATEGORY_KEYWORDS: LazyLock<Vec<(Category, &'static [&'static str])>> =
    LazyLock::new(|| {
        vec![
            (
                Category::Groceries,
                &[
                    "grocery", "groceries", "food", "vegetable", "fruit", "bread", "milk",
                    "cheese", "meat", "snack", "snacks", "supermarket", "market", "store",
                    "shopping",
                ],
            ),
            (
                Category::Dining,
                &[
                    "restaurant", "dining", "lunch", "dinner", "breakfast", "cafe", "coffee",
                    "food delivery", "takeout", "take out", "take-out", "meal", "pizza",
                    "burger",
                ],
            ),
            (
                Category::Transportation,
                &[
                    "taxi", "cab", "uber", "ola", "lyft", "auto", "rickshaw", "bus", "train",
                    "metro", "subway", "travel", "transport", "car", "petrol", "gas", "fuel",
                    "diesel", "fare",
                ],
            ),
            (
                Category::Utilities,
                &[
                    "electricity", "water", "gas", "bill", "utility", "power", "internet",
                    "wifi", "broadband", "phone", "mobile", "landline", "recharge",
                ],
            ),
            (
                Category::Entertainment,
                &[
                    "movie", "theater", "cinema", "show", "concert", "event", "ticket", "game",
                    "music", "subscription", "netflix", "amazon", "disney", "streaming",
                ],
            ),
            (
                Category::Shopping,
                &[
                    "clothes", "clothing", "shoes", "dress", "shirt", "pants", "jeans",
                    "accessory", "accessories", "jewelry", "fashion", "mall", "apparel", "gift",
                    "purchase",
                ],
            ),
            (
                Category::Healthcare,
                &[
                    "medicine", "medical", "doctor", "hospital", "clinic", "health", "pharmacy",
                    "drug", "prescription", "vitamin", "healthcare", "treatment", "therapy",
                ],
            ),
            (
                Category::Education,
                &[
                    "school", "college", "university", "course", "class", "tuition", "book",
                    "stationery", "education", "study", "training", "workshop", "seminar",
                ],
            ),
            (
                Category::PersonalCare,
                &[
                    "haircut", "salon", "spa", "beauty", "cosmetic", "cosmetics", "skincare",
                    "grooming", "personal", "hygiene", "toiletries",
                ],
            ),
            (
                Category::Household,
                &[
                    "rent", "maintenance", "repair", "furniture", "appliance", "cleaning",
                    "housekeeping", "decor", "bedding", "kitchen", "bathroom", "garden", "tool",
                ],
            ),
        ]
    });

static TRANSPORT_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\btaxi\b|\bcab\b|\bauto\b|\brickshaw\b|\buber\b|\bola\b")
        .expect("transport pattern is valid")
});

static GROCERY_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bgrocery\b|\bvegetable\b|\bfood\b").expect("grocery pattern is valid")
});

/// Classify free text into a category
///
/// Never fails: text that matches nothing becomes a custom category made
/// of its own title-cased words, and empty text is `Miscellaneous`.
pub fn classify(text: &str) -> Category {
    let text = text.trim().to_lowercase();
    if text.is_empty() {
        return Category::Miscellaneous;
    }

    if let Some(category) = match_category_name(&text) {
        return category;
    }

    if let Some(category) = best_keyword_match(&text) {
        return category;
    }

    if TRANSPORT_WORDS.is_match(&text) {
        return Category::Transportation;
    }
    if GROCERY_WORDS.is_match(&text) {
        return Category::Groceries;
    }

    Category::from_name(&title_case(&text))
}

/// First category, in declaration order, whose name appears in the text
fn match_category_name(text: &str) -> Option<Category> {
    CATEGORY_KEYWORDS
        .iter()
        .map(|(category, _)| category)
        .find(|category| text.contains(&category.name().to_lowercase()))
        .cloned()
}

/// Category with the most keyword hits; ties go to the earlier category
fn best_keyword_match(text: &str) -> Option<Category> {
    let mut best: Option<(&Category, usize)> = None;

    for (category, keywords) in CATEGORY_KEYWORDS.iter() {
        let score = keywords.iter().filter(|k| text.contains(*k)).count();
        if score == 0 {
            continue;
        }
        match best {
            Some((_, best_score)) if best_score >= score => {}
            _ => best = Some((category, score)),
        }
    }

    best.map(|(category, _)| category.clone())
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_miscellaneous() {
        assert_eq!(classify(""), Category::Miscellaneous);
        assert_eq!(classify("   "), Category::Miscellaneous);
    }

    #[test]
    fn test_direct_name_match() {
        assert_eq!(classify("Groceries"), Category::Groceries);
        assert_eq!(classify("monthly UTILITIES payment"), Category::Utilities);
        assert_eq!(classify("personal care stuff"), Category::PersonalCare);
    }

    #[test]
    fn test_direct_name_match_uses_declaration_order() {
        // both "dining" and "groceries" appear; Groceries is declared first
        assert_eq!(classify("dining and groceries"), Category::Groceries);
    }

    #[test]
    fn test_keyword_scoring() {
        assert_eq!(classify("I bought milk and bread"), Category::Groceries);
        assert_eq!(classify("taxi fare"), Category::Transportation);
        assert_eq!(classify("doctor visit at the clinic"), Category::Healthcare);
    }

    #[test]
    fn test_keyword_scoring_prefers_more_hits() {
        // "gas" scores for Transportation and Utilities; "bill" and "power" tip it
        assert_eq!(classify("gas power bill"), Category::Utilities);
    }

    #[test]
    fn test_keyword_tie_goes_to_first_category() {
        // one hit each for Transportation and Utilities
        assert_eq!(classify("gas"), Category::Transportation);
    }

    #[test]
    fn test_keywords_match_substrings() {
        // "pizzas" contains "pizza"
        assert_eq!(classify("two pizzas"), Category::Dining);
    }

    #[test]
    fn test_title_case_fallback() {
        assert_eq!(classify("xyz123"), Category::Custom("Xyz123".into()));
        assert_eq!(classify("PET  vet"), Category::Custom("Pet Vet".into()));
    }

    #[test]
    fn test_deterministic() {
        let first = classify("coffee and a movie ticket");
        for _ in 0..5 {
            assert_eq!(classify("coffee and a movie ticket"), first);
        }
    }
}
