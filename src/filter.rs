//! Category Filtering
//!
//! Pure helpers behind the home screen's category bar. The category set is
//! derived from whatever the backend returned, not a fixed enumeration.

use crate::models::Place;

/// Sentinel category matching every place ("All")
pub const ALL_CATEGORY: &str = "ทั้งหมด";

/// Distinct categories of `places` in first-seen order, prefixed with the
/// [`ALL_CATEGORY`] sentinel. Duplicates collapse to one entry.
pub fn derive_categories(places: &[Place]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORY.to_string()];
    for place in places {
        if !categories.iter().any(|c| c == &place.category) {
            categories.push(place.category.clone());
        }
    }
    categories
}

/// Places matching `selected`; the sentinel selects everything.
pub fn filter_by_category(places: &[Place], selected: &str) -> Vec<Place> {
    if selected == ALL_CATEGORY {
        return places.to_vec();
    }
    places
        .iter()
        .filter(|p| p.category == selected)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: &str, name: &str, category: &str) -> Place {
        Place {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            category: category.to_string(),
            address: String::new(),
            latitude: 15.7,
            longitude: 100.1,
            image_url: String::new(),
            phone: None,
        }
    }

    #[test]
    fn categories_are_distinct_with_single_sentinel() {
        let places = vec![
            place("1", "Wat A", "Temple"),
            place("2", "Wat B", "Temple"),
            place("3", "Night Market", "Market"),
        ];

        let categories = derive_categories(&places);
        assert_eq!(categories, vec![ALL_CATEGORY, "Temple", "Market"]);

        let sentinels = categories.iter().filter(|c| *c == ALL_CATEGORY).count();
        assert_eq!(sentinels, 1);
    }

    #[test]
    fn empty_list_yields_only_sentinel() {
        assert_eq!(derive_categories(&[]), vec![ALL_CATEGORY]);
    }

    #[test]
    fn all_sentinel_is_identity() {
        let places = vec![
            place("1", "Wat A", "Temple"),
            place("2", "Night Market", "Market"),
        ];
        assert_eq!(filter_by_category(&places, ALL_CATEGORY), places);
    }

    #[test]
    fn category_filter_keeps_exact_matches() {
        let places = vec![
            place("1", "Wat A", "Temple"),
            place("2", "Wat B", "Temple"),
            place("3", "Night Market", "Market"),
        ];

        let markets = filter_by_category(&places, "Market");
        assert_eq!(markets.len(), 1);
        assert_eq!(markets[0].id, "3");

        let temples = filter_by_category(&places, "Temple");
        assert_eq!(temples.len(), 2);
        assert!(temples.iter().all(|p| p.category == "Temple"));
    }

    #[test]
    fn unknown_category_filters_to_empty() {
        let places = vec![place("1", "Wat A", "Temple")];
        assert!(filter_by_category(&places, "Museum").is_empty());
    }

    #[test]
    fn toggling_back_to_all_restores_original_list() {
        let places = vec![
            place("1", "Wat A", "Temple"),
            place("2", "Wat B", "Temple"),
            place("3", "Night Market", "Market"),
        ];

        let narrowed = filter_by_category(&places, "Temple");
        assert_ne!(narrowed, places);
        assert_eq!(filter_by_category(&places, ALL_CATEGORY), places);
    }
}
