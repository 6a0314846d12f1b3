//! Search Merge and Collection Building
//!
//! Pure functions that combine local data with API results. The command
//! layer gathers the inputs; nothing here touches disk or network.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::{CustomRecipe, DomainResult, ExternalKind, ExternalRecord, Favorite, RecipeCard};

/// Cards for one search, plus the API failure if there was one
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub cards: Vec<RecipeCard>,
    /// Set when the remote call failed; local hits are still returned
    pub remote_error: Option<String>,
}

/// Order: favorite hits, custom recipe hits (meal searches only), then
/// API records not already listed as a favorite. The local hits come from
/// the stores' own search.
pub fn merge_results(
    kind: ExternalKind,
    query: &str,
    favorite_hits: Vec<Favorite>,
    custom_hits: Vec<CustomRecipe>,
    remote: DomainResult<Vec<ExternalRecord>>,
    favorite_ids: &HashSet<String>,
) -> SearchOutcome {
    let mut cards = Vec::new();
    let mut seen = HashSet::new();

    for favorite in favorite_hits {
        if let Some(card) = RecipeCard::from_external(kind, favorite.record, true) {
            if seen.insert(card.id.clone()) {
                cards.push(card);
            }
        }
    }

    if kind == ExternalKind::Meal {
        cards.extend(custom_hits.into_iter().map(RecipeCard::from_custom));
    }

    let remote_error = match remote {
        Ok(records) => {
            cards.extend(remote_cards(kind, records, favorite_ids, &mut seen));
            None
        }
        Err(e) => {
            log::warn!("{} search for '{}' failed: {}", kind.as_str(), query, e);
            Some(e.to_string())
        }
    };

    SearchOutcome {
        cards,
        remote_error,
    }
}

/// Cards for API records, skipping ids in `seen` and duplicates within the batch
pub fn remote_cards(
    kind: ExternalKind,
    records: Vec<ExternalRecord>,
    favorite_ids: &HashSet<String>,
    seen: &mut HashSet<String>,
) -> Vec<RecipeCard> {
    records
        .into_iter()
        .filter_map(|record| {
            let id = record.external_id(kind)?;
            if !seen.insert(id.clone()) {
                return None;
            }
            RecipeCard::from_external(kind, record, favorite_ids.contains(&id))
        })
        .collect()
}

/// The three Collection sections after filtering
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionView {
    pub custom: Vec<RecipeCard>,
    pub cocktails: Vec<RecipeCard>,
    pub meals: Vec<RecipeCard>,
}

impl CollectionView {
    pub fn is_empty(&self) -> bool {
        self.custom.is_empty() && self.cocktails.is_empty() && self.meals.is_empty()
    }
}

/// Filter is a case-insensitive substring over title and category
pub fn build_collection(
    custom: Vec<CustomRecipe>,
    cocktails: Vec<Favorite>,
    meals: Vec<Favorite>,
    filter: &str,
) -> CollectionView {
    let favorites = |kind: ExternalKind, list: Vec<Favorite>| -> Vec<RecipeCard> {
        list.into_iter()
            .filter_map(|fav| RecipeCard::from_external(kind, fav.record, true))
            .filter(|card| card.view.matches(filter))
            .collect()
    };
    CollectionView {
        custom: custom
            .into_iter()
            .map(RecipeCard::from_custom)
            .filter(|card| card.view.matches(filter))
            .collect(),
        cocktails: favorites(ExternalKind::Cocktail, cocktails),
        meals: favorites(ExternalKind::Meal, meals),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, RecipeDraft, SourceKind};
    use serde_json::json;

    fn meal(id: &str, name: &str) -> ExternalRecord {
        ExternalRecord::from_value(json!({"idMeal": id, "strMeal": name, "strCategory": "Chicken"}))
            .unwrap()
    }

    fn favorite(id: &str, name: &str) -> Favorite {
        Favorite {
            id: id.to_string(),
            record: meal(id, name),
        }
    }

    fn custom(name: &str) -> CustomRecipe {
        CustomRecipe::from_draft(
            RecipeDraft {
                name: name.to_string(),
                ..Default::default()
            },
            None,
        )
    }

    #[test]
    fn test_local_hits_first_and_api_deduplicated() {
        let ids: HashSet<String> = ["1".to_string(), "9".to_string()].into();
        let outcome = merge_results(
            ExternalKind::Meal,
            "chicken",
            vec![favorite("1", "Chicken Curry")],
            vec![custom("My Chicken Pie")],
            Ok(vec![meal("1", "Chicken Curry"), meal("2", "Chicken Tikka")]),
            &ids,
        );

        let titles: Vec<_> = outcome.cards.iter().map(|c| c.view.title.as_str()).collect();
        assert_eq!(titles, vec!["Chicken Curry", "My Chicken Pie", "Chicken Tikka"]);
        assert_eq!(outcome.cards[1].source, SourceKind::Custom);
        assert!(outcome.cards[0].favorited);
        assert!(!outcome.cards[2].favorited);
        assert!(outcome.remote_error.is_none());
    }

    #[test]
    fn test_custom_recipes_only_in_meal_search() {
        let outcome = merge_results(
            ExternalKind::Cocktail,
            "pie",
            vec![],
            vec![custom("Pie")],
            Ok(vec![]),
            &HashSet::new(),
        );
        assert!(outcome.cards.is_empty());
    }

    #[test]
    fn test_remote_failure_keeps_local_hits() {
        let outcome = merge_results(
            ExternalKind::Meal,
            "curry",
            vec![favorite("1", "Chicken Curry")],
            vec![],
            Err(DomainError::Network("timed out".to_string())),
            &HashSet::new(),
        );
        assert_eq!(outcome.cards.len(), 1);
        assert_eq!(outcome.remote_error.as_deref(), Some("Network error: timed out"));
    }

    #[test]
    fn test_favorited_api_hit_not_matching_query_is_marked() {
        // Ingredient searches return titles that need not contain the query
        let ids: HashSet<String> = ["5".to_string()].into();
        let outcome = merge_results(
            ExternalKind::Meal,
            "garlic",
            vec![],
            vec![],
            Ok(vec![meal("5", "Roast Lamb")]),
            &ids,
        );
        assert_eq!(outcome.cards.len(), 1);
        assert!(outcome.cards[0].favorited);
    }

    #[test]
    fn test_collection_filter_by_title_or_category() {
        let view = build_collection(
            vec![custom("Lemonade")],
            vec![],
            vec![favorite("1", "Chicken Curry"), favorite("2", "Pad Thai")],
            "chicken",
        );
        assert!(view.custom.is_empty());
        // "Pad Thai" matches through its category
        assert_eq!(view.meals.len(), 2);

        let empty = build_collection(vec![], vec![], vec![], "");
        assert!(empty.is_empty());
    }
}
