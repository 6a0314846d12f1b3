//! External Records
//!
//! Raw records from TheCocktailDB / TheMealDB, kept verbatim so favorites
//! round-trip byte-for-byte through `cocktails.json` and `meals.json`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::entity::Entity;

/// Which remote database a record comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExternalKind {
    Cocktail,
    Meal,
}

impl ExternalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExternalKind::Cocktail => "cocktail",
            ExternalKind::Meal => "meal",
        }
    }

    /// Field holding the record's external id
    pub fn id_key(&self) -> &'static str {
        match self {
            ExternalKind::Cocktail => "idDrink",
            ExternalKind::Meal => "idMeal",
        }
    }

    pub fn thumb_key(&self) -> &'static str {
        match self {
            ExternalKind::Cocktail => "strDrinkThumb",
            ExternalKind::Meal => "strMealThumb",
        }
    }

    /// Number of `strIngredientN` slots the API fills
    pub fn max_ingredients(&self) -> usize {
        match self {
            ExternalKind::Cocktail => 15,
            ExternalKind::Meal => 20,
        }
    }

    /// Key of the result array in API responses
    pub fn list_key(&self) -> &'static str {
        match self {
            ExternalKind::Cocktail => "drinks",
            ExternalKind::Meal => "meals",
        }
    }

    /// Basename of the favorites file (user data and bundled default)
    pub fn file_name(&self) -> &'static str {
        match self {
            ExternalKind::Cocktail => "cocktails.json",
            ExternalKind::Meal => "meals.json",
        }
    }
}

/// An API record, stringly typed, read with optional-default access
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalRecord(Map<String, Value>);

impl ExternalRecord {
    /// Wrap a JSON value if it is an object
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Trimmed string field; blank strings and non-strings read as absent
    pub fn field(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// External id, accepting numeric ids as well
    pub fn external_id(&self, kind: ExternalKind) -> Option<String> {
        match self.0.get(kind.id_key()) {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// A record the user has opted to keep, keyed by its external id
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: String,
    pub record: ExternalRecord,
}

impl Entity for Favorite {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

/// Membership after a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteState {
    Favorited,
    NotFavorited,
}
