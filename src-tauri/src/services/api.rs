//! Recipe API Client
//!
//! Thin wrapper over TheMealDB / TheCocktailDB. Both share the same endpoint
//! layout and differ only in base URL and result key.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::domain::{DomainError, DomainResult, ExternalKind, ExternalRecord};

pub const MEAL_API_BASE: &str = "https://www.themealdb.com/api/json/v1/1";
pub const COCKTAIL_API_BASE: &str = "https://www.thecocktaildb.com/api/json/v1/1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);
const USER_AGENT: &str = concat!("Bistro/", env!("CARGO_PKG_VERSION"));

/// How the query string is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Name,
    Ingredient,
    Category,
}

impl SearchMode {
    /// Endpoint and query parameter for this mode
    fn endpoint(&self) -> (&'static str, &'static str) {
        match self {
            SearchMode::Name => ("search.php", "s"),
            SearchMode::Ingredient => ("filter.php", "i"),
            SearchMode::Category => ("filter.php", "c"),
        }
    }
}

pub struct RecipeApi {
    client: reqwest::Client,
    meal_base: String,
    cocktail_base: String,
}

impl RecipeApi {
    pub fn new() -> DomainResult<Self> {
        Self::with_base_urls(MEAL_API_BASE, COCKTAIL_API_BASE)
    }

    pub fn with_base_urls(meal_base: &str, cocktail_base: &str) -> DomainResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            meal_base: meal_base.trim_end_matches('/').to_string(),
            cocktail_base: cocktail_base.trim_end_matches('/').to_string(),
        })
    }

    /// Shared HTTP client, also used by the page importer
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    fn url(&self, kind: ExternalKind, endpoint: &str) -> String {
        let base = match kind {
            ExternalKind::Meal => &self.meal_base,
            ExternalKind::Cocktail => &self.cocktail_base,
        };
        format!("{}/{}", base, endpoint)
    }

    pub async fn search(
        &self,
        kind: ExternalKind,
        mode: SearchMode,
        query: &str,
    ) -> DomainResult<Vec<ExternalRecord>> {
        let (endpoint, param) = mode.endpoint();
        self.fetch_list(kind, endpoint, &[(param, query.trim())]).await
    }

    pub async fn random(&self, kind: ExternalKind) -> DomainResult<Option<ExternalRecord>> {
        Ok(self.fetch_list(kind, "random.php", &[]).await?.into_iter().next())
    }

    /// Full record for an id, used to expand filter-endpoint summaries
    pub async fn lookup(&self, kind: ExternalKind, id: &str) -> DomainResult<Option<ExternalRecord>> {
        Ok(self
            .fetch_list(kind, "lookup.php", &[("i", id.trim())])
            .await?
            .into_iter()
            .next())
    }

    async fn fetch_list(
        &self,
        kind: ExternalKind,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> DomainResult<Vec<ExternalRecord>> {
        let url = self.url(kind, endpoint);
        log::info!("GET {} {:?}", url, params);
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?;
        let body: Value = response.json().await?;
        Ok(parse_list(kind, body))
    }

    pub async fn get_text(&self, url: &str) -> DomainResult<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    pub async fn get_bytes(&self, url: &str) -> DomainResult<Vec<u8>> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(DomainError::Network(format!("Empty response from {}", url)));
        }
        Ok(bytes.to_vec())
    }
}

/// Records under the kind's list key; `null` or a missing key means none
pub fn parse_list(kind: ExternalKind, body: Value) -> Vec<ExternalRecord> {
    match body {
        Value::Object(mut map) => match map.remove(kind.list_key()) {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(ExternalRecord::from_value)
                .collect(),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_list_reads_kind_key() {
        let body = json!({"meals": [{"idMeal": "1"}, {"idMeal": "2"}, "junk"]});
        let records = parse_list(ExternalKind::Meal, body);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].external_id(ExternalKind::Meal).as_deref(), Some("2"));
    }

    #[test]
    fn test_parse_list_null_means_no_results() {
        assert!(parse_list(ExternalKind::Cocktail, json!({"drinks": null})).is_empty());
        assert!(parse_list(ExternalKind::Cocktail, json!({"meals": []})).is_empty());
        assert!(parse_list(ExternalKind::Cocktail, json!("oops")).is_empty());
    }

    #[test]
    fn test_search_mode_endpoints() {
        assert_eq!(SearchMode::Name.endpoint(), ("search.php", "s"));
        assert_eq!(SearchMode::Ingredient.endpoint(), ("filter.php", "i"));
        assert_eq!(SearchMode::Category.endpoint(), ("filter.php", "c"));
    }

    #[test]
    fn test_base_urls_are_normalized() {
        let api = RecipeApi::with_base_urls("http://meal/", "http://drink").unwrap();
        assert_eq!(api.url(ExternalKind::Meal, "random.php"), "http://meal/random.php");
        assert_eq!(api.url(ExternalKind::Cocktail, "lookup.php"), "http://drink/lookup.php");
    }
}
