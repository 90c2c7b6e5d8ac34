//! TheMealDB API client

use futures::future::join_all;
use serde::Deserialize;
use std::collections::HashSet;
use std::time::Duration;
use thiserror::Error;

use crate::meal::{transform_meals, Category, RawCategory, RawMeal, Recipe};

const MEALDB_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";
const USER_AGENT: &str = concat!("MealKeep/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Catalog client errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error {0}")]
    ApiError(u16),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// `{"meals": [...]}` envelope; `meals` is JSON null when nothing matched
#[derive(Debug, Deserialize)]
struct MealsEnvelope {
    meals: Option<Vec<RawMeal>>,
}

/// `{"categories": [...]}` envelope
#[derive(Debug, Deserialize)]
struct CategoriesEnvelope {
    categories: Option<Vec<RawCategory>>,
}

/// Read-only client for the external recipe catalog
pub struct CatalogClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_base_url(MEALDB_BASE_URL)
    }

    /// Construct against an alternate base URL (test servers)
    pub fn with_base_url(base_url: &str) -> Result<Self, CatalogError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| CatalogError::NetworkError(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path_and_query: &str,
    ) -> Result<T, CatalogError> {
        let url = format!("{}/{}", self.base_url, path_and_query);
        tracing::debug!(url = %url, "Querying recipe catalog");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::ApiError(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| CatalogError::ParseError(e.to_string()))
    }

    /// Fetch all recipe categories
    pub async fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        let envelope: CategoriesEnvelope = self.get_json("categories.php").await?;
        Ok(envelope
            .categories
            .unwrap_or_default()
            .into_iter()
            .filter_map(Category::from_raw)
            .collect())
    }

    /// Fetch one random recipe
    pub async fn random_meal(&self) -> Result<Option<Recipe>, CatalogError> {
        let envelope: MealsEnvelope = self.get_json("random.php").await?;
        let meals = envelope.meals.unwrap_or_default();
        Ok(transform_meals(&meals).into_iter().next())
    }

    /// Fetch up to `count` random recipes
    ///
    /// Issues `count` independent random draws concurrently. Failed draws
    /// are dropped rather than failing the batch, and duplicate draws are
    /// removed by id, so fewer than `count` recipes may come back.
    pub async fn random_meals(&self, count: usize) -> Vec<Recipe> {
        let draws = join_all((0..count).map(|_| self.random_meal())).await;

        let mut seen = HashSet::new();
        let mut recipes = Vec::new();
        for draw in draws {
            match draw {
                Ok(Some(recipe)) => {
                    if seen.insert(recipe.id) {
                        recipes.push(recipe);
                    }
                }
                Ok(None) => {}
                Err(e) => tracing::warn!("Random draw failed: {}", e),
            }
        }
        recipes
    }

    /// Fetch recipes belonging to a category
    ///
    /// The filter endpoint returns lightweight stubs (id, title, image
    /// only); missing detail fields normalize to empty/None.
    pub async fn filter_by_category(&self, category: &str) -> Result<Vec<Recipe>, CatalogError> {
        let envelope: MealsEnvelope = self
            .get_json(&format!("filter.php?c={}", category))
            .await?;
        Ok(transform_meals(&envelope.meals.unwrap_or_default()))
    }

    /// Fetch one recipe by catalog id; `None` when absent
    pub async fn meal_by_id(&self, id: i64) -> Result<Option<Recipe>, CatalogError> {
        let envelope: MealsEnvelope = self.get_json(&format!("lookup.php?i={}", id)).await?;
        let meals = envelope.meals.unwrap_or_default();
        Ok(transform_meals(&meals).into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = CatalogClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = CatalogClient::with_base_url("http://localhost:9999/api/").unwrap();
        assert_eq!(client.base_url, "http://localhost:9999/api");
    }

    #[test]
    fn test_meals_envelope_null_means_empty() {
        let envelope: MealsEnvelope = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(envelope.meals.is_none());
    }
}
