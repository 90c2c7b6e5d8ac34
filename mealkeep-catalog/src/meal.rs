//! TheMealDB wire records and their normalized form
//!
//! The catalog's records are wide and loosely typed: twenty numbered
//! ingredient/measure slots, empty strings standing in for nulls, and ids
//! serialized as strings. Normalization maps missing or malformed fields
//! to `None` rather than failing, and a batch transform drops individual
//! unparseable records instead of aborting the whole list.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw meal record as served by TheMealDB
///
/// The numbered `strIngredientN` / `strMeasureN` slots land in `extra`
/// via flatten; everything named here is a fixed field.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMeal {
    #[serde(rename = "idMeal")]
    pub id_meal: Option<String>,
    #[serde(rename = "strMeal")]
    pub str_meal: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub str_meal_thumb: Option<String>,
    #[serde(rename = "strCategory")]
    pub str_category: Option<String>,
    #[serde(rename = "strArea")]
    pub str_area: Option<String>,
    #[serde(rename = "strInstructions")]
    pub str_instructions: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Raw category record as served by TheMealDB
#[derive(Debug, Clone, Deserialize)]
pub struct RawCategory {
    #[serde(rename = "strCategory")]
    pub str_category: Option<String>,
    #[serde(rename = "strCategoryThumb")]
    pub str_category_thumb: Option<String>,
    #[serde(rename = "strCategoryDescription")]
    pub str_category_description: Option<String>,
}

/// Normalized recipe category
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Category {
    pub name: String,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl Category {
    /// Normalize a raw category; a record without a name is dropped
    pub fn from_raw(raw: RawCategory) -> Option<Self> {
        let name = non_blank(raw.str_category)?;
        Some(Self {
            name,
            image: non_blank(raw.str_category_thumb),
            description: non_blank(raw.str_category_description),
        })
    }
}

/// Normalized recipe used for display
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
    /// Display estimate; the catalog publishes no timing data
    pub cook_time: String,
    /// Display estimate; the catalog publishes no serving data
    pub servings: i64,
    pub category: Option<String>,
    pub area: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

/// Ingredient/measure slot count in the catalog's schema
const INGREDIENT_SLOTS: usize = 20;

const COOK_TIME_ESTIMATE: &str = "30 minutes";
const SERVINGS_ESTIMATE: i64 = 4;

impl Recipe {
    /// Normalize a raw meal record
    ///
    /// Returns `None` when the record has no parseable integer id or no
    /// title; every other field degrades to `None` / empty.
    pub fn from_meal(meal: &RawMeal) -> Option<Self> {
        let id = meal.id_meal.as_deref()?.trim().parse::<i64>().ok()?;
        let title = non_blank(meal.str_meal.clone())?;

        let mut ingredients = Vec::new();
        for i in 1..=INGREDIENT_SLOTS {
            let ingredient = extra_str(meal, &format!("strIngredient{}", i));
            let Some(ingredient) = ingredient else { continue };

            match extra_str(meal, &format!("strMeasure{}", i)) {
                Some(measure) => ingredients.push(format!("{} {}", measure, ingredient)),
                None => ingredients.push(ingredient),
            }
        }

        let instructions = meal
            .str_instructions
            .as_deref()
            .map(|text| {
                text.lines()
                    .map(str::trim)
                    .filter(|step| !step.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            id,
            title,
            image: non_blank(meal.str_meal_thumb.clone()),
            cook_time: COOK_TIME_ESTIMATE.to_string(),
            servings: SERVINGS_ESTIMATE,
            category: non_blank(meal.str_category.clone()),
            area: non_blank(meal.str_area.clone()),
            ingredients,
            instructions,
        })
    }
}

/// Normalize a batch, dropping records that fail to parse
///
/// Partial success: one malformed record must not take down the list.
pub fn transform_meals(meals: &[RawMeal]) -> Vec<Recipe> {
    meals
        .iter()
        .filter_map(|meal| {
            let recipe = Recipe::from_meal(meal);
            if recipe.is_none() {
                tracing::warn!(id = ?meal.id_meal, "Dropping unparseable meal record");
            }
            recipe
        })
        .collect()
}

/// Treat empty/whitespace strings as absent, the catalog's null convention
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Read a numbered slot from the flattened extras as a non-blank string
fn extra_str(meal: &RawMeal, key: &str) -> Option<String> {
    meal.extra
        .get(key)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}
