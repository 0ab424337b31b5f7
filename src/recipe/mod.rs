mod normalize;
mod tags;

pub use normalize::{
    normalize_prep_time, normalize_servings, parse_recipe_id, validate_recipe_id,
    NormalizedRecipe, NOT_AVAILABLE,
};
pub use tags::{TagDecode, TagList};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored recipe as returned by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: String,
    pub prep_time: String,
    pub servings: String,
    pub tags: Vec<String>,
    pub created_at: NaiveDateTime,
}

/// Raw create input, typically straight from a submitted form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub prep_time: Option<String>,
    pub servings: Option<String>,
    /// Comma-delimited tag string
    #[serde(rename = "tags")]
    pub tags_raw: Option<String>,
}
