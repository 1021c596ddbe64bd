//! Category and subcategory models

use serde::{Deserialize, Serialize};

use super::id::deserialize_id;

/// Category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(alias = "name")]
    pub title: String,
    /// Subcategory names shown under the category
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Create/update category payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub title: String,
    pub items: Vec<String>,
}

/// Subcategory entity, correlated with its parent by `category_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub category_id: String,
    pub name: String,
}

/// Create/update subcategory payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcategoryDraft {
    pub category_id: String,
    pub name: String,
}
