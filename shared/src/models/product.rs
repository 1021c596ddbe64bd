//! Product Model

use serde::{Deserialize, Serialize};

use super::id::deserialize_id;

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    /// Category title (products reference categories by name)
    #[serde(default)]
    pub category: String,
    /// Image references (URLs or stored file names)
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(default)]
    pub is_trending: bool,
    #[serde(default)]
    pub is_top_product: bool,
}

/// Create/update product payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub images: Vec<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    pub is_trending: bool,
    pub is_top_product: bool,
}

impl ProductDraft {
    pub fn into_product(self, id: impl Into<String>) -> Product {
        Product {
            id: id.into(),
            name: self.name,
            price: self.price,
            category: self.category,
            images: self.images,
            description: self.description,
            stock: self.stock,
            is_trending: self.is_trending,
            is_top_product: self.is_top_product,
        }
    }
}
