//! Customer Model

use serde::{Deserialize, Serialize};

use super::id::deserialize_id;

/// Customer entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    /// Join date as entered, usually `YYYY-MM-DD`
    #[serde(default)]
    pub joined: String,
}

/// Update customer payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    pub joined: String,
}
