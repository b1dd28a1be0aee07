// src/models/category.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use utoipa::ToSchema;

/// Represents the 'categories' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i64,

    /// Display label, e.g. "Science".
    /// Mapped from the database column 'type' since `type` is a reserved keyword in Rust.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub label: String,
}

/// Formats categories as an `id -> label` map.
pub fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories
        .into_iter()
        .map(|category| (category.id, category.label))
        .collect()
}

/// Response for `GET /categories`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryList {
    pub success: bool,
    pub categories: BTreeMap<i64, String>,
}
