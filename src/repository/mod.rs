// src/repository/mod.rs

//! Storage seam used by the handlers.
//!
//! Handlers only see these traits; `postgres` is the production backend and
//! `memory` keeps everything in process.

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

pub mod memory;
pub mod postgres;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("constraint violated: {0}")]
    Constraint(String),

    #[error("store lock poisoned")]
    Poisoned,
}

/// Selection criteria for the next quiz question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    /// `None` matches every category.
    pub category: Option<i64>,
    pub excluded: BTreeSet<i64>,
}

impl QuestionFilter {
    pub fn matches(&self, question: &Question) -> bool {
        self.category.is_none_or(|category| question.category == category)
            && !self.excluded.contains(&question.id)
    }
}

/// Access to the 'questions' table.
///
/// Every listing is ordered by ascending id.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Question>, StorageError>;

    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Question>, StorageError>;

    /// Case-insensitive substring match on the question text.
    async fn search(&self, term: &str) -> Result<Vec<Question>, StorageError>;

    async fn get(&self, id: i64) -> Result<Option<Question>, StorageError>;

    /// Lowest-id question accepted by `filter`.
    async fn first_match(&self, filter: &QuestionFilter) -> Result<Option<Question>, StorageError>;

    /// Stores the question and returns its new id.
    async fn insert(&self, new_question: &NewQuestion) -> Result<i64, StorageError>;

    async fn delete(&self, id: i64) -> Result<(), StorageError>;
}

/// Access to the 'categories' table.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Category>, StorageError>;
}
