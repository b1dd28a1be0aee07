// src/repository/memory.rs

use std::{
    collections::BTreeMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use async_trait::async_trait;

use crate::{
    models::{
        category::Category,
        question::{NewQuestion, Question},
    },
    repository::{CategoryRepository, QuestionFilter, QuestionRepository, StorageError},
};

#[derive(Debug, Default)]
struct Tables {
    questions: BTreeMap<i64, Question>,
    categories: BTreeMap<i64, Category>,
    last_id: i64,
}

/// In-process store with the same semantics as the Postgres schema,
/// including the category foreign key.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or relabels) a category.
    pub fn add_category(&self, id: i64, label: &str) -> Result<(), StorageError> {
        self.write()?.categories.insert(
            id,
            Category {
                id,
                label: label.to_string(),
            },
        );
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StorageError> {
        self.tables.read().map_err(|_| StorageError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StorageError> {
        self.tables.write().map_err(|_| StorageError::Poisoned)
    }

    fn select<F>(&self, keep: F) -> Result<Vec<Question>, StorageError>
    where
        F: Fn(&Question) -> bool,
    {
        Ok(self
            .read()?
            .questions
            .values()
            .filter(|question| keep(question))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Question>, StorageError> {
        self.select(|_| true)
    }

    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Question>, StorageError> {
        self.select(|question| question.category == category_id)
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, StorageError> {
        let term = term.to_lowercase();
        self.select(|question| question.question.to_lowercase().contains(&term))
    }

    async fn get(&self, id: i64) -> Result<Option<Question>, StorageError> {
        Ok(self.read()?.questions.get(&id).cloned())
    }

    async fn first_match(&self, filter: &QuestionFilter) -> Result<Option<Question>, StorageError> {
        Ok(self
            .read()?
            .questions
            .values()
            .find(|question| filter.matches(question))
            .cloned())
    }

    async fn insert(&self, new_question: &NewQuestion) -> Result<i64, StorageError> {
        let mut tables = self.write()?;

        if !tables.categories.contains_key(&new_question.category) {
            return Err(StorageError::Constraint(format!(
                "category {} does not exist",
                new_question.category
            )));
        }

        tables.last_id += 1;
        let id = tables.last_id;
        tables.questions.insert(
            id,
            Question {
                id,
                question: new_question.question.clone(),
                answer: new_question.answer.clone(),
                category: new_question.category,
                difficulty: new_question.difficulty,
            },
        );
        Ok(id)
    }

    async fn delete(&self, id: i64) -> Result<(), StorageError> {
        self.write()?.questions.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Category>, StorageError> {
        Ok(self.read()?.categories.values().cloned().collect())
    }
}
