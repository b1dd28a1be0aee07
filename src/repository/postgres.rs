// src/repository/postgres.rs

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    models::{
        category::Category,
        question::{NewQuestion, Question},
    },
    repository::{CategoryRepository, QuestionFilter, QuestionRepository, StorageError},
};

const QUESTION_COLUMNS: &str = "SELECT id, question, answer, category, difficulty FROM questions";

/// PostgreSQL-backed repository. One pool serves both tables.
#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escapes LIKE wildcards so the term is matched literally.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl QuestionRepository for PgRepository {
    async fn list(&self) -> Result<Vec<Question>, StorageError> {
        let questions = sqlx::query_as::<_, Question>(&format!("{QUESTION_COLUMNS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        Ok(questions)
    }

    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Question>, StorageError> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "{QUESTION_COLUMNS} WHERE category = $1 ORDER BY id"
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, StorageError> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            r"{QUESTION_COLUMNS} WHERE question ILIKE $1 ESCAPE '\' ORDER BY id"
        ))
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    async fn get(&self, id: i64) -> Result<Option<Question>, StorageError> {
        let question = sqlx::query_as::<_, Question>(&format!("{QUESTION_COLUMNS} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(question)
    }

    async fn first_match(&self, filter: &QuestionFilter) -> Result<Option<Question>, StorageError> {
        // Compile the filter into a single statement
        let mut builder = QueryBuilder::<Postgres>::new(QUESTION_COLUMNS);
        builder.push(" WHERE TRUE");

        if let Some(category) = filter.category {
            builder.push(" AND category = ");
            builder.push_bind(category);
        }

        // One array parameter, however long the exclusion list is
        if !filter.excluded.is_empty() {
            let excluded: Vec<i64> = filter.excluded.iter().copied().collect();
            builder.push(" AND id <> ALL(");
            builder.push_bind(excluded);
            builder.push(")");
        }

        builder.push(" ORDER BY id LIMIT 1");

        let question = builder
            .build_query_as::<Question>()
            .fetch_optional(&self.pool)
            .await?;
        Ok(question)
    }

    async fn insert(&self, new_question: &NewQuestion) -> Result<i64, StorageError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&new_question.question)
        .bind(&new_question.answer)
        .bind(new_question.category)
        .bind(new_question.difficulty)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn delete(&self, id: i64) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for PgRepository {
    async fn list(&self) -> Result<Vec<Category>, StorageError> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(categories)
    }
}
