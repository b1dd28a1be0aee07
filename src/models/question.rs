// src/models/question.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::prelude::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::{error::AppError, utils::lenient};

/// Represents the 'questions' table in the database.
/// Also the formatted shape returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Question {
    pub id: i64,

    /// The text of the question.
    pub question: String,

    pub answer: String,

    /// Foreign key into 'categories'.
    pub category: i64,

    /// 1 (easy) to 5 (hard), not enforced.
    pub difficulty: i32,
}

/// Body key that turns `POST /questions` into a search.
pub const SEARCH_TERM_FIELD: &str = "searchTerm";

/// Required fields of an add request, in reporting order.
pub const REQUIRED_FIELDS: [&str; 4] = ["question", "answer", "category", "difficulty"];

/// DTO for creating a new question.
///
/// Absent or falsy fields deserialize to their zero value and are caught by
/// validation, so every missing field is reported at once.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewQuestion {
    #[serde(default, deserialize_with = "lenient::text")]
    #[validate(length(min = 1))]
    pub question: String,

    #[serde(default, deserialize_with = "lenient::text")]
    #[validate(length(min = 1))]
    pub answer: String,

    #[serde(default, deserialize_with = "lenient::integer")]
    #[validate(custom(function = non_zero))]
    pub category: i64,

    #[serde(default, deserialize_with = "lenient::integer")]
    #[validate(custom(function = non_zero))]
    pub difficulty: i32,
}

fn non_zero<T: Default + PartialEq>(value: T) -> Result<(), ValidationError> {
    if value == T::default() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

impl NewQuestion {
    /// Names of the required fields that failed validation.
    pub fn missing_fields(&self) -> Vec<String> {
        let Err(errors) = self.validate() else {
            return Vec::new();
        };
        let fields = errors.field_errors();
        REQUIRED_FIELDS
            .into_iter()
            .filter(|field| fields.contains_key(*field))
            .map(str::to_string)
            .collect()
    }

    pub fn validated(self) -> Result<Self, AppError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::UnprocessableEntity(missing));
        }
        Ok(self)
    }
}

/// DTO for searching questions by text.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SearchQuestionsRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// `POST /questions` is either a search or an add, decided by the presence
/// of `searchTerm` in the body.
#[derive(Debug, Clone)]
pub enum QuestionsRequest {
    Search(SearchQuestionsRequest),
    Add(NewQuestion),
}

impl QuestionsRequest {
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        let object = lenient::json_object(body)?;

        if let Some(term) = object.get(SEARCH_TERM_FIELD) {
            return Ok(QuestionsRequest::Search(SearchQuestionsRequest {
                search_term: lenient::search_term(term),
            }));
        }

        let new_question = serde_json::from_value(Value::Object(object))?;
        Ok(QuestionsRequest::Add(new_question))
    }
}

/// Response for `GET /questions`.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionPage {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Count of all questions, not just this page.
    pub total_questions: usize,
    pub categories: BTreeMap<i64, String>,
}

/// Response for searches and category listings.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionList {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

impl From<Vec<Question>> for QuestionList {
    fn from(questions: Vec<Question>) -> Self {
        Self {
            success: true,
            total_questions: questions.len(),
            questions,
        }
    }
}
