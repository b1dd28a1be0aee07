// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    config::ANY_CATEGORY,
    error::AppError,
    models::question::Question,
    repository::QuestionFilter,
    utils::lenient,
};

/// DTO for requesting the next quiz question.
///
/// The client keeps the session: it resends every id it has already been
/// served, plus the category it is playing.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct QuizRequest {
    #[serde(default, deserialize_with = "lenient::id_list")]
    pub previous_questions: Vec<i64>,

    /// Object carrying at least an `id`; `0` means any category.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub quiz_category: Option<Value>,
}

impl QuizRequest {
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        let object = lenient::json_object(body)?;
        Ok(serde_json::from_value(Value::Object(object))?)
    }

    /// Checks the required fields and turns the request into a filter.
    pub fn into_filter(self) -> Result<QuestionFilter, AppError> {
        let Some(quiz_category) = self.quiz_category.filter(lenient::is_truthy) else {
            return Err(AppError::UnprocessableEntity(vec!["quiz_category".to_string()]));
        };

        let category_id = quiz_category
            .get("id")
            .and_then(lenient::as_integer)
            .ok_or_else(|| AppError::UnprocessableEntity(vec!["quiz_category.id".to_string()]))?;

        Ok(QuestionFilter {
            category: (category_id != ANY_CATEGORY).then_some(category_id),
            excluded: self.previous_questions.into_iter().collect(),
        })
    }
}

/// Response for `POST /quizzes`.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuizQuestion {
    pub success: bool,
    /// `null` once every matching question has been served.
    pub question: Option<Question>,
}
