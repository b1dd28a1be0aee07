// src/handlers/quizzes.rs

use axum::{Json, body::Bytes, extract::State};

use crate::{
    error::{AppError, ErrorBody},
    models::quiz::{QuizQuestion, QuizRequest},
    state::DynQuestionRepository,
};

/// Serves the next quiz question.
///
/// * Restricts to `quiz_category.id` unless it is 0.
/// * Skips every id in `previous_questions`.
/// * Returns the lowest remaining id, or `null` when none is left.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "Next question, or null", body = QuizQuestion),
        (status = 400, description = "Body is not a JSON object", body = ErrorBody),
        (status = 422, description = "quiz_category or its id missing", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn next_question(
    State(questions): State<DynQuestionRepository>,
    body: Bytes,
) -> Result<Json<QuizQuestion>, AppError> {
    let filter = QuizRequest::from_body(&body)?.into_filter()?;

    let question = questions.first_match(&filter).await?;
    tracing::debug!(
        "Quiz pick {:?} (category {:?}, {} excluded)",
        question.as_ref().map(|q| q.id),
        filter.category,
        filter.excluded.len()
    );

    Ok(Json(QuizQuestion {
        success: true,
        question,
    }))
}
