// src/docs.rs

use axum::Json;
use utoipa::OpenApi;

use crate::{
    error::ErrorBody,
    handlers::{categories, questions, quizzes},
    models::{
        Ack,
        category::{Category, CategoryList},
        question::{NewQuestion, Question, QuestionList, QuestionPage, SearchQuestionsRequest},
        quiz::{QuizQuestion, QuizRequest},
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Trivia API", description = "Questions, categories and quiz play"),
    paths(
        questions::list_questions,
        questions::post_questions,
        questions::delete_question,
        categories::list_categories,
        categories::list_questions_by_category,
        quizzes::next_question,
    ),
    components(schemas(
        Ack,
        Category,
        CategoryList,
        ErrorBody,
        NewQuestion,
        Question,
        QuestionList,
        QuestionPage,
        QuizQuestion,
        QuizRequest,
        SearchQuestionsRequest,
    ))
)]
pub struct ApiDoc;

/// Serves the generated OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
