// src/handlers/questions.rs

use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use utoipa::IntoParams;

use crate::{
    config::QUESTIONS_PER_PAGE,
    error::{AppError, ErrorBody},
    models::{
        Ack,
        category::category_map,
        question::{NewQuestion, QuestionList, QuestionPage, QuestionsRequest},
    },
    state::{DynCategoryRepository, DynQuestionRepository},
    utils::pagination::{page_param, paginate},
};

/// Documented query parameters for listing questions.
/// The handler reads raw pairs so malformed or repeated values fall back
/// instead of rejecting the request.
#[derive(Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// 1-based page, 10 questions per page.
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
}

/// Lists one page of questions with the total count and every category.
#[utoipa::path(
    get,
    path = "/questions",
    params(ListParams),
    responses(
        (status = 200, description = "Page of questions", body = QuestionPage),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_questions(
    State(questions): State<DynQuestionRepository>,
    State(categories): State<DynCategoryRepository>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<QuestionPage>, AppError> {
    let page = page_param(&pairs);

    let all_questions = questions.list().await?;
    let total_questions = all_questions.len();
    let categories = category_map(categories.list().await?);

    Ok(Json(QuestionPage {
        success: true,
        questions: paginate(all_questions, page, QUESTIONS_PER_PAGE),
        total_questions,
        categories,
    }))
}

/// Searches questions when the body carries `searchTerm`, adds one otherwise.
#[utoipa::path(
    post,
    path = "/questions",
    request_body(
        content = NewQuestion,
        description = "A new question, or `{\"searchTerm\": \"...\"}` to search"
    ),
    responses(
        (status = 200, description = "Search results, or `{success: true}` after an add", body = QuestionList),
        (status = 400, description = "Body is not a JSON object", body = ErrorBody),
        (status = 422, description = "Required fields missing", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn post_questions(
    State(questions): State<DynQuestionRepository>,
    body: Bytes,
) -> Result<Response, AppError> {
    match QuestionsRequest::from_body(&body)? {
        QuestionsRequest::Search(request) => {
            let found = questions.search(&request.search_term).await?;
            Ok(Json(QuestionList::from(found)).into_response())
        }
        QuestionsRequest::Add(new_question) => {
            let new_question = new_question.validated()?;
            let id = questions.insert(&new_question).await?;
            tracing::info!("Created question {} in category {}", id, new_question.category);
            Ok(Json(Ack::ok()).into_response())
        }
    }
}

/// Deletes a question by ID.
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(("id" = i64, Path, description = "Question id")),
    responses(
        (status = 200, description = "Question deleted", body = Ack),
        (status = 404, description = "No such question", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn delete_question(
    State(questions): State<DynQuestionRepository>,
    Path(raw_id): Path<String>,
) -> Result<Json<Ack>, AppError> {
    let id: i64 = raw_id
        .parse()
        .map_err(|_| AppError::not_found("questions", &raw_id))?;

    questions
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("questions", id))?;

    questions.delete(id).await?;
    tracing::info!("Deleted question {}", id);

    Ok(Json(Ack::ok()))
}
