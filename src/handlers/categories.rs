// src/handlers/categories.rs

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    error::{AppError, ErrorBody},
    models::{
        category::{CategoryList, category_map},
        question::QuestionList,
    },
    state::{DynCategoryRepository, DynQuestionRepository},
};

/// Lists every category as an `id -> label` map.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories", body = CategoryList),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_categories(
    State(categories): State<DynCategoryRepository>,
) -> Result<Json<CategoryList>, AppError> {
    let categories = category_map(categories.list().await?);

    Ok(Json(CategoryList {
        success: true,
        categories,
    }))
}

/// Lists the questions of one category.
/// Unknown categories give an empty list.
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Questions in the category", body = QuestionList),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_questions_by_category(
    State(questions): State<DynQuestionRepository>,
    Path(raw_id): Path<String>,
) -> Result<Json<QuestionList>, AppError> {
    let id: i64 = raw_id
        .parse()
        .map_err(|_| AppError::not_found("categories", &raw_id))?;

    let found = questions.list_by_category(id).await?;

    Ok(Json(QuestionList::from(found)))
}
