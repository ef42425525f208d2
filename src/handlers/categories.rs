use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::{category_labels, non_empty, questions_page, QuestionsPage};
use crate::{
    db::CategoryModel,
    extractors::{Id, PageNumber},
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::CATEGORIES_URL, get(list_categories))
        .route(names::CATEGORY_URL, get(get_category))
        .route(names::CATEGORY_QUESTIONS_URL, get(category_questions))
}

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CategoryResponse {
    success: bool,
    category: CategoryModel,
}

async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_labels(&state.db).await?,
    }))
}

async fn get_category(
    State(state): State<AppState>,
    Id(category_id): Id,
) -> Result<Json<CategoryResponse>, AppError> {
    let category = state
        .db
        .get_category(category_id)
        .await
        .reject("could not get category")?
        .ok_or(AppError::NotFound)?;

    Ok(Json(CategoryResponse {
        success: true,
        category,
    }))
}

async fn category_questions(
    State(state): State<AppState>,
    Id(category_id): Id,
    PageNumber(page): PageNumber,
) -> Result<Json<QuestionsPage>, AppError> {
    let category = state
        .db
        .get_category(category_id)
        .await
        .reject("could not get category")?
        .ok_or(AppError::NotFound)?;

    let questions = state
        .db
        .questions_in_category(category_id)
        .await
        .reject("could not get category questions")?;

    let page = questions_page(&state.db, questions, page, Some(category)).await?;
    Ok(Json(non_empty(page)?))
}
