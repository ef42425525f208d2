use std::collections::HashSet;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::{
    db::QuestionModel,
    extractors::JsonBody,
    models::QuizBody,
    names,
    quiz::{self, CategoryFilter},
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::QUIZZES_URL, post(play_quiz))
}

#[derive(Serialize)]
struct QuizResponse {
    success: bool,
    /// `null` once every question in the pool has been asked.
    question: Option<QuestionModel>,
}

async fn play_quiz(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<QuizBody>,
) -> Result<Json<QuizResponse>, AppError> {
    let filter = CategoryFilter::from_id(body.quiz_category.id);

    if let CategoryFilter::Only(category_id) = filter {
        let exists = state
            .db
            .category_exists(category_id)
            .await
            .reject("could not check quiz category")?;
        if !exists {
            return Err(AppError::Unprocessable("quiz category does not exist"));
        }
    }

    let candidates = state
        .db
        .quiz_candidates(filter)
        .await
        .reject("could not get quiz questions")?;

    let previous: HashSet<i64> = body.previous_questions.into_iter().collect();
    let question = quiz::select_question(candidates, &previous, filter, &mut rand::thread_rng());

    if question.is_none() {
        tracing::info!(
            category = body.quiz_category.label.as_deref().unwrap_or("any"),
            asked = previous.len(),
            "quiz pool exhausted"
        );
    }

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
