use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;

use super::{non_empty, questions_page, QuestionsPage};
use crate::{
    db::{InsertOutcome, NewQuestion},
    extractors::{Id, JsonBody, PageNumber},
    models::{CreateQuestionBody, SearchBody},
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            names::QUESTIONS_URL,
            get(list_questions).post(create_question),
        )
        .route(names::QUESTION_URL, delete(delete_question))
        .route(names::SEARCH_QUESTIONS_URL, post(search_questions))
}

#[derive(Serialize)]
struct CreatedResponse {
    success: bool,
    created: i64,
}

#[derive(Serialize)]
struct DeletedResponse {
    success: bool,
    deleted: i64,
}

async fn list_questions(
    State(state): State<AppState>,
    PageNumber(page): PageNumber,
) -> Result<Json<QuestionsPage>, AppError> {
    let questions = state
        .db
        .questions()
        .await
        .reject("could not get questions")?;

    let page = questions_page(&state.db, questions, page, None).await?;
    Ok(Json(non_empty(page)?))
}

async fn create_question(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateQuestionBody>,
) -> Result<Json<CreatedResponse>, AppError> {
    let new = validate(body)?;

    match state
        .db
        .insert_question(&new)
        .await
        .reject("could not create question")?
    {
        InsertOutcome::Created(id) => Ok(Json(CreatedResponse {
            success: true,
            created: id,
        })),
        InsertOutcome::UnknownCategory => {
            Err(AppError::Unprocessable("question references an unknown category"))
        }
    }
}

/// Blank text or a zero number is a missing field; a present but out of range
/// difficulty is unprocessable.
fn validate(body: CreateQuestionBody) -> Result<NewQuestion, AppError> {
    let question = body.question.trim();
    let answer = body.answer.trim();

    if question.is_empty() || answer.is_empty() || body.difficulty == 0 || body.category == 0 {
        return Err(AppError::Input("all question fields are required"));
    }

    if !(names::MIN_DIFFICULTY..=names::MAX_DIFFICULTY).contains(&body.difficulty) {
        return Err(AppError::Unprocessable("difficulty out of range"));
    }

    Ok(NewQuestion {
        question: question.to_string(),
        answer: answer.to_string(),
        difficulty: body.difficulty,
        category: body.category,
    })
}

async fn delete_question(
    State(state): State<AppState>,
    Id(question_id): Id,
) -> Result<Json<DeletedResponse>, AppError> {
    let deleted = state
        .db
        .delete_question(question_id)
        .await
        .reject("could not delete question")?;

    if !deleted {
        return Err(AppError::NotFound);
    }

    Ok(Json(DeletedResponse {
        success: true,
        deleted: question_id,
    }))
}

async fn search_questions(
    State(state): State<AppState>,
    PageNumber(page): PageNumber,
    JsonBody(body): JsonBody<SearchBody>,
) -> Result<Json<QuestionsPage>, AppError> {
    // Whitespace is part of the term; only an empty string is refused.
    let term = body.search_term.as_str();
    if term.is_empty() {
        return Err(AppError::Unprocessable("search term is empty"));
    }

    let questions = state
        .db
        .search_questions(term)
        .await
        .reject("could not search questions")?;

    tracing::debug!("search for {term:?} matched {} questions", questions.len());

    // An unmatched search is an empty result, not a missing resource.
    Ok(Json(
        questions_page(&state.db, questions, page, None).await?,
    ))
}
