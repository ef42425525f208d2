pub mod db;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod pagination;
pub mod quiz;
pub mod rejections;

use axum::Router;

#[derive(Clone)]
pub struct AppState {
    pub db: db::Db,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::categories::routes())
        .merge(handlers::questions::routes())
        .merge(handlers::quizzes::routes())
        .fallback(rejections::not_found)
        .method_not_allowed_fallback(rejections::method_not_allowed)
        .with_state(state)
}
