pub const CATEGORIES_URL: &str = "/categories";
pub const CATEGORY_URL: &str = "/categories/{id}";
pub const CATEGORY_QUESTIONS_URL: &str = "/categories/{id}/questions";
pub const QUESTIONS_URL: &str = "/questions";
pub const QUESTION_URL: &str = "/questions/{id}";
pub const SEARCH_QUESTIONS_URL: &str = "/questions/search";
pub const QUIZZES_URL: &str = "/quizzes";

pub fn category_url(category_id: i64) -> String {
    format!("/categories/{category_id}")
}

pub fn category_questions_url(category_id: i64) -> String {
    format!("/categories/{category_id}/questions")
}

pub fn question_url(question_id: i64) -> String {
    format!("/questions/{question_id}")
}

// Pagination
pub const QUESTIONS_PER_PAGE: usize = 10;
pub const DEFAULT_PAGE: i64 = 1;

// Quiz play: category id meaning "any category"
pub const ANY_CATEGORY: i64 = 0;

// Question difficulty bounds (inclusive)
pub const MIN_DIFFICULTY: i64 = 1;
pub const MAX_DIFFICULTY: i64 = 5;
