pub mod categories;
pub mod questions;
pub mod quizzes;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    db::{CategoryModel, Db, QuestionModel},
    pagination,
    rejections::{AppError, ResultExt},
};

/// Response body shared by every paginated question listing.
#[derive(Serialize)]
pub struct QuestionsPage {
    pub success: bool,
    pub questions: Vec<QuestionModel>,
    pub total_questions: usize,
    pub categories: BTreeMap<i64, String>,
    pub current_category: Option<CategoryModel>,
}

pub(crate) async fn category_labels(db: &Db) -> Result<BTreeMap<i64, String>, AppError> {
    let categories = db.categories().await.reject("could not get categories")?;
    Ok(categories.into_iter().map(|c| (c.id, c.label)).collect())
}

/// Cuts `questions` down to `page` and attaches the category map. The caller
/// decides whether an empty page is an error.
pub(crate) async fn questions_page(
    db: &Db,
    questions: Vec<QuestionModel>,
    page: i64,
    current_category: Option<CategoryModel>,
) -> Result<QuestionsPage, AppError> {
    let page = pagination::paginate(questions, page);

    Ok(QuestionsPage {
        success: true,
        total_questions: page.total,
        questions: page.items,
        categories: category_labels(db).await?,
        current_category,
    })
}

/// Listing endpoints answer an empty page with not found.
pub(crate) fn non_empty(page: QuestionsPage) -> Result<QuestionsPage, AppError> {
    if page.questions.is_empty() {
        return Err(AppError::NotFound);
    }
    Ok(page)
}
