use color_eyre::Result;

use super::models::{InsertOutcome, NewQuestion, QuestionModel};
use super::Db;
use crate::quiz::CategoryFilter;

const QUESTION_COLUMNS: &str = "id, question, answer, difficulty, category";

impl Db {
    /// Every question, ordered by id.
    pub async fn questions(&self) -> Result<Vec<QuestionModel>> {
        let questions = sqlx::query_as::<_, QuestionModel>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn questions_in_category(&self, category_id: i64) -> Result<Vec<QuestionModel>> {
        let questions = sqlx::query_as::<_, QuestionModel>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ? ORDER BY id"
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    /// Case-insensitive substring match on the question text, ordered by id.
    /// The term is matched literally; case folding covers all of Unicode.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<QuestionModel>> {
        let term = term.to_lowercase();
        let questions = self
            .questions()
            .await?
            .into_iter()
            .filter(|q| q.question.to_lowercase().contains(&term))
            .collect();

        Ok(questions)
    }

    /// Questions a quiz may draw from, before previously asked ones are removed.
    pub async fn quiz_candidates(&self, filter: CategoryFilter) -> Result<Vec<QuestionModel>> {
        match filter {
            CategoryFilter::Any => self.questions().await,
            CategoryFilter::Only(category_id) => self.questions_in_category(category_id).await,
        }
    }

    /// Inserts the question unless its category does not exist. The check and
    /// the insert share one transaction.
    pub async fn insert_question(&self, new: &NewQuestion) -> Result<InsertOutcome> {
        let mut tx = self.pool.begin().await?;

        let category_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM categories WHERE id = ?")
                .bind(new.category)
                .fetch_one(&mut *tx)
                .await?;

        if category_count == 0 {
            return Ok(InsertOutcome::UnknownCategory);
        }

        let question_id: i64 = sqlx::query_scalar(
            "INSERT INTO questions (question, answer, difficulty, category) VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.difficulty)
        .bind(new.category)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            "new question created with id: {question_id} in category: {}",
            new.category
        );
        Ok(InsertOutcome::Created(question_id))
    }

    /// Returns `false` when no question had this id.
    pub async fn delete_question(&self, question_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(question_id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!("question deleted: id={question_id}");
        }
        Ok(deleted)
    }
}
