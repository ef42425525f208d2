use color_eyre::Result;

use super::Db;
use crate::models::Seed;

impl Db {
    /// Loads categories and questions into an empty store in one transaction.
    /// Returns `false` without touching anything when categories already exist.
    pub async fn load_seed(&self, seed: Seed) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&mut *tx)
            .await?;
        if existing > 0 {
            tracing::info!("store already holds {existing} categories, skipping seed");
            return Ok(false);
        }

        for category in &seed.categories {
            sqlx::query("INSERT INTO categories (id, type) VALUES (?, ?)")
                .bind(category.id)
                .bind(&category.label)
                .execute(&mut *tx)
                .await?;
        }

        for question in &seed.questions {
            sqlx::query(
                "INSERT INTO questions (question, answer, difficulty, category) VALUES (?, ?, ?, ?)",
            )
            .bind(&question.question)
            .bind(&question.answer)
            .bind(question.difficulty)
            .bind(question.category)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!(
            categories = seed.categories.len(),
            questions = seed.questions.len(),
            "seed data loaded"
        );
        Ok(true)
    }
}
