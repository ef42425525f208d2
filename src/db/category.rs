use color_eyre::Result;

use super::models::CategoryModel;
use super::Db;

impl Db {
    pub async fn categories(&self) -> Result<Vec<CategoryModel>> {
        let categories = sqlx::query_as::<_, CategoryModel>(
            "SELECT id, type AS label FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    pub async fn get_category(&self, category_id: i64) -> Result<Option<CategoryModel>> {
        let category = sqlx::query_as::<_, CategoryModel>(
            "SELECT id, type AS label FROM categories WHERE id = ?",
        )
        .bind(category_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    pub async fn category_exists(&self, category_id: i64) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories WHERE id = ?")
            .bind(category_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }
}
