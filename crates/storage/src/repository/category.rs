use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Category, NewCategory};

/// Repository for Category database operations
pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all categories
    pub async fn list(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT category_id, name
            FROM categories
            ORDER BY name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Find category by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT category_id, name
            FROM categories
            WHERE category_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::not_found("Category", id))
    }

    /// Find category by its unique name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT category_id, name
            FROM categories
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        Ok(category)
    }

    /// Create a new category
    pub async fn create(&self, new: &NewCategory) -> Result<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (category_id, name)
            VALUES ($1, $2)
            RETURNING category_id, name
            "#,
        )
        .bind(new.category_id)
        .bind(&new.name)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).classify_constraint(|| {
                format!("A category named '{}' already exists", new.name)
            })
        })
    }
}
