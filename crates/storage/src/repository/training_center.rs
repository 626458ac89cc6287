use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{NewTrainingCenter, TrainingCenter};

pub struct TrainingCenterRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TrainingCenterRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<TrainingCenter>> {
        let centers = sqlx::query_as::<_, TrainingCenter>(
            r#"
            SELECT training_center_id, name, address, owner
            FROM training_centers
            ORDER BY name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(centers)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<TrainingCenter> {
        sqlx::query_as::<_, TrainingCenter>(
            r#"
            SELECT training_center_id, name, address, owner
            FROM training_centers
            WHERE training_center_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::not_found("Training center", id))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<TrainingCenter>> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            r#"
            SELECT training_center_id, name, address, owner
            FROM training_centers
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        Ok(center)
    }

    pub async fn create(&self, new: &NewTrainingCenter) -> Result<TrainingCenter> {
        sqlx::query_as::<_, TrainingCenter>(
            r#"
            INSERT INTO training_centers (training_center_id, name, address, owner)
            VALUES ($1, $2, $3, $4)
            RETURNING training_center_id, name, address, owner
            "#,
        )
        .bind(new.training_center_id)
        .bind(&new.name)
        .bind(&new.address)
        .bind(&new.owner)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).classify_constraint(|| {
                format!("A training center named '{}' already exists", new.name)
            })
        })
    }
}
