//! PostgreSQL repositories and the [`Store`](crate::store::Store)
//! implementation for [`Database`].

pub mod athlete;
pub mod category;
pub mod training_center;

use async_trait::async_trait;
use uuid::Uuid;

use crate::Database;
use crate::dto::athlete::AthleteFilter;
use crate::dto::common::LimitOffsetParams;
use crate::error::Result;
use crate::models::{
    AthletePatch, AthleteRecord, Category, NewAthlete, NewCategory, NewTrainingCenter,
    TrainingCenter,
};
use crate::store::{AthleteStore, CategoryStore, TrainingCenterStore};

use athlete::AthleteRepository;
use category::CategoryRepository;
use training_center::TrainingCenterRepository;

#[async_trait]
impl CategoryStore for Database {
    async fn insert_category(&self, new: NewCategory) -> Result<Category> {
        CategoryRepository::new(self.pool()).create(&new).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        CategoryRepository::new(self.pool()).list().await
    }

    async fn find_category(&self, id: Uuid) -> Result<Category> {
        CategoryRepository::new(self.pool()).find_by_id(id).await
    }

    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        CategoryRepository::new(self.pool()).find_by_name(name).await
    }
}

#[async_trait]
impl TrainingCenterStore for Database {
    async fn insert_training_center(&self, new: NewTrainingCenter) -> Result<TrainingCenter> {
        TrainingCenterRepository::new(self.pool()).create(&new).await
    }

    async fn list_training_centers(&self) -> Result<Vec<TrainingCenter>> {
        TrainingCenterRepository::new(self.pool()).list().await
    }

    async fn find_training_center(&self, id: Uuid) -> Result<TrainingCenter> {
        TrainingCenterRepository::new(self.pool()).find_by_id(id).await
    }

    async fn find_training_center_by_name(&self, name: &str) -> Result<Option<TrainingCenter>> {
        TrainingCenterRepository::new(self.pool())
            .find_by_name(name)
            .await
    }
}

#[async_trait]
impl AthleteStore for Database {
    async fn insert_athlete(&self, new: NewAthlete) -> Result<AthleteRecord> {
        AthleteRepository::new(self.pool()).create(&new).await
    }

    async fn find_athlete(&self, id: Uuid) -> Result<AthleteRecord> {
        AthleteRepository::new(self.pool()).find_by_id(id).await
    }

    async fn list_athletes(
        &self,
        filter: &AthleteFilter,
        page: LimitOffsetParams,
    ) -> Result<(Vec<AthleteRecord>, i64)> {
        AthleteRepository::new(self.pool()).list(filter, page).await
    }

    async fn update_athlete(&self, id: Uuid, patch: &AthletePatch) -> Result<AthleteRecord> {
        AthleteRepository::new(self.pool()).update(id, patch).await
    }

    async fn delete_athlete(&self, id: Uuid) -> Result<()> {
        AthleteRepository::new(self.pool()).delete(id).await
    }
}
