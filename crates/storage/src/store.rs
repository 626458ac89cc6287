//! Persistence seam used by the web layer.
//!
//! Every method maps store-level constraint failures to
//! [`StorageError::ConstraintViolation`](crate::error::StorageError) and
//! missing rows to `NotFound`, so callers see the same error kinds whichever
//! implementation sits behind the trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::dto::athlete::AthleteFilter;
use crate::dto::common::LimitOffsetParams;
use crate::error::Result;
use crate::models::{
    AthletePatch, AthleteRecord, Category, NewAthlete, NewCategory, NewTrainingCenter,
    TrainingCenter,
};

#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Fails with `ConstraintViolation` when the name is taken.
    async fn insert_category(&self, new: NewCategory) -> Result<Category>;

    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn find_category(&self, id: Uuid) -> Result<Category>;

    /// Exact-match lookup by the natural key.
    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>>;
}

#[async_trait]
pub trait TrainingCenterStore: Send + Sync {
    async fn insert_training_center(&self, new: NewTrainingCenter) -> Result<TrainingCenter>;

    async fn list_training_centers(&self) -> Result<Vec<TrainingCenter>>;

    async fn find_training_center(&self, id: Uuid) -> Result<TrainingCenter>;

    async fn find_training_center_by_name(&self, name: &str) -> Result<Option<TrainingCenter>>;
}

#[async_trait]
pub trait AthleteStore: Send + Sync {
    /// Fails with `ConstraintViolation` on a duplicate tax ID or when a
    /// referenced row disappeared after it was resolved.
    async fn insert_athlete(&self, new: NewAthlete) -> Result<AthleteRecord>;

    async fn find_athlete(&self, id: Uuid) -> Result<AthleteRecord>;

    /// Returns one page of matching athletes and the total match count.
    async fn list_athletes(
        &self,
        filter: &AthleteFilter,
        page: LimitOffsetParams,
    ) -> Result<(Vec<AthleteRecord>, i64)>;

    async fn update_athlete(&self, id: Uuid, patch: &AthletePatch) -> Result<AthleteRecord>;

    async fn delete_athlete(&self, id: Uuid) -> Result<()>;
}

pub trait Store: CategoryStore + TrainingCenterStore + AthleteStore {}

impl<T> Store for T where T: CategoryStore + TrainingCenterStore + AthleteStore {}
