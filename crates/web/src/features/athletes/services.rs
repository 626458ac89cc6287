use async_trait::async_trait;
use storage::{
    Store,
    dto::{
        athlete::{
            AthleteFilter, AthleteResponse, AthleteSummary, CreateAthleteRequest,
            UpdateAthleteRequest,
        },
        common::{LimitOffsetPage, LimitOffsetParams},
    },
    error::{Result, StorageError},
    models::{AthletePatch, AthleteRecord, NewAthlete},
    store::{AthleteStore, CategoryStore, TrainingCenterStore},
};
use uuid::Uuid;

use crate::error::WebResult;
use crate::pipeline::{self, Deletable, Listable, Patchable, Resource};

/// Athletes reference their category and training center by name.
pub struct AthleteResource;

#[async_trait]
impl Resource for AthleteResource {
    type Create = CreateAthleteRequest;
    type New = NewAthlete;
    type Record = AthleteRecord;
    type Response = AthleteResponse;

    async fn resolve(
        &self,
        store: &dyn Store,
        request: CreateAthleteRequest,
    ) -> Result<NewAthlete> {
        let category = store
            .find_category_by_name(&request.category.name)
            .await?
            .ok_or_else(|| {
                StorageError::reference_not_found("Category", &request.category.name)
            })?;

        let training_center = store
            .find_training_center_by_name(&request.training_center.name)
            .await?
            .ok_or_else(|| {
                StorageError::reference_not_found(
                    "Training center",
                    &request.training_center.name,
                )
            })?;

        Ok(NewAthlete {
            athlete_id: Uuid::new_v4(),
            name: request.name,
            tax_id: request.tax_id,
            age: request.age,
            weight: request.weight,
            height: request.height,
            sex: request.sex,
            created_at: chrono::Utc::now().naive_utc(),
            category_id: category.category_id,
            training_center_id: training_center.training_center_id,
        })
    }

    async fn insert(&self, store: &dyn Store, new: NewAthlete) -> Result<AthleteRecord> {
        store.insert_athlete(new).await
    }

    async fn fetch(&self, store: &dyn Store, id: Uuid) -> Result<AthleteRecord> {
        store.find_athlete(id).await
    }

    fn shape(&self, record: AthleteRecord) -> AthleteResponse {
        AthleteResponse::from(record)
    }
}

#[async_trait]
impl Listable for AthleteResource {
    type Filter = AthleteFilter;
    type Summary = AthleteSummary;

    async fn query(
        &self,
        store: &dyn Store,
        filter: &AthleteFilter,
        page: LimitOffsetParams,
    ) -> Result<(Vec<AthleteRecord>, i64)> {
        store.list_athletes(filter, page).await
    }

    fn summarize(&self, record: AthleteRecord) -> AthleteSummary {
        AthleteSummary::from(record)
    }
}

#[async_trait]
impl Patchable for AthleteResource {
    type Update = UpdateAthleteRequest;
    type Patch = AthletePatch;

    fn present_fields(&self, update: &UpdateAthleteRequest) -> Vec<&'static str> {
        update.present_fields()
    }

    fn diff(&self, snapshot: &AthleteRecord, update: UpdateAthleteRequest) -> AthletePatch {
        let current = &snapshot.athlete;

        AthletePatch {
            name: update.name.filter(|v| *v != current.name),
            tax_id: update.tax_id.filter(|v| *v != current.tax_id),
            age: update.age.filter(|v| *v != current.age),
            weight: update.weight.filter(|v| *v != current.weight),
            height: update.height.filter(|v| *v != current.height),
            sex: update.sex.filter(|v| *v != current.sex),
        }
    }

    fn is_noop(&self, patch: &AthletePatch) -> bool {
        patch.is_empty()
    }

    async fn apply(
        &self,
        store: &dyn Store,
        id: Uuid,
        patch: &AthletePatch,
    ) -> Result<AthleteRecord> {
        store.update_athlete(id, patch).await
    }
}

#[async_trait]
impl Deletable for AthleteResource {
    async fn remove(&self, store: &dyn Store, id: Uuid) -> Result<()> {
        store.delete_athlete(id).await
    }
}

/// Create an athlete after resolving its category and training center
pub async fn create_athlete(
    store: &dyn Store,
    request: CreateAthleteRequest,
) -> WebResult<AthleteResponse> {
    let athlete = pipeline::create(&AthleteResource, store, request).await?;
    tracing::info!(athlete_id = %athlete.id, "Athlete created");
    Ok(athlete)
}

/// List athletes with optional equality filters
pub async fn list_athletes(
    store: &dyn Store,
    filter: AthleteFilter,
    page: LimitOffsetParams,
    max_limit: u32,
) -> WebResult<LimitOffsetPage<AthleteSummary>> {
    pipeline::list(&AthleteResource, store, &filter.normalized(), page, max_limit).await
}

/// Get athlete by ID
pub async fn get_athlete(store: &dyn Store, id: Uuid) -> WebResult<AthleteResponse> {
    pipeline::get(&AthleteResource, store, id).await
}

/// Update an athlete
pub async fn update_athlete(
    store: &dyn Store,
    id: Uuid,
    request: UpdateAthleteRequest,
    mutable_fields: &[String],
) -> WebResult<AthleteResponse> {
    pipeline::update(&AthleteResource, store, id, request, mutable_fields).await
}

/// Delete an athlete
pub async fn delete_athlete(store: &dyn Store, id: Uuid) -> WebResult<()> {
    pipeline::delete(&AthleteResource, store, id).await?;
    tracing::info!(athlete_id = %id, "Athlete deleted");
    Ok(())
}
