use async_trait::async_trait;
use storage::{
    Store,
    dto::training_center::{CreateTrainingCenterRequest, TrainingCenterResponse},
    error::Result,
    models::{NewTrainingCenter, TrainingCenter},
    store::TrainingCenterStore,
};
use uuid::Uuid;

use crate::error::WebResult;
use crate::pipeline::{self, Resource};

pub struct TrainingCenterResource;

#[async_trait]
impl Resource for TrainingCenterResource {
    type Create = CreateTrainingCenterRequest;
    type New = NewTrainingCenter;
    type Record = TrainingCenter;
    type Response = TrainingCenterResponse;

    async fn resolve(
        &self,
        _store: &dyn Store,
        request: CreateTrainingCenterRequest,
    ) -> Result<NewTrainingCenter> {
        Ok(NewTrainingCenter {
            training_center_id: Uuid::new_v4(),
            name: request.name,
            address: request.address,
            owner: request.owner,
        })
    }

    async fn insert(&self, store: &dyn Store, new: NewTrainingCenter) -> Result<TrainingCenter> {
        store.insert_training_center(new).await
    }

    async fn fetch(&self, store: &dyn Store, id: Uuid) -> Result<TrainingCenter> {
        store.find_training_center(id).await
    }

    fn shape(&self, record: TrainingCenter) -> TrainingCenterResponse {
        TrainingCenterResponse::from(record)
    }
}

pub async fn create_training_center(
    store: &dyn Store,
    request: CreateTrainingCenterRequest,
) -> WebResult<TrainingCenterResponse> {
    let center = pipeline::create(&TrainingCenterResource, store, request).await?;
    tracing::info!(training_center_id = %center.id, name = %center.name, "Training center created");
    Ok(center)
}

pub async fn list_training_centers(store: &dyn Store) -> WebResult<Vec<TrainingCenterResponse>> {
    let centers = store.list_training_centers().await?;
    Ok(centers.into_iter().map(TrainingCenterResponse::from).collect())
}

pub async fn get_training_center(store: &dyn Store, id: Uuid) -> WebResult<TrainingCenterResponse> {
    pipeline::get(&TrainingCenterResource, store, id).await
}
