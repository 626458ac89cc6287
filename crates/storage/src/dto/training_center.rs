use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::TrainingCenter;

/// Request payload for creating a training center
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTrainingCenterRequest {
    #[serde(rename = "nome")]
    #[validate(length(
        min = 1,
        max = 20,
        message = "nome must be between 1 and 20 characters"
    ))]
    pub name: String,

    #[serde(rename = "endereco")]
    #[validate(length(
        min = 1,
        max = 60,
        message = "endereco must be between 1 and 60 characters"
    ))]
    pub address: String,

    #[serde(rename = "proprietario")]
    #[validate(length(
        min = 1,
        max = 30,
        message = "proprietario must be between 1 and 30 characters"
    ))]
    pub owner: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainingCenterResponse {
    pub id: Uuid,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "endereco")]
    pub address: String,
    #[serde(rename = "proprietario")]
    pub owner: String,
}

/// Training center referenced by its unique name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct TrainingCenterRef {
    #[serde(rename = "nome")]
    #[validate(length(
        min = 1,
        max = 20,
        message = "centro_treinamento.nome must be between 1 and 20 characters"
    ))]
    pub name: String,
}

impl From<TrainingCenter> for TrainingCenterResponse {
    fn from(center: TrainingCenter) -> Self {
        Self {
            id: center.training_center_id,
            name: center.name,
            address: center.address,
            owner: center.owner,
        }
    }
}

impl From<TrainingCenter> for TrainingCenterRef {
    fn from(center: TrainingCenter) -> Self {
        Self { name: center.name }
    }
}
