use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct TrainingCenter {
    pub training_center_id: Uuid,
    pub name: String,
    pub address: String,
    pub owner: String,
}

#[derive(Debug, Clone)]
pub struct NewTrainingCenter {
    pub training_center_id: Uuid,
    pub name: String,
    pub address: String,
    pub owner: String,
}

impl From<NewTrainingCenter> for TrainingCenter {
    fn from(new: NewTrainingCenter) -> Self {
        Self {
            training_center_id: new.training_center_id,
            name: new.name,
            address: new.address,
            owner: new.owner,
        }
    }
}
