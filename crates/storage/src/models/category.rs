use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub category_id: Uuid,
    pub name: String,
}

/// Insert command for a category whose id was assigned by the caller.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub category_id: Uuid,
    pub name: String,
}

impl From<NewCategory> for Category {
    fn from(new: NewCategory) -> Self {
        Self {
            category_id: new.category_id,
            name: new.name,
        }
    }
}
