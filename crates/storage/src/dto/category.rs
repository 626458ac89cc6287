use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Category;

/// Request payload for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[serde(rename = "nome")]
    #[validate(length(
        min = 1,
        max = 10,
        message = "nome must be between 1 and 10 characters"
    ))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub id: Uuid,
    #[serde(rename = "nome")]
    pub name: String,
}

/// Category referenced by its unique name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CategoryRef {
    #[serde(rename = "nome")]
    #[validate(length(
        min = 1,
        max = 10,
        message = "categoria.nome must be between 1 and 10 characters"
    ))]
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.category_id,
            name: category.name,
        }
    }
}

impl From<Category> for CategoryRef {
    fn from(category: Category) -> Self {
        Self {
            name: category.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_length() {
        let ok = CreateCategoryRequest {
            name: "Scale".to_string(),
        };
        assert!(ok.validate().is_ok());

        let too_long = CreateCategoryRequest {
            name: "Intermediate".to_string(),
        };
        assert!(too_long.validate().is_err());

        let empty = CreateCategoryRequest {
            name: String::new(),
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_wire_names() {
        let req: CreateCategoryRequest = serde_json::from_str(r#"{"nome": "RX"}"#).unwrap();
        assert_eq!(req.name, "RX");

        let json = serde_json::to_value(CategoryResponse {
            id: Uuid::nil(),
            name: "RX".to_string(),
        })
        .unwrap();
        assert_eq!(json["nome"], "RX");
        assert_eq!(json["id"], Uuid::nil().to_string());
    }
}
