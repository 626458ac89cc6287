use async_trait::async_trait;
use storage::{
    Store,
    dto::category::{CategoryResponse, CreateCategoryRequest},
    error::Result,
    models::{Category, NewCategory},
    store::CategoryStore,
};
use uuid::Uuid;

use crate::error::WebResult;
use crate::pipeline::{self, Resource};

pub struct CategoryResource;

#[async_trait]
impl Resource for CategoryResource {
    type Create = CreateCategoryRequest;
    type New = NewCategory;
    type Record = Category;
    type Response = CategoryResponse;

    async fn resolve(
        &self,
        _store: &dyn Store,
        request: CreateCategoryRequest,
    ) -> Result<NewCategory> {
        Ok(NewCategory {
            category_id: Uuid::new_v4(),
            name: request.name,
        })
    }

    async fn insert(&self, store: &dyn Store, new: NewCategory) -> Result<Category> {
        store.insert_category(new).await
    }

    async fn fetch(&self, store: &dyn Store, id: Uuid) -> Result<Category> {
        store.find_category(id).await
    }

    fn shape(&self, record: Category) -> CategoryResponse {
        CategoryResponse::from(record)
    }
}

/// Create a category
pub async fn create_category(
    store: &dyn Store,
    request: CreateCategoryRequest,
) -> WebResult<CategoryResponse> {
    let category = pipeline::create(&CategoryResource, store, request).await?;
    tracing::info!(category_id = %category.id, name = %category.name, "Category created");
    Ok(category)
}

/// List all categories
pub async fn list_categories(store: &dyn Store) -> WebResult<Vec<CategoryResponse>> {
    let categories = store.list_categories().await?;
    Ok(categories.into_iter().map(CategoryResponse::from).collect())
}

/// Get category by ID
pub async fn get_category(store: &dyn Store, id: Uuid) -> WebResult<CategoryResponse> {
    pipeline::get(&CategoryResource, store, id).await
}
