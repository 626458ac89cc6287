//! Generic validate-then-persist request pipeline.
//!
//! Each entity plugs in through [`Resource`] (create and get) and optionally
//! [`Listable`], [`Patchable`] and [`Deletable`]. The free functions below run
//! the same steps for every entity:
//!
//! 1. validate the payload, before any store access
//! 2. resolve natural-key references (`Resource::resolve`)
//! 3. persist, letting store constraints have the final word
//! 4. shape the stored record into its response representation

use async_trait::async_trait;
use serde::Serialize;
use storage::{
    Store,
    dto::common::{LimitOffsetPage, LimitOffsetParams},
    error::Result as StorageResult,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{WebError, WebResult};

#[async_trait]
pub trait Resource: Send + Sync {
    /// Create payload, checked with its `Validate` rules
    type Create: Validate + Send + 'static;
    /// Insert command with every reference resolved
    type New: Send;
    /// Stored representation as read back from the store
    type Record: Send;
    type Response: Serialize + Send;

    /// Turns the payload into an insert command. Fails with
    /// `ReferenceNotFound` when a referenced entity does not exist.
    async fn resolve(&self, store: &dyn Store, request: Self::Create) -> StorageResult<Self::New>;

    async fn insert(&self, store: &dyn Store, new: Self::New) -> StorageResult<Self::Record>;

    async fn fetch(&self, store: &dyn Store, id: Uuid) -> StorageResult<Self::Record>;

    fn shape(&self, record: Self::Record) -> Self::Response;
}

#[async_trait]
pub trait Listable: Resource {
    type Filter: Send + Sync;
    type Summary: Serialize + Send;

    async fn query(
        &self,
        store: &dyn Store,
        filter: &Self::Filter,
        page: LimitOffsetParams,
    ) -> StorageResult<(Vec<Self::Record>, i64)>;

    fn summarize(&self, record: Self::Record) -> Self::Summary;
}

#[async_trait]
pub trait Patchable: Resource {
    type Update: Validate + Send + Sync + 'static;
    /// Explicit update command computed from a snapshot and a payload
    type Patch: Send + Sync;

    /// JSON names of the fields the payload sets
    fn present_fields(&self, update: &Self::Update) -> Vec<&'static str>;

    /// Keeps only the fields that differ from `snapshot`.
    fn diff(&self, snapshot: &Self::Record, update: Self::Update) -> Self::Patch;

    fn is_noop(&self, patch: &Self::Patch) -> bool;

    async fn apply(
        &self,
        store: &dyn Store,
        id: Uuid,
        patch: &Self::Patch,
    ) -> StorageResult<Self::Record>;
}

#[async_trait]
pub trait Deletable: Resource {
    async fn remove(&self, store: &dyn Store, id: Uuid) -> StorageResult<()>;
}

pub async fn create<R: Resource>(
    resource: &R,
    store: &dyn Store,
    request: R::Create,
) -> WebResult<R::Response> {
    request.validate()?;

    let new = resource.resolve(store, request).await?;
    let record = resource.insert(store, new).await?;

    Ok(resource.shape(record))
}

pub async fn get<R: Resource>(resource: &R, store: &dyn Store, id: Uuid) -> WebResult<R::Response> {
    let record = resource.fetch(store, id).await?;
    Ok(resource.shape(record))
}

pub async fn list<R: Listable>(
    resource: &R,
    store: &dyn Store,
    filter: &R::Filter,
    page: LimitOffsetParams,
    max_limit: u32,
) -> WebResult<LimitOffsetPage<R::Summary>> {
    page.validate(max_limit).map_err(WebError::BadRequest)?;

    let (records, total) = resource.query(store, filter, page).await?;
    let items = records
        .into_iter()
        .map(|record| resource.summarize(record))
        .collect();

    Ok(LimitOffsetPage::new(items, page, total))
}

/// Read-modify-write: validate, check the field allowlist, fetch a snapshot,
/// compute a patch and issue it as an explicit update.
pub async fn update<R: Patchable>(
    resource: &R,
    store: &dyn Store,
    id: Uuid,
    update: R::Update,
    mutable_fields: &[String],
) -> WebResult<R::Response> {
    update.validate()?;

    if let Some(field) = resource
        .present_fields(&update)
        .into_iter()
        .find(|field| !mutable_fields.iter().any(|m| m == field))
    {
        return Err(WebError::BadRequest(format!(
            "Field '{}' cannot be updated",
            field
        )));
    }

    let snapshot = resource.fetch(store, id).await?;
    let patch = resource.diff(&snapshot, update);
    if resource.is_noop(&patch) {
        return Ok(resource.shape(snapshot));
    }

    let record = resource.apply(store, id, &patch).await?;
    Ok(resource.shape(record))
}

pub async fn delete<R: Deletable>(resource: &R, store: &dyn Store, id: Uuid) -> WebResult<()> {
    resource.remove(store, id).await?;
    Ok(())
}
