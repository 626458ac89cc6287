//! In-process [`Store`](crate::store::Store) that enforces the same unique
//! and foreign-key constraints as the PostgreSQL schema. Rows keep insertion
//! order.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::dto::athlete::AthleteFilter;
use crate::dto::common::{LimitOffsetPage, LimitOffsetParams};
use crate::error::{Result, StorageError};
use crate::models::{
    Athlete, AthletePatch, AthleteRecord, Category, NewAthlete, NewCategory, NewTrainingCenter,
    TrainingCenter,
};
use crate::store::{AthleteStore, CategoryStore, TrainingCenterStore};

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    training_centers: Vec<TrainingCenter>,
    athletes: Vec<Athlete>,
}

impl Tables {
    fn record(&self, athlete: &Athlete) -> Result<AthleteRecord> {
        let category = self
            .categories
            .iter()
            .find(|c| c.category_id == athlete.category_id)
            .ok_or(StorageError::not_found("Category", athlete.category_id))?;
        let training_center = self
            .training_centers
            .iter()
            .find(|t| t.training_center_id == athlete.training_center_id)
            .ok_or(StorageError::not_found(
                "Training center",
                athlete.training_center_id,
            ))?;

        Ok(AthleteRecord {
            athlete: athlete.clone(),
            category: category.clone(),
            training_center: training_center.clone(),
        })
    }

    fn tax_id_taken(&self, tax_id: &str, except: Option<Uuid>) -> bool {
        self.athletes
            .iter()
            .any(|a| a.tax_id == tax_id && Some(a.athlete_id) != except)
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn duplicate_tax_id(tax_id: &str) -> StorageError {
    StorageError::ConstraintViolation(format!("An athlete with cpf {} already exists", tax_id))
}

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn insert_category(&self, new: NewCategory) -> Result<Category> {
        let mut tables = self.tables.write().await;

        if tables.categories.iter().any(|c| c.name == new.name) {
            return Err(StorageError::ConstraintViolation(format!(
                "A category named '{}' already exists",
                new.name
            )));
        }

        let category = Category::from(new);
        tables.categories.push(category.clone());
        Ok(category)
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.tables.read().await.categories.clone())
    }

    async fn find_category(&self, id: Uuid) -> Result<Category> {
        self.tables
            .read()
            .await
            .categories
            .iter()
            .find(|c| c.category_id == id)
            .cloned()
            .ok_or(StorageError::not_found("Category", id))
    }

    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        Ok(self
            .tables
            .read()
            .await
            .categories
            .iter()
            .find(|c| c.name == name)
            .cloned())
    }
}

#[async_trait]
impl TrainingCenterStore for MemoryStore {
    async fn insert_training_center(&self, new: NewTrainingCenter) -> Result<TrainingCenter> {
        let mut tables = self.tables.write().await;

        if tables.training_centers.iter().any(|t| t.name == new.name) {
            return Err(StorageError::ConstraintViolation(format!(
                "A training center named '{}' already exists",
                new.name
            )));
        }

        let center = TrainingCenter::from(new);
        tables.training_centers.push(center.clone());
        Ok(center)
    }

    async fn list_training_centers(&self) -> Result<Vec<TrainingCenter>> {
        Ok(self.tables.read().await.training_centers.clone())
    }

    async fn find_training_center(&self, id: Uuid) -> Result<TrainingCenter> {
        self.tables
            .read()
            .await
            .training_centers
            .iter()
            .find(|t| t.training_center_id == id)
            .cloned()
            .ok_or(StorageError::not_found("Training center", id))
    }

    async fn find_training_center_by_name(&self, name: &str) -> Result<Option<TrainingCenter>> {
        Ok(self
            .tables
            .read()
            .await
            .training_centers
            .iter()
            .find(|t| t.name == name)
            .cloned())
    }
}

#[async_trait]
impl AthleteStore for MemoryStore {
    async fn insert_athlete(&self, new: NewAthlete) -> Result<AthleteRecord> {
        let mut tables = self.tables.write().await;

        if tables.tax_id_taken(&new.tax_id, None) {
            return Err(duplicate_tax_id(&new.tax_id));
        }

        let athlete = Athlete::from(new);
        let record = tables.record(&athlete).map_err(|_| {
            StorageError::ConstraintViolation("A referenced record no longer exists".to_string())
        })?;
        tables.athletes.push(athlete);
        Ok(record)
    }

    async fn find_athlete(&self, id: Uuid) -> Result<AthleteRecord> {
        let tables = self.tables.read().await;
        let athlete = tables
            .athletes
            .iter()
            .find(|a| a.athlete_id == id)
            .ok_or(StorageError::not_found("Athlete", id))?;
        tables.record(athlete)
    }

    async fn list_athletes(
        &self,
        filter: &AthleteFilter,
        page: LimitOffsetParams,
    ) -> Result<(Vec<AthleteRecord>, i64)> {
        let tables = self.tables.read().await;

        let matching = tables
            .athletes
            .iter()
            .filter(|a| filter.name.as_ref().is_none_or(|name| &a.name == name))
            .filter(|a| filter.tax_id.as_ref().is_none_or(|tax_id| &a.tax_id == tax_id))
            .map(|a| tables.record(a))
            .collect::<Result<Vec<_>>>()?;

        let page = LimitOffsetPage::paginate(matching, page);
        Ok((page.items, page.total))
    }

    async fn update_athlete(&self, id: Uuid, patch: &AthletePatch) -> Result<AthleteRecord> {
        let mut tables = self.tables.write().await;

        let index = tables
            .athletes
            .iter()
            .position(|a| a.athlete_id == id)
            .ok_or(StorageError::not_found("Athlete", id))?;

        if let Some(ref tax_id) = patch.tax_id
            && tables.tax_id_taken(tax_id, Some(id))
        {
            return Err(duplicate_tax_id(tax_id));
        }

        let updated = patch.applied_to(&tables.athletes[index]);
        tables.athletes[index] = updated;
        tables.record(&tables.athletes[index])
    }

    async fn delete_athlete(&self, id: Uuid) -> Result<()> {
        let mut tables = self.tables.write().await;

        let index = tables
            .athletes
            .iter()
            .position(|a| a.athlete_id == id)
            .ok_or(StorageError::not_found("Athlete", id))?;
        tables.athletes.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    async fn seeded() -> (MemoryStore, Category, TrainingCenter) {
        let store = MemoryStore::new();
        let category = store
            .insert_category(NewCategory {
                category_id: Uuid::new_v4(),
                name: "Scale".to_string(),
            })
            .await
            .unwrap();
        let center = store
            .insert_training_center(NewTrainingCenter {
                training_center_id: Uuid::new_v4(),
                name: "CT King".to_string(),
                address: "Rua X, 10".to_string(),
                owner: "Marcos".to_string(),
            })
            .await
            .unwrap();
        (store, category, center)
    }

    fn new_athlete(category: &Category, center: &TrainingCenter, tax_id: &str) -> NewAthlete {
        NewAthlete {
            athlete_id: Uuid::new_v4(),
            name: "Joao".to_string(),
            tax_id: tax_id.to_string(),
            age: 25,
            weight: Decimal::new(755, 1),
            height: Decimal::new(175, 2),
            sex: "M".to_string(),
            created_at: chrono::Utc::now().naive_utc(),
            category_id: category.category_id,
            training_center_id: center.training_center_id,
        }
    }

    #[tokio::test]
    async fn test_duplicate_category_name_is_a_constraint_violation() {
        let (store, _, _) = seeded().await;
        let err = store
            .insert_category(NewCategory {
                category_id: Uuid::new_v4(),
                name: "Scale".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::ConstraintViolation(_)));
        assert_eq!(store.list_categories().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_tax_id_keeps_single_row() {
        let (store, category, center) = seeded().await;
        store
            .insert_athlete(new_athlete(&category, &center, "12345678900"))
            .await
            .unwrap();

        let err = store
            .insert_athlete(new_athlete(&category, &center, "12345678900"))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::ConstraintViolation(_)));

        let filter = AthleteFilter {
            tax_id: Some("12345678900".to_string()),
            ..Default::default()
        };
        let (_, total) = store
            .list_athletes(&filter, LimitOffsetParams::default())
            .await
            .unwrap();
        assert_eq!(total, 1);
    }

    #[tokio::test]
    async fn test_insert_with_dangling_reference_is_rejected() {
        let (store, category, center) = seeded().await;
        let mut new = new_athlete(&category, &center, "12345678900");
        new.category_id = Uuid::new_v4();

        let err = store.insert_athlete(new).await.unwrap_err();
        assert!(matches!(err, StorageError::ConstraintViolation(_)));
        let (rows, _) = store
            .list_athletes(&AthleteFilter::default(), LimitOffsetParams::default())
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_update_rejects_tax_id_of_another_athlete() {
        let (store, category, center) = seeded().await;
        store
            .insert_athlete(new_athlete(&category, &center, "11111111111"))
            .await
            .unwrap();
        let second = store
            .insert_athlete(new_athlete(&category, &center, "22222222222"))
            .await
            .unwrap();

        let patch = AthletePatch {
            tax_id: Some("11111111111".to_string()),
            ..Default::default()
        };
        let err = store
            .update_athlete(second.athlete.athlete_id, &patch)
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::ConstraintViolation(_)));

        let unchanged = store.find_athlete(second.athlete.athlete_id).await.unwrap();
        assert_eq!(unchanged.athlete.tax_id, "22222222222");
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let (store, _, _) = seeded().await;
        let err = store.delete_athlete(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound { .. }));
    }
}
