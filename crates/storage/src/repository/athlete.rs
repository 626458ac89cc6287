use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::athlete::AthleteFilter;
use crate::dto::common::LimitOffsetParams;
use crate::error::{Result, StorageError};
use crate::models::{Athlete, AthletePatch, AthleteRecord, Category, NewAthlete, TrainingCenter};

const RECORD_COLUMNS: &str = r#"
    a.athlete_id, a.name, a.tax_id, a.age, a.weight, a.height, a.sex, a.created_at,
    a.category_id, a.training_center_id,
    c.name AS category_name,
    t.name AS training_center_name,
    t.address AS training_center_address,
    t.owner AS training_center_owner
"#;

const RECORD_JOINS: &str = r#"
    JOIN categories c ON c.category_id = a.category_id
    JOIN training_centers t ON t.training_center_id = a.training_center_id
"#;

#[derive(FromRow)]
struct AthleteRow {
    athlete_id: Uuid,
    name: String,
    tax_id: String,
    age: i32,
    weight: Decimal,
    height: Decimal,
    sex: String,
    created_at: chrono::NaiveDateTime,
    category_id: Uuid,
    training_center_id: Uuid,
    category_name: String,
    training_center_name: String,
    training_center_address: String,
    training_center_owner: String,
}

impl From<AthleteRow> for AthleteRecord {
    fn from(row: AthleteRow) -> Self {
        Self {
            category: Category {
                category_id: row.category_id,
                name: row.category_name,
            },
            training_center: TrainingCenter {
                training_center_id: row.training_center_id,
                name: row.training_center_name,
                address: row.training_center_address,
                owner: row.training_center_owner,
            },
            athlete: Athlete {
                athlete_id: row.athlete_id,
                name: row.name,
                tax_id: row.tax_id,
                age: row.age,
                weight: row.weight,
                height: row.height,
                sex: row.sex,
                created_at: row.created_at,
                category_id: row.category_id,
                training_center_id: row.training_center_id,
            },
        }
    }
}

pub struct AthleteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find athlete by ID, joined with its category and training center
    pub async fn find_by_id(&self, id: Uuid) -> Result<AthleteRecord> {
        let sql =
            format!("SELECT {RECORD_COLUMNS} FROM athletes a {RECORD_JOINS} WHERE a.athlete_id = $1");

        let row = sqlx::query_as::<_, AthleteRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::not_found("Athlete", id))?;

        Ok(row.into())
    }

    /// List athletes matching the filter, returning one page and the total count
    pub async fn list(
        &self,
        filter: &AthleteFilter,
        page: LimitOffsetParams,
    ) -> Result<(Vec<AthleteRecord>, i64)> {
        let total = self.count(filter).await?;

        let mut query = QueryBuilder::<Postgres>::new(format!(
            "SELECT {RECORD_COLUMNS} FROM athletes a {RECORD_JOINS} WHERE 1=1"
        ));
        push_filters(&mut query, filter);
        query.push(" ORDER BY a.created_at, a.athlete_id LIMIT ");
        query.push_bind(i64::from(page.limit));
        query.push(" OFFSET ");
        query.push_bind(i64::from(page.offset));

        let rows = query
            .build_query_as::<AthleteRow>()
            .fetch_all(self.pool)
            .await?;

        Ok((rows.into_iter().map(AthleteRecord::from).collect(), total))
    }

    async fn count(&self, filter: &AthleteFilter) -> Result<i64> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM athletes a WHERE 1=1");
        push_filters(&mut query, filter);

        let count = query
            .build_query_scalar::<i64>()
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    /// Create a new athlete
    pub async fn create(&self, new: &NewAthlete) -> Result<AthleteRecord> {
        let sql = format!(
            r#"
            WITH a AS (
                INSERT INTO athletes (athlete_id, name, tax_id, age, weight, height, sex,
                                      created_at, category_id, training_center_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                RETURNING *
            )
            SELECT {RECORD_COLUMNS} FROM a {RECORD_JOINS}
            "#
        );

        let row = sqlx::query_as::<_, AthleteRow>(&sql)
            .bind(new.athlete_id)
            .bind(&new.name)
            .bind(&new.tax_id)
            .bind(new.age)
            .bind(new.weight)
            .bind(new.height)
            .bind(&new.sex)
            .bind(new.created_at)
            .bind(new.category_id)
            .bind(new.training_center_id)
            .fetch_one(self.pool)
            .await
            .map_err(|e| {
                StorageError::from(e).classify_constraint(|| {
                    format!("An athlete with cpf {} already exists", new.tax_id)
                })
            })?;

        Ok(row.into())
    }

    /// Apply a patch to an existing athlete; columns absent from the patch keep their value
    pub async fn update(&self, id: Uuid, patch: &AthletePatch) -> Result<AthleteRecord> {
        let sql = format!(
            r#"
            WITH a AS (
                UPDATE athletes
                SET name = COALESCE($2, name),
                    tax_id = COALESCE($3, tax_id),
                    age = COALESCE($4, age),
                    weight = COALESCE($5, weight),
                    height = COALESCE($6, height),
                    sex = COALESCE($7, sex)
                WHERE athlete_id = $1
                RETURNING *
            )
            SELECT {RECORD_COLUMNS} FROM a {RECORD_JOINS}
            "#
        );

        let row = sqlx::query_as::<_, AthleteRow>(&sql)
            .bind(id)
            .bind(patch.name.as_deref())
            .bind(patch.tax_id.as_deref())
            .bind(patch.age)
            .bind(patch.weight)
            .bind(patch.height)
            .bind(patch.sex.as_deref())
            .fetch_optional(self.pool)
            .await
            .map_err(|e| {
                StorageError::from(e).classify_constraint(|| {
                    format!(
                        "An athlete with cpf {} already exists",
                        patch.tax_id.as_deref().unwrap_or_default()
                    )
                })
            })?
            .ok_or(StorageError::not_found("Athlete", id))?;

        Ok(row.into())
    }

    /// Delete an athlete by ID
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM athletes WHERE athlete_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::not_found("Athlete", id));
        }

        Ok(())
    }
}

fn push_filters(query: &mut QueryBuilder<'_, Postgres>, filter: &AthleteFilter) {
    if let Some(ref name) = filter.name {
        query.push(" AND a.name = ");
        query.push_bind(name.clone());
    }

    if let Some(ref tax_id) = filter.tax_id {
        query.push(" AND a.tax_id = ");
        query.push_bind(tax_id.clone());
    }
}
