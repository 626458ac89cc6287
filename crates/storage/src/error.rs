use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("{entity} not found with id {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("{entity} '{name}' not found")]
    ReferenceNotFound { entity: &'static str, name: String },

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn reference_not_found(entity: &'static str, name: impl Into<String>) -> Self {
        Self::ReferenceNotFound {
            entity,
            name: name.into(),
        }
    }

    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }

    /// Turns constraint failures raised by PostgreSQL into `ConstraintViolation`
    /// so they reach the caller as conflicts instead of internal errors.
    /// `unique` builds the message for a unique-key violation.
    pub fn classify_constraint(self, unique: impl FnOnce() -> String) -> Self {
        if self.is_unique_violation() {
            StorageError::ConstraintViolation(unique())
        } else if self.is_foreign_key_violation() {
            StorageError::ConstraintViolation(
                "A referenced record no longer exists".to_string(),
            )
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_leaves_other_errors_untouched() {
        let err = StorageError::not_found("Athlete", Uuid::nil())
            .classify_constraint(|| "duplicate".to_string());
        assert!(matches!(err, StorageError::NotFound { .. }));

        let err = StorageError::Database(sqlx::Error::RowNotFound)
            .classify_constraint(|| "duplicate".to_string());
        assert!(matches!(err, StorageError::Database(_)));
    }

    #[test]
    fn test_messages_name_the_missing_value() {
        let err = StorageError::reference_not_found("Category", "Scale");
        assert_eq!(err.to_string(), "Category 'Scale' not found");

        let id = Uuid::nil();
        let err = StorageError::not_found("Athlete", id);
        assert_eq!(err.to_string(), format!("Athlete not found with id {id}"));
    }
}
