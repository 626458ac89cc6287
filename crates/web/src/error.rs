use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::{dto::wire_name, error::StorageError};
use validator::{ValidationErrors, ValidationErrorsKind};

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    BadRequest(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

impl WebError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Storage(StorageError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Storage(StorageError::ReferenceNotFound { .. }) => StatusCode::BAD_REQUEST,
            Self::Storage(StorageError::ConstraintViolation(_)) => StatusCode::CONFLICT,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let body = match &self {
            Self::Storage(
                e @ (StorageError::NotFound { .. } | StorageError::ReferenceNotFound { .. }),
            ) => {
                json!({
                    "error": e.to_string()
                })
            }
            Self::Storage(StorageError::ConstraintViolation(msg)) => {
                json!({
                    "error": msg
                })
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::Validation(errors) => {
                let mut details = Vec::new();
                collect_field_errors(errors, "", &mut details);
                details.sort();

                json!({
                    "error": "Validation failed",
                    "details": details
                })
            }
            Self::BadRequest(msg) => {
                json!({
                    "error": msg
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

/// Flattens nested validation errors into `path: reason` strings.
fn collect_field_errors(errors: &ValidationErrors, prefix: &str, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let field = wire_name(field);
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|e| {
                    format!(
                        "{}: {}",
                        path,
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    )
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect_field_errors(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_field_errors(nested, &format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

impl From<JsonRejection> for WebError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for WebError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for WebError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

pub type WebResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;
    use validator::Validate;

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                WebError::from(StorageError::not_found("Athlete", Uuid::nil())),
                StatusCode::NOT_FOUND,
            ),
            (
                WebError::from(StorageError::reference_not_found("Category", "RX")),
                StatusCode::BAD_REQUEST,
            ),
            (
                WebError::from(StorageError::ConstraintViolation("dup".to_string())),
                StatusCode::CONFLICT,
            ),
            (
                WebError::from(StorageError::Database(sqlx::Error::RowNotFound)),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                WebError::BadRequest("limit".to_string()),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected, "{error}");
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[derive(Debug, Validate)]
    struct Reference {
        #[validate(length(min = 1, message = "required"))]
        name: String,
    }

    #[derive(Debug, Validate)]
    struct Payload {
        #[validate(length(equal = 11, message = "bad cpf"))]
        tax_id: String,
        #[validate(nested)]
        category: Reference,
    }

    #[test]
    fn test_validation_details_use_wire_names() {
        let payload = Payload {
            tax_id: "123".to_string(),
            category: Reference {
                name: String::new(),
            },
        };
        let errors = payload.validate().unwrap_err();

        let mut details = Vec::new();
        collect_field_errors(&errors, "", &mut details);
        details.sort();

        assert_eq!(details, vec!["categoria.nome: required", "cpf: bad cpf"]);
    }
}
