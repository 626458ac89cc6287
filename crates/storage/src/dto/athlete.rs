use std::borrow::Cow;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::category::CategoryRef;
use super::training_center::TrainingCenterRef;
use crate::models::AthleteRecord;

/// JSON names of the athlete fields a partial update can carry.
pub const UPDATABLE_FIELDS: &[&str] = &["nome", "cpf", "idade", "peso", "altura", "sexo"];

/// Full athlete representation with its category and training center
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub id: Uuid,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "cpf")]
    pub tax_id: String,
    #[serde(rename = "idade")]
    pub age: i32,
    #[serde(rename = "peso", with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub weight: Decimal,
    #[serde(rename = "altura", with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub height: Decimal,
    #[serde(rename = "sexo")]
    pub sex: String,
    pub created_at: NaiveDateTime,
    #[serde(rename = "categoria")]
    pub category: CategoryRef,
    #[serde(rename = "centro_treinamento")]
    pub training_center: TrainingCenterRef,
}

/// Athlete entry returned by the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteSummary {
    pub id: Uuid,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: CategoryRef,
    #[serde(rename = "centro_treinamento")]
    pub training_center: TrainingCenterRef,
}

/// Equality filters for the athlete list
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AthleteFilter {
    /// Exact athlete name
    #[serde(rename = "nome")]
    pub name: Option<String>,
    /// Exact tax ID
    #[serde(rename = "cpf")]
    pub tax_id: Option<String>,
}

impl AthleteFilter {
    /// Treats empty filter values as absent.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.filter(|v| !v.is_empty()),
            tax_id: self.tax_id.filter(|v| !v.is_empty()),
        }
    }
}

/// Request payload for creating a new athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[serde(rename = "nome")]
    #[validate(length(
        min = 1,
        max = 50,
        message = "nome must be between 1 and 50 characters"
    ))]
    pub name: String,

    #[serde(rename = "cpf")]
    #[validate(custom(function = "validate_tax_id"))]
    pub tax_id: String,

    #[serde(rename = "idade")]
    #[validate(range(min = 0, max = 150, message = "idade must be between 0 and 150"))]
    pub age: i32,

    #[serde(rename = "peso")]
    #[validate(custom(function = "validate_positive"))]
    pub weight: Decimal,

    #[serde(rename = "altura")]
    #[validate(custom(function = "validate_positive"))]
    pub height: Decimal,

    #[serde(rename = "sexo")]
    #[validate(custom(function = "validate_sex"))]
    pub sex: String,

    #[serde(rename = "categoria")]
    #[validate(nested)]
    pub category: CategoryRef,

    #[serde(rename = "centro_treinamento")]
    #[validate(nested)]
    pub training_center: TrainingCenterRef,
}

/// Request payload for a partial athlete update
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAthleteRequest {
    #[serde(rename = "nome", default, skip_serializing_if = "Option::is_none")]
    #[validate(length(
        min = 1,
        max = 50,
        message = "nome must be between 1 and 50 characters"
    ))]
    pub name: Option<String>,

    #[serde(rename = "cpf", default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_tax_id"))]
    pub tax_id: Option<String>,

    #[serde(rename = "idade", default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = 150, message = "idade must be between 0 and 150"))]
    pub age: Option<i32>,

    #[serde(rename = "peso", default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_positive"))]
    pub weight: Option<Decimal>,

    #[serde(rename = "altura", default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_positive"))]
    pub height: Option<Decimal>,

    #[serde(rename = "sexo", default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_sex"))]
    pub sex: Option<String>,
}

impl UpdateAthleteRequest {
    /// JSON names of the fields present in the payload
    pub fn present_fields(&self) -> Vec<&'static str> {
        [
            ("nome", self.name.is_some()),
            ("cpf", self.tax_id.is_some()),
            ("idade", self.age.is_some()),
            ("peso", self.weight.is_some()),
            ("altura", self.height.is_some()),
            ("sexo", self.sex.is_some()),
        ]
        .into_iter()
        .filter_map(|(field, present)| present.then_some(field))
        .collect()
    }
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn validate_tax_id(tax_id: &str) -> Result<(), ValidationError> {
    if tax_id.len() == 11 && tax_id.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(invalid("invalid_tax_id", "cpf must contain exactly 11 digits"))
    }
}

fn validate_sex(sex: &str) -> Result<(), ValidationError> {
    const VALID_SEXES: &[&str] = &["M", "F"];

    if VALID_SEXES.contains(&sex) {
        Ok(())
    } else {
        Err(invalid("invalid_sex", "sexo must be 'M' or 'F'"))
    }
}

fn validate_positive(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_positive() && !value.is_zero() {
        Ok(())
    } else {
        Err(invalid("not_positive", "value must be greater than zero"))
    }
}

impl From<AthleteRecord> for AthleteResponse {
    fn from(record: AthleteRecord) -> Self {
        let AthleteRecord {
            athlete,
            category,
            training_center,
        } = record;

        Self {
            id: athlete.athlete_id,
            name: athlete.name,
            tax_id: athlete.tax_id,
            age: athlete.age,
            weight: athlete.weight,
            height: athlete.height,
            sex: athlete.sex,
            created_at: athlete.created_at,
            category: category.into(),
            training_center: training_center.into(),
        }
    }
}

impl From<AthleteRecord> for AthleteSummary {
    fn from(record: AthleteRecord) -> Self {
        Self {
            id: record.athlete.athlete_id,
            name: record.athlete.name,
            category: record.category.into(),
            training_center: record.training_center.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> serde_json::Value {
        json!({
            "nome": "Joao",
            "cpf": "12345678900",
            "idade": 25,
            "peso": 75.5,
            "altura": 1.75,
            "sexo": "M",
            "categoria": { "nome": "Scale" },
            "centro_treinamento": { "nome": "CT King" }
        })
    }

    fn parse(value: serde_json::Value) -> CreateAthleteRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_payload() {
        let req = parse(payload());
        assert!(req.validate().is_ok());
        assert_eq!(req.weight, Decimal::new(755, 1));
        assert_eq!(req.category.name, "Scale");
        assert_eq!(req.training_center.name, "CT King");
    }

    #[test]
    fn test_tax_id_must_be_eleven_digits() {
        for bad in ["1234567890", "123456789012", "1234567890a"] {
            let mut value = payload();
            value["cpf"] = json!(bad);
            let errors = parse(value).validate().unwrap_err();
            assert!(errors.field_errors().contains_key("tax_id"), "{bad}");
        }
    }

    #[test]
    fn test_weight_and_height_must_be_positive() {
        let mut value = payload();
        value["peso"] = json!(0);
        value["altura"] = json!(-1.7);
        let errors = parse(value).validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("weight"));
        assert!(fields.contains_key("height"));
    }

    #[test]
    fn test_sex_code() {
        let mut value = payload();
        value["sexo"] = json!("X");
        assert!(parse(value).validate().is_err());
    }

    #[test]
    fn test_nested_reference_is_validated() {
        let mut value = payload();
        value["categoria"] = json!({ "nome": "" });
        let errors = parse(value).validate().unwrap_err();
        assert!(errors.errors().contains_key("category"));
    }

    #[test]
    fn test_update_reports_present_fields() {
        let req: UpdateAthleteRequest = serde_json::from_value(json!({ "nome": "Maria" })).unwrap();
        assert_eq!(req.present_fields(), vec!["nome"]);
        assert!(req.validate().is_ok());

        let req: UpdateAthleteRequest =
            serde_json::from_value(json!({ "idade": 30, "cpf": "98765432100" })).unwrap();
        assert_eq!(req.present_fields(), vec!["cpf", "idade"]);

        let req: UpdateAthleteRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.present_fields().is_empty());
    }

    #[test]
    fn test_empty_filters_are_ignored() {
        let filter = AthleteFilter {
            name: Some(String::new()),
            tax_id: Some("12345678900".to_string()),
        }
        .normalized();
        assert_eq!(filter.name, None);
        assert_eq!(filter.tax_id.as_deref(), Some("12345678900"));
    }

    #[test]
    fn test_response_writes_measures_as_numbers() {
        let req = parse(payload());
        let response = AthleteResponse {
            id: Uuid::nil(),
            name: req.name,
            tax_id: req.tax_id,
            age: req.age,
            weight: req.weight,
            height: req.height,
            sex: req.sex,
            created_at: NaiveDateTime::default(),
            category: req.category,
            training_center: req.training_center,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["peso"], json!(75.5));
        assert_eq!(value["altura"], json!(1.75));

        let back: AthleteResponse = serde_json::from_value(value).unwrap();
        assert_eq!(back.weight, Decimal::new(755, 1));
        assert_eq!(back.height, Decimal::new(175, 2));
    }

    #[test]
    fn test_update_validates_present_fields() {
        let req: UpdateAthleteRequest = serde_json::from_value(json!({ "idade": -3 })).unwrap();
        assert!(req.validate().is_err());
    }
}
