use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Category, TrainingCenter};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    pub athlete_id: Uuid,
    pub name: String,
    pub tax_id: String,
    pub age: i32,
    pub weight: Decimal,
    pub height: Decimal,
    pub sex: String,
    pub created_at: chrono::NaiveDateTime,
    pub category_id: Uuid,
    pub training_center_id: Uuid,
}

/// An athlete together with the category and training center it references.
#[derive(Debug, Clone, PartialEq)]
pub struct AthleteRecord {
    pub athlete: Athlete,
    pub category: Category,
    pub training_center: TrainingCenter,
}

/// Insert command built after category and training center names were
/// resolved to their ids.
#[derive(Debug, Clone)]
pub struct NewAthlete {
    pub athlete_id: Uuid,
    pub name: String,
    pub tax_id: String,
    pub age: i32,
    pub weight: Decimal,
    pub height: Decimal,
    pub sex: String,
    pub created_at: chrono::NaiveDateTime,
    pub category_id: Uuid,
    pub training_center_id: Uuid,
}

impl From<NewAthlete> for Athlete {
    fn from(new: NewAthlete) -> Self {
        Self {
            athlete_id: new.athlete_id,
            name: new.name,
            tax_id: new.tax_id,
            age: new.age,
            weight: new.weight,
            height: new.height,
            sex: new.sex,
            created_at: new.created_at,
            category_id: new.category_id,
            training_center_id: new.training_center_id,
        }
    }
}

/// Update command: only the `Some` columns are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AthletePatch {
    pub name: Option<String>,
    pub tax_id: Option<String>,
    pub age: Option<i32>,
    pub weight: Option<Decimal>,
    pub height: Option<Decimal>,
    pub sex: Option<String>,
}

impl AthletePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns a copy of `athlete` with the patched columns replaced.
    pub fn applied_to(&self, athlete: &Athlete) -> Athlete {
        Athlete {
            name: self.name.clone().unwrap_or_else(|| athlete.name.clone()),
            tax_id: self.tax_id.clone().unwrap_or_else(|| athlete.tax_id.clone()),
            age: self.age.unwrap_or(athlete.age),
            weight: self.weight.unwrap_or(athlete.weight),
            height: self.height.unwrap_or(athlete.height),
            sex: self.sex.clone().unwrap_or_else(|| athlete.sex.clone()),
            ..athlete.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn athlete() -> Athlete {
        Athlete {
            athlete_id: Uuid::new_v4(),
            name: "Joao".to_string(),
            tax_id: "12345678900".to_string(),
            age: 25,
            weight: Decimal::new(755, 1),
            height: Decimal::new(170, 2),
            sex: "M".to_string(),
            created_at: chrono::NaiveDateTime::default(),
            category_id: Uuid::new_v4(),
            training_center_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let original = athlete();
        let patch = AthletePatch::default();
        assert!(patch.is_empty());
        assert_eq!(patch.applied_to(&original), original);
    }

    #[test]
    fn test_patch_only_touches_present_columns() {
        let original = athlete();
        let patch = AthletePatch {
            name: Some("Maria".to_string()),
            ..Default::default()
        };

        let updated = patch.applied_to(&original);
        assert_eq!(updated.name, "Maria");
        assert_eq!(updated.tax_id, original.tax_id);
        assert_eq!(updated.age, original.age);
        assert_eq!(updated.weight, original.weight);
        assert_eq!(updated.athlete_id, original.athlete_id);
    }
}
