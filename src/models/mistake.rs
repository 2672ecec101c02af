//! Mistake record shapes

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::ValidationError;

/// Persisted mistake record.
///
/// `id` is assigned by the database at insert time and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Mistake {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
}

/// Fields accepted when creating a mistake.
///
/// Every field defaults to empty when absent, so presence of `title` and
/// `description` is enforced by [`NewMistake::validate`] with its fixed
/// message rather than by a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct NewMistake {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
}

impl NewMistake {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() || self.description.is_empty() {
            return Err(ValidationError::RequiredFields);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let mistake = Mistake {
            id: 1,
            title: "Off-by-one".into(),
            description: "Loop bound error".into(),
            category: "bug".into(),
        };
        let json = serde_json::to_value(&mistake).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "title": "Off-by-one",
                "description": "Loop bound error",
                "category": "bug",
            })
        );
    }

    #[test]
    fn missing_category_defaults_to_empty() {
        let new: NewMistake =
            serde_json::from_str(r#"{"title":"t","description":"d"}"#).unwrap();
        assert_eq!(new.category, "");
        assert!(new.validate().is_ok());
    }

    #[test]
    fn absent_required_fields_deserialize_empty_and_fail_validation() {
        let new: NewMistake = serde_json::from_str(r#"{"description":"x"}"#).unwrap();
        assert_eq!(new.title, "");
        assert_eq!(new.validate(), Err(ValidationError::RequiredFields));
    }

    #[test]
    fn empty_title_is_rejected() {
        let new = NewMistake {
            title: String::new(),
            description: "d".into(),
            category: String::new(),
        };
        assert_eq!(new.validate(), Err(ValidationError::RequiredFields));
    }

    #[test]
    fn empty_description_is_rejected() {
        let new = NewMistake {
            title: "t".into(),
            description: String::new(),
            category: "bug".into(),
        };
        assert_eq!(new.validate(), Err(ValidationError::RequiredFields));
    }
}
