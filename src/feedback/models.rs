use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_RATING: &str = "5";

fn default_rating() -> String {
    DEFAULT_RATING.to_string()
}

/// Stored logs may carry numbers, booleans or nulls where text is expected.
fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_rating<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(Value::deserialize(deserializer)?).unwrap_or_else(default_rating))
}

/// Raw values read from the feedback form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedbackFields {
    pub name: String,
    pub email: String,
    pub message: String,
    pub rating: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,
    #[error("message is required")]
    MissingMessage,
}

impl FeedbackFields {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::MissingMessage);
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: String,
    #[serde(default = "default_rating", deserialize_with = "lenient_rating")]
    pub rating: String,
    /// ISO-8601 UTC, e.g. `2026-10-19T08:30:00.000Z`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: String,
}

impl FeedbackRecord {
    pub fn from_fields(fields: &FeedbackFields, created_at: DateTime<Utc>) -> Self {
        let rating = fields
            .rating
            .as_deref()
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .unwrap_or_else(default_rating);

        Self {
            name: fields.name.clone(),
            email: fields.email.clone(),
            message: fields.message.clone(),
            rating,
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
