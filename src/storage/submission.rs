//! Stored form submissions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validation::ValueMap;

/// One accepted set of form values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Field name → value; checkbox values are joined
    pub data: ValueMap,
}

impl Submission {
    /// Stamps `data` with a fresh id and the current time
    pub fn new(data: ValueMap) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            data,
        }
    }

    /// Value of one field, empty when the field has no entry
    pub fn value(&self, field_name: &str) -> &str {
        self.data.get(field_name).map(String::as_str).unwrap_or("")
    }
}
