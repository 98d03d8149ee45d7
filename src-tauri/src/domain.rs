//! Domain Layer
//!
//! Project entity and the validation rules applied on creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
    pub archived_at: Option<DateTime<Utc>>,
}

/// Input for project creation
#[derive(Debug, Validate)]
pub struct NewProject<'a> {
    #[validate(length(min = 3, message = "Must be at least 3 character long"))]
    pub name: &'a str,
}
