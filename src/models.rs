//! Frontend Models
//!
//! Data structures matching backend entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Project data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
    pub archived_at: Option<DateTime<Utc>>,
}

/// A named bucket of todos. `is_opened` is local UI state, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: u32,
    pub name: String,
    pub position: i32,
    pub is_opened: bool,
}

/// A single task item belonging to exactly one group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub text: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_done: bool,
    pub group_id: u32,
}
