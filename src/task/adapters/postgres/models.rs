//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Lifecycle status in canonical string form.
    pub status: String,
    /// Accumulated working minutes.
    pub time_spent: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest accepted mutation timestamp.
    pub updated_at: Option<DateTime<Utc>>,
    /// Completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Lifecycle status in canonical string form.
    pub status: String,
    /// Accumulated working minutes.
    pub time_spent: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest accepted mutation timestamp.
    pub updated_at: Option<DateTime<Utc>>,
    /// Completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
}
