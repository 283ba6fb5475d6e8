//! Task aggregate root and its lifecycle mutations.

use super::{Description, Minutes, StatusPolicy, TaskDomainError, TaskId, TaskStatus, Title};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// All mutation goes through [`Task::transition_to`] and
/// [`Task::add_time_spent`]; both consult the [`StatusPolicy`] for the
/// current status and leave the task untouched on rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: Title,
    description: Description,
    status: TaskStatus,
    time_spent: i64,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: Title,
    /// Persisted description.
    pub description: Description,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted accumulated minutes.
    pub time_spent: i64,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp, if any mutation was accepted.
    pub updated_at: Option<DateTime<Utc>>,
    /// Persisted completion timestamp, if the task completed.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new pending task with no recorded time.
    #[must_use]
    pub fn new(title: Title, description: Description, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            title,
            description,
            status: TaskStatus::Pending,
            time_spent: 0,
            created_at: clock.utc(),
            updated_at: None,
            completed_at: None,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            time_spent: data.time_spent,
            created_at: data.created_at,
            updated_at: data.updated_at,
            completed_at: data.completed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &Description {
        &self.description
    }

    /// Returns the task lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the accumulated working minutes.
    #[must_use]
    pub const fn time_spent(&self) -> i64 {
        self.time_spent
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the latest accepted mutation, if any.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Returns the completion timestamp, if the task has completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Applies a requested status change.
    ///
    /// The policy for the current status decides whether `target` is
    /// reachable. On acceptance the status moves, `updated_at` records
    /// the mutation, and `completed_at` is set once when the task enters
    /// [`TaskStatus::Completed`]. On rejection nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TerminalState`] when the task is
    /// completed or canceled, or [`TaskDomainError::InvalidTransition`]
    /// when `target` is not reachable from the current status.
    pub fn transition_to(
        &mut self,
        target: TaskStatus,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let policy = StatusPolicy::for_status(self.status);
        if policy.is_terminal() {
            return Err(TaskDomainError::TerminalState {
                task_id: self.id,
                status: self.status,
            });
        }
        if !policy.allows_transition(target) {
            return Err(TaskDomainError::InvalidTransition {
                task_id: self.id,
                from: self.status,
                to: target,
            });
        }

        let now = clock.utc();
        self.status = target;
        if target == TaskStatus::Completed && self.completed_at.is_none() {
            self.completed_at = Some(now);
        }
        self.updated_at = Some(now);
        Ok(())
    }

    /// Adds actively worked minutes to the task.
    ///
    /// Accrual is only valid while the task is in progress; the
    /// increment itself is validated at [`Minutes`] construction.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TimeAccrualNotAllowed`] when the task
    /// is in any status other than [`TaskStatus::InProgress`], or
    /// [`TaskDomainError::TimeSpentOverflow`] when the increment would
    /// exceed the accumulator's range.
    pub fn add_time_spent(
        &mut self,
        minutes: Minutes,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let policy = StatusPolicy::for_status(self.status);
        if !policy.accrues_time() {
            return Err(TaskDomainError::TimeAccrualNotAllowed {
                task_id: self.id,
                status: self.status,
            });
        }

        self.time_spent = self
            .time_spent
            .checked_add(minutes.value())
            .ok_or(TaskDomainError::TimeSpentOverflow { task_id: self.id })?;
        self.updated_at = Some(clock.utc());
        Ok(())
    }
}
