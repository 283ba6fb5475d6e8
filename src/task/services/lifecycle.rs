//! Service layer dispatching lifecycle operations to status policies.

use crate::task::{
    domain::{
        Description, Minutes, ParseTaskStatusError, Task, TaskDomainError, TaskId, TaskStatus,
        Title,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Request payload for changing a task's lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeStatusRequest {
    id: TaskId,
    status: String,
}

impl ChangeStatusRequest {
    /// Creates a request targeting a status in canonical string form.
    #[must_use]
    pub fn new(id: TaskId, status: impl Into<String>) -> Self {
        Self {
            id,
            status: status.into(),
        }
    }
}

/// Request payload for recording time worked on a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddTimeRequest {
    id: TaskId,
    minutes: i64,
}

impl AddTimeRequest {
    /// Creates a request adding `minutes` of recorded work.
    #[must_use]
    pub const fn new(id: TaskId, minutes: i64) -> Self {
        Self { id, minutes }
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation or policy check failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The requested status is not part of the closed enumeration.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle dispatch service.
///
/// Binds a task's current status to its policy and routes one operation
/// through it per request: load the snapshot, apply the mutation to a
/// copy, and persist only accepted results. Rejections leave storage
/// untouched.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and stores a new pending task with zero recorded time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when a field fails
    /// validation, or [`TaskLifecycleError::Repository`] when the
    /// repository rejects persistence.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let title = Title::new(request.title)?;
        let description = Description::new(request.description)?;
        let task = Task::new(title, description, &*self.clock);
        self.repository.store(&task).await?;
        Ok(task)
    }

    /// Returns all stored tasks in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the listing query
    /// fails.
    pub async fn list_tasks(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no task has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Applies a status change through the task's current policy.
    ///
    /// The updated snapshot is persisted and returned only when the
    /// policy accepts the change.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::InvalidStatus`] when the target
    /// status string is unknown, [`TaskLifecycleError::NotFound`] when
    /// the task does not exist, [`TaskLifecycleError::Domain`] when the
    /// policy rejects the transition, or
    /// [`TaskLifecycleError::Repository`] on persistence failure.
    pub async fn change_status(&self, request: ChangeStatusRequest) -> TaskLifecycleResult<Task> {
        let target = TaskStatus::try_from(request.status.as_str())
            .map_err(TaskLifecycleError::InvalidStatus)?;
        let mut task = self.load(request.id).await?;
        task.transition_to(target, &*self.clock)?;
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Records time worked against an in-progress task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the minute count is
    /// not strictly positive or the task's status does not accrue time,
    /// [`TaskLifecycleError::NotFound`] when the task does not exist, or
    /// [`TaskLifecycleError::Repository`] on persistence failure.
    pub async fn add_time(&self, request: AddTimeRequest) -> TaskLifecycleResult<Task> {
        let minutes = Minutes::new(request.minutes)?;
        let mut task = self.load(request.id).await?;
        task.add_time_spent(minutes, &*self.clock)?;
        self.repository.update(&task).await?;
        Ok(task)
    }

    async fn load(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(id))
    }
}
