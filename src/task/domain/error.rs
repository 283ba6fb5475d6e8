//! Error types for task domain validation and lifecycle rejections.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The requested time addition is not strictly positive.
    #[error("time addition must be a positive number of minutes, got {0}")]
    NonPositiveMinutes(i64),

    /// The requested status is not reachable from the current status.
    #[error("task {task_id} cannot move from {from} to {to}")]
    InvalidTransition {
        /// Identifier of the rejected task.
        task_id: TaskId,
        /// Status the task currently holds.
        from: TaskStatus,
        /// Status the caller requested.
        to: TaskStatus,
    },

    /// The task holds a terminal status and admits no further mutation.
    #[error("task {task_id} is {status} and can no longer change")]
    TerminalState {
        /// Identifier of the rejected task.
        task_id: TaskId,
        /// Terminal status the task holds.
        status: TaskStatus,
    },

    /// Time may only accrue while a task is in progress.
    #[error("task {task_id} is {status}; time accrues only while in progress")]
    TimeAccrualNotAllowed {
        /// Identifier of the rejected task.
        task_id: TaskId,
        /// Status the task currently holds.
        status: TaskStatus,
    },

    /// The accumulated time would exceed the representable range.
    #[error("task {task_id} cannot record more time without overflowing the accumulator")]
    TimeSpentOverflow {
        /// Identifier of the rejected task.
        task_id: TaskId,
    },
}

/// Error returned while parsing task statuses from stored or client input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
