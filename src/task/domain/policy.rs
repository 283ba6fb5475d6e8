//! Per-status transition and time-accrual policies.

use super::TaskStatus;

/// Rule set governing mutations available from one lifecycle status.
///
/// One policy exists per [`TaskStatus`] value. Policies are stateless:
/// resolving a task's current status yields its policy, and the policy
/// answers which status changes and accrual operations that status
/// permits. The variant set mirrors the status enumeration exactly, so
/// resolution is an exhaustive match rather than open-ended dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Rules while a task awaits its first activity.
    Pending,
    /// Rules while a task is actively worked on.
    InProgress,
    /// Rules while work is suspended.
    Paused,
    /// Rules after a task has finished.
    Completed,
    /// Rules after a task has been abandoned.
    Canceled,
}

impl StatusPolicy {
    /// Resolves the policy governing the given status.
    #[must_use]
    pub const fn for_status(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Pending => Self::Pending,
            TaskStatus::InProgress => Self::InProgress,
            TaskStatus::Paused => Self::Paused,
            TaskStatus::Completed => Self::Completed,
            TaskStatus::Canceled => Self::Canceled,
        }
    }

    /// Returns whether a task under this policy may move to `target`.
    ///
    /// Self-transitions are never in the allowed set, and the two
    /// terminal policies allow nothing at all.
    #[must_use]
    pub const fn allows_transition(self, target: TaskStatus) -> bool {
        match self {
            Self::Pending => matches!(target, TaskStatus::InProgress | TaskStatus::Canceled),
            Self::InProgress => matches!(
                target,
                TaskStatus::Paused | TaskStatus::Completed | TaskStatus::Canceled
            ),
            Self::Paused => matches!(
                target,
                TaskStatus::InProgress | TaskStatus::Completed | TaskStatus::Canceled
            ),
            Self::Completed | Self::Canceled => false,
        }
    }

    /// Returns whether time may accrue under this policy.
    #[must_use]
    pub const fn accrues_time(self) -> bool {
        matches!(self, Self::InProgress)
    }

    /// Returns whether the governed status admits no further mutation.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Canceled)
    }
}
