//! Domain model for task lifecycle tracking.
//!
//! The task domain models pending-to-terminal status progression, the
//! per-status policies that validate transitions and time accrual, and
//! the task aggregate their side effects apply to, while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod policy;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{Description, Minutes, TaskId, Title};
pub use policy::StatusPolicy;
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task};
