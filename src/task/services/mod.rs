//! Application services for task lifecycle dispatch.

mod lifecycle;

pub use lifecycle::{
    AddTimeRequest, ChangeStatusRequest, CreateTaskRequest, TaskLifecycleError,
    TaskLifecycleResult, TaskLifecycleService,
};
