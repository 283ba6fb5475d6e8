//! Unit and orchestration tests for the task lifecycle module.
