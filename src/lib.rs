//! Tally: task-tracking backend core.
//!
//! This crate provides the lifecycle engine for tracked tasks: creating
//! tasks, listing them, moving them through their status state machine,
//! and accruing the time spent working on them. Transport and
//! configuration belong to the enclosing service binary; persistence is
//! reached through a repository port.
//!
//! # Architecture
//!
//! Tally follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`task`]: Task records, lifecycle policies, and dispatch services

pub mod task;
