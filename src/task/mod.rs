//! Task lifecycle tracking for Tally.
//!
//! This module implements the task state machine: creating pending tasks,
//! listing them, validating and applying status transitions, and accruing
//! time spent while a task is actively in progress. Each lifecycle status
//! carries its own policy; the service layer resolves the policy for a
//! task's current status and routes one operation through it per request.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Dispatch services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
