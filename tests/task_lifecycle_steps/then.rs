//! Then steps for task lifecycle BDD scenarios.

use super::world::TaskLifecycleWorld;
use rstest_bdd_macros::then;
use tally::task::{
    domain::{TaskDomainError, TaskStatus},
    services::TaskLifecycleError,
};

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let expected_status = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;

    let task = world
        .task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing stored task"))?;

    if task.status() != expected_status {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected_status.as_str(),
            task.status().as_str()
        ));
    }

    Ok(())
}

#[then("the change is rejected as an invalid transition")]
fn change_rejected_as_invalid_transition(
    world: &TaskLifecycleWorld,
) -> Result<(), eyre::Report> {
    let result = world
        .last_change_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing change result"))?;

    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::InvalidTransition { .. }
        ))
    ) {
        return Err(eyre::eyre!(
            "expected InvalidTransition error, got {result:?}"
        ));
    }

    Ok(())
}

#[then("the change is rejected because the task is terminal")]
fn change_rejected_as_terminal(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_change_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing change result"))?;

    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::TerminalState { .. }
        ))
    ) {
        return Err(eyre::eyre!("expected TerminalState error, got {result:?}"));
    }

    Ok(())
}

#[then("the change is rejected as an unknown status")]
fn change_rejected_as_unknown_status(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_change_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing change result"))?;

    if !matches!(result, Err(TaskLifecycleError::InvalidStatus(_))) {
        return Err(eyre::eyre!("expected InvalidStatus error, got {result:?}"));
    }

    Ok(())
}

#[then("the task has {minutes:u64} recorded minutes")]
fn task_has_recorded_minutes(
    world: &TaskLifecycleWorld,
    minutes: u64,
) -> Result<(), eyre::Report> {
    let task = world
        .task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing stored task"))?;
    let expected = i64::try_from(minutes).map_err(|err| eyre::eyre!("minute count: {err}"))?;

    if task.time_spent() != expected {
        return Err(eyre::eyre!(
            "expected {expected} recorded minutes, found {}",
            task.time_spent()
        ));
    }

    Ok(())
}

#[then("time logging is rejected for the current status")]
fn time_logging_rejected(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_change_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing change result"))?;

    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::TimeAccrualNotAllowed { .. }
        ))
    ) {
        return Err(eyre::eyre!(
            "expected TimeAccrualNotAllowed error, got {result:?}"
        ));
    }

    Ok(())
}
