//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use tally::task::services::{AddTimeRequest, ChangeStatusRequest};

#[when(r#"the task status is changed to "{status}""#)]
fn change_task_status(
    world: &mut TaskLifecycleWorld,
    status: String,
) -> Result<(), eyre::Report> {
    let task = world
        .task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing stored task in scenario world"))?;

    let result = run_async(
        world
            .service
            .change_status(ChangeStatusRequest::new(task.id(), status)),
    );
    if let Ok(ref updated) = result {
        world.task = Some(updated.clone());
    }
    world.last_change_result = Some(result);
    Ok(())
}

#[when("{minutes:u64} minutes are logged against the task")]
fn log_minutes(world: &mut TaskLifecycleWorld, minutes: u64) -> Result<(), eyre::Report> {
    let task = world
        .task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing stored task in scenario world"))?;
    let minutes = i64::try_from(minutes).wrap_err("minute count out of range")?;

    let result = run_async(
        world
            .service
            .add_time(AddTimeRequest::new(task.id(), minutes)),
    );
    if let Ok(ref updated) = result {
        world.task = Some(updated.clone());
    }
    world.last_change_result = Some(result);
    Ok(())
}
