//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tally::task::services::{ChangeStatusRequest, CreateTaskRequest};

#[given(r#"a stored task titled "{title}" described as "{description}""#)]
fn stored_task(
    world: &mut TaskLifecycleWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let created = run_async(
        world
            .service
            .create_task(CreateTaskRequest::new(title, description)),
    )
    .wrap_err("create task for scenario")?;
    world.task = Some(created);
    Ok(())
}

#[given(r#"the task has been moved to "{status}""#)]
fn task_has_been_moved(
    world: &mut TaskLifecycleWorld,
    status: String,
) -> Result<(), eyre::Report> {
    let task = world
        .task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing stored task in scenario world"))?;

    let updated = run_async(
        world
            .service
            .change_status(ChangeStatusRequest::new(task.id(), status)),
    )
    .wrap_err("move task in scenario setup")?;

    world.task = Some(updated);
    Ok(())
}
