//! Given steps for task lifecycle BDD scenarios.

use std::sync::Arc;

use super::world::LifecycleWorld;
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use tasklane::{
    task::domain::{Task, TaskId, TransitionPolicy},
    user::domain::{Role, create_user},
};

#[given(r#"a user #{id:u64} named "{name}" with role "{role}""#)]
fn a_user(
    world: &mut LifecycleWorld,
    id: u64,
    name: String,
    role: String,
) -> Result<(), eyre::Report> {
    let parsed_role = Role::try_from(role.as_str()).wrap_err("parse scenario role")?;
    world.assignee = Some(Arc::new(create_user(id, name, parsed_role)));
    Ok(())
}

#[given(r#"a task #{id:u64} titled "{title}" assigned to that user"#)]
fn a_task(world: &mut LifecycleWorld, id: u64, title: String) -> Result<(), eyre::Report> {
    let assignee = world
        .assignee
        .clone()
        .ok_or_else(|| eyre::eyre!("missing user in scenario world"))?;
    world.task = Some(Task::new(TaskId::new(id), title, assignee, &DefaultClock));
    Ok(())
}

#[given(r#"a permissive task #{id:u64} titled "{title}" assigned to that user"#)]
fn a_permissive_task(
    world: &mut LifecycleWorld,
    id: u64,
    title: String,
) -> Result<(), eyre::Report> {
    let assignee = world
        .assignee
        .clone()
        .ok_or_else(|| eyre::eyre!("missing user in scenario world"))?;
    world.task = Some(Task::new_with_policy(
        TaskId::new(id),
        title,
        assignee,
        TransitionPolicy::Permissive,
        &DefaultClock,
    ));
    Ok(())
}

#[given("the task has been started")]
fn task_has_been_started(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    world
        .task_mut()?
        .start(&DefaultClock)
        .wrap_err("start task in scenario setup")
}

#[given("the task has been completed")]
fn task_has_been_completed(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    world
        .task_mut()?
        .complete(&DefaultClock)
        .wrap_err("complete task in scenario setup")
}
