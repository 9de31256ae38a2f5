//! When steps for task lifecycle BDD scenarios.

use super::world::LifecycleWorld;
use mockable::DefaultClock;
use rstest_bdd_macros::when;

#[when("the task is started")]
fn task_is_started(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    let result = world.task_mut()?.start(&DefaultClock);
    world.last_transition_result = Some(result);
    Ok(())
}

#[when("the task is completed")]
fn task_is_completed(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    let result = world.task_mut()?.complete(&DefaultClock);
    world.last_transition_result = Some(result);
    Ok(())
}
