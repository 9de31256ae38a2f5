//! Then steps for task lifecycle BDD scenarios.

use super::world::LifecycleWorld;
use rstest_bdd_macros::then;
use tasklane::task::domain::{TaskDomainError, TaskStatus};

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &LifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world
        .task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task"))?;

    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            task.status()
        ));
    }
    Ok(())
}

#[then(r#"the task summary is "{summary}""#)]
fn task_summary_is(world: &LifecycleWorld, summary: String) -> Result<(), eyre::Report> {
    let task = world
        .task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task"))?;

    eyre::ensure!(
        task.summary() == summary,
        "expected summary {summary:?}, found {:?}",
        task.summary()
    );
    Ok(())
}

#[then("the transition fails with an invalid transition error")]
fn transition_fails(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_transition_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transition result"))?;

    if !matches!(result, Err(TaskDomainError::InvalidTransition { .. })) {
        return Err(eyre::eyre!(
            "expected InvalidTransition error, got {result:?}"
        ));
    }
    Ok(())
}
