//! Runs the canonical task lifecycle against the library.
//!
//! Usage:
//!
//! ```text
//! RUST_LOG=debug task_demo
//! ```
//!
//! Creates an admin user, assigns a task, starts and completes it, and
//! writes the task detail line to stdout after each step. Log events go to
//! stderr, filtered by `RUST_LOG` (default `info`).

use std::sync::Arc;

use mockable::DefaultClock;
use tasklane::{
    task::{
        domain::{Task, TaskId},
        services::log_task_details,
    },
    user::domain::{Role, create_user},
};
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn main() -> Result<(), BoxError> {
    init_tracing();

    let clock = DefaultClock;
    let user = Arc::new(create_user(1, "Saurabh", Role::Admin));
    let mut task = Task::new(TaskId::new(101), "Write Guide", user, &clock);
    log_task_details(&task)?;

    task.start(&clock)?;
    log_task_details(&task)?;

    task.complete(&clock)?;
    log_task_details(&task)?;

    if let Err(error) = task.start(&clock) {
        tracing::info!(%error, "completed task refused to restart");
    }

    tracing::info!(summary = %task.summary(), "demo finished");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();
}
