//! Task detail reporting.
//!
//! Renders one display line per task from a `minijinja` template. The
//! reporter depends only on [`TrackedTask`], so any implementation of the
//! port can be reported.

use crate::task::{domain::TaskId, ports::TrackedTask};
use minijinja::Environment;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::{self, Write};
use thiserror::Error;

const DEFAULT_TEMPLATE: &str =
    "Task #{{ id }}: {{ title }} [{{ status }}] - Assigned to {{ assignee }} ({{ role }})";

const COMPACT_TEMPLATE: &str = "{{ summary }}";

/// Configuration for task detail rendering.
///
/// Templates see the keys `id`, `title`, `status`, `assignee`, `role` and
/// `summary`.
///
/// # Examples
///
/// ```
/// use tasklane::task::services::ReportConfig;
///
/// let config = ReportConfig::default();
/// assert!(config.template.contains("{{ title }}"));
///
/// let compact = ReportConfig::compact();
/// assert_eq!(compact.template, "{{ summary }}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// `minijinja` template rendering one task.
    pub template: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_owned(),
        }
    }
}

impl ReportConfig {
    /// Creates a configuration that renders only the task summary.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            template: COMPACT_TEMPLATE.to_owned(),
        }
    }

    /// Creates a configuration with a custom template.
    #[must_use]
    pub fn with_template(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

/// Errors returned while reporting task details.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The configured template does not parse.
    #[error("invalid report template: {reason}")]
    InvalidTemplate {
        /// Parser message.
        reason: String,
    },

    /// The template failed while rendering a task.
    #[error("failed to render details for task {task_id}: {reason}")]
    TemplateRender {
        /// Task being rendered.
        task_id: TaskId,
        /// Renderer message.
        reason: String,
    },

    /// Writing the rendered line failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Renders task detail lines.
#[derive(Debug, Clone, Default)]
pub struct TaskReporter {
    config: ReportConfig,
}

impl TaskReporter {
    /// Creates a reporter after checking that the template parses.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidTemplate`] when the template has a
    /// syntax error.
    pub fn new(config: ReportConfig) -> Result<Self, ReportError> {
        let environment = Environment::new();
        if let Err(error) = environment.template_from_str(&config.template) {
            return Err(ReportError::InvalidTemplate {
                reason: error.to_string(),
            });
        }
        Ok(Self { config })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Renders the detail line for `task`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::TemplateRender`] when rendering fails.
    pub fn render(&self, task: &dyn TrackedTask) -> Result<String, ReportError> {
        let environment = Environment::new();
        environment
            .render_str(&self.config.template, build_template_context(task))
            .map_err(|error| ReportError::TemplateRender {
                task_id: task.id(),
                reason: error.to_string(),
            })
    }

    /// Writes the detail line for `task` to `writer`, followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] when rendering or writing fails.
    pub fn write_details<W>(&self, task: &dyn TrackedTask, writer: &mut W) -> Result<(), ReportError>
    where
        W: Write + ?Sized,
    {
        let line = self.render(task)?;
        writeln!(writer, "{line}")?;
        tracing::debug!(task_id = %task.id(), "task details written");
        Ok(())
    }
}

/// Writes the default detail line for `task` to standard output.
///
/// # Errors
///
/// Returns [`ReportError`] when rendering fails or stdout is closed.
pub fn log_task_details(task: &dyn TrackedTask) -> Result<(), ReportError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    TaskReporter::default().write_details(task, &mut handle)
}

fn build_template_context(task: &dyn TrackedTask) -> Map<String, Value> {
    let assignee = task.assignee();
    let mut context = Map::new();
    context.insert("id".to_owned(), Value::from(task.id().value()));
    context.insert("title".to_owned(), Value::String(task.title().to_owned()));
    context.insert(
        "status".to_owned(),
        Value::String(task.status().label().to_owned()),
    );
    context.insert(
        "assignee".to_owned(),
        Value::String(assignee.name().to_owned()),
    );
    context.insert(
        "role".to_owned(),
        Value::String(assignee.role().as_str().to_owned()),
    );
    context.insert("summary".to_owned(), Value::String(task.summary()));
    context
}
