//! Application services built on the task capability port.

mod report;

pub use report::{ReportConfig, ReportError, TaskReporter, log_task_details};
