//! Command implementations

pub mod down;
pub mod status;
pub mod up;

use dwhctl_core::{ProgressCallback, ProgressEvent, WaitTarget};

/// Render a progress event as a user-facing line, if it has one
pub fn progress_line(event: &ProgressEvent) -> Option<String> {
    match event {
        ProgressEvent::Waiting {
            target: WaitTarget::Availability(expected),
            observed,
            ..
        } => Some(format!(
            "Waiting for availability '{}' but it is '{}'",
            expected,
            observed.as_deref().unwrap_or("unknown")
        )),
        ProgressEvent::Waiting {
            target: WaitTarget::Deletion,
            identifier,
            ..
        } => Some(format!("Waiting for deletion of '{}'", identifier)),
        ProgressEvent::ScriptStarted { name, path } => Some(format!(
            "Running SQL script '{}': {}",
            name,
            path.display()
        )),
        ProgressEvent::Reached { .. } | ProgressEvent::ScriptCompleted { .. } => None,
    }
}

/// Progress callback that prints each line to stdout as it happens
pub fn progress_printer() -> ProgressCallback {
    Box::new(|event| {
        if let Some(line) = progress_line(&event) {
            println!("{}", line);
        }
    })
}
