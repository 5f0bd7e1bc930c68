//! Task graph consumed by the launcher.
//!
//! The upstream optimizer hands over an ordered collection of tasks with
//! resources already resolved. The launcher currently supports exactly
//! one task per graph; `single_task` is the precondition gate.

use serde::{Deserialize, Serialize};

use crate::core::task::Task;
use crate::{Error, Result};

/// Ordered collection of planned tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskGraph {
    tasks: Vec<Task>,
}

impl TaskGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph holding a single task.
    pub fn single(task: Task) -> Self {
        Self { tasks: vec![task] }
    }

    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// The launcher's entry precondition: exactly one task.
    ///
    /// Returns `UnsupportedGraphShape` for any other size, before any
    /// side effect has happened.
    pub fn single_task(&self) -> Result<&Task> {
        match self.tasks.as_slice() {
            [task] => Ok(task),
            _ => Err(Error::UnsupportedGraphShape {
                count: self.tasks.len(),
            }),
        }
    }
}
