//! Core domain models for skylift launches.
//!
//! This module contains the fundamental data structures used throughout
//! the launch pipeline: tasks, their resource selections, and the task
//! graph handed over by the upstream optimizer.

pub mod graph;
pub mod task;

pub use graph::TaskGraph;
pub use task::{CloudId, Resources, Task, TaskId};
