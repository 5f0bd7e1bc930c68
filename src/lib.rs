pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod orchestration;
pub mod provider;
pub mod runner;
pub mod template;

pub use config::Config;
pub use crate::core::{CloudId, Resources, Task, TaskGraph, TaskId};
pub use error::{Error, Result};
pub use orchestration::Launcher;
