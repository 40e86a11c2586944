//! CLI library components for the refova scenario runner.

pub mod logging;
pub mod runner;
pub mod scenario;
