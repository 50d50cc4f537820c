//! Command implementations.

pub mod config;
pub mod extract;

pub use self::config::execute_config;
pub use self::extract::{
    execute_all, execute_metrics, execute_stats, execute_tables, execute_timeline, read_input,
};
