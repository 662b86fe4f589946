//! Application orchestration module

pub mod execution;
pub mod initialization;

pub use execution::{parse_values, run_queue, DrainReport};
pub use initialization::{configure_logging, load_configuration, resolve_queue_config};
