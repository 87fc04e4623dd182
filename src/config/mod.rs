//! Configuration loading and management for the job-splitting engine.
//!
//! This module provides functionality to load the engine settings, the level
//! table and the roster from YAML files. The resulting [`PayrollConfig`] is
//! passed explicitly to every allocation.
//!
//! # Example
//!
//! ```no_run
//! use job_split_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("Trainee wage: {}", loader.config().settings().trainee_hourly_wage);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineSettings, LevelsFile, MAX_DECIMAL_PRECISION, PayrollConfig, RosterFile};
