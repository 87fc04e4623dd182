//! Job-splitting engine for field-service crews
//!
//! This crate splits each completed job's wages and tips across the crew that
//! worked it, using per-level technician percentages, a flat trainee wage and
//! a fixed decision tree of split rules, and aggregates a batch of jobs into
//! a payroll report.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
