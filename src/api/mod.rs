//! HTTP API module for the job-splitting engine.
//!
//! This module provides the REST API endpoints for allocating a single job
//! and running payroll over a batch of jobs.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AllocateRequest, PayrollRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
