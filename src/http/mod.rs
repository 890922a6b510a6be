//! HTTP boundary for the task API.
//!
//! The route table lives in one place ([`router`]); axum rejects duplicate
//! registrations at startup, so the surface stays unique by construction.
//! Handlers translate service results into the documented status codes:
//! 200/201/204 on success, 400 with a per-field error map on validation
//! failure, 404 for unknown ids, and 500 for store failures.

mod error;
mod tasks;
mod wire;

pub use error::ApiError;
pub use tasks::router;
pub use wire::TaskResponse;
