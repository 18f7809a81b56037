//! Guard Payroll library crate.
//!
//! This crate turns raw time-clock punch events into daily attendance
//! records and per-guard payroll summaries.  External applications may
//! depend on the `guard_payroll` crate and call
//! `engine::calculate_payroll` directly or embed the API via
//! `api::build_router`.

pub mod api;
pub mod classify;
pub mod config;
pub mod daily;
pub mod engine;
pub mod error;
pub mod grouping;
pub mod models;
pub mod period;
pub mod rules;
pub mod status;
pub mod timestamp;

pub use engine::{calculate_payroll, calculate_payroll_with};
pub use error::PayrollError;
pub use models::{DailyWorkRecord, PayrollSummary, PunchEvent};
