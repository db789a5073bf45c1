//! ispdesk-core — record-keeping core for a small ISP desk.
//!
//! RULE: the presentation layer is a collaborator, not a resident.
//! Everything here is a plain request/response call on [`desk::Desk`];
//! rendering, form state, and the static troubleshooting text live outside
//! this crate.

pub mod activity;
pub mod billing;
pub mod clock;
pub mod complaint;
pub mod config;
pub mod customer;
pub mod dashboard;
pub mod desk;
pub mod error;
pub mod plan;
pub mod store;
pub mod types;
mod validate;
