//! Typed client for the hospital REST backend.
//!
//! The backend owns all storage and validation of record; this module is the
//! single place where Citadesk crosses the wire. One endpoint file per
//! entity, all sharing the request plumbing in `client.rs`.

pub mod appointments;
pub mod client;
pub mod doctors;
pub mod error;
pub mod patients;
pub mod rooms;

pub use client::HospitalClient;
pub use error::ApiError;
