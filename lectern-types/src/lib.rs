//! Core type definitions for Lectern.
//!
//! This crate defines the plumbing shared by every store and by the
//! data-access facade:
//! - Record and user identifiers (record ids are UUID v7)
//! - The [`BackendError`] taxonomy and its stable [`ErrorCode`]s
//! - The [`Response`] envelope (`{data, error}`) returned across the facade
//! - Injectable [`Latency`] and [`Clock`] seams so tests run without sleeping
//!
//! Typed records (articles, books, messages) live in `lectern-model`.

mod clock;
mod error;
mod ids;
mod latency;
mod response;

pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use error::{BackendError, BackendResult, ErrorBody, ErrorCode};
pub use ids::{RecordId, UserId};
pub use latency::{Latency, LatencyProfile, NoLatency, Operation, SharedLatency, SimulatedLatency};
pub use response::Response;
