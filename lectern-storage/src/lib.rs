//! In-memory record store for the Lectern backend emulator.
//!
//! Emulates per-table CRUD against the hosted relational backend:
//!
//! - Rows are JSON objects kept in insertion order per [`Table`]
//! - [`RecordStore::select`] returns a chainable [`Select`] builder
//!   (`eq`, `order`, `limit`) that runs when awaited
//! - Inserts assign a UUID v7 id and stamp `created_at` when absent
//! - Updates merge the patch over the stored row; deletes are idempotent
//! - Every call waits on the injected latency before touching state
//!
//! Collections are re-seeded from [`SeedData`] whenever a store is built;
//! nothing survives a restart.
//!
//! [`Table`]: lectern_model::Table

mod query;
mod seed;
mod store;

pub use query::{Direction, Order, Query, Select};
pub use seed::SeedData;
pub use store::{Deleted, RecordStore};
