//! Session store for the Lectern backend emulator.
//!
//! Emulates the hosted auth service: a single seeded demo identity can sign
//! in, the resulting session is persisted through a [`SessionPersistence`]
//! tier and read back synchronously, and sign-out clears it.
//!
//! Two persistence tiers are provided:
//! - [`MemoryPersistence`]: lives as long as the process
//! - [`FilePersistence`]: a JSON file that survives restarts, the local
//!   analogue of a browser's durable storage

mod error;
mod listeners;
mod persistence;
mod session;
mod store;

pub use error::{PersistenceError, PersistenceResult};
pub use listeners::{SessionEvent, Subscription};
pub use persistence::{FilePersistence, MemoryPersistence, SESSION_FILE_NAME, SessionPersistence};
pub use session::{AuthData, DemoIdentity, Role, Session, SignedOut, User};
pub use store::SessionStore;
