//! Simulated remote-call latency.
//!
//! Every store operation awaits [`Latency::pause`] before touching state, so
//! UI loading states can be exercised against the emulator. Tests inject
//! [`NoLatency`] and run without sleeping.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// The kind of emulated remote call being delayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    SignIn,
    SignOut,
    Select,
    Insert,
    Update,
    Delete,
    Upload,
}

/// Per-operation delays in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyProfile {
    pub sign_in_ms: u64,
    pub sign_out_ms: u64,
    pub select_ms: u64,
    pub insert_ms: u64,
    pub update_ms: u64,
    pub delete_ms: u64,
    pub upload_ms: u64,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            sign_in_ms: 500,
            sign_out_ms: 300,
            select_ms: 500,
            insert_ms: 700,
            update_ms: 700,
            delete_ms: 500,
            upload_ms: 1500,
        }
    }
}

impl LatencyProfile {
    /// A profile with every delay set to zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            sign_in_ms: 0,
            sign_out_ms: 0,
            select_ms: 0,
            insert_ms: 0,
            update_ms: 0,
            delete_ms: 0,
            upload_ms: 0,
        }
    }

    /// Returns the configured delay for `op`.
    #[must_use]
    pub const fn delay_for(&self, op: Operation) -> Duration {
        let ms = match op {
            Operation::SignIn => self.sign_in_ms,
            Operation::SignOut => self.sign_out_ms,
            Operation::Select => self.select_ms,
            Operation::Insert => self.insert_ms,
            Operation::Update => self.update_ms,
            Operation::Delete => self.delete_ms,
            Operation::Upload => self.upload_ms,
        };
        Duration::from_millis(ms)
    }
}

/// Injectable delay applied before each emulated remote call resolves.
#[async_trait]
pub trait Latency: Send + Sync {
    async fn pause(&self, op: Operation);
}

/// Shared handle passed to every store.
pub type SharedLatency = Arc<dyn Latency>;

/// Sleeps on the tokio timer for the profile's delay.
#[derive(Debug, Clone, Default)]
pub struct SimulatedLatency {
    profile: LatencyProfile,
}

impl SimulatedLatency {
    #[must_use]
    pub fn new(profile: LatencyProfile) -> Self {
        Self { profile }
    }

    #[must_use]
    pub fn profile(&self) -> &LatencyProfile {
        &self.profile
    }
}

#[async_trait]
impl Latency for SimulatedLatency {
    async fn pause(&self, op: Operation) {
        let delay = self.profile.delay_for(op);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Resolves immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
    async fn pause(&self, _op: Operation) {}
}
