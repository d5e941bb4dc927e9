//! Backend interface the fetch coordinator polls.

use crate::error::FetchError;
use crate::models::{Signal, Snapshot};
use async_trait::async_trait;

#[async_trait]
pub trait MonitorBackend: Send + Sync {
    /// Fetch the current system snapshot
    async fn fetch_snapshot(&self) -> Result<Snapshot, FetchError>;

    /// Fetch the recent signal history, most recent first
    ///
    /// `limit` is advisory; the backend may return more or fewer entries.
    async fn fetch_signals(&self, limit: usize) -> Result<Vec<Signal>, FetchError>;
}
