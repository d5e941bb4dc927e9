//! Wire models for the monitor API.

pub mod signal;
pub mod snapshot;
pub mod timestamp;

pub use signal::Signal;
pub use snapshot::{ActiveStock, MostActives, Snapshot, SymbolState};
