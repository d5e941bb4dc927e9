//! Live-status dashboard client for the trading engine.
//!
//! Polls the engine's monitor API for a system snapshot and the recent
//! signal history, and projects both into a display view.

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod render;
pub mod services;
