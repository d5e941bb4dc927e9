//! Data sources for the dashboard

pub mod backend;
pub mod demo;
pub mod http_backend;

pub use backend::MonitorBackend;
pub use http_backend::HttpMonitorBackend;
