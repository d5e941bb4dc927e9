//! Core application primitives (scheduling, fetching, view state)

pub mod coordinator;
pub mod guard;
pub mod http;
pub mod runtime;
pub mod scheduler;
pub mod state;

pub use coordinator::*;
pub use guard::*;
pub use http::*;
pub use runtime::*;
pub use scheduler::*;
pub use state::*;
