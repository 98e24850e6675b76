//! Core application primitives (HTTP surface, pipeline runner, scheduler)

pub mod http;
pub mod runner;
pub mod scheduler;

pub use http::*;
pub use runner::*;
pub use scheduler::*;
