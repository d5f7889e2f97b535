//! System orchestration, startup, and shutdown logic.

pub mod rfq_system;
pub mod actor_store;
pub mod telemetry;

pub use rfq_system::*;
pub use actor_store::*;
pub use telemetry::*;
