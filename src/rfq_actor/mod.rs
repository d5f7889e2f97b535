//! RFQ records, including the customer accept/reject transitions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
