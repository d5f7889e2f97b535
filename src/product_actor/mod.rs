//! Product lines attached to RFQs. Products are write-once.

pub mod entity;
pub mod error;

pub use error::*;
