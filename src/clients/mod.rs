//! Typed handles over the resource actors, one per record type.

#[macro_use]
mod macros;

pub mod rfq_client;
pub mod product_client;
pub mod admin_client;

pub use rfq_client::*;
pub use product_client::*;
pub use admin_client::*;
