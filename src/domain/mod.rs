pub mod rfq;
pub mod product;
pub mod admin;

pub use rfq::*;
pub use product::*;
pub use admin::*;
