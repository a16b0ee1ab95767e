//! Core data types and structures

pub mod addresses;
pub mod pool;
pub mod context;

pub use addresses::*;
pub use pool::*;
pub use context::*;
