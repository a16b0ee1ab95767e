//! CREATE2 address derivation

pub mod create2;

pub use create2::*;
