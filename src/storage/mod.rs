//! Persistence for verification run records

pub mod reports;

pub use reports::*;
