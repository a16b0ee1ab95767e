//! Error handling

pub mod verifier_error;

pub use verifier_error::*;
