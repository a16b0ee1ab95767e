//! Init code hash resolution
//!
//! The CREATE2 formula needs the hash of the pool's creation bytecode. For
//! canonical deployments that hash is a constant; for library-linked
//! deployments it has to be recomputed from the bytecode template and the
//! session's library addresses.

pub mod template;
pub mod resolver;

pub use template::*;
pub use resolver::*;
