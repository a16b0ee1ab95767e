//! Network providers and on-chain probes

pub mod providers;
pub mod retry;
pub mod probe;

pub use providers::*;
pub use retry::*;
pub use probe::*;
