//! Custom error types for the verifier

use alloy::primitives::Address;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerifierError {
    #[error("Invalid pool pair: token {token} paired with itself")]
    InvalidPair {
        token: Address,
    },

    #[error("Unresolved library: no address for {library} in this deployment context")]
    UnresolvedLibrary {
        library: String,
    },

    #[error("Verification mismatch: predicted {predicted}, observed {observed}")]
    VerificationMismatch {
        predicted: String,
        observed: String,
    },

    #[error("Malformed bytecode artifact: {context}")]
    Artifact {
        context: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
        retry_count: u32,
    },

    #[error("Contract interaction failed: {contract} - {message}")]
    Contract {
        contract: Address,
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type VerifierResult<T> = Result<T, VerifierError>;
