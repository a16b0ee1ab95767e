//! Deployment session context

use alloy::primitives::Address;
use std::collections::HashMap;

/// Immutable snapshot of one deployment session: the deployer (factory)
/// address plus the addresses of every library deployed in that session.
///
/// Library addresses depend on the deployer account and nonce at the moment
/// each library was deployed, so a context is only meaningful for the session
/// it was built from. Build a fresh one per session; never cache across
/// sessions, never share between concurrent verification runs.
#[derive(Debug, Clone)]
pub struct DeploymentContext {
    deployer: Address,
    libraries: HashMap<String, Address>,
}

impl DeploymentContext {
    pub fn new(deployer: Address) -> Self {
        Self {
            deployer,
            libraries: HashMap::new(),
        }
    }

    /// Records a deployed library address under its contract name.
    pub fn with_library(mut self, name: impl Into<String>, address: Address) -> Self {
        self.libraries.insert(name.into(), address);
        self
    }

    pub fn with_libraries<I, S>(mut self, libraries: I) -> Self
    where
        I: IntoIterator<Item = (S, Address)>,
        S: Into<String>,
    {
        self.libraries
            .extend(libraries.into_iter().map(|(name, addr)| (name.into(), addr)));
        self
    }

    pub fn deployer(&self) -> Address {
        self.deployer
    }

    pub fn library(&self, name: &str) -> Option<Address> {
        self.libraries.get(name).copied()
    }

    pub fn libraries(&self) -> &HashMap<String, Address> {
        &self.libraries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn library_lookup() {
        let ctx = DeploymentContext::new(address!("1F98431c8aD98523631AE4a59f267346ea31F984"))
            .with_library("Oracle", address!("0000000000000000000000000000000000000abc"));

        assert_eq!(
            ctx.library("Oracle"),
            Some(address!("0000000000000000000000000000000000000abc"))
        );
        assert_eq!(ctx.library("Tick"), None);
    }
}
