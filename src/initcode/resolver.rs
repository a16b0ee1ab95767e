//! Init code hash strategies

use alloy::primitives::{B256, keccak256};
use tracing::debug;

use crate::errors::VerifierResult;
use crate::initcode::BytecodeTemplate;
use crate::types::DeploymentContext;

/// Where the init code hash comes from, selected by configuration.
///
/// `Static` is only valid when the pool bytecode carries no library
/// references. `Dynamic` relinks the template against the context's library
/// addresses on every call, so a hash resolved in one deployment session is
/// never reused in another.
#[derive(Debug, Clone)]
pub enum InitCodeHashSource {
    Static(B256),
    Dynamic(BytecodeTemplate),
}

impl InitCodeHashSource {
    pub fn resolve(&self, context: &DeploymentContext) -> VerifierResult<B256> {
        match self {
            Self::Static(hash) => Ok(*hash),
            Self::Dynamic(template) => {
                let linked = template.link(context.libraries())?;
                let hash = keccak256(&linked);
                debug!(
                    libraries = context.libraries().len(),
                    %hash,
                    "Resolved init code hash from linked bytecode"
                );
                Ok(hash)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DeploymentContext;
    use alloy::primitives::{address, b256};
    use std::collections::BTreeMap;

    fn template() -> BytecodeTemplate {
        let mut bytecode = vec![0x73u8];
        bytecode.extend_from_slice(&[0u8; 20]);
        bytecode.push(0x00);
        BytecodeTemplate::new(
            bytecode,
            BTreeMap::from([("Oracle".to_string(), vec![1usize])]),
        )
        .unwrap()
    }

    fn context() -> DeploymentContext {
        DeploymentContext::new(address!("1F98431c8aD98523631AE4a59f267346ea31F984"))
            .with_library("Oracle", address!("00000000000000000000000000000000deadbeef"))
    }

    #[test]
    fn static_source_ignores_context() {
        let hash = b256!("e34f199b19b2b4f47f68442619d555527d244f78a3297ea89325f843f87b8b54");
        let resolved = InitCodeHashSource::Static(hash)
            .resolve(&DeploymentContext::new(address!(
                "0000000000000000000000000000000000000001"
            )))
            .unwrap();
        assert_eq!(resolved, hash);
    }

    #[test]
    fn dynamic_resolve_is_idempotent_within_context() {
        let source = InitCodeHashSource::Dynamic(template());
        let ctx = context();
        let first = source.resolve(&ctx).unwrap();
        let second = source.resolve(&ctx).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn dynamic_resolve_matches_hash_of_linked_bytecode() {
        let ctx = context();
        let linked = template().link(ctx.libraries()).unwrap();
        let resolved = InitCodeHashSource::Dynamic(template()).resolve(&ctx).unwrap();
        assert_eq!(resolved, keccak256(&linked));
    }

    #[test]
    fn dynamic_resolve_fails_without_library() {
        let ctx = DeploymentContext::new(address!("1F98431c8aD98523631AE4a59f267346ea31F984"));
        let err = InitCodeHashSource::Dynamic(template())
            .resolve(&ctx)
            .unwrap_err();
        assert!(matches!(
            err,
            crate::errors::VerifierError::UnresolvedLibrary { .. }
        ));
    }

    #[test]
    fn changing_one_library_address_changes_the_hash() {
        let source = InitCodeHashSource::Dynamic(template());
        let hash_a = source.resolve(&context()).unwrap();
        let mutated = DeploymentContext::new(address!(
            "1F98431c8aD98523631AE4a59f267346ea31F984"
        ))
        .with_library("Oracle", address!("00000000000000000000000000000000deadbef0"));
        let hash_b = source.resolve(&mutated).unwrap();
        assert_ne!(hash_a, hash_b);
    }
}
