//! Unlinked bytecode templates and library substitution

use alloy::primitives::{Address, Bytes, hex};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use crate::errors::{VerifierError, VerifierResult};

/// Solc emits a 40-character placeholder (`__$<hash>$__`) per library slot;
/// linked, each slot holds a 20-byte address.
const LINK_SLOT_LEN: usize = 20;

/// Pool creation bytecode before library linking: the raw bytes with every
/// library slot zero-filled, plus the byte offset of each slot keyed by
/// library name.
#[derive(Debug, Clone)]
pub struct BytecodeTemplate {
    bytecode: Vec<u8>,
    link_references: BTreeMap<String, Vec<usize>>,
}

/// Subset of a Hardhat/solc build artifact we care about.
#[derive(Deserialize)]
struct RawArtifact {
    bytecode: String,
    #[serde(default, rename = "linkReferences")]
    link_references: BTreeMap<String, BTreeMap<String, Vec<RawLinkRef>>>,
}

#[derive(Deserialize)]
struct RawLinkRef {
    start: usize,
    length: usize,
}

impl BytecodeTemplate {
    pub fn new(
        bytecode: Vec<u8>,
        link_references: BTreeMap<String, Vec<usize>>,
    ) -> VerifierResult<Self> {
        for (library, offsets) in &link_references {
            for &offset in offsets {
                if offset + LINK_SLOT_LEN > bytecode.len() {
                    return Err(VerifierError::Artifact {
                        context: format!(
                            "link reference for {} at offset {} exceeds bytecode length {}",
                            library,
                            offset,
                            bytecode.len()
                        ),
                        source: None,
                    });
                }
            }
        }
        Ok(Self {
            bytecode,
            link_references,
        })
    }

    /// Parses a Hardhat/solc build artifact. The artifact's `bytecode` hex
    /// still contains `__$...$__` placeholders at every link site, so those
    /// regions are zero-filled before decoding and their offsets recorded
    /// from `linkReferences`.
    pub fn from_artifact(json: &str) -> VerifierResult<Self> {
        let raw: RawArtifact =
            serde_json::from_str(json).map_err(|e| VerifierError::Artifact {
                context: "failed to parse artifact JSON".to_string(),
                source: Some(e.into()),
            })?;

        let hex_body = raw.bytecode.strip_prefix("0x").unwrap_or(&raw.bytecode);
        let mut hex_bytes = hex_body.as_bytes().to_vec();
        let mut link_references: BTreeMap<String, Vec<usize>> = BTreeMap::new();

        for (source_file, libraries) in &raw.link_references {
            for (library, refs) in libraries {
                let offsets = link_references.entry(library.clone()).or_default();
                for link_ref in refs {
                    if link_ref.length != LINK_SLOT_LEN {
                        return Err(VerifierError::Artifact {
                            context: format!(
                                "link reference for {}:{} has length {}, expected {}",
                                source_file, library, link_ref.length, LINK_SLOT_LEN
                            ),
                            source: None,
                        });
                    }
                    let hex_start = link_ref.start * 2;
                    let hex_end = hex_start + LINK_SLOT_LEN * 2;
                    if hex_end > hex_bytes.len() {
                        return Err(VerifierError::Artifact {
                            context: format!(
                                "link reference for {}:{} at offset {} exceeds bytecode",
                                source_file, library, link_ref.start
                            ),
                            source: None,
                        });
                    }
                    hex_bytes[hex_start..hex_end].fill(b'0');
                    offsets.push(link_ref.start);
                }
            }
        }

        let bytecode = hex::decode(&hex_bytes).map_err(|e| VerifierError::Artifact {
            context: "artifact bytecode is not valid hex".to_string(),
            source: Some(e.into()),
        })?;

        Self::new(bytecode, link_references)
    }

    /// Names of every library this bytecode links against.
    pub fn libraries(&self) -> impl Iterator<Item = &str> {
        self.link_references.keys().map(String::as_str)
    }

    /// Substitutes every library slot with the matching deployed address and
    /// returns the fully linked creation bytecode. Fails if any referenced
    /// library has no address - a zero or default address is never
    /// substituted silently.
    pub fn link(&self, libraries: &HashMap<String, Address>) -> VerifierResult<Bytes> {
        let mut linked = self.bytecode.clone();
        for (library, offsets) in &self.link_references {
            let address =
                libraries
                    .get(library)
                    .ok_or_else(|| VerifierError::UnresolvedLibrary {
                        library: library.clone(),
                    })?;
            for &offset in offsets {
                linked[offset..offset + LINK_SLOT_LEN].copy_from_slice(address.as_slice());
            }
        }
        Ok(Bytes::from(linked))
    }
}
