use serde::{Deserialize, Serialize};

use crate::error::{Result, TreeError};
use crate::source::Recipient;
use crate::tree::{build, ProofIndex};

/// Published output of a generation run
///
/// ```json
/// {
///   "root": "0x…",
///   "tree": { "recipients": [{ "address": "…", "amount": 1 }], "layers": [["0x…"]] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionArtifact {
    pub root: String,
    pub tree: ArtifactTree,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactTree {
    pub recipients: Vec<Recipient>,
    /// Hex digests per level, leaves first
    pub layers: Vec<Vec<String>>,
}

impl DistributionArtifact {
    pub fn from_index(index: &ProofIndex) -> Self {
        Self {
            root: encode_hash(&index.root()),
            tree: ArtifactTree {
                recipients: index.recipients().to_vec(),
                layers: index
                    .layers()
                    .iter()
                    .map(|layer| layer.iter().map(encode_hash).collect())
                    .collect(),
            },
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Root as the 32 bytes passed to set_merkle_root
    pub fn root_bytes(&self) -> Result<[u8; 32]> {
        decode_hash(&self.root)
    }

    /// Rebuilds the proof index, refusing artifacts whose stored tree
    /// disagrees with what the recipients hash to
    pub fn into_index(self) -> Result<ProofIndex> {
        let expected = self.root_bytes()?;
        let (computed, index) = build(&self.tree.recipients)?;

        let layers_match = self.tree.layers.len() == index.layers().len()
            && self
                .tree
                .layers
                .iter()
                .zip(index.layers())
                .all(|(stored, built)| {
                    stored.len() == built.len()
                        && stored
                            .iter()
                            .zip(built)
                            .all(|(hex, hash)| decode_hash(hex).map_or(false, |h| h == *hash))
                });

        if computed != expected || !layers_match {
            return Err(TreeError::RootMismatch {
                expected: self.root,
                computed: encode_hash(&computed),
            });
        }
        Ok(index)
    }
}

pub fn encode_hash(hash: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(hash))
}

pub fn decode_hash(text: &str) -> Result<[u8; 32]> {
    let digits = text.strip_prefix("0x").unwrap_or(text);
    let mut hash = [0u8; 32];
    hex::decode_to_slice(digits, &mut hash)?;
    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::prelude::Pubkey;

    fn index() -> ProofIndex {
        let recipients: Vec<Recipient> = (1..=5u8)
            .map(|i| Recipient::new(Pubkey::new_from_array([i; 32]), 250 * i as u64))
            .collect();
        build(&recipients).unwrap().1
    }

    #[test]
    fn test_hash_hex() {
        let hash = [0xABu8; 32];
        let text = encode_hash(&hash);
        assert!(text.starts_with("0xabab"));
        assert_eq!(text.len(), 66);
        assert_eq!(decode_hash(&text).unwrap(), hash);
        assert_eq!(decode_hash(&text[2..]).unwrap(), hash);
        assert!(matches!(decode_hash("0x1234"), Err(TreeError::Hex(_))));
        assert!(matches!(decode_hash("0xzz"), Err(TreeError::Hex(_))));
    }

    #[test]
    fn test_artifact_reload() {
        let index = index();
        let artifact = DistributionArtifact::from_index(&index);
        assert_eq!(artifact.root_bytes().unwrap(), index.root());

        let json = artifact.to_json().unwrap();
        let reloaded = DistributionArtifact::from_json(&json).unwrap();
        assert_eq!(reloaded, artifact);

        let rebuilt = reloaded.into_index().unwrap();
        assert_eq!(rebuilt, index);
        let first = index.recipients()[0];
        assert_eq!(rebuilt.proof_for(&first).unwrap(), index.proof_for(&first).unwrap());
    }

    #[test]
    fn test_tampered_recipient_is_rejected() {
        let mut artifact = DistributionArtifact::from_index(&index());
        artifact.tree.recipients[2].amount += 1;
        assert!(matches!(artifact.into_index(), Err(TreeError::RootMismatch { .. })));
    }

    #[test]
    fn test_tampered_layer_is_rejected() {
        let mut artifact = DistributionArtifact::from_index(&index());
        artifact.tree.layers[1][0] = encode_hash(&[0u8; 32]);
        assert!(matches!(artifact.into_index(), Err(TreeError::RootMismatch { .. })));
    }

    #[test]
    fn test_wrong_root_is_rejected() {
        let mut artifact = DistributionArtifact::from_index(&index());
        artifact.root = encode_hash(&[7u8; 32]);
        assert!(matches!(artifact.into_index(), Err(TreeError::RootMismatch { .. })));
    }
}
