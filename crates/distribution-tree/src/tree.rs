use merkle_vesting::utils::hash_pair;
use tracing::debug;

use crate::error::{Result, TreeError};
use crate::source::Recipient;

/// Every level of a built tree, leaves first
///
/// Levels are reduced pairwise with the program's sorted-pair hash. A node
/// left without a sibling is carried up unchanged, so its proof simply has no
/// entry for that level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofIndex {
    recipients: Vec<Recipient>,
    layers: Vec<Vec<[u8; 32]>>,
}

/// Builds the commitment over `recipients` in the given order
///
/// Duplicate entries each get their own leaf.
pub fn build(recipients: &[Recipient]) -> Result<([u8; 32], ProofIndex)> {
    if recipients.is_empty() {
        return Err(TreeError::EmptyInput);
    }

    let leaves: Vec<[u8; 32]> = recipients.iter().map(Recipient::leaf).collect();
    let mut layers = vec![leaves];
    loop {
        let current = &layers[layers.len() - 1];
        if current.len() == 1 {
            break;
        }
        let next: Vec<[u8; 32]> = current
            .chunks(2)
            .map(|pair| match pair {
                [left, right] => hash_pair(left, right),
                [single] => *single,
                _ => unreachable!("chunks(2) yields one or two nodes"),
            })
            .collect();
        layers.push(next);
    }

    let index = ProofIndex {
        recipients: recipients.to_vec(),
        layers,
    };
    debug!(
        leaves = recipients.len(),
        depth = index.depth(),
        "built distribution tree"
    );
    Ok((index.root(), index))
}

impl ProofIndex {
    pub fn root(&self) -> [u8; 32] {
        // build() never produces an empty top layer
        self.layers[self.layers.len() - 1][0]
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    pub fn layers(&self) -> &[Vec<[u8; 32]>] {
        &self.layers
    }

    /// Number of hashing levels above the leaves
    pub fn depth(&self) -> usize {
        self.layers.len() - 1
    }

    /// First leaf position of `recipient`
    pub fn position(&self, recipient: &Recipient) -> Option<usize> {
        self.recipients.iter().position(|r| r == recipient)
    }

    /// Sibling digests from the recipient's leaf up to the root
    pub fn proof_for(&self, recipient: &Recipient) -> Result<Vec<[u8; 32]>> {
        let index = self.position(recipient).ok_or_else(|| {
            TreeError::UnknownRecipient(format!("{} ({})", recipient.address, recipient.amount))
        })?;
        Ok(self.proof_at(index))
    }

    fn proof_at(&self, index: usize) -> Vec<[u8; 32]> {
        let mut proof = Vec::with_capacity(self.depth());
        let mut current = index;
        for layer in &self.layers[..self.depth()] {
            let sibling = current ^ 1;
            if sibling < layer.len() {
                proof.push(layer[sibling]);
            }
            current /= 2;
        }
        proof
    }
}
