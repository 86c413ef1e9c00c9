//! Merkle Vesting Tree
//!
//! Off-chain builder for the commitments registered with the merkle_vesting
//! program. Leaves and parent nodes are hashed with the program's own
//! functions, so every proof produced here verifies on-chain.
//!
//! ## Usage
//!
//! ```no_run
//! use merkle_vesting_tree::{generate, AllocationSource};
//!
//! let source = AllocationSource::from_json(r#"{
//!     "decimals": 6,
//!     "airdrop": { "3gmBN8LBomg3sZEjTgp2YsECMYgJpjcT7xUfpnDB4gSs": 100 }
//! }"#)?;
//! let artifact = generate(&source)?;
//! let root = artifact.root_bytes()?; // argument of set_merkle_root
//! # Ok::<(), merkle_vesting_tree::TreeError>(())
//! ```

mod artifact;
mod error;
mod source;
mod tree;

pub use artifact::{decode_hash, encode_hash, ArtifactTree, DistributionArtifact};
pub use error::{Result, TreeError};
pub use source::{parse_address, scale_amount, AllocationSource, Recipient, DEFAULT_DECIMALS};
pub use tree::{build, ProofIndex};

use tracing::info;

/// Parses `source`, builds its tree and packages the published artifact
pub fn generate(source: &AllocationSource) -> Result<DistributionArtifact> {
    let recipients = source.recipients()?;
    let (root, index) = build(&recipients)?;
    info!(
        recipients = recipients.len(),
        decimals = source.decimals,
        root = %encode_hash(&root),
        "generated merkle root"
    );
    Ok(DistributionArtifact::from_index(&index))
}
