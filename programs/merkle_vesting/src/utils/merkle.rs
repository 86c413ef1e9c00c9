use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

/**
 * Merkle commitment primitives
 *
 * Shared by the on-chain verifier and the off-chain tree builder so both sides
 * hash bit-for-bit identically.
 *
 * - Leaf: sha256(claimant_pubkey ++ amount as a 32-byte big-endian word)
 * - Node: sha256(min(a, b) ++ max(a, b)), byte-lexicographic order
 *
 * Sorting each pair makes proofs independent of left/right position, so a
 * proof is just the list of sibling hashes from leaf to root.
 */

/// Width of the big-endian amount word inside a leaf
pub const AMOUNT_WORD_LEN: usize = 32;

/// Encodes an amount as a 256-bit big-endian word (zero padded)
pub fn amount_word(amount: u64) -> [u8; AMOUNT_WORD_LEN] {
    let mut word = [0u8; AMOUNT_WORD_LEN];
    word[AMOUNT_WORD_LEN - 8..].copy_from_slice(&amount.to_be_bytes());
    word
}

/// Hashes one (claimant, amount) commitment into a leaf
pub fn leaf_hash(claimant: &Pubkey, amount: u64) -> [u8; 32] {
    hashv(&[claimant.as_ref(), &amount_word(amount)]).to_bytes()
}

/// Hashes two sibling nodes into their parent
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[a, b]).to_bytes()
    } else {
        hashv(&[b, a]).to_bytes()
    }
}

/// Recomputes the root from a leaf and its sibling path
///
/// Returns true iff the recomputed root equals `root`.
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    let computed = proof
        .iter()
        .fold(leaf, |node, sibling| hash_pair(&node, sibling));
    computed == root
}
