use anchor_lang::prelude::*;
use crate::error::*;

/**
 * Airdrop claim record account
 *
 * Tracks whether a claimant has taken their airdrop from a distributor.
 *
 * Derivation: ["claim", distributor_key, claimant_key]
 *
 * Lifecycle:
 * 1. Created on first claim (using init_if_needed)
 * 2. Marked claimed in the same transaction as the token transfer
 * 3. Never closed, so the claimed flag survives root rotations
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimRecord {
    /// Claimant this record belongs to
    pub claimant: Pubkey,

    /// Set exactly once, on the first successful claim
    pub claimed: bool,

    /// Amount transferred by the claim
    pub amount: u64,

    /// Round whose root the proof was checked against
    pub round: u32,

    /// Unix timestamp of the claim
    pub claimed_at: i64,
}

impl ClaimRecord {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimRecord>();

    pub fn ensure_unclaimed(&self) -> Result<()> {
        require!(!self.claimed, MerkleVestingError::AlreadyClaimed);
        Ok(())
    }

    pub fn mark_claimed(&mut self, claimant: Pubkey, amount: u64, round: u32, now: i64) -> Result<()> {
        self.ensure_unclaimed()?;
        self.claimant = claimant;
        self.claimed = true;
        self.amount = amount;
        self.round = round;
        self.claimed_at = now;
        Ok(())
    }
}
