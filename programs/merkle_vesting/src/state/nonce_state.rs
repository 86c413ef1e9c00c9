use anchor_lang::prelude::*;
use crate::error::*;

/**
 * Nonce state account
 *
 * Tracks the distributor counter of each owner so every new distributor gets
 * a fresh PDA without the caller choosing a nonce.
 *
 * Derivation: ["owner_nonce", owner]
 *
 * Lifecycle:
 * 1. Created on the owner's first create_distributor (using init_if_needed)
 * 2. Incremented with each new distributor
 */
#[account]
#[derive(Default, Debug)]
pub struct NonceState {
    /// Nonce of the owner's most recent distributor
    pub nonce: u32,
}

impl NonceState {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<NonceState>();

    /// Nonce the next distributor will be derived with
    pub fn next_nonce(&self) -> Result<u32> {
        self.nonce
            .checked_add(1)
            .ok_or_else(|| error!(MerkleVestingError::ArithmeticOverflow))
    }

    /// Consumes the next nonce
    pub fn advance(&mut self) -> Result<u32> {
        let nonce = self.next_nonce()?;
        self.nonce = nonce;
        Ok(nonce)
    }
}
