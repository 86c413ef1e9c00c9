use anchor_lang::prelude::*;
use crate::constants::MAX_ROUNDS;
use crate::error::*;

/**
 * Versioned merkle root log
 *
 * Rounds are 1-based indices into an append-only array of roots. Registering
 * a new round never touches earlier ones, so claims proven against an older
 * commitment stay verifiable unless the distributor opts into
 * latest-round-only claims.
 *
 * Stored inline in the distributor account.
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct RootRegistry {
    /// Number of rounds registered so far (also the latest round index)
    pub round_count: u32,

    /// Root log; slot `round - 1` holds the root of `round`
    pub roots: [[u8; 32]; MAX_ROUNDS],
}

impl RootRegistry {
    /// Appends `root` as round `round`
    ///
    /// The round must be exactly the next unused index. Zero roots are
    /// rejected since no proof can reach them.
    pub fn set_root(&mut self, round: u32, root: [u8; 32]) -> Result<()> {
        require!(root != [0; 32], MerkleVestingError::InvalidMerkleRoot);

        let next_round = self
            .round_count
            .checked_add(1)
            .ok_or(MerkleVestingError::ArithmeticOverflow)?;
        require!(round == next_round, MerkleVestingError::RoundOutOfSequence);
        require!(round as usize <= MAX_ROUNDS, MerkleVestingError::RootRegistryFull);

        self.roots[(round - 1) as usize] = root;
        self.round_count = round;
        Ok(())
    }

    /// Root registered for `round`
    pub fn get_root(&self, round: u32) -> Result<[u8; 32]> {
        require!(
            round >= 1 && round <= self.round_count,
            MerkleVestingError::UnknownRound
        );
        Ok(self.roots[(round - 1) as usize])
    }

    /// Latest registered round, if any
    pub fn latest_round(&self) -> Option<u32> {
        (self.round_count > 0).then_some(self.round_count)
    }
}
