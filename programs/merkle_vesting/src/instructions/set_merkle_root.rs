use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;

/**
 * Account context for registering a merkle root
 *
 * This instruction allows the designated operator to append the root of a
 * new distribution round. Each leaf of the tree commits one
 * (claimant, amount) pair; claimants prove membership against the root of
 * the round they name.
 *
 * Access Control: Only the operator can register roots
 *
 * Business Logic:
 * - Rounds are append-only: round N+1 can only follow round N
 * - Registered roots are never overwritten, keeping every commitment auditable
 * - A recipient change means building a new tree and registering a new round
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetMerkleRoot<'info> {
    /// The distributor whose root log is extended
    #[account(mut)]
    pub distributor: Account<'info, Distributor>,

    /// The operator who can register roots
    /// - Must match the operator stored in the distributor state
    #[account(
        constraint = distributor.is_authorized(&operator.key(), PrivilegedOp::SetMerkleRoot)
            @ MerkleVestingError::Unauthorized
    )]
    pub operator: Signer<'info>,
}

/**
 * Registers the merkle root of a distribution round
 *
 * @param ctx - The account context containing distributor and operator accounts
 * @param round - Round index, must be the next unused one (rounds start at 1)
 * @param merkle_root - 32-byte root of the round's tree
 *
 * Merkle Tree Structure:
 * - Each leaf: hash(claimant_pubkey + amount as 32-byte big-endian word)
 * - Intermediate nodes: hash(min(a, b) + max(a, b))
 * - Odd nodes are promoted to the next level unchanged
 */
pub fn handle_set_merkle_root(
    ctx: Context<SetMerkleRoot>,
    round: u32,
    merkle_root: [u8; 32],
) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;

    distributor.registry.set_root(round, merkle_root)?;

    emit_cpi!(MerkleRootSet {
        distributor: distributor.key(),
        operator: ctx.accounts.operator.key(),
        round,
        merkle_root,
    });

    Ok(())
}
