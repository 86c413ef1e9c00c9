use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::event::*;

/**
 * Account context for deleting a vesting allocation
 *
 * Deletion is a tombstone: the account and its withdrawal history stay, the
 * beneficiary can no longer withdraw, and the closing balance returns to the
 * unallocated pool.
 *
 * Access Control: Owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct DeleteAllocation<'info> {
    #[account(mut)]
    pub distributor: Account<'info, Distributor>,

    /// Allocation to tombstone
    /// - Derived from: ["allocation", distributor_key, beneficiary_key]
    /// CHECK: May be uninitialised; Allocation::load reports NoAllocation in that case
    #[account(
        mut,
        seeds = [ALLOCATION_SEED.as_bytes(), distributor.key().as_ref(), beneficiary.key().as_ref()],
        bump
    )]
    pub allocation: UncheckedAccount<'info>,

    /// CHECK: Used for PDA derivation only
    pub beneficiary: UncheckedAccount<'info>,

    #[account(
        constraint = distributor.is_authorized(&owner.key(), PrivilegedOp::DeleteAllocation)
            @ MerkleVestingError::Unauthorized
    )]
    pub owner: Signer<'info>,
}

pub fn handle_delete_allocation(ctx: Context<DeleteAllocation>) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    let allocation_info = ctx.accounts.allocation.to_account_info();

    let mut allocation = Allocation::load(&allocation_info)?;
    let forfeited = distributor.retire_allocation(&mut allocation)?;
    allocation.store(&allocation_info)?;

    emit_cpi!(AllocationDeleted {
        distributor: distributor.key(),
        beneficiary: allocation.beneficiary,
        forfeited,
    });

    Ok(())
}
