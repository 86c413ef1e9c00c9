use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::event::*;

/**
 * Account context for creating a vesting allocation
 *
 * Access Control: Owner only
 *
 * Business Logic:
 * - One allocation per beneficiary, ever; deleted allocations still block re-creation
 * - release_on must not precede the distributor's earliest withdrawal date
 * - The amount must fit in the pool's unallocated balance
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateAllocation<'info> {
    #[account(mut)]
    pub distributor: Account<'info, Distributor>,

    /// Allocation record for the beneficiary
    /// - Derived from: ["allocation", distributor_key, beneficiary_key]
    /// - init_if_needed so an existing record surfaces as DuplicateAllocation
    #[account(
        init_if_needed,
        payer = owner,
        space = Allocation::LEN,
        seeds = [ALLOCATION_SEED.as_bytes(), distributor.key().as_ref(), beneficiary.key().as_ref()],
        bump
    )]
    pub allocation: Account<'info, Allocation>,

    /// Beneficiary of the allocation
    /// CHECK: Only its key is stored; the beneficiary signs withdrawals later
    pub beneficiary: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = distributor.is_authorized(&owner.key(), PrivilegedOp::CreateAllocation)
            @ MerkleVestingError::Unauthorized
    )]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/**
 * Creates a vesting allocation
 *
 * @param ctx - The account context containing all required accounts
 * @param label - Human readable name of the allocation (max 32 bytes)
 * @param amount - Total amount allocated to the beneficiary
 * @param release_on - Unix timestamp at which the first period unlocks
 */
pub fn handle_create_allocation(
    ctx: Context<CreateAllocation>,
    label: String,
    amount: u64,
    release_on: i64,
) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    let allocation = &mut ctx.accounts.allocation;
    let beneficiary = ctx.accounts.beneficiary.key();

    distributor.open_allocation(
        allocation,
        beneficiary,
        label.clone(),
        amount,
        release_on,
        ctx.bumps.allocation,
    )?;

    emit_cpi!(AllocationCreated {
        distributor: distributor.key(),
        beneficiary,
        label,
        amount,
        release_on,
        total_vested: distributor.ledger.total_vested,
    });

    Ok(())
}
