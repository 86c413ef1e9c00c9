use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::constants::*;

/**
 * Account context for reading a beneficiary's drawing power
 *
 * Read-only: nothing is written and no signature is required.
 */
#[derive(Accounts)]
pub struct DrawingPower<'info> {
    pub distributor: Account<'info, Distributor>,

    /// CHECK: May be uninitialised; Allocation::load reports NoAllocation in that case
    #[account(
        seeds = [ALLOCATION_SEED.as_bytes(), distributor.key().as_ref(), beneficiary.key().as_ref()],
        bump
    )]
    pub allocation: UncheckedAccount<'info>,

    /// CHECK: Used for PDA derivation only
    pub beneficiary: UncheckedAccount<'info>,
}

/**
 * Returns the amount the beneficiary could withdraw right now
 *
 * The value is delivered as instruction return data.
 */
pub fn handle_drawing_power(ctx: Context<DrawingPower>) -> Result<u64> {
    let distributor = &ctx.accounts.distributor;
    distributor.require_mode(DistributionMode::Vesting)?;

    let allocation = Allocation::load(&ctx.accounts.allocation.to_account_info())?;
    require!(allocation.is_initialized(), MerkleVestingError::NoAllocation);

    let current_time = Clock::get()?.unix_timestamp;
    Ok(allocation.drawing_power(&distributor.schedule, current_time))
}
