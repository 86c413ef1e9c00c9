use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::transfer_token;
use crate::event::*;

/**
 * Account context for removing unallocated funds
 *
 * This instruction allows the owner to take back tokens that do not back
 * any allocation. Funds still owed to beneficiaries stay in the vault.
 *
 * Access Control: Only the owner can remove funds
 *
 * Business Logic:
 * - amount must not exceed available_balance - outstanding allocations
 * - Allocation obligations stay fully covered after the removal
 */
#[event_cpi]
#[derive(Accounts)]
pub struct RemoveFunds<'info> {
    #[account(mut)]
    pub distributor: Account<'info, Distributor>,

    /// Token vault the funds leave from
    /// - Derived from: ["vault", distributor_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Owner's token account receiving the funds
    #[account(
        mut,
        token::mint = distributor.token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.token_mint @ MerkleVestingError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    #[account(
        constraint = distributor.is_authorized(&owner.key(), PrivilegedOp::RemoveFunds)
            @ MerkleVestingError::Unauthorized
    )]
    pub owner: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Removes unallocated tokens from the pool
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Amount to return to the owner
 */
pub fn handle_remove_funds(ctx: Context<RemoveFunds>, amount: u64) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;

    // ===== VALIDATION + EFFECTS PHASE =====

    distributor.ledger.remove_funds(amount)?;

    let nonce_bytes = distributor.nonce.to_le_bytes();
    let token_mint_key = distributor.token_mint;
    let owner_key = distributor.owner;
    let distributor_bump = distributor.bump;
    let distributor_key = distributor.key();
    let available_balance = distributor.ledger.available_balance;

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    let seeds = &[
        DISTRIBUTOR_SEED.as_bytes(),
        token_mint_key.as_ref(),
        owner_key.as_ref(),
        nonce_bytes.as_ref(),
        &[distributor_bump],
    ];
    let signer = &[&seeds[..]];

    transfer_token(
        ctx.accounts.distributor.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.owner_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        Some(signer),
    )?;

    emit_cpi!(FundsRemoved {
        distributor: distributor_key,
        owner: ctx.accounts.owner.key(),
        amount,
        available_balance,
    });

    Ok(())
}
