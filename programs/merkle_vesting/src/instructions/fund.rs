use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::transfer_token;
use crate::event::*;

/**
 * Account context for funding the pool
 *
 * Moves tokens from the owner into the distributor vault. Allocations can
 * only be created against funded, unallocated balance.
 *
 * Access Control: Owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Fund<'info> {
    #[account(mut)]
    pub distributor: Account<'info, Distributor>,

    /// Token vault receiving the deposit
    /// - Derived from: ["vault", distributor_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Owner's token account the deposit comes from
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
        constraint = distributor.is_authorized(&owner.key(), PrivilegedOp::Fund)
            @ MerkleVestingError::Unauthorized
    )]
    pub owner: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;

    distributor.ledger.fund(amount)?;
    let available_balance = distributor.ledger.available_balance;
    let distributor_key = distributor.key();

    transfer_token(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.owner_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        None, // Owner signs the deposit
    )?;

    emit_cpi!(PoolFunded {
        distributor: distributor_key,
        owner: ctx.accounts.owner.key(),
        amount,
        available_balance,
    });

    Ok(())
}
