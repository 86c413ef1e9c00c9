use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenInterface, TokenAccount};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::transfer_token;
use crate::event::*;

/**
 * Account context for withdrawing vested tokens
 *
 * This instruction allows a beneficiary to draw down their allocation up to
 * the current drawing power.
 *
 * Access Control: Beneficiary only (enforced by PDA seeds)
 *
 * Business Logic:
 * - Drawing power = min(amount, periods_elapsed * withdrawal_cap) - withdrawn
 * - Unused capacity of earlier periods carries forward
 * - Merkle-gated distributors require a proof for (beneficiary, allocation amount)
 *   on the first withdrawal only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub distributor: Account<'info, Distributor>,

    /// Allocation of the beneficiary
    /// - Derived from: ["allocation", distributor_key, beneficiary_key]
    /// CHECK: May be uninitialised; Allocation::load reports NoAllocation in that case
    #[account(
        mut,
        seeds = [ALLOCATION_SEED.as_bytes(), distributor.key().as_ref(), beneficiary.key().as_ref()],
        bump
    )]
    pub allocation: UncheckedAccount<'info>,

    /// Token vault holding the pool
    /// - Derived from: ["vault", distributor_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Beneficiary's token account to receive the tokens
    #[account(
        mut,
        token::mint = distributor.token_mint,
        token::authority = beneficiary,
        token::token_program = token_program,
    )]
    pub beneficiary_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.token_mint @ MerkleVestingError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    pub beneficiary: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Withdraws vested tokens
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Amount to withdraw, at most the current drawing power
 * @param proof - Merkle proof of (beneficiary, allocation amount); gated first withdrawal only
 * @param round - Round the proof refers to; gated first withdrawal only
 */
pub fn handle_withdraw(
    ctx: Context<Withdraw>,
    amount: u64,
    proof: Option<Vec<[u8; 32]>>,
    round: Option<u32>,
) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    let beneficiary = ctx.accounts.beneficiary.key();
    let allocation_info = ctx.accounts.allocation.to_account_info();

    // ===== VALIDATION + EFFECTS PHASE =====

    let mut allocation = Allocation::load(&allocation_info)?;
    let current_time = Clock::get()?.unix_timestamp;

    distributor.settle_withdrawal(
        &mut allocation,
        &beneficiary,
        amount,
        proof.as_deref(),
        round,
        current_time,
    )?;
    allocation.store(&allocation_info)?;

    let nonce_bytes = distributor.nonce.to_le_bytes();
    let token_mint_key = distributor.token_mint;
    let owner_key = distributor.owner;
    let distributor_bump = distributor.bump;
    let distributor_key = distributor.key();

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
        ctx.accounts.beneficiary_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        Some(signer),
    )?;

    emit_cpi!(VestingWithdrawn {
        distributor: distributor_key,
        beneficiary,
        amount,
        closing_balance: allocation.closing_balance,
        withdrawn_on: current_time,
    });

    Ok(())
}
