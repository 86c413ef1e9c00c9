use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenInterface, TokenAccount};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::transfer_token;
use crate::event::*;

/**
 * Account context for claiming an airdrop
 *
 * This instruction lets an eligible claimant take their full merkle-committed
 * amount exactly once. The proof is checked against the root of the round the
 * claimant names.
 *
 * Access Control: Any user with a valid merkle proof can claim their tokens
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The distributor holding the root log and pool accounting
    #[account(mut)]
    pub distributor: Account<'info, Distributor>,

    /// Claim record for this claimant
    /// - Derived from: ["claim", distributor_key, claimant_key]
    /// - Created on the first attempt, never closed
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimRecord::LEN,
        seeds = [CLAIM_SEED.as_bytes(), distributor.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    /// Token vault holding the pool
    /// - Derived from: ["vault", distributor_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the tokens
    #[account(
        mut,
        token::mint = distributor.token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.token_mint @ MerkleVestingError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The claimant
    /// - Must sign the transaction
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes an airdrop claim
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Amount committed to the claimant in the merkle tree
 * @param proof - Sibling hashes from the claimant's leaf to the root
 * @param round - Round whose root the proof recomputes to
 *
 * Validation Process:
 * 1. Amount must be non-zero
 * 2. Claimant must not have claimed before
 * 3. Merkle proof for (claimant, amount) must match the round's root
 * 4. The pool must cover the amount
 *
 * The claim record is marked before the transfer; a failed transfer reverts both.
 */
pub fn handle_claim(
    ctx: Context<Claim>,
    amount: u64,
    proof: Vec<[u8; 32]>,
    round: u32,
) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    let claim_record = &mut ctx.accounts.claim_record;
    let claimant = ctx.accounts.claimant.key();

    // ===== VALIDATION + EFFECTS PHASE =====

    let current_time = Clock::get()?.unix_timestamp;
    distributor.settle_claim(claim_record, claimant, amount, &proof, round, current_time)?;

    let nonce_bytes = distributor.nonce.to_le_bytes();
    let token_mint_key = distributor.token_mint;
    let owner_key = distributor.owner;
    let distributor_bump = distributor.bump;
    let distributor_key = distributor.key();
    let total_claimed = distributor.ledger.total_claimed;

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
        ctx.accounts.claimant_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        Some(signer),
    )?;

    emit_cpi!(TokensClaimed {
        distributor: distributor_key,
        claimant,
        round,
        amount,
        total_claimed,
    });

    Ok(())
}
