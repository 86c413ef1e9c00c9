use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Creation parameters of a distributor
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DistributorParams {
    /// Airdrop claims or vesting allocations
    pub mode: DistributionMode,
    /// Vesting only: first withdrawal needs a merkle proof
    pub merkle_gated: bool,
    /// Reject proofs against any round but the latest
    pub latest_round_only: bool,
    /// Vesting only: seconds between creation and the earliest release date
    pub minimum_vesting_period: i64,
    /// Vesting only: amount unlocked per period
    pub withdrawal_cap: u64,
    /// Vesting only: 0 = daily, 1 = weekly
    pub withdrawal_frequency: u8,
    /// Tokens deposited into the vault at creation (may be 0)
    pub initial_funding: u64,
}

impl DistributorParams {
    /// Validates the parameters and derives the vesting schedule
    ///
    /// Airdrop distributors carry an empty schedule.
    pub fn schedule(&self, now: i64) -> Result<VestingSchedule> {
        match self.mode {
            DistributionMode::Airdrop => {
                require!(!self.merkle_gated, MerkleVestingError::InvalidInput);
                Ok(VestingSchedule::default())
            }
            DistributionMode::Vesting => VestingSchedule::new(
                self.minimum_vesting_period,
                self.withdrawal_cap,
                WithdrawalFrequency::from_code(self.withdrawal_frequency)?,
                now,
            ),
        }
    }
}

/**
 * Account context for creating a new distributor
 *
 * This instruction initializes a new distributor with automatic nonce management:
 * - Creates or updates a nonce state PDA to track nonce numbers
 * - Creates a distributor PDA with auto-incremented nonce number
 * - Creates a token vault PDA to hold the pool
 * - Optionally transfers initial funding from owner to the vault
 *
 * Access Control: The signer becomes the owner
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateDistributor<'info> {
    /// Nonce state account (PDA) that tracks nonce numbers for this owner
    /// - Derived from: ["owner_nonce", owner]
    #[account(
        init_if_needed,
        payer = owner,
        space = NonceState::LEN,
        seeds = [OWNER_NONCE_SEED.as_bytes(), owner.key().as_ref()],
        bump
    )]
    pub owner_nonce: Account<'info, NonceState>,

    /// The main distributor account (PDA)
    /// - Derived from: ["distributor", token_mint, owner, current_nonce]
    /// - Nonce is automatically determined from owner_nonce.nonce + 1
    #[account(
        init,
        payer = owner,
        space = Distributor::LEN,
        seeds = [
            DISTRIBUTOR_SEED.as_bytes(),
            token_mint.key().as_ref(),
            owner.key().as_ref(),
            (owner_nonce.nonce + 1).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub distributor: Account<'info, Distributor>,

    /// Token vault account (PDA) holding the pool
    /// - Controlled by the distributor PDA as token authority
    /// - Derived from: ["vault", distributor_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = distributor,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint being distributed
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Owner's token account funding the vault
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The owner of the distributor
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The operator account that registers merkle roots
    /// CHECK: This account is validated by storing its key in the distributor state
    pub operator: AccountInfo<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent exemption calculations
    pub rent: Sysvar<'info, Rent>,
}

/**
 * Creates a new distributor with automatic nonce management
 *
 * @param ctx - The account context containing all required accounts
 * @param params - Mode, vesting parameters and initial funding
 *
 * Vesting distributors start their clock now: the earliest release date of
 * any allocation is now + minimum_vesting_period.
 */
pub fn handle_create_distributor(
    ctx: Context<CreateDistributor>,
    params: DistributorParams,
) -> Result<()> {
    // Validate operator is not empty account
    require!(
        ctx.accounts.operator.key() != Pubkey::default(),
        MerkleVestingError::InvalidOperator
    );

    let current_time = Clock::get()?.unix_timestamp;
    let schedule = params.schedule(current_time)?;

    let owner_nonce = &mut ctx.accounts.owner_nonce;
    let distributor = &mut ctx.accounts.distributor;

    let current_nonce = owner_nonce.advance()?;

    distributor.bump = ctx.bumps.distributor;
    distributor.nonce = current_nonce;
    distributor.owner = ctx.accounts.owner.key();
    distributor.operator = ctx.accounts.operator.key();
    distributor.token_mint = ctx.accounts.token_mint.key();
    distributor.token_vault = ctx.accounts.token_vault.key();
    distributor.mode = params.mode;
    distributor.merkle_gated = params.merkle_gated;
    distributor.latest_round_only = params.latest_round_only;
    distributor.schedule = schedule;
    // Note: ledger and registry start empty (default values)

    if params.initial_funding > 0 {
        distributor.ledger.fund(params.initial_funding)?;

        transfer_token(
            ctx.accounts.owner.to_account_info(),
            ctx.accounts.owner_token_account.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            params.initial_funding,
            ctx.accounts.token_mint.decimals,
            None, // No signer seeds needed for owner-signed transfer
        )?;
    }

    emit_cpi!(DistributorCreated {
        distributor: distributor.key(),
        nonce: current_nonce,
        owner: ctx.accounts.owner.key(),
        operator: ctx.accounts.operator.key(),
        token_mint: ctx.accounts.token_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
        vesting: params.mode == DistributionMode::Vesting,
        earliest_withdrawal_date: schedule.earliest_withdrawal_date,
        initial_funding: params.initial_funding,
    });

    Ok(())
}
