use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Timing, capacity and PDA seed values shared by every instruction of the
 * merkle vesting program.
 */

#[constant]
/// ===== TIMING CONSTANTS =====

/// Length of one day in seconds
/// - Base unit of the withdrawal frequency codes
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Withdrawal frequency code for a daily period
pub const FREQUENCY_DAILY: u8 = 0;

/// Withdrawal frequency code for a weekly period (7 days)
pub const FREQUENCY_WEEKLY: u8 = 1;

/// ===== CAPACITY CONSTANTS =====

/// Number of merkle rounds a distributor can register
/// - Rounds are 1-based indices into the root log
pub const MAX_ROUNDS: usize = 16;

/// Maximum byte length of an allocation label
pub const MAX_LABEL_LEN: usize = 32;

/// Maximum number of sibling hashes accepted in a proof
/// - A tree of depth 32 already covers 2^32 recipients
pub const MAX_PROOF_DEPTH: usize = 32;

/// ===== PDA SEED CONSTANTS =====

/// Seed for owner nonce PDA derivation
/// - Used in: ["owner_nonce", owner]
/// - Lets one owner run several distributors for the same mint
pub const OWNER_NONCE_SEED: &str = "owner_nonce";

/// Seed for distributor PDA derivation
/// - Used in: ["distributor", token_mint, owner, nonce]
pub const DISTRIBUTOR_SEED: &str = "distributor";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", distributor_key]
/// - The vault is controlled by the distributor PDA
pub const VAULT_SEED: &str = "vault";

/// Seed for airdrop claim record PDA derivation
/// - Used in: ["claim", distributor_key, claimant_key]
/// - One record per (distributor, claimant); never closed so a claim cannot repeat
pub const CLAIM_SEED: &str = "claim";

/// Seed for vesting allocation PDA derivation
/// - Used in: ["allocation", distributor_key, beneficiary_key]
/// - Deleted allocations keep their account, blocking re-creation
pub const ALLOCATION_SEED: &str = "allocation";
