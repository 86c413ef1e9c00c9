use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Merkle Vesting Program
 *
 * A Solana program that releases a fixed token pool to a pre-committed set of
 * recipients. Membership is proven against merkle roots; vested funds unlock
 * period by period under a per-period cap.
 *
 * Key Features:
 * - Merkle tree-based claim verification with sorted-pair hashing
 * - Versioned, append-only merkle rounds (root rotation keeps old rounds valid)
 * - Airdrop mode: one claim per recipient of the committed amount
 * - Vesting mode: owner-created allocations with capped periodic release
 * - Optional merkle gate in vesting mode, checked on the first withdrawal
 * - Pool accounting that keeps every allocation fully funded
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Nonce State PDA: Tracks nonce counter for each owner
 * - Distributor PDA: Configuration, pool ledger, vesting schedule, root log
 * - Token Vault PDA: Holds the pool
 * - Claim Record PDAs: One per airdrop claimant
 * - Allocation PDAs: One per vesting beneficiary
 *
 * Workflow:
 * 1. Owner creates a distributor (airdrop or vesting) and funds it
 * 2. Operator registers merkle roots round by round
 * 3. Airdrop: claimants claim with proofs
 * 4. Vesting: owner creates allocations, beneficiaries withdraw over time
 * 5. Owner removes any unallocated surplus
 */
#[program]
pub mod merkle_vesting {
    use super::*;

    /**
     * Creates a new distributor
     *
     * @param ctx - Account context containing distributor, vault, counter, and owner accounts
     * @param params - Mode, vesting parameters and optional initial funding
     *
     * Access Control: The signer becomes the owner
     */
    pub fn create_distributor(ctx: Context<CreateDistributor>, params: DistributorParams) -> Result<()> {
        handle_create_distributor(ctx, params)
    }

    /**
     * Registers the merkle root of the next round
     *
     * @param ctx - Account context containing distributor and operator accounts
     * @param round - Next unused round index (rounds start at 1)
     * @param merkle_root - 32-byte root of the round's tree
     *
     * Access Control: Operator only
     */
    pub fn set_merkle_root(ctx: Context<SetMerkleRoot>, round: u32, merkle_root: [u8; 32]) -> Result<()> {
        handle_set_merkle_root(ctx, round, merkle_root)
    }

    /**
     * Claims an airdrop with merkle proof verification
     *
     * @param ctx - Account context containing distributor, claim record, and token accounts
     * @param amount - Amount committed to the claimant in the round's tree
     * @param proof - Sibling hashes from the leaf to the root
     * @param round - Round whose root the proof recomputes to
     *
     * Access Control: Any user with a valid merkle proof
     */
    pub fn claim(ctx: Context<Claim>, amount: u64, proof: Vec<[u8; 32]>, round: u32) -> Result<()> {
        handle_claim(ctx, amount, proof, round)
    }

    /**
     * Deposits tokens into the pool
     *
     * Access Control: Owner only
     */
    pub fn fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
        handle_fund(ctx, amount)
    }

    /**
     * Takes unallocated tokens back out of the pool
     *
     * Access Control: Owner only
     */
    pub fn remove_funds(ctx: Context<RemoveFunds>, amount: u64) -> Result<()> {
        handle_remove_funds(ctx, amount)
    }

    /**
     * Creates a vesting allocation for a beneficiary
     *
     * @param label - Human readable name (max 32 bytes)
     * @param amount - Total amount allocated
     * @param release_on - Unix timestamp of the first unlock
     *
     * Access Control: Owner only
     */
    pub fn create_allocation(
        ctx: Context<CreateAllocation>,
        label: String,
        amount: u64,
        release_on: i64,
    ) -> Result<()> {
        handle_create_allocation(ctx, label, amount, release_on)
    }

    /**
     * Tombstones a vesting allocation
     *
     * Access Control: Owner only
     */
    pub fn delete_allocation(ctx: Context<DeleteAllocation>) -> Result<()> {
        handle_delete_allocation(ctx)
    }

    /**
     * Withdraws vested tokens up to the current drawing power
     *
     * @param amount - Amount to withdraw
     * @param proof - Merkle proof, required for the first withdrawal of a gated distributor
     * @param round - Round of the proof
     *
     * Access Control: Beneficiary only
     */
    pub fn withdraw(
        ctx: Context<Withdraw>,
        amount: u64,
        proof: Option<Vec<[u8; 32]>>,
        round: Option<u32>,
    ) -> Result<()> {
        handle_withdraw(ctx, amount, proof, round)
    }

    /**
     * Returns a beneficiary's current drawing power as return data
     */
    pub fn drawing_power(ctx: Context<DrawingPower>) -> Result<u64> {
        handle_drawing_power(ctx)
    }
}
