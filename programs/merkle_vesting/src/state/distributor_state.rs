use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::state::{Allocation, ClaimRecord, RootRegistry, VestingSchedule};
use crate::utils::{leaf_hash, verify};

/// Distribution flavour of a distributor
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum DistributionMode {
    /// Single claim per recipient of the full merkle-committed amount
    #[default]
    Airdrop,
    /// Owner-created allocations released under the vesting schedule
    Vesting,
}

/// Operations gated by the authorization check
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrivilegedOp {
    SetMerkleRoot,
    Fund,
    RemoveFunds,
    CreateAllocation,
    DeleteAllocation,
}

/**
 * Token accounting of the pool backing a distributor
 *
 * available_balance mirrors what the vault holds for this distributor.
 * Allocation obligations (outstanding) must always be covered by it:
 *
 *   outstanding = total_vested - total_withdrawn - total_forfeited
 *   outstanding <= available_balance
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct PoolLedger {
    /// Tokens currently held for the distributor
    pub available_balance: u64,
    /// Cumulative deposits
    pub total_funded: u64,
    /// Cumulative owner removals
    pub total_removed: u64,
    /// Sum of every allocation amount ever created
    pub total_vested: u64,
    /// Sum of every vesting withdrawal
    pub total_withdrawn: u64,
    /// Closing balances released by deleted allocations
    pub total_forfeited: u64,
    /// Sum of every airdrop claim
    pub total_claimed: u64,
}

impl PoolLedger {
    /// Allocated amount not yet withdrawn or forfeited
    pub fn outstanding(&self) -> u64 {
        self.total_vested
            .saturating_sub(self.total_withdrawn)
            .saturating_sub(self.total_forfeited)
    }

    /// Balance not backing any allocation
    pub fn unallocated(&self) -> u64 {
        self.available_balance.saturating_sub(self.outstanding())
    }

    pub fn fund(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, MerkleVestingError::InvalidAmount);
        self.available_balance = self
            .available_balance
            .checked_add(amount)
            .ok_or(MerkleVestingError::ArithmeticOverflow)?;
        self.total_funded = self
            .total_funded
            .checked_add(amount)
            .ok_or(MerkleVestingError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn remove_funds(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, MerkleVestingError::InvalidAmount);
        require!(
            amount <= self.unallocated(),
            MerkleVestingError::InsufficientUnallocatedFunds
        );
        self.available_balance -= amount;
        self.total_removed = self
            .total_removed
            .checked_add(amount)
            .ok_or(MerkleVestingError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn ensure_capacity(&self, amount: u64) -> Result<()> {
        require!(amount <= self.unallocated(), MerkleVestingError::CapExceeded);
        Ok(())
    }

    /// Commits `amount` of the unallocated balance to a new allocation
    pub fn reserve(&mut self, amount: u64) -> Result<()> {
        self.ensure_capacity(amount)?;
        self.total_vested = self
            .total_vested
            .checked_add(amount)
            .ok_or(MerkleVestingError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Pays out `amount` of an allocation
    pub fn record_withdrawal(&mut self, amount: u64) -> Result<()> {
        require!(
            amount <= self.available_balance,
            MerkleVestingError::InsufficientVaultBalance
        );
        self.available_balance -= amount;
        self.total_withdrawn = self
            .total_withdrawn
            .checked_add(amount)
            .ok_or(MerkleVestingError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Releases a deleted allocation's closing balance
    pub fn forfeit(&mut self, amount: u64) -> Result<()> {
        self.total_forfeited = self
            .total_forfeited
            .checked_add(amount)
            .ok_or(MerkleVestingError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Pays out an airdrop claim
    pub fn record_claim(&mut self, amount: u64) -> Result<()> {
        require!(
            amount <= self.available_balance,
            MerkleVestingError::InsufficientVaultBalance
        );
        self.available_balance -= amount;
        self.total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(MerkleVestingError::ArithmeticOverflow)?;
        Ok(())
    }
}

/**
 * Main distributor state account
 *
 * The single aggregate every instruction works through: configuration,
 * pool accounting, vesting parameters and the merkle root log all live here
 * so pool invariants are checked in one place.
 *
 * Derivation: ["distributor", token_mint, owner, nonce]
 *
 * Lifecycle:
 * 1. Created during create_distributor
 * 2. Operator appends merkle roots round by round
 * 3. Owner funds the pool, creates or deletes allocations, removes spare funds
 * 4. Claims and withdrawals draw the pool down
 */
#[account]
#[derive(Default, Debug)]
pub struct Distributor {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation when signing vault transfers
    pub bump: u8,

    /// Nonce number for this distributor
    /// - Allows multiple distributors for the same token/owner pair
    pub nonce: u32,

    /// Owner of the distributor
    /// - Funds the pool, manages allocations, removes spare funds
    pub owner: Pubkey,

    /// Operator who registers merkle roots
    pub operator: Pubkey,

    /// Token mint address
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - PDA controlled by the distributor
    /// - Derived from: ["vault", distributor_key]
    pub token_vault: Pubkey,

    /// Airdrop or vesting
    pub mode: DistributionMode,

    /// Vesting withdrawals must pass a one-time merkle eligibility check
    pub merkle_gated: bool,

    /// Proofs are only accepted against the latest registered round
    pub latest_round_only: bool,

    /// Vesting parameters (unused in airdrop mode)
    pub schedule: VestingSchedule,

    /// Pool accounting
    pub ledger: PoolLedger,

    /// Merkle root log
    pub registry: RootRegistry,
}

impl Distributor {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Distributor>();

    /// Authorization check for privileged operations
    /// - Merkle roots belong to the operator, everything else to the owner
    pub fn is_authorized(&self, caller: &Pubkey, op: PrivilegedOp) -> bool {
        match op {
            PrivilegedOp::SetMerkleRoot => *caller == self.operator,
            PrivilegedOp::Fund
            | PrivilegedOp::RemoveFunds
            | PrivilegedOp::CreateAllocation
            | PrivilegedOp::DeleteAllocation => *caller == self.owner,
        }
    }

    pub fn require_mode(&self, mode: DistributionMode) -> Result<()> {
        require!(self.mode == mode, MerkleVestingError::WrongMode);
        Ok(())
    }

    /// Root a proof for `round` must recompute to
    pub fn root_for(&self, round: u32) -> Result<[u8; 32]> {
        let root = self.registry.get_root(round)?;
        if self.latest_round_only {
            require!(
                Some(round) == self.registry.latest_round(),
                MerkleVestingError::StaleRound
            );
        }
        Ok(root)
    }

    /// Checks that (claimant, amount) is committed in `round`
    pub fn verify_membership(
        &self,
        claimant: &Pubkey,
        amount: u64,
        proof: &[[u8; 32]],
        round: u32,
    ) -> Result<()> {
        require!(proof.len() <= MAX_PROOF_DEPTH, MerkleVestingError::InvalidInput);
        let root = self.root_for(round)?;
        require!(
            verify(proof, root, leaf_hash(claimant, amount)),
            MerkleVestingError::InvalidProof
        );
        Ok(())
    }

    /// Validates and records an airdrop claim
    ///
    /// Everything is checked before the first write. The caller transfers
    /// `amount` to the claimant afterwards in the same transaction.
    pub fn settle_claim(
        &mut self,
        record: &mut ClaimRecord,
        claimant: Pubkey,
        amount: u64,
        proof: &[[u8; 32]],
        round: u32,
        now: i64,
    ) -> Result<()> {
        self.require_mode(DistributionMode::Airdrop)?;
        require!(amount > 0, MerkleVestingError::InvalidAmount);
        record.ensure_unclaimed()?;
        self.verify_membership(&claimant, amount, proof, round)?;
        require!(
            amount <= self.ledger.available_balance,
            MerkleVestingError::InsufficientVaultBalance
        );

        record.mark_claimed(claimant, amount, round, now)?;
        self.ledger.record_claim(amount)
    }

    /// Validates and stores a new vesting allocation
    pub fn open_allocation(
        &mut self,
        allocation: &mut Allocation,
        beneficiary: Pubkey,
        label: String,
        amount: u64,
        release_on: i64,
        bump: u8,
    ) -> Result<()> {
        self.require_mode(DistributionMode::Vesting)?;
        require!(amount > 0, MerkleVestingError::InvalidAmount);
        require!(label.len() <= MAX_LABEL_LEN, MerkleVestingError::LabelTooLong);
        require!(!allocation.is_initialized(), MerkleVestingError::DuplicateAllocation);
        require!(
            release_on >= self.schedule.earliest_withdrawal_date,
            MerkleVestingError::ReleaseTooEarly
        );
        self.ledger.ensure_capacity(amount)?;

        allocation.open(beneficiary, label, amount, release_on, bump)?;
        self.ledger.reserve(amount)
    }

    /// Tombstones an allocation and releases its closing balance to the pool
    pub fn retire_allocation(&mut self, allocation: &mut Allocation) -> Result<u64> {
        self.require_mode(DistributionMode::Vesting)?;
        let forfeited = allocation.delete()?;
        self.ledger.forfeit(forfeited)?;
        Ok(forfeited)
    }

    /// Validates and records a vesting withdrawal
    ///
    /// Merkle-gated distributors check eligibility once per allocation, using
    /// the allocation amount as the committed leaf amount. The drawing-power
    /// cap is checked on every call.
    pub fn settle_withdrawal(
        &mut self,
        allocation: &mut Allocation,
        beneficiary: &Pubkey,
        amount: u64,
        proof: Option<&[[u8; 32]]>,
        round: Option<u32>,
        now: i64,
    ) -> Result<()> {
        self.require_mode(DistributionMode::Vesting)?;
        allocation.ensure_withdrawable()?;
        require_keys_eq!(allocation.beneficiary, *beneficiary, MerkleVestingError::NoAllocation);

        let gate_pending = self.merkle_gated && !allocation.eligibility_verified;
        if gate_pending {
            let (proof, round) = match (proof, round) {
                (Some(proof), Some(round)) => (proof, round),
                _ => return err!(MerkleVestingError::MissingProof),
            };
            self.verify_membership(beneficiary, allocation.amount, proof, round)?;
        }
        require!(amount > 0, MerkleVestingError::InvalidAmount);
        require!(
            amount <= allocation.drawing_power(&self.schedule, now),
            MerkleVestingError::InsufficientDrawingPower
        );
        require!(
            amount <= self.ledger.available_balance,
            MerkleVestingError::InsufficientVaultBalance
        );

        allocation.withdraw(&self.schedule, amount, now)?;
        if gate_pending {
            allocation.eligibility_verified = true;
        }
        self.ledger.record_withdrawal(amount)
    }
}
