use anchor_lang::prelude::*;
use crate::constants::MAX_LABEL_LEN;
use crate::error::*;
use crate::state::VestingSchedule;

/// Tombstone state of an allocation
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum AllocationStatus {
    #[default]
    Active,
    Deleted,
}

/**
 * Vesting allocation account
 *
 * One account per (distributor, beneficiary) pair holding the beneficiary's
 * vesting entitlement and withdrawal history.
 *
 * Derivation: ["allocation", distributor_key, beneficiary_key]
 *
 * Lifecycle:
 * 1. Created by the owner through create_allocation
 * 2. Drawn down by the beneficiary through withdraw, possibly many times
 * 3. Fully withdrawn once closing_balance reaches 0 (the record persists)
 * 4. Optionally tombstoned through delete_allocation
 *
 * Design Notes:
 * - The account is never closed, so a beneficiary can never get a second allocation
 * - closing_balance only ever decreases
 */
#[account]
#[derive(Default, Debug)]
pub struct Allocation {
    /// Beneficiary entitled to the allocation
    /// - Pubkey::default() marks an account that was never initialised
    pub beneficiary: Pubkey,

    /// Human readable label (at most MAX_LABEL_LEN bytes)
    pub label: String,

    /// Total amount allocated
    pub amount: u64,

    /// Unix timestamp at which the first period unlocks
    pub release_on: i64,

    /// Amount not yet withdrawn
    pub closing_balance: u64,

    /// Amount withdrawn so far
    pub withdrawn: u64,

    /// Timestamp of the latest withdrawal, 0 if none
    pub last_withdrawn_on: i64,

    /// Active or Deleted
    pub status: AllocationStatus,

    /// Set once the beneficiary passed the merkle gate (merkle-gated distributors only)
    pub eligibility_verified: bool,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl Allocation {
    /// Calculate the space required for this account
    /// - 8-byte discriminator + fixed fields + length-prefixed label
    pub const LEN: usize = 8 // discriminator
        + 32 // beneficiary
        + 4 + MAX_LABEL_LEN // label
        + 8 // amount
        + 8 // release_on
        + 8 // closing_balance
        + 8 // withdrawn
        + 8 // last_withdrawn_on
        + 1 // status
        + 1 // eligibility_verified
        + 1; // bump

    /// Reads an allocation PDA that may not exist yet
    ///
    /// A PDA with no data has never been created, which surfaces as
    /// NoAllocation instead of Anchor's generic AccountNotInitialized.
    pub fn load(info: &AccountInfo) -> Result<Self> {
        require!(!info.data_is_empty(), MerkleVestingError::NoAllocation);
        require_keys_eq!(*info.owner, crate::ID, MerkleVestingError::InvalidInput);

        let data = info.try_borrow_data()?;
        let allocation = Allocation::try_deserialize(&mut data.as_ref())?;
        Ok(allocation)
    }

    /// Writes the allocation back into its account
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)?;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.beneficiary != Pubkey::default()
    }

    pub fn is_deleted(&self) -> bool {
        self.status == AllocationStatus::Deleted
    }

    pub fn is_fully_withdrawn(&self) -> bool {
        self.is_initialized() && self.closing_balance == 0
    }

    /// Fills a fresh record
    pub fn open(
        &mut self,
        beneficiary: Pubkey,
        label: String,
        amount: u64,
        release_on: i64,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), MerkleVestingError::DuplicateAllocation);
        require!(beneficiary != Pubkey::default(), MerkleVestingError::InvalidInput);
        require!(label.len() <= MAX_LABEL_LEN, MerkleVestingError::LabelTooLong);

        self.beneficiary = beneficiary;
        self.label = label;
        self.amount = amount;
        self.release_on = release_on;
        self.closing_balance = amount;
        self.withdrawn = 0;
        self.last_withdrawn_on = 0;
        self.status = AllocationStatus::Active;
        self.eligibility_verified = false;
        self.bump = bump;
        Ok(())
    }

    /// Unlocked but not yet withdrawn amount at `now`
    ///
    /// Zero for uninitialised or deleted allocations.
    pub fn drawing_power(&self, schedule: &VestingSchedule, now: i64) -> u64 {
        if !self.is_initialized() || self.is_deleted() {
            return 0;
        }
        schedule
            .unlocked_at(self.amount, self.release_on, now)
            .saturating_sub(self.withdrawn)
            .min(self.closing_balance)
    }

    /// Checks that the allocation can still be drawn from
    pub fn ensure_withdrawable(&self) -> Result<()> {
        require!(self.is_initialized(), MerkleVestingError::NoAllocation);
        require!(!self.is_deleted(), MerkleVestingError::AllocationDeleted);
        require!(!self.is_fully_withdrawn(), MerkleVestingError::AlreadyClaimed);
        Ok(())
    }

    /// Records a withdrawal of `amount` at `now`
    pub fn withdraw(&mut self, schedule: &VestingSchedule, amount: u64, now: i64) -> Result<()> {
        self.ensure_withdrawable()?;
        require!(amount > 0, MerkleVestingError::InvalidAmount);
        require!(
            amount <= self.drawing_power(schedule, now),
            MerkleVestingError::InsufficientDrawingPower
        );

        self.withdrawn = self
            .withdrawn
            .checked_add(amount)
            .ok_or(MerkleVestingError::ArithmeticOverflow)?;
        // drawing_power <= closing_balance, so this cannot underflow
        self.closing_balance -= amount;
        self.last_withdrawn_on = now;
        Ok(())
    }

    /// Tombstones the allocation, returning the forfeited closing balance
    pub fn delete(&mut self) -> Result<u64> {
        self.ensure_withdrawable()?;
        self.status = AllocationStatus::Deleted;
        Ok(self.closing_balance)
    }
}
