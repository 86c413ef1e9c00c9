use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;

/// Length of one withdrawal period
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum WithdrawalFrequency {
    #[default]
    Daily,
    Weekly,
}

impl WithdrawalFrequency {
    /// Decodes the frequency code passed at distributor creation
    /// - 0 = daily, 1 = weekly
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            FREQUENCY_DAILY => Ok(Self::Daily),
            FREQUENCY_WEEKLY => Ok(Self::Weekly),
            _ => err!(MerkleVestingError::InvalidWithdrawalFrequency),
        }
    }

    /// Period length in seconds
    pub fn period_seconds(&self) -> i64 {
        match self {
            Self::Daily => SECONDS_PER_DAY,
            Self::Weekly => 7 * SECONDS_PER_DAY,
        }
    }
}

/**
 * Engine-wide vesting parameters
 *
 * Fixed when the distributor is created. Every allocation in the pool
 * accrues against the same cap and period.
 *
 * Accrual law:
 * - Nothing unlocks before an allocation's release_on
 * - At release_on one full period's cap unlocks immediately
 * - Each further whole period unlocks another withdrawal_cap
 * - Unlocked-to-date never exceeds the allocation amount
 *
 * Unlocked-to-date is computed from total elapsed periods, so capacity not
 * withdrawn in one period carries forward.
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct VestingSchedule {
    /// Minimum time between engine creation and any release date (seconds)
    pub minimum_vesting_period: i64,

    /// Maximum amount unlocked per withdrawal period
    pub withdrawal_cap: u64,

    /// Length of one withdrawal period
    pub withdrawal_frequency: WithdrawalFrequency,

    /// Engine creation time (Unix timestamp)
    pub vesting_started_on: i64,

    /// vesting_started_on + minimum_vesting_period
    pub earliest_withdrawal_date: i64,
}

impl VestingSchedule {
    pub fn new(
        minimum_vesting_period: i64,
        withdrawal_cap: u64,
        withdrawal_frequency: WithdrawalFrequency,
        vesting_started_on: i64,
    ) -> Result<Self> {
        require!(minimum_vesting_period >= 0, MerkleVestingError::InvalidInput);
        require!(withdrawal_cap > 0, MerkleVestingError::InvalidAmount);

        let earliest_withdrawal_date = vesting_started_on
            .checked_add(minimum_vesting_period)
            .ok_or(MerkleVestingError::ArithmeticOverflow)?;

        Ok(Self {
            minimum_vesting_period,
            withdrawal_cap,
            withdrawal_frequency,
            vesting_started_on,
            earliest_withdrawal_date,
        })
    }

    /// Whole periods elapsed since `release_on`, counting the release period
    ///
    /// Zero before release.
    pub fn periods_elapsed(&self, release_on: i64, now: i64) -> u64 {
        if now < release_on {
            return 0;
        }
        let elapsed = now.saturating_sub(release_on);
        (elapsed / self.withdrawal_frequency.period_seconds()) as u64 + 1
    }

    /// Cumulative amount of `amount` unlocked at `now`
    pub fn unlocked_at(&self, amount: u64, release_on: i64, now: i64) -> u64 {
        self.periods_elapsed(release_on, now)
            .saturating_mul(self.withdrawal_cap)
            .min(amount)
    }
}
