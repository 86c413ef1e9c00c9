use anchor_lang::prelude::*;
use crate::error::MerkleVestingError;
use crate::state::*;

pub mod test_registry;
pub mod test_vesting;

/// Asserts that `result` failed with `expected`
pub fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: MerkleVestingError) {
    let actual = ProgramError::from(result.unwrap_err());
    let expected = ProgramError::from(anchor_lang::error::Error::from(expected));
    assert_eq!(actual, expected);
}

pub fn owner() -> Pubkey {
    Pubkey::new_from_array([1u8; 32])
}

pub fn operator() -> Pubkey {
    Pubkey::new_from_array([2u8; 32])
}

pub fn airdrop_distributor(balance: u64) -> Distributor {
    Distributor {
        owner: owner(),
        operator: operator(),
        mode: DistributionMode::Airdrop,
        ledger: PoolLedger {
            available_balance: balance,
            total_funded: balance,
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn vesting_distributor(schedule: VestingSchedule, merkle_gated: bool) -> Distributor {
    Distributor {
        owner: owner(),
        operator: operator(),
        mode: DistributionMode::Vesting,
        merkle_gated,
        schedule,
        ..Default::default()
    }
}
