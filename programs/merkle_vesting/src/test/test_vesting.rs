#[cfg(test)]
mod tests {
    use anchor_lang::prelude::Pubkey;
    use crate::constants::*;
    use crate::error::MerkleVestingError;
    use crate::state::*;
    use crate::test::test_merkle::{SimpleMerkleTree, TreeNode};
    use crate::test::*;

    const STARTED_ON: i64 = 1_700_000_000;
    const MINUTE: i64 = 60;
    const DAY: i64 = SECONDS_PER_DAY;

    fn beneficiary(seed: u8) -> Pubkey {
        Pubkey::new_from_array([seed; 32])
    }

    fn daily_schedule(cap: u64, minimum_vesting_period: i64) -> VestingSchedule {
        VestingSchedule::new(minimum_vesting_period, cap, WithdrawalFrequency::Daily, STARTED_ON).unwrap()
    }

    /// Funded vesting distributor holding one allocation released at `release_on`
    fn setup(cap: u64, amount: u64, release_on: i64, merkle_gated: bool) -> (Distributor, Allocation) {
        let mut distributor = vesting_distributor(daily_schedule(cap, 0), merkle_gated);
        distributor.ledger.fund(amount).unwrap();

        let mut allocation = Allocation::default();
        distributor
            .open_allocation(&mut allocation, beneficiary(10), "team".to_string(), amount, release_on, 255)
            .unwrap();
        (distributor, allocation)
    }

    fn withdraw(distributor: &mut Distributor, allocation: &mut Allocation, amount: u64, now: i64) -> anchor_lang::Result<()> {
        distributor.settle_withdrawal(allocation, &beneficiary(10), amount, None, None, now)
    }

    #[test]
    fn test_frequency_codes() {
        assert_eq!(WithdrawalFrequency::from_code(FREQUENCY_DAILY).unwrap(), WithdrawalFrequency::Daily);
        assert_eq!(WithdrawalFrequency::from_code(FREQUENCY_WEEKLY).unwrap(), WithdrawalFrequency::Weekly);
        assert_error(WithdrawalFrequency::from_code(2), MerkleVestingError::InvalidWithdrawalFrequency);
        assert_eq!(WithdrawalFrequency::Weekly.period_seconds(), 7 * DAY);
    }

    #[test]
    fn test_schedule_validation() {
        let schedule = daily_schedule(10_000, 3 * DAY);
        assert_eq!(schedule.earliest_withdrawal_date, STARTED_ON + 3 * DAY);

        assert_error(
            VestingSchedule::new(-1, 10_000, WithdrawalFrequency::Daily, STARTED_ON),
            MerkleVestingError::InvalidInput,
        );
        assert_error(
            VestingSchedule::new(0, 0, WithdrawalFrequency::Daily, STARTED_ON),
            MerkleVestingError::InvalidAmount,
        );
    }

    #[test]
    fn test_accrual_with_carry_forward() {
        let release_on = STARTED_ON + 100;
        let (mut distributor, mut allocation) = setup(10_000, 111_111, release_on, false);
        let schedule = distributor.schedule;

        assert_eq!(allocation.drawing_power(&schedule, release_on - 1), 0);
        assert_error(
            withdraw(&mut distributor, &mut allocation, 1, release_on - 1),
            MerkleVestingError::InsufficientDrawingPower,
        );

        let now = release_on + MINUTE;
        assert_eq!(allocation.drawing_power(&schedule, now), 10_000);
        withdraw(&mut distributor, &mut allocation, 5_000, now).unwrap();
        assert_eq!(allocation.drawing_power(&schedule, now), 5_000);

        assert_eq!(allocation.drawing_power(&schedule, release_on + DAY + MINUTE), 15_000);
        assert_eq!(allocation.drawing_power(&schedule, release_on + 8 * DAY + MINUTE), 85_000);

        let now = release_on + 10 * DAY;
        withdraw(&mut distributor, &mut allocation, 25_000, now).unwrap();
        assert_eq!(allocation.drawing_power(&schedule, now), 80_000);

        let now = release_on + 11 * DAY;
        withdraw(&mut distributor, &mut allocation, 55_000, now).unwrap();
        assert_eq!(allocation.drawing_power(&schedule, now), 26_111);
        assert_error(
            withdraw(&mut distributor, &mut allocation, 55_000, now),
            MerkleVestingError::InsufficientDrawingPower,
        );

        let now = release_on + 12 * DAY;
        assert_error(
            withdraw(&mut distributor, &mut allocation, 26_112, now),
            MerkleVestingError::InsufficientDrawingPower,
        );
        withdraw(&mut distributor, &mut allocation, 26_111, now).unwrap();
        assert_eq!(allocation.drawing_power(&schedule, now), 0);
        assert_eq!(allocation.closing_balance, 0);
        assert_eq!(allocation.withdrawn, 111_111);
        assert_eq!(allocation.last_withdrawn_on, now);

        assert_eq!(distributor.ledger.available_balance, 0);
        assert_eq!(distributor.ledger.total_withdrawn, 111_111);
        assert_eq!(distributor.ledger.outstanding(), 0);

        assert_error(
            withdraw(&mut distributor, &mut allocation, 1, now + 30 * DAY),
            MerkleVestingError::AlreadyClaimed,
        );
    }

    #[test]
    fn test_weekly_frequency() {
        let schedule = VestingSchedule::new(0, 1_000, WithdrawalFrequency::Weekly, STARTED_ON).unwrap();
        let release_on = STARTED_ON;
        assert_eq!(schedule.unlocked_at(10_000, release_on, release_on), 1_000);
        assert_eq!(schedule.unlocked_at(10_000, release_on, release_on + 6 * DAY), 1_000);
        assert_eq!(schedule.unlocked_at(10_000, release_on, release_on + 7 * DAY), 2_000);
        assert_eq!(schedule.unlocked_at(10_000, release_on, release_on + 70 * DAY), 10_000);
    }

    #[test]
    fn test_drawing_power_is_monotonic_between_withdrawals() {
        let release_on = STARTED_ON;
        let (distributor, allocation) = setup(7_000, 50_000, release_on, false);

        let mut previous = 0;
        for hour in 0..(24 * 10) {
            let power = allocation.drawing_power(&distributor.schedule, release_on + hour * 3_600);
            assert!(power >= previous);
            assert!(power <= allocation.closing_balance);
            previous = power;
        }
        assert_eq!(previous, 50_000);
    }

    #[test]
    fn test_withdraw_rejects_bad_input() {
        let release_on = STARTED_ON;
        let (mut distributor, mut allocation) = setup(10_000, 20_000, release_on, false);

        assert_error(
            withdraw(&mut distributor, &mut allocation, 0, release_on),
            MerkleVestingError::InvalidAmount,
        );
        assert_error(
            distributor.settle_withdrawal(&mut allocation, &beneficiary(11), 1, None, None, release_on),
            MerkleVestingError::NoAllocation,
        );

        let mut missing = Allocation::default();
        assert_error(
            withdraw(&mut distributor, &mut missing, 1, release_on),
            MerkleVestingError::NoAllocation,
        );
        assert_eq!(missing.drawing_power(&distributor.schedule, release_on), 0);

        distributor.mode = DistributionMode::Airdrop;
        assert_error(
            withdraw(&mut distributor, &mut allocation, 1, release_on),
            MerkleVestingError::WrongMode,
        );
    }

    #[test]
    fn test_create_allocation_validation() {
        let mut distributor = vesting_distributor(daily_schedule(10_000, 5 * DAY), false);
        distributor.ledger.fund(1_000_000).unwrap();
        let earliest = distributor.schedule.earliest_withdrawal_date;

        let mut allocation = Allocation::default();
        assert_error(
            distributor.open_allocation(&mut allocation, beneficiary(10), "a".to_string(), 0, earliest, 255),
            MerkleVestingError::InvalidAmount,
        );
        assert_error(
            distributor.open_allocation(&mut allocation, beneficiary(10), "a".to_string(), 100, earliest - 1, 255),
            MerkleVestingError::ReleaseTooEarly,
        );
        assert_error(
            distributor.open_allocation(&mut allocation, beneficiary(10), "x".repeat(MAX_LABEL_LEN + 1), 100, earliest, 255),
            MerkleVestingError::LabelTooLong,
        );
        assert_eq!(distributor.ledger.total_vested, 0);

        distributor
            .open_allocation(&mut allocation, beneficiary(10), "x".repeat(MAX_LABEL_LEN), 100, earliest, 255)
            .unwrap();
        assert_eq!(allocation.closing_balance, 100);
        assert_eq!(allocation.status, AllocationStatus::Active);
        assert_eq!(distributor.ledger.total_vested, 100);

        assert_error(
            distributor.open_allocation(&mut allocation, beneficiary(10), "b".to_string(), 100, earliest, 255),
            MerkleVestingError::DuplicateAllocation,
        );

        let mut airdrop = airdrop_distributor(1_000);
        assert_error(
            airdrop.open_allocation(&mut Allocation::default(), beneficiary(10), "a".to_string(), 1, 0, 255),
            MerkleVestingError::WrongMode,
        );
    }

    #[test]
    fn test_no_second_allocation_after_full_withdrawal() {
        let release_on = STARTED_ON;
        let (mut distributor, mut allocation) = setup(10_000, 10_000, release_on, false);
        withdraw(&mut distributor, &mut allocation, 10_000, release_on).unwrap();
        distributor.ledger.fund(10_000).unwrap();

        assert_error(
            distributor.open_allocation(&mut allocation, beneficiary(10), "again".to_string(), 10_000, release_on, 255),
            MerkleVestingError::DuplicateAllocation,
        );
    }

    #[test]
    fn test_delete_allocation_forfeits_closing_balance() {
        let release_on = STARTED_ON;
        let (mut distributor, mut allocation) = setup(10_000, 30_000, release_on, false);
        withdraw(&mut distributor, &mut allocation, 10_000, release_on).unwrap();
        assert_eq!(distributor.ledger.unallocated(), 0);

        let forfeited = distributor.retire_allocation(&mut allocation).unwrap();
        assert_eq!(forfeited, 20_000);
        assert!(allocation.is_deleted());
        assert_eq!(allocation.drawing_power(&distributor.schedule, release_on + 10 * DAY), 0);
        assert_eq!(distributor.ledger.total_forfeited, 20_000);
        assert_eq!(distributor.ledger.outstanding(), 0);
        assert_eq!(distributor.ledger.unallocated(), 20_000);

        assert_error(
            withdraw(&mut distributor, &mut allocation, 1, release_on + DAY),
            MerkleVestingError::AllocationDeleted,
        );
        assert_error(distributor.retire_allocation(&mut allocation), MerkleVestingError::AllocationDeleted);
        assert_error(
            distributor.open_allocation(&mut allocation, beneficiary(10), "again".to_string(), 1, release_on, 255),
            MerkleVestingError::DuplicateAllocation,
        );
    }

    #[test]
    fn test_delete_fully_withdrawn_allocation() {
        let release_on = STARTED_ON;
        let (mut distributor, mut allocation) = setup(10_000, 10_000, release_on, false);
        withdraw(&mut distributor, &mut allocation, 10_000, release_on).unwrap();
        assert_error(distributor.retire_allocation(&mut allocation), MerkleVestingError::AlreadyClaimed);

        let mut missing = Allocation::default();
        assert_error(distributor.retire_allocation(&mut missing), MerkleVestingError::NoAllocation);
    }

    #[test]
    fn test_merkle_gate_checked_on_first_withdrawal() {
        let release_on = STARTED_ON;
        let (mut distributor, mut allocation) = setup(10_000, 40_000, release_on, true);

        let tree = SimpleMerkleTree::new(&[
            TreeNode { claimant: beneficiary(10), amount: 40_000 },
            TreeNode { claimant: beneficiary(11), amount: 5_000 },
            TreeNode { claimant: beneficiary(12), amount: 6_000 },
        ]);
        distributor.registry.set_root(1, tree.root()).unwrap();
        let proof = tree.proof(0);
        let now = release_on + DAY;

        assert_error(
            withdraw(&mut distributor, &mut allocation, 1_000, now),
            MerkleVestingError::MissingProof,
        );
        assert_error(
            distributor.settle_withdrawal(&mut allocation, &beneficiary(10), 1_000, Some(&proof), None, now),
            MerkleVestingError::MissingProof,
        );
        assert_error(
            distributor.settle_withdrawal(&mut allocation, &beneficiary(10), 1_000, Some(&tree.proof(1)), Some(1), now),
            MerkleVestingError::InvalidProof,
        );
        assert_error(
            distributor.settle_withdrawal(&mut allocation, &beneficiary(10), 1_000, Some(&proof), Some(2), now),
            MerkleVestingError::UnknownRound,
        );
        assert!(!allocation.eligibility_verified);

        // A failed drawing-power check leaves the gate pending
        assert_error(
            distributor.settle_withdrawal(&mut allocation, &beneficiary(10), 30_000, Some(&proof), Some(1), now),
            MerkleVestingError::InsufficientDrawingPower,
        );
        assert!(!allocation.eligibility_verified);

        distributor
            .settle_withdrawal(&mut allocation, &beneficiary(10), 1_000, Some(&proof), Some(1), now)
            .unwrap();
        assert!(allocation.eligibility_verified);

        // Later withdrawals need no proof
        withdraw(&mut distributor, &mut allocation, 1_000, now).unwrap();
        assert_eq!(allocation.withdrawn, 2_000);
    }
}
