#[cfg(test)]
mod tests {
    use crate::constants::MAX_ROUNDS;
    use crate::error::MerkleVestingError;
    use crate::state::*;
    use crate::test::*;

    #[test]
    fn test_rounds_are_appended_in_sequence() {
        let mut registry = RootRegistry::default();
        assert_eq!(registry.latest_round(), None);

        registry.set_root(1, [1u8; 32]).unwrap();
        registry.set_root(2, [2u8; 32]).unwrap();

        assert_eq!(registry.latest_round(), Some(2));
        assert_eq!(registry.get_root(1).unwrap(), [1u8; 32]);
        assert_eq!(registry.get_root(2).unwrap(), [2u8; 32]);
    }

    #[test]
    fn test_round_out_of_sequence() {
        let mut registry = RootRegistry::default();
        assert_error(registry.set_root(0, [1u8; 32]), MerkleVestingError::RoundOutOfSequence);
        assert_error(registry.set_root(2, [1u8; 32]), MerkleVestingError::RoundOutOfSequence);

        registry.set_root(1, [1u8; 32]).unwrap();
        // Existing rounds cannot be rewritten
        assert_error(registry.set_root(1, [9u8; 32]), MerkleVestingError::RoundOutOfSequence);
        assert_eq!(registry.get_root(1).unwrap(), [1u8; 32]);
    }

    #[test]
    fn test_zero_root_rejected() {
        let mut registry = RootRegistry::default();
        assert_error(registry.set_root(1, [0u8; 32]), MerkleVestingError::InvalidMerkleRoot);
        assert_eq!(registry.round_count, 0);
    }

    #[test]
    fn test_unknown_round() {
        let mut registry = RootRegistry::default();
        assert_error(registry.get_root(1), MerkleVestingError::UnknownRound);

        registry.set_root(1, [1u8; 32]).unwrap();
        assert_error(registry.get_root(0), MerkleVestingError::UnknownRound);
        assert_error(registry.get_root(2), MerkleVestingError::UnknownRound);
    }

    #[test]
    fn test_registry_full() {
        let mut registry = RootRegistry::default();
        for round in 1..=MAX_ROUNDS as u32 {
            registry.set_root(round, [round as u8; 32]).unwrap();
        }
        assert_error(
            registry.set_root(MAX_ROUNDS as u32 + 1, [0xAA; 32]),
            MerkleVestingError::RootRegistryFull,
        );
        assert_eq!(registry.get_root(MAX_ROUNDS as u32).unwrap(), [MAX_ROUNDS as u8; 32]);
    }

    #[test]
    fn test_latest_round_only_policy() {
        let mut distributor = airdrop_distributor(0);
        distributor.registry.set_root(1, [1u8; 32]).unwrap();
        distributor.registry.set_root(2, [2u8; 32]).unwrap();

        assert_eq!(distributor.root_for(1).unwrap(), [1u8; 32]);

        distributor.latest_round_only = true;
        assert_error(distributor.root_for(1), MerkleVestingError::StaleRound);
        assert_eq!(distributor.root_for(2).unwrap(), [2u8; 32]);
        assert_error(distributor.root_for(3), MerkleVestingError::UnknownRound);
    }

    #[test]
    fn test_authorization() {
        let distributor = airdrop_distributor(0);

        assert!(distributor.is_authorized(&operator(), PrivilegedOp::SetMerkleRoot));
        assert!(!distributor.is_authorized(&owner(), PrivilegedOp::SetMerkleRoot));

        for op in [
            PrivilegedOp::Fund,
            PrivilegedOp::RemoveFunds,
            PrivilegedOp::CreateAllocation,
            PrivilegedOp::DeleteAllocation,
        ] {
            assert!(distributor.is_authorized(&owner(), op));
            assert!(!distributor.is_authorized(&operator(), op));
        }
    }
}
