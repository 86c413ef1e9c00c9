use anchor_lang::prelude::*;

/// Event emitted when a new distributor is created
#[event]
pub struct DistributorCreated {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Nonce of the distributor
    pub nonce: u32,
    /// Owner of the distributor
    pub owner: Pubkey,
    /// Operator of the distributor
    pub operator: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Whether the distributor runs airdrop claims or vesting allocations
    pub vesting: bool,
    /// Earliest release date any allocation may use (0 for airdrops)
    pub earliest_withdrawal_date: i64,
    /// Tokens deposited at creation
    pub initial_funding: u64,
}

/// Event emitted when a merkle root is registered for a round
#[event]
pub struct MerkleRootSet {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Operator who set the merkle root
    pub operator: Pubkey,
    /// Round index the root was registered under
    pub round: u32,
    /// The merkle root hash
    pub merkle_root: [u8; 32],
}

/// Event emitted when an airdrop is claimed
#[event]
pub struct TokensClaimed {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Address of the claimant
    pub claimant: Pubkey,
    /// Round the proof was checked against
    pub round: u32,
    /// Amount transferred to the claimant
    pub amount: u64,
    /// Total amount claimed from the distributor by all users
    pub total_claimed: u64,
}

/// Event emitted when tokens are deposited into the pool
#[event]
pub struct PoolFunded {
    pub distributor: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    /// Pool balance after the deposit
    pub available_balance: u64,
}

/// Event emitted when unallocated tokens are taken out of the pool
#[event]
pub struct FundsRemoved {
    pub distributor: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    /// Pool balance after the removal
    pub available_balance: u64,
}

/// Event emitted when a vesting allocation is created
#[event]
pub struct AllocationCreated {
    pub distributor: Pubkey,
    pub beneficiary: Pubkey,
    pub label: String,
    pub amount: u64,
    pub release_on: i64,
    /// Sum of every allocation amount created so far
    pub total_vested: u64,
}

/// Event emitted when a vesting allocation is tombstoned
#[event]
pub struct AllocationDeleted {
    pub distributor: Pubkey,
    pub beneficiary: Pubkey,
    /// Closing balance returned to the unallocated pool
    pub forfeited: u64,
}

/// Event emitted when a beneficiary withdraws vested tokens
#[event]
pub struct VestingWithdrawn {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Beneficiary receiving the tokens
    pub beneficiary: Pubkey,
    /// Amount transferred in this transaction
    pub amount: u64,
    /// Allocation balance left after the withdrawal
    pub closing_balance: u64,
    /// Timestamp recorded as last_withdrawn_on
    pub withdrawn_on: i64,
}
