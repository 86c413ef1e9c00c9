use anchor_lang::prelude::*;

#[error_code]
pub enum MerkleVestingError {
    // Access control errors
    #[msg("Caller is not authorized for this operation")]
    Unauthorized,
    #[msg("Invalid operator account")]
    InvalidOperator,

    // Input validation errors
    #[msg("Malformed input")]
    InvalidInput,
    #[msg("Amount cannot be 0")]
    InvalidAmount,
    #[msg("Allocation label is too long")]
    LabelTooLong,
    #[msg("Unsupported withdrawal frequency code")]
    InvalidWithdrawalFrequency,
    #[msg("Instruction is not available for this distribution mode")]
    WrongMode,

    // Merkle root registry errors
    #[msg("Invalid merkle root")]
    InvalidMerkleRoot,
    #[msg("Round must be the next unused round index")]
    RoundOutOfSequence,
    #[msg("Merkle root registry is full")]
    RootRegistryFull,
    #[msg("Unknown merkle round")]
    UnknownRound,
    #[msg("Only the latest merkle round is accepted")]
    StaleRound,

    // Merkle proof errors
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("A merkle proof and round are required for the first withdrawal")]
    MissingProof,

    // Claim ledger errors
    #[msg("Allocation has been claimed")]
    AlreadyClaimed,
    #[msg("Address has no vesting allocation")]
    NoAllocation,
    #[msg("Vesting allocation has been deleted")]
    AllocationDeleted,
    #[msg("Address already has a vesting allocation")]
    DuplicateAllocation,

    // Vesting schedule errors
    #[msg("Release date is before the earliest withdrawal date")]
    ReleaseTooEarly,
    #[msg("Allocation exceeds the unallocated pool balance")]
    CapExceeded,
    #[msg("Amount exceeds the current drawing power")]
    InsufficientDrawingPower,

    // Pool balance errors
    #[msg("Removal would leave allocations underfunded")]
    InsufficientUnallocatedFunds,
    #[msg("Insufficient vault balance for this claim")]
    InsufficientVaultBalance,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match distributor's token mint")]
    TokenMintMismatch,
}
