use soroban_sdk::contracterror;

/// Failures surfaced by the liquidity manager.
///
/// Any error aborts the invocation and rolls back every storage write and
/// token transfer made during it.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Native amount received differs from the amount declared
    AmountMismatch = 1,
    /// Deposit amount must be positive
    ZeroDeposit = 2,
    /// Swap output below the caller's minimum (retryable)
    SlippageExceeded = 3,
    /// Position manager could not open a position
    MintFailed = 4,
    /// No ledger entry for this position ID
    UnknownPosition = 5,
    /// Ledger entry was already settled
    AlreadyWithdrawn = 6,
    /// Caller is not entitled to this operation
    Unauthorized = 7,
    NotInitialized = 8,
    AlreadyInitialized = 9,
    /// Pool, token or policy configuration rejected at initialization
    InvalidConfig = 10,
    /// Deposit too small to fund both the swap leg and the retained leg
    DepositTooSmall = 11,
    /// Position manager reissued an ID the ledger already holds
    PositionExists = 12,
    /// Position manager failed to release the position
    CollectFailed = 13,
    /// Venue reported amounts that do not match the balances it moved
    InvariantViolation = 14,
    /// Deposits stopped after a detected solvency breach
    DepositsHalted = 15,
    /// Nested call into a guarded operation
    Reentrant = 16,
    ArithmeticOverflow = 17,
}
