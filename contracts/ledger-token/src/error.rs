use soroban_sdk::contracterror;

/// Failure kinds of the ledger. Any error aborts the whole invocation.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(u32)]
pub enum LedgerError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller is not the ledger owner.
    Unauthorized = 3,
    InsufficientBalance = 4,
    InsufficientAllowance = 5,
    /// Recipient is the ledger itself, the sink no one can spend from.
    ZeroAddress = 6,
    ArithmeticOverflow = 7,
    ArithmeticUnderflow = 8,
    MintingClosed = 9,
    TradingNotStarted = 10,
}
