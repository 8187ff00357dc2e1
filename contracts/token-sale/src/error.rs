use soroban_sdk::contracterror;

/// Sale error codes. Failures reported by the ledger during a sale call are
/// mapped onto the variant with the same meaning.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(u32)]
pub enum SaleError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller is not the owner, or not an admin for admin-only calls.
    Unauthorized = 3,
    /// A payout wallet is not configured, or tokens would go to the ledger itself.
    ZeroAddress = 4,
    ArithmeticOverflow = 5,
    ArithmeticUnderflow = 6,
    /// The sale has been finalized and can no longer mint.
    MintingClosed = 7,
    SalePaused = 8,
    SaleNotEnded = 9,
    /// Outside both purchase windows, or the sale has already ended.
    SaleWindowClosed = 10,
    SupplyCapExceeded = 11,
    /// Buyer is not on the allowlist and the sale is not open to everyone.
    NotAuthorizedPurchaser = 12,
    ContributionTooSmall = 13,
    PresaleAllocationExhausted = 14,
    InvalidSaleWindows = 15,
    /// `coin_unit` is zero or the presale allocation exceeds the cap.
    InvalidConfig = 16,
    /// Placing zero tokens.
    ZeroAmount = 17,
    /// The ledger rejected a call for a reason the sale cannot name.
    LedgerCallFailed = 18,
}
