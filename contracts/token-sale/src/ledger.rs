use soroban_sdk::{contractclient, contracterror, Address, Env};

use crate::error::SaleError;

/// Error codes of the ledger contract, as seen from the sale. The numbering
/// must stay in step with the ledger's own error enum.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum LedgerError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InsufficientBalance = 4,
    InsufficientAllowance = 5,
    ZeroAddress = 6,
    ArithmeticOverflow = 7,
    ArithmeticUnderflow = 8,
    MintingClosed = 9,
    TradingNotStarted = 10,
}

impl From<LedgerError> for SaleError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::NotInitialized => SaleError::NotInitialized,
            LedgerError::AlreadyInitialized => SaleError::AlreadyInitialized,
            LedgerError::Unauthorized => SaleError::Unauthorized,
            LedgerError::ZeroAddress => SaleError::ZeroAddress,
            LedgerError::ArithmeticOverflow => SaleError::ArithmeticOverflow,
            LedgerError::ArithmeticUnderflow => SaleError::ArithmeticUnderflow,
            LedgerError::MintingClosed => SaleError::MintingClosed,
            LedgerError::InsufficientBalance
            | LedgerError::InsufficientAllowance
            | LedgerError::TradingNotStarted => SaleError::LedgerCallFailed,
        }
    }
}

/// The part of the ledger contract the sale drives. The sale must be the
/// ledger's owner for `mint`, `finish_minting` and `transfer_ownership`.
#[contractclient(name = "LedgerClient")]
pub trait LedgerInterface {
    fn balance(env: Env, id: Address) -> u128;
    fn mint(env: Env, caller: Address, to: Address, amount: u128) -> Result<(), LedgerError>;
    fn finish_minting(env: Env, caller: Address) -> Result<(), LedgerError>;
    fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), LedgerError>;
}

/// Unwrap the outcome of a `try_*` ledger call. Ledger errors keep their
/// meaning; anything the ledger did not report itself is `LedgerCallFailed`.
pub(crate) fn settle<T, C, I>(
    result: Result<Result<T, C>, Result<LedgerError, I>>,
) -> Result<T, SaleError> {
    match result {
        Ok(Ok(value)) => Ok(value),
        Err(Ok(err)) => Err(err.into()),
        Ok(Err(_)) | Err(Err(_)) => Err(SaleError::LedgerCallFailed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_maps_ledger_errors() {
        let ok: Result<Result<u32, ()>, Result<LedgerError, ()>> = Ok(Ok(7));
        assert_eq!(settle(ok), Ok(7));

        let closed: Result<Result<(), ()>, Result<LedgerError, ()>> =
            Err(Ok(LedgerError::MintingClosed));
        assert_eq!(settle(closed), Err(SaleError::MintingClosed));

        let null: Result<Result<(), ()>, Result<LedgerError, ()>> =
            Err(Ok(LedgerError::ZeroAddress));
        assert_eq!(settle(null), Err(SaleError::ZeroAddress));

        let aborted: Result<Result<(), ()>, Result<LedgerError, ()>> = Err(Err(()));
        assert_eq!(settle(aborted), Err(SaleError::LedgerCallFailed));
    }
}
