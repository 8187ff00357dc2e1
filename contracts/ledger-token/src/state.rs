use soroban_sdk::contracttype;

use crate::error::LedgerError;

/// Whether the owner may still create tokens. Only `Open -> Finished` exists.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MintingState {
    Open = 0,
    Finished = 1,
}

impl MintingState {
    pub fn ensure_open(self) -> Result<(), LedgerError> {
        match self {
            MintingState::Open => Ok(()),
            MintingState::Finished => Err(LedgerError::MintingClosed),
        }
    }

    pub fn finish(self) -> Result<MintingState, LedgerError> {
        self.ensure_open()?;
        Ok(MintingState::Finished)
    }
}

/// Gate in front of `transfer` and `transfer_from`. Only `Locked -> Started` exists.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TradingState {
    Locked = 0,
    Started = 1,
}

impl TradingState {
    pub fn ensure_started(self) -> Result<(), LedgerError> {
        match self {
            TradingState::Started => Ok(()),
            TradingState::Locked => Err(LedgerError::TradingNotStarted),
        }
    }

    pub fn start(self) -> TradingState {
        TradingState::Started
    }
}
