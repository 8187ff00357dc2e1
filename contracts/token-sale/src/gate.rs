use soroban_sdk::contracttype;

use crate::error::SaleError;

/// Purchase switch toggled by the owner.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PauseState {
    Active = 0,
    Paused = 1,
}

impl PauseState {
    pub fn ensure_active(self) -> Result<(), SaleError> {
        match self {
            PauseState::Active => Ok(()),
            PauseState::Paused => Err(SaleError::SalePaused),
        }
    }
}

/// `Open -> Finalized` only; finalization hands the ledger back to the owner.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SaleStatus {
    Open = 0,
    Finalized = 1,
}

impl SaleStatus {
    pub fn ensure_open(self) -> Result<(), SaleError> {
        match self {
            SaleStatus::Open => Ok(()),
            SaleStatus::Finalized => Err(SaleError::MintingClosed),
        }
    }

    pub fn finalize(self) -> Result<SaleStatus, SaleError> {
        self.ensure_open()?;
        Ok(SaleStatus::Finalized)
    }
}
