use soroban_sdk::{contracttype, Address};

use crate::error::SaleError;
use crate::math::checked_add;
use crate::window::SaleWindows;

/// A payout destination. `Unset` blocks purchases until the owner configures
/// the wallet with `set_payout_wallets`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PayoutWallet {
    Unset,
    Set(Address),
}

impl PayoutWallet {
    pub fn address(&self) -> Result<Address, SaleError> {
        match self {
            PayoutWallet::Set(wallet) => Ok(wallet.clone()),
            PayoutWallet::Unset => Err(SaleError::ZeroAddress),
        }
    }
}

/// Sale parameters, supplied once at `initialize`.
///
/// * `max_tokens` – hard cap on tokens sold or placed.
/// * `tokens_for_presale` – purchases stop once `token_raised` reaches this.
/// * `amount_for_dev` – payment routed to the developer wallet until
///   `wei_raised` passes this; owner-adjustable.
/// * `min_contribution` – a purchase must pay strictly more than this.
/// * `coin_unit` – payment base units per whole coin, used for rate tiers.
/// * `developer_wallet`, `cranberry_wallet` – payout wallets; purchases are
///   refused while either is unset.
/// * `treasury_wallet` – receives unsold tokens at `finish_sale`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfig {
    pub windows: SaleWindows,
    pub max_tokens: u128,
    pub tokens_for_presale: u128,
    pub amount_for_dev: u128,
    pub min_contribution: u128,
    pub coin_unit: u128,
    pub developer_wallet: PayoutWallet,
    pub cranberry_wallet: PayoutWallet,
    pub treasury_wallet: Address,
}

impl SaleConfig {
    pub fn validate(&self) -> Result<(), SaleError> {
        self.windows.validate()?;
        if self.coin_unit == 0 || self.tokens_for_presale > self.max_tokens {
            return Err(SaleError::InvalidConfig);
        }
        Ok(())
    }

    /// Both payout wallets, or `ZeroAddress` if either is missing.
    pub fn payout_wallets(&self) -> Result<(Address, Address), SaleError> {
        Ok((self.developer_wallet.address()?, self.cranberry_wallet.address()?))
    }
}

/// Running totals; each only ever grows.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SaleCounters {
    pub token_raised: u128,
    pub wei_raised: u128,
    pub number_of_purchasers: u64,
}

impl SaleCounters {
    /// Counters after handing out `tokens` more, or `SupplyCapExceeded` if that
    /// would pass `max_tokens`. A beneficiary who held nothing before counts as
    /// a new purchaser.
    pub fn allocate(
        &self,
        tokens: u128,
        max_tokens: u128,
        first_purchase: bool,
    ) -> Result<SaleCounters, SaleError> {
        let token_raised = checked_add(self.token_raised, tokens)?;
        if token_raised > max_tokens {
            return Err(SaleError::SupplyCapExceeded);
        }
        let number_of_purchasers = if first_purchase {
            self.number_of_purchasers
                .checked_add(1)
                .ok_or(SaleError::ArithmeticOverflow)?
        } else {
            self.number_of_purchasers
        };
        Ok(SaleCounters {
            token_raised,
            wei_raised: self.wei_raised,
            number_of_purchasers,
        })
    }

    pub fn with_payment(self, amount: u128) -> Result<SaleCounters, SaleError> {
        Ok(SaleCounters {
            wei_raised: checked_add(self.wei_raised, amount)?,
            ..self
        })
    }
}
