use soroban_sdk::{contracttype, Address, Env, String};

use crate::error::LedgerError;
use crate::state::{MintingState, TradingState};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub decimals: u32,
    pub name: String,
    pub symbol: String,
}

#[contracttype]
pub enum DataKey {
    Allowance(Address, Address),
    Balance(Address),
    Owner,
    TotalSupply,
    Minting,
    Trading,
    Metadata,
}

pub(crate) fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub(crate) fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Owner)
}

pub(crate) fn read_owner(e: &Env) -> Result<Address, LedgerError> {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(LedgerError::NotInitialized)
}

pub(crate) fn write_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&DataKey::Owner, owner);
}

pub(crate) fn read_metadata(e: &Env) -> Result<TokenMetadata, LedgerError> {
    e.storage()
        .instance()
        .get(&DataKey::Metadata)
        .ok_or(LedgerError::NotInitialized)
}

pub(crate) fn write_metadata(e: &Env, metadata: &TokenMetadata) {
    e.storage().instance().set(&DataKey::Metadata, metadata);
}

pub(crate) fn read_total_supply(e: &Env) -> u128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub(crate) fn write_total_supply(e: &Env, supply: u128) {
    e.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub(crate) fn read_minting(e: &Env) -> MintingState {
    e.storage()
        .instance()
        .get(&DataKey::Minting)
        .unwrap_or(MintingState::Open)
}

pub(crate) fn write_minting(e: &Env, state: MintingState) {
    e.storage().instance().set(&DataKey::Minting, &state);
}

pub(crate) fn read_trading(e: &Env) -> TradingState {
    e.storage()
        .instance()
        .get(&DataKey::Trading)
        .unwrap_or(TradingState::Locked)
}

pub(crate) fn write_trading(e: &Env, state: TradingState) {
    e.storage().instance().set(&DataKey::Trading, &state);
}

// Balances and allowances live in persistent storage and read as 0 until
// first written.

pub(crate) fn read_balance(e: &Env, id: &Address) -> u128 {
    let key = DataKey::Balance(id.clone());
    match e.storage().persistent().get::<DataKey, u128>(&key) {
        Some(balance) => {
            e.storage()
                .persistent()
                .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
            balance
        }
        None => 0,
    }
}

pub(crate) fn write_balance(e: &Env, id: &Address, balance: u128) {
    let key = DataKey::Balance(id.clone());
    e.storage().persistent().set(&key, &balance);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub(crate) fn read_allowance(e: &Env, owner: &Address, spender: &Address) -> u128 {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    match e.storage().persistent().get::<DataKey, u128>(&key) {
        Some(allowance) => {
            e.storage()
                .persistent()
                .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
            allowance
        }
        None => 0,
    }
}

pub(crate) fn write_allowance(e: &Env, owner: &Address, spender: &Address, amount: u128) {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    e.storage().persistent().set(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}
