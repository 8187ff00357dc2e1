use soroban_sdk::{contracttype, Address, Env};

use crate::config::{SaleConfig, SaleCounters};
use crate::error::SaleError;
use crate::gate::{PauseState, SaleStatus};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const ROLE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const ROLE_LIFETIME_THRESHOLD: u32 = ROLE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
pub enum DataKey {
    Owner,
    Ledger,
    PaymentToken,
    Config,
    Counters,
    FreeForAll,
    Pause,
    Status,
    Admin(Address),
    Authorised(Address),
}

pub(crate) fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub(crate) fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Owner)
}

fn read_required<T>(e: &Env, key: &DataKey) -> Result<T, SaleError>
where
    T: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    e.storage()
        .instance()
        .get(key)
        .ok_or(SaleError::NotInitialized)
}

pub(crate) fn read_owner(e: &Env) -> Result<Address, SaleError> {
    read_required(e, &DataKey::Owner)
}

pub(crate) fn write_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&DataKey::Owner, owner);
}

pub(crate) fn read_ledger(e: &Env) -> Result<Address, SaleError> {
    read_required(e, &DataKey::Ledger)
}

pub(crate) fn write_ledger(e: &Env, ledger: &Address) {
    e.storage().instance().set(&DataKey::Ledger, ledger);
}

pub(crate) fn read_payment_token(e: &Env) -> Result<Address, SaleError> {
    read_required(e, &DataKey::PaymentToken)
}

pub(crate) fn write_payment_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::PaymentToken, token);
}

pub(crate) fn read_config(e: &Env) -> Result<SaleConfig, SaleError> {
    read_required(e, &DataKey::Config)
}

pub(crate) fn write_config(e: &Env, config: &SaleConfig) {
    e.storage().instance().set(&DataKey::Config, config);
}

pub(crate) fn read_counters(e: &Env) -> SaleCounters {
    e.storage()
        .instance()
        .get(&DataKey::Counters)
        .unwrap_or_default()
}

pub(crate) fn write_counters(e: &Env, counters: &SaleCounters) {
    e.storage().instance().set(&DataKey::Counters, counters);
}

pub(crate) fn read_free_for_all(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::FreeForAll)
        .unwrap_or(false)
}

pub(crate) fn write_free_for_all(e: &Env, open: bool) {
    e.storage().instance().set(&DataKey::FreeForAll, &open);
}

pub(crate) fn read_pause(e: &Env) -> PauseState {
    e.storage()
        .instance()
        .get(&DataKey::Pause)
        .unwrap_or(PauseState::Active)
}

pub(crate) fn write_pause(e: &Env, state: PauseState) {
    e.storage().instance().set(&DataKey::Pause, &state);
}

pub(crate) fn read_status(e: &Env) -> SaleStatus {
    e.storage()
        .instance()
        .get(&DataKey::Status)
        .unwrap_or(SaleStatus::Open)
}

pub(crate) fn write_status(e: &Env, status: SaleStatus) {
    e.storage().instance().set(&DataKey::Status, &status);
}

// Role flags are per account and live in persistent storage.

fn read_flag(e: &Env, key: &DataKey) -> bool {
    match e.storage().persistent().get::<DataKey, bool>(key) {
        Some(flag) => {
            e.storage()
                .persistent()
                .extend_ttl(key, ROLE_LIFETIME_THRESHOLD, ROLE_BUMP_AMOUNT);
            flag
        }
        None => false,
    }
}

fn write_flag(e: &Env, key: &DataKey, flag: bool) {
    e.storage().persistent().set(key, &flag);
    e.storage()
        .persistent()
        .extend_ttl(key, ROLE_LIFETIME_THRESHOLD, ROLE_BUMP_AMOUNT);
}

pub(crate) fn read_admin(e: &Env, account: &Address) -> bool {
    read_flag(e, &DataKey::Admin(account.clone()))
}

pub(crate) fn write_admin(e: &Env, account: &Address, admin: bool) {
    write_flag(e, &DataKey::Admin(account.clone()), admin);
}

pub(crate) fn read_authorised(e: &Env, account: &Address) -> bool {
    read_flag(e, &DataKey::Authorised(account.clone()))
}

pub(crate) fn write_authorised(e: &Env, account: &Address, authorised: bool) {
    write_flag(e, &DataKey::Authorised(account.clone()), authorised);
}
