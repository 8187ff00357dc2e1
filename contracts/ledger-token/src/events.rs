use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub const EVENT_TRANSFER: Symbol = symbol_short!("transfer");
pub const EVENT_APPROVAL: Symbol = symbol_short!("approve");
pub const EVENT_MINT: Symbol = symbol_short!("mint");
pub const EVENT_BURN: Symbol = symbol_short!("burn");
pub const EVENT_MINT_FINISHED: Symbol = symbol_short!("mint_fin");
pub const EVENT_TRADING_STARTED: Symbol = symbol_short!("trading");
pub const EVENT_OWNERSHIP: Symbol = symbol_short!("owner");

pub(crate) fn transfer(e: &Env, from: Address, to: Address, amount: u128) {
    e.events().publish((EVENT_TRANSFER, from, to), amount);
}

/// Carries the allowance value after the change, not the delta.
pub(crate) fn approval(e: &Env, owner: Address, spender: Address, amount: u128) {
    e.events().publish((EVENT_APPROVAL, owner, spender), amount);
}

pub(crate) fn mint(e: &Env, owner: Address, to: Address, amount: u128) {
    e.events().publish((EVENT_MINT, owner, to), amount);
}

pub(crate) fn burn(e: &Env, from: Address, amount: u128) {
    e.events().publish((EVENT_BURN, from), amount);
}

pub(crate) fn minting_finished(e: &Env, owner: Address) {
    e.events().publish((EVENT_MINT_FINISHED, owner), ());
}

pub(crate) fn trading_started(e: &Env, owner: Address) {
    e.events().publish((EVENT_TRADING_STARTED, owner), ());
}

pub(crate) fn ownership_transferred(e: &Env, previous: Address, new_owner: Address) {
    e.events().publish((EVENT_OWNERSHIP, previous), new_owner);
}
