use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub const EVENT_PURCHASE: Symbol = symbol_short!("purchase");
pub const EVENT_PLACED: Symbol = symbol_short!("placed");
pub const EVENT_CLOSED: Symbol = symbol_short!("closed");
pub const EVENT_PAUSED: Symbol = symbol_short!("paused");
pub const EVENT_UNPAUSED: Symbol = symbol_short!("unpaused");
pub const EVENT_AUTHORISED: Symbol = symbol_short!("auth");
pub const EVENT_BLOCKED: Symbol = symbol_short!("blocked");
pub const EVENT_FREE_FOR_ALL: Symbol = symbol_short!("freeall");
pub const EVENT_ADMIN_ADD: Symbol = symbol_short!("admin_add");
pub const EVENT_ADMIN_REM: Symbol = symbol_short!("admin_rem");
pub const EVENT_DEV_AMOUNT: Symbol = symbol_short!("dev_amt");
pub const EVENT_WALLETS: Symbol = symbol_short!("wallets");
pub const EVENT_OWNERSHIP: Symbol = symbol_short!("owner");

pub(crate) fn token_purchase(
    e: &Env,
    purchaser: Address,
    beneficiary: Address,
    value: u128,
    tokens: u128,
) {
    e.events()
        .publish((EVENT_PURCHASE, purchaser, beneficiary), (value, tokens));
}

pub(crate) fn token_placed(e: &Env, beneficiary: Address, tokens: u128) {
    e.events().publish((EVENT_PLACED, beneficiary), tokens);
}

pub(crate) fn sale_closed(e: &Env, owner: Address, shortfall: u128) {
    e.events().publish((EVENT_CLOSED, owner), shortfall);
}

pub(crate) fn paused(e: &Env, owner: Address) {
    e.events().publish((EVENT_PAUSED, owner), ());
}

pub(crate) fn unpaused(e: &Env, owner: Address) {
    e.events().publish((EVENT_UNPAUSED, owner), ());
}

pub(crate) fn authorised(e: &Env, admin: Address, account: Address) {
    e.events().publish((EVENT_AUTHORISED, admin), account);
}

pub(crate) fn blocked(e: &Env, admin: Address, account: Address) {
    e.events().publish((EVENT_BLOCKED, admin), account);
}

pub(crate) fn free_for_all(e: &Env, owner: Address, open: bool) {
    e.events().publish((EVENT_FREE_FOR_ALL, owner), open);
}

pub(crate) fn admin_added(e: &Env, owner: Address, account: Address) {
    e.events().publish((EVENT_ADMIN_ADD, owner), account);
}

pub(crate) fn admin_removed(e: &Env, owner: Address, account: Address) {
    e.events().publish((EVENT_ADMIN_REM, owner), account);
}

pub(crate) fn amount_for_dev(e: &Env, owner: Address, amount: u128) {
    e.events().publish((EVENT_DEV_AMOUNT, owner), amount);
}

pub(crate) fn payout_wallets(e: &Env, owner: Address, developer: Address, cranberry: Address) {
    e.events()
        .publish((EVENT_WALLETS, owner), (developer, cranberry));
}

pub(crate) fn ownership_transferred(e: &Env, previous: Address, new_owner: Address) {
    e.events().publish((EVENT_OWNERSHIP, previous), new_owner);
}
