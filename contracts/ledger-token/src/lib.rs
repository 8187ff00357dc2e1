#![no_std]

//! Account-balance ledger with owner-controlled minting and a one-way trading gate.
//!
//! Balances, allowances and the total supply are kept so that the sum of all
//! balances always equals `total_supply`. Every mutation is checked in full
//! before any storage write, so a failing call leaves no trace.

use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

pub mod balance;
mod error;
mod events;
mod state;
mod storage;

pub use error::LedgerError;
pub use state::{MintingState, TradingState};
pub use storage::TokenMetadata;

use storage::{
    bump_instance, read_allowance, read_balance, read_metadata, read_minting, read_owner,
    read_total_supply, read_trading, write_allowance, write_balance, write_metadata,
    write_minting, write_owner, write_total_supply, write_trading,
};

#[contract]
pub struct LedgerToken;

fn require_owner(e: &Env, caller: &Address) -> Result<Address, LedgerError> {
    caller.require_auth();
    let owner = read_owner(e)?;
    if *caller != owner {
        return Err(LedgerError::Unauthorized);
    }
    Ok(owner)
}

/// The ledger's own address stands in for the null account.
fn require_recipient(e: &Env, to: &Address) -> Result<(), LedgerError> {
    if *to == e.current_contract_address() {
        return Err(LedgerError::ZeroAddress);
    }
    Ok(())
}

fn move_balance(e: &Env, from: &Address, to: &Address, amount: u128) -> Result<(), LedgerError> {
    let from_balance = read_balance(e, from);
    if from == to {
        if from_balance < amount {
            return Err(LedgerError::InsufficientBalance);
        }
        return Ok(());
    }
    let to_balance = read_balance(e, to);
    let (new_from, new_to) = balance::transfer_pure(from_balance, to_balance, amount)?;
    write_balance(e, from, new_from);
    write_balance(e, to, new_to);
    Ok(())
}

#[contractimpl]
impl LedgerToken {
    /// Set the owner (mint capability holder) and token metadata. Callable once.
    pub fn initialize(
        e: Env,
        owner: Address,
        decimals: u32,
        name: String,
        symbol: String,
    ) -> Result<(), LedgerError> {
        if storage::is_initialized(&e) {
            return Err(LedgerError::AlreadyInitialized);
        }
        owner.require_auth();

        write_owner(&e, &owner);
        write_metadata(
            &e,
            &TokenMetadata {
                decimals,
                name,
                symbol,
            },
        );
        write_total_supply(&e, 0);
        write_minting(&e, MintingState::Open);
        write_trading(&e, TradingState::Locked);
        bump_instance(&e);
        Ok(())
    }

    // ── Queries ─────────────────────────────────────────────────────────────

    pub fn balance(e: Env, id: Address) -> u128 {
        read_balance(&e, &id)
    }

    pub fn allowance(e: Env, owner: Address, spender: Address) -> u128 {
        read_allowance(&e, &owner, &spender)
    }

    pub fn total_supply(e: Env) -> u128 {
        read_total_supply(&e)
    }

    pub fn owner(e: Env) -> Result<Address, LedgerError> {
        read_owner(&e)
    }

    pub fn minting_finished(e: Env) -> bool {
        read_minting(&e) == MintingState::Finished
    }

    pub fn trading_started(e: Env) -> bool {
        read_trading(&e) == TradingState::Started
    }

    pub fn decimals(e: Env) -> Result<u32, LedgerError> {
        Ok(read_metadata(&e)?.decimals)
    }

    pub fn name(e: Env) -> Result<String, LedgerError> {
        Ok(read_metadata(&e)?.name)
    }

    pub fn symbol(e: Env) -> Result<String, LedgerError> {
        Ok(read_metadata(&e)?.symbol)
    }

    // ── Transfers ───────────────────────────────────────────────────────────

    pub fn transfer(e: Env, from: Address, to: Address, amount: u128) -> Result<(), LedgerError> {
        from.require_auth();
        read_trading(&e).ensure_started()?;
        require_recipient(&e, &to)?;

        move_balance(&e, &from, &to, amount)?;
        bump_instance(&e);
        events::transfer(&e, from, to, amount);
        Ok(())
    }

    /// Move `amount` out of `from` on the strength of `spender`'s allowance.
    pub fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<(), LedgerError> {
        spender.require_auth();
        read_trading(&e).ensure_started()?;
        require_recipient(&e, &to)?;

        if read_balance(&e, &from) < amount {
            return Err(LedgerError::InsufficientBalance);
        }
        let remaining = balance::spend_allowance(read_allowance(&e, &from, &spender), amount)?;

        move_balance(&e, &from, &to, amount)?;
        write_allowance(&e, &from, &spender, remaining);
        bump_instance(&e);
        events::transfer(&e, from, to, amount);
        Ok(())
    }

    // ── Allowances ──────────────────────────────────────────────────────────

    /// Overwrites the current allowance. Changing a non-zero allowance this way
    /// lets the spender race the change and use both values; prefer
    /// `increase_allowance` / `decrease_allowance`.
    pub fn approve(e: Env, owner: Address, spender: Address, amount: u128) -> Result<(), LedgerError> {
        owner.require_auth();
        write_allowance(&e, &owner, &spender, amount);
        bump_instance(&e);
        events::approval(&e, owner, spender, amount);
        Ok(())
    }

    pub fn increase_allowance(
        e: Env,
        owner: Address,
        spender: Address,
        delta: u128,
    ) -> Result<(), LedgerError> {
        owner.require_auth();
        let updated = balance::checked_add(read_allowance(&e, &owner, &spender), delta)?;
        write_allowance(&e, &owner, &spender, updated);
        bump_instance(&e);
        events::approval(&e, owner, spender, updated);
        Ok(())
    }

    /// Decreasing by more than the current allowance leaves it at zero.
    pub fn decrease_allowance(
        e: Env,
        owner: Address,
        spender: Address,
        delta: u128,
    ) -> Result<(), LedgerError> {
        owner.require_auth();
        let updated = balance::decrease_allowance_pure(read_allowance(&e, &owner, &spender), delta);
        write_allowance(&e, &owner, &spender, updated);
        bump_instance(&e);
        events::approval(&e, owner, spender, updated);
        Ok(())
    }

    // ── Supply ──────────────────────────────────────────────────────────────

    /// Create `amount` new tokens for `to`. Supply caps are the caller's concern.
    pub fn mint(e: Env, caller: Address, to: Address, amount: u128) -> Result<(), LedgerError> {
        let owner = require_owner(&e, &caller)?;
        read_minting(&e).ensure_open()?;
        require_recipient(&e, &to)?;

        let (supply, to_balance) =
            balance::mint_pure(read_total_supply(&e), read_balance(&e, &to), amount)?;
        write_total_supply(&e, supply);
        write_balance(&e, &to, to_balance);
        bump_instance(&e);
        events::mint(&e, owner, to, amount);
        Ok(())
    }

    pub fn burn(e: Env, from: Address, amount: u128) -> Result<(), LedgerError> {
        from.require_auth();

        let (supply, from_balance) =
            balance::burn_pure(read_total_supply(&e), read_balance(&e, &from), amount)?;
        write_total_supply(&e, supply);
        write_balance(&e, &from, from_balance);
        bump_instance(&e);
        events::burn(&e, from, amount);
        Ok(())
    }

    pub fn burn_from(e: Env, spender: Address, from: Address, amount: u128) -> Result<(), LedgerError> {
        spender.require_auth();

        let remaining = balance::spend_allowance(read_allowance(&e, &from, &spender), amount)?;
        let (supply, from_balance) =
            balance::burn_pure(read_total_supply(&e), read_balance(&e, &from), amount)?;
        write_allowance(&e, &from, &spender, remaining);
        write_total_supply(&e, supply);
        write_balance(&e, &from, from_balance);
        bump_instance(&e);
        events::burn(&e, from, amount);
        Ok(())
    }

    // ── Owner controls ──────────────────────────────────────────────────────

    /// Close minting for good. A second call fails with `MintingClosed`.
    pub fn finish_minting(e: Env, caller: Address) -> Result<(), LedgerError> {
        let owner = require_owner(&e, &caller)?;
        let next = read_minting(&e).finish()?;
        write_minting(&e, next);
        bump_instance(&e);
        log!(&e, "minting finished", read_total_supply(&e));
        events::minting_finished(&e, owner);
        Ok(())
    }

    /// Open `transfer` / `transfer_from` to everyone. There is no way back.
    pub fn start_trading(e: Env, caller: Address) -> Result<(), LedgerError> {
        let owner = require_owner(&e, &caller)?;
        let current = read_trading(&e);
        if current == TradingState::Started {
            return Ok(());
        }
        write_trading(&e, current.start());
        bump_instance(&e);
        log!(&e, "trading started");
        events::trading_started(&e, owner);
        Ok(())
    }

    pub fn transfer_ownership(e: Env, caller: Address, new_owner: Address) -> Result<(), LedgerError> {
        let owner = require_owner(&e, &caller)?;
        write_owner(&e, &new_owner);
        bump_instance(&e);
        events::ownership_transferred(&e, owner, new_owner);
        Ok(())
    }
}
