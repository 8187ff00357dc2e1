#![no_std]

//! Timed, tiered token sale driving a `ledger-token` contract.
//!
//! The sale must own the ledger while it runs: every purchase mints through
//! it, and `finish_sale` mints the unsold remainder to the treasury, closes
//! minting and hands ledger ownership back to the sale owner.
//!
//! Payment arrives as a standard Soroban token pulled from the buyer. After
//! each purchase the sale forwards its whole payment balance to one of two
//! payout wallets, chosen by comparing `wei_raised` with `amount_for_dev`.

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Vec};

pub mod config;
mod error;
mod events;
mod gate;
pub mod ledger;
pub mod math;
pub mod rate;
mod storage;
pub mod window;

pub use config::{PayoutWallet, SaleConfig, SaleCounters};
pub use error::SaleError;
pub use gate::{PauseState, SaleStatus};
pub use window::{SalePhase, SaleWindows};

use ledger::{settle, LedgerClient};
use storage::{
    bump_instance, read_admin, read_authorised, read_config, read_counters, read_free_for_all,
    read_ledger, read_owner, read_pause, read_payment_token, read_status, write_admin,
    write_authorised, write_config, write_counters, write_free_for_all, write_ledger,
    write_owner, write_pause, write_payment_token, write_status,
};

#[contract]
pub struct TokenSale;

fn require_owner(e: &Env, caller: &Address) -> Result<Address, SaleError> {
    caller.require_auth();
    let owner = read_owner(e)?;
    if *caller != owner {
        return Err(SaleError::Unauthorized);
    }
    Ok(owner)
}

/// The owner is always an admin.
fn require_admin(e: &Env, caller: &Address) -> Result<(), SaleError> {
    caller.require_auth();
    let owner = read_owner(e)?;
    if *caller != owner && !read_admin(e, caller) {
        return Err(SaleError::Unauthorized);
    }
    Ok(())
}

fn is_admitted(e: &Env, account: &Address) -> bool {
    read_authorised(e, account) || read_free_for_all(e)
}

fn ledger_client(e: &Env) -> Result<LedgerClient<'_>, SaleError> {
    Ok(LedgerClient::new(e, &read_ledger(e)?))
}

/// Tokens minted to the ledger's own address could never be moved again.
fn require_beneficiary(ledger: &LedgerClient, beneficiary: &Address) -> Result<(), SaleError> {
    if *beneficiary == ledger.address {
        return Err(SaleError::ZeroAddress);
    }
    Ok(())
}

/// Purchase admission, checked in a fixed order. Returns the payout wallets
/// `(developer, cranberry)`.
fn check_admission(
    e: &Env,
    config: &SaleConfig,
    counters: &SaleCounters,
    buyer: &Address,
    amount: u128,
    now: u64,
) -> Result<(Address, Address), SaleError> {
    if !is_admitted(e, buyer) {
        return Err(SaleError::NotAuthorizedPurchaser);
    }
    if !config.windows.is_open(now) {
        return Err(SaleError::SaleWindowClosed);
    }
    if config
        .windows
        .has_ended(now, counters.token_raised, config.max_tokens)
    {
        return Err(SaleError::SaleWindowClosed);
    }
    let wallets = config.payout_wallets()?;
    if amount <= config.min_contribution {
        return Err(SaleError::ContributionTooSmall);
    }
    // Applies in the public sale as well: once the presale allocation is gone
    // no purchase goes through.
    if config.tokens_for_presale <= counters.token_raised {
        return Err(SaleError::PresaleAllocationExhausted);
    }
    Ok(wallets)
}

#[contractimpl]
impl TokenSale {
    /// Wire the sale to its ledger and payment token. Callable once.
    ///
    /// The ledger's ownership must be transferred to this contract before the
    /// first purchase, otherwise minting fails and purchases revert.
    pub fn initialize(
        e: Env,
        owner: Address,
        ledger: Address,
        payment_token: Address,
        config: SaleConfig,
    ) -> Result<(), SaleError> {
        if storage::is_initialized(&e) {
            return Err(SaleError::AlreadyInitialized);
        }
        owner.require_auth();
        config.validate()?;
        if config.treasury_wallet == ledger {
            return Err(SaleError::ZeroAddress);
        }

        write_owner(&e, &owner);
        write_ledger(&e, &ledger);
        write_payment_token(&e, &payment_token);
        write_config(&e, &config);
        write_counters(&e, &SaleCounters::default());
        write_free_for_all(&e, false);
        write_pause(&e, PauseState::Active);
        write_status(&e, SaleStatus::Open);
        bump_instance(&e);
        Ok(())
    }

    // ── Purchases ───────────────────────────────────────────────────────────

    /// Pay `amount` of the payment token and mint the priced tokens to
    /// `beneficiary`. Returns the number of tokens minted.
    pub fn buy_tokens(
        e: Env,
        buyer: Address,
        beneficiary: Address,
        amount: u128,
    ) -> Result<u128, SaleError> {
        buyer.require_auth();
        let config = read_config(&e)?;
        read_pause(&e).ensure_active()?;

        let now = e.ledger().timestamp();
        let counters = read_counters(&e);
        let (developer, cranberry) = check_admission(&e, &config, &counters, &buyer, amount, now)?;

        let ledger = ledger_client(&e)?;
        require_beneficiary(&ledger, &beneficiary)?;

        let rate = rate::rate_at(now, config.windows.presale_end, amount, config.coin_unit)?;
        let tokens = rate::tokens_for(amount, rate)?;
        let first_purchase = ledger.balance(&beneficiary) == 0;
        let next = counters
            .allocate(tokens, config.max_tokens, first_purchase)?
            .with_payment(amount)?;
        let payment_amount = math::to_payment_amount(amount)?;

        let this = e.current_contract_address();
        let payment = token::Client::new(&e, &read_payment_token(&e)?);
        payment.transfer(&buyer, &this, &payment_amount);

        write_counters(&e, &next);
        settle(ledger.try_mint(&this, &beneficiary, &tokens))?;

        // Forward everything the sale holds, not just this payment.
        let wallet = if next.wei_raised <= config.amount_for_dev {
            developer
        } else {
            cranberry
        };
        let held = payment.balance(&this);
        if held > 0 {
            payment.transfer(&this, &wallet, &held);
        }

        bump_instance(&e);
        log!(&e, "token purchase", beneficiary, amount, rate, tokens);
        events::token_purchase(&e, buyer, beneficiary, amount, tokens);
        Ok(tokens)
    }

    /// Plain payment entry point: the buyer is also the beneficiary.
    pub fn buy(e: Env, buyer: Address, amount: u128) -> Result<u128, SaleError> {
        Self::buy_tokens(e, buyer.clone(), buyer, amount)
    }

    /// Mint `tokens` to `beneficiary` without payment. Skips the purchase
    /// windows and the purchaser allowlist, but not the supply cap.
    pub fn place_tokens(
        e: Env,
        admin: Address,
        beneficiary: Address,
        tokens: u128,
    ) -> Result<(), SaleError> {
        require_admin(&e, &admin)?;
        let config = read_config(&e)?;
        read_status(&e).ensure_open()?;
        if tokens == 0 {
            return Err(SaleError::ZeroAmount);
        }

        let ledger = ledger_client(&e)?;
        require_beneficiary(&ledger, &beneficiary)?;

        let first_purchase = ledger.balance(&beneficiary) == 0;
        let next = read_counters(&e).allocate(tokens, config.max_tokens, first_purchase)?;

        write_counters(&e, &next);
        settle(ledger.try_mint(&e.current_contract_address(), &beneficiary, &tokens))?;

        bump_instance(&e);
        log!(&e, "tokens placed", beneficiary, tokens);
        events::token_placed(&e, beneficiary, tokens);
        Ok(())
    }

    /// Close the sale once it has ended: mint the unsold remainder to the
    /// treasury, finish minting and return ledger ownership to the owner.
    pub fn finish_sale(e: Env, caller: Address) -> Result<(), SaleError> {
        let owner = require_owner(&e, &caller)?;
        let config = read_config(&e)?;
        let finalized = read_status(&e).finalize()?;

        let counters = read_counters(&e);
        let now = e.ledger().timestamp();
        if !config
            .windows
            .has_ended(now, counters.token_raised, config.max_tokens)
        {
            return Err(SaleError::SaleNotEnded);
        }
        let shortfall = math::checked_sub(config.max_tokens, counters.token_raised)?;

        let ledger = ledger_client(&e)?;
        let this = e.current_contract_address();
        if shortfall > 0 {
            settle(ledger.try_mint(&this, &config.treasury_wallet, &shortfall))?;
        }
        settle(ledger.try_finish_minting(&this))?;
        settle(ledger.try_transfer_ownership(&this, &owner))?;
        write_status(&e, finalized);

        bump_instance(&e);
        log!(&e, "sale closed", counters.token_raised, shortfall);
        events::sale_closed(&e, owner, shortfall);
        Ok(())
    }

    // ── Purchaser allowlist ─────────────────────────────────────────────────

    pub fn authorise_account(e: Env, admin: Address, account: Address) -> Result<(), SaleError> {
        require_admin(&e, &admin)?;
        write_authorised(&e, &account, true);
        bump_instance(&e);
        events::authorised(&e, admin, account);
        Ok(())
    }

    pub fn authorise_accounts(
        e: Env,
        admin: Address,
        accounts: Vec<Address>,
    ) -> Result<(), SaleError> {
        require_admin(&e, &admin)?;
        for account in accounts.iter() {
            write_authorised(&e, &account, true);
            events::authorised(&e, admin.clone(), account);
        }
        bump_instance(&e);
        Ok(())
    }

    pub fn block_account(e: Env, admin: Address, account: Address) -> Result<(), SaleError> {
        require_admin(&e, &admin)?;
        write_authorised(&e, &account, false);
        bump_instance(&e);
        events::blocked(&e, admin, account);
        Ok(())
    }

    /// Flip between allowlist-only and open-to-everyone purchasing.
    pub fn change_free_for_all(e: Env, caller: Address) -> Result<bool, SaleError> {
        let owner = require_owner(&e, &caller)?;
        let open = !read_free_for_all(&e);
        write_free_for_all(&e, open);
        bump_instance(&e);
        events::free_for_all(&e, owner, open);
        Ok(open)
    }

    // ── Owner controls ──────────────────────────────────────────────────────

    pub fn add_admin(e: Env, caller: Address, account: Address) -> Result<(), SaleError> {
        let owner = require_owner(&e, &caller)?;
        write_admin(&e, &account, true);
        bump_instance(&e);
        events::admin_added(&e, owner, account);
        Ok(())
    }

    pub fn remove_admin(e: Env, caller: Address, account: Address) -> Result<(), SaleError> {
        let owner = require_owner(&e, &caller)?;
        write_admin(&e, &account, false);
        bump_instance(&e);
        events::admin_removed(&e, owner, account);
        Ok(())
    }

    pub fn pause(e: Env, caller: Address) -> Result<(), SaleError> {
        let owner = require_owner(&e, &caller)?;
        if read_pause(&e) == PauseState::Paused {
            return Ok(());
        }
        write_pause(&e, PauseState::Paused);
        bump_instance(&e);
        events::paused(&e, owner);
        Ok(())
    }

    pub fn unpause(e: Env, caller: Address) -> Result<(), SaleError> {
        let owner = require_owner(&e, &caller)?;
        if read_pause(&e) == PauseState::Active {
            return Ok(());
        }
        write_pause(&e, PauseState::Active);
        bump_instance(&e);
        events::unpaused(&e, owner);
        Ok(())
    }

    pub fn set_amount_for_dev(e: Env, caller: Address, amount: u128) -> Result<(), SaleError> {
        let owner = require_owner(&e, &caller)?;
        let mut config = read_config(&e)?;
        config.amount_for_dev = amount;
        write_config(&e, &config);
        bump_instance(&e);
        events::amount_for_dev(&e, owner, amount);
        Ok(())
    }

    pub fn set_payout_wallets(
        e: Env,
        caller: Address,
        developer: Address,
        cranberry: Address,
    ) -> Result<(), SaleError> {
        let owner = require_owner(&e, &caller)?;
        let mut config = read_config(&e)?;
        config.developer_wallet = PayoutWallet::Set(developer.clone());
        config.cranberry_wallet = PayoutWallet::Set(cranberry.clone());
        write_config(&e, &config);
        bump_instance(&e);
        events::payout_wallets(&e, owner, developer, cranberry);
        Ok(())
    }

    /// Changes who controls the sale. Does not touch ledger ownership.
    pub fn transfer_ownership(e: Env, caller: Address, new_owner: Address) -> Result<(), SaleError> {
        let owner = require_owner(&e, &caller)?;
        write_owner(&e, &new_owner);
        bump_instance(&e);
        events::ownership_transferred(&e, owner, new_owner);
        Ok(())
    }

    // ── Queries ─────────────────────────────────────────────────────────────

    pub fn owner(e: Env) -> Result<Address, SaleError> {
        read_owner(&e)
    }

    pub fn ledger(e: Env) -> Result<Address, SaleError> {
        read_ledger(&e)
    }

    pub fn payment_token(e: Env) -> Result<Address, SaleError> {
        read_payment_token(&e)
    }

    pub fn config(e: Env) -> Result<SaleConfig, SaleError> {
        read_config(&e)
    }

    pub fn windows(e: Env) -> Result<SaleWindows, SaleError> {
        Ok(read_config(&e)?.windows)
    }

    pub fn max_tokens(e: Env) -> Result<u128, SaleError> {
        Ok(read_config(&e)?.max_tokens)
    }

    pub fn tokens_for_presale(e: Env) -> Result<u128, SaleError> {
        Ok(read_config(&e)?.tokens_for_presale)
    }

    pub fn amount_for_dev(e: Env) -> Result<u128, SaleError> {
        Ok(read_config(&e)?.amount_for_dev)
    }

    pub fn token_raised(e: Env) -> u128 {
        read_counters(&e).token_raised
    }

    pub fn wei_raised(e: Env) -> u128 {
        read_counters(&e).wei_raised
    }

    pub fn number_of_purchasers(e: Env) -> u64 {
        read_counters(&e).number_of_purchasers
    }

    pub fn free_for_all(e: Env) -> bool {
        read_free_for_all(&e)
    }

    pub fn is_paused(e: Env) -> bool {
        read_pause(&e) == PauseState::Paused
    }

    pub fn is_admin(e: Env, account: Address) -> bool {
        match read_owner(&e) {
            Ok(owner) if owner == account => true,
            _ => read_admin(&e, &account),
        }
    }

    pub fn is_authorised(e: Env, account: Address) -> bool {
        read_authorised(&e, &account)
    }

    pub fn has_ended(e: Env) -> Result<bool, SaleError> {
        let config = read_config(&e)?;
        let counters = read_counters(&e);
        Ok(config
            .windows
            .has_ended(e.ledger().timestamp(), counters.token_raised, config.max_tokens))
    }

    pub fn phase(e: Env) -> Result<SalePhase, SaleError> {
        let config = read_config(&e)?;
        let counters = read_counters(&e);
        Ok(config.windows.phase(
            e.ledger().timestamp(),
            counters.token_raised,
            config.max_tokens,
            read_status(&e),
        ))
    }

    /// Rate a contribution of `amount` would get right now.
    pub fn current_rate(e: Env, amount: u128) -> Result<u128, SaleError> {
        let config = read_config(&e)?;
        rate::rate_at(
            e.ledger().timestamp(),
            config.windows.presale_end,
            amount,
            config.coin_unit,
        )
    }
}
