use ledger_token::balance::{
    burn_pure, decrease_allowance_pure, mint_pure, spend_allowance, transfer_pure,
};
use ledger_token::{LedgerError, LedgerToken, LedgerTokenClient};
use proptest::prelude::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};

// ── Property-based tests for the pure balance math ──────────────────────────────

proptest! {
    /// Property: a successful transfer conserves the pair's combined balance
    #[test]
    fn prop_transfer_conserves(
        balance_from in 0u128..=u64::MAX as u128,
        balance_to in 0u128..=u64::MAX as u128,
        amount in 0u128..=u64::MAX as u128,
    ) {
        match transfer_pure(balance_from, balance_to, amount) {
            Ok((new_from, new_to)) => {
                prop_assert!(amount <= balance_from);
                prop_assert_eq!(new_from + new_to, balance_from + balance_to);
            }
            Err(e) => {
                prop_assert!(amount > balance_from);
                prop_assert_eq!(e, LedgerError::InsufficientBalance);
            }
        }
    }

    /// Property: mint followed by burn of the same amount is the identity
    #[test]
    fn prop_mint_burn_symmetry(
        supply in 0u128..=u64::MAX as u128,
        share in 0u128..=u64::MAX as u128,
        amount in 0u128..=u64::MAX as u128,
    ) {
        let balance = share.min(supply);
        let (minted_supply, minted_balance) = mint_pure(supply, balance, amount).unwrap();
        prop_assert_eq!(minted_supply - minted_balance, supply - balance);

        let (burned_supply, burned_balance) =
            burn_pure(minted_supply, minted_balance, amount).unwrap();
        prop_assert_eq!(burned_supply, supply);
        prop_assert_eq!(burned_balance, balance);
    }

    /// Property: spending never takes more than the allowance
    #[test]
    fn prop_allowance_bound(allowance in 0u128..1_000_000u128, amount in 0u128..1_000_000u128) {
        match spend_allowance(allowance, amount) {
            Ok(rest) => {
                prop_assert!(amount <= allowance);
                prop_assert_eq!(rest, allowance - amount);
            }
            Err(e) => {
                prop_assert!(amount > allowance);
                prop_assert_eq!(e, LedgerError::InsufficientAllowance);
            }
        }
    }

    /// Property: decreasing an allowance floors at zero
    #[test]
    fn prop_decrease_floors(allowance in 0u128..1_000_000u128, delta in 0u128..2_000_000u128) {
        let updated = decrease_allowance_pure(allowance, delta);
        prop_assert!(updated <= allowance);
        if delta >= allowance {
            prop_assert_eq!(updated, 0);
        }
    }
}

// ── Random operation sequences against the contract ─────────────────────────────

#[derive(Clone, Debug)]
enum Op {
    Mint { to: usize, amount: u128 },
    Transfer { from: usize, to: usize, amount: u128 },
    Approve { owner: usize, spender: usize, amount: u128 },
    TransferFrom { spender: usize, from: usize, to: usize, amount: u128 },
    Burn { from: usize, amount: u128 },
    BurnFrom { spender: usize, from: usize, amount: u128 },
}

const ACCOUNTS: usize = 4;

fn op_strategy() -> impl Strategy<Value = Op> {
    let idx = 0..ACCOUNTS;
    let amount = 0u128..300u128;
    prop_oneof![
        (idx.clone(), amount.clone()).prop_map(|(to, amount)| Op::Mint { to, amount }),
        (idx.clone(), idx.clone(), amount.clone())
            .prop_map(|(from, to, amount)| Op::Transfer { from, to, amount }),
        (idx.clone(), idx.clone(), amount.clone())
            .prop_map(|(owner, spender, amount)| Op::Approve { owner, spender, amount }),
        (idx.clone(), idx.clone(), idx.clone(), amount.clone()).prop_map(
            |(spender, from, to, amount)| Op::TransferFrom { spender, from, to, amount }
        ),
        (idx.clone(), amount.clone()).prop_map(|(from, amount)| Op::Burn { from, amount }),
        (idx.clone(), idx, amount)
            .prop_map(|(spender, from, amount)| Op::BurnFrom { spender, from, amount }),
    ]
}

fn sum_balances(token: &LedgerTokenClient, accounts: &[Address]) -> u128 {
    accounts.iter().map(|a| token.balance(a)).sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Property: total supply equals the sum of balances after every operation,
    /// and no operation moves more than the balance or allowance it draws on
    #[test]
    fn prop_ledger_conservation(ops in proptest::collection::vec(op_strategy(), 1..30)) {
        let env = Env::default();
        env.mock_all_auths();

        let owner = Address::generate(&env);
        let id = env.register_contract(None, LedgerToken);
        let token = LedgerTokenClient::new(&env, &id);
        token.initialize(
            &owner,
            &7,
            &String::from_str(&env, "Ledger"),
            &String::from_str(&env, "LDG"),
        );
        token.start_trading(&owner);

        let accounts: std::vec::Vec<Address> =
            (0..ACCOUNTS).map(|_| Address::generate(&env)).collect();

        for op in ops {
            match op {
                Op::Mint { to, amount } => {
                    token.mint(&owner, &accounts[to], &amount);
                }
                Op::Transfer { from, to, amount } => {
                    let before = token.balance(&accounts[from]);
                    let ok = token.try_transfer(&accounts[from], &accounts[to], &amount).is_ok();
                    prop_assert_eq!(ok, amount <= before);
                }
                Op::Approve { owner: o, spender, amount } => {
                    token.approve(&accounts[o], &accounts[spender], &amount);
                    prop_assert_eq!(token.allowance(&accounts[o], &accounts[spender]), amount);
                }
                Op::TransferFrom { spender, from, to, amount } => {
                    let allowance = token.allowance(&accounts[from], &accounts[spender]);
                    let before = token.balance(&accounts[from]);
                    let result = token.try_transfer_from(
                        &accounts[spender],
                        &accounts[from],
                        &accounts[to],
                        &amount,
                    );
                    prop_assert_eq!(result.is_ok(), amount <= before && amount <= allowance);
                    if result.is_ok() {
                        prop_assert_eq!(
                            token.allowance(&accounts[from], &accounts[spender]),
                            allowance - amount
                        );
                    } else {
                        prop_assert_eq!(
                            token.allowance(&accounts[from], &accounts[spender]),
                            allowance
                        );
                    }
                }
                Op::Burn { from, amount } => {
                    let before = token.balance(&accounts[from]);
                    let ok = token.try_burn(&accounts[from], &amount).is_ok();
                    prop_assert_eq!(ok, amount <= before);
                }
                Op::BurnFrom { spender, from, amount } => {
                    let allowance = token.allowance(&accounts[from], &accounts[spender]);
                    let before = token.balance(&accounts[from]);
                    let ok = token
                        .try_burn_from(&accounts[spender], &accounts[from], &amount)
                        .is_ok();
                    prop_assert_eq!(ok, amount <= before && amount <= allowance);
                }
            }
            prop_assert_eq!(sum_balances(&token, &accounts), token.total_supply());
        }
    }
}
