//! Balance arithmetic for the ledger, kept free of host types.
//!
//! Every function here works on plain `u128` values so the accounting rules
//! (conservation of supply, no overdraft, allowance bounds) can be checked
//! with proptest and Kani without an `Env`. The contract layer in `lib.rs`
//! only reads storage, calls into this module and writes the results back.

use crate::error::LedgerError;

// ── Checked arithmetic ──────────────────────────────────────────────────────────

pub fn checked_add(a: u128, b: u128) -> Result<u128, LedgerError> {
    a.checked_add(b).ok_or(LedgerError::ArithmeticOverflow)
}

pub fn checked_sub(a: u128, b: u128) -> Result<u128, LedgerError> {
    a.checked_sub(b).ok_or(LedgerError::ArithmeticUnderflow)
}

pub fn checked_mul(a: u128, b: u128) -> Result<u128, LedgerError> {
    a.checked_mul(b).ok_or(LedgerError::ArithmeticOverflow)
}

pub fn checked_div(a: u128, b: u128) -> Result<u128, LedgerError> {
    a.checked_div(b).ok_or(LedgerError::ArithmeticOverflow)
}

// ── Ledger moves ────────────────────────────────────────────────────────────────

/// Transfer: deduct from sender, add to receiver.
///
/// Callers must not use this for a self-transfer; the two balances would be
/// written back over each other.
pub fn transfer_pure(
    balance_from: u128,
    balance_to: u128,
    amount: u128,
) -> Result<(u128, u128), LedgerError> {
    if balance_from < amount {
        return Err(LedgerError::InsufficientBalance);
    }
    let new_from = checked_sub(balance_from, amount)?;
    let new_to = checked_add(balance_to, amount)?;
    Ok((new_from, new_to))
}

/// Mint: grow both the supply and one balance by the same amount.
/// Returns `(new_total_supply, new_balance)`.
pub fn mint_pure(
    total_supply: u128,
    balance: u128,
    amount: u128,
) -> Result<(u128, u128), LedgerError> {
    let new_supply = checked_add(total_supply, amount)?;
    let new_balance = checked_add(balance, amount)?;
    Ok((new_supply, new_balance))
}

/// Burn: shrink both the supply and one balance by the same amount.
/// Returns `(new_total_supply, new_balance)`.
pub fn burn_pure(
    total_supply: u128,
    balance: u128,
    amount: u128,
) -> Result<(u128, u128), LedgerError> {
    if balance < amount {
        return Err(LedgerError::InsufficientBalance);
    }
    let new_balance = checked_sub(balance, amount)?;
    let new_supply = checked_sub(total_supply, amount)?;
    Ok((new_supply, new_balance))
}

/// Consume `amount` from an allowance.
pub fn spend_allowance(allowance: u128, amount: u128) -> Result<u128, LedgerError> {
    if allowance < amount {
        return Err(LedgerError::InsufficientAllowance);
    }
    checked_sub(allowance, amount)
}

/// Lower an allowance, stopping at zero instead of failing.
pub fn decrease_allowance_pure(allowance: u128, delta: u128) -> u128 {
    allowance.saturating_sub(delta)
}

// ── Kani harnesses ─────────────────────────────────────────────────────────────

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    fn verify_transfer_conservation() {
        let balance_from: u128 = kani::any();
        let balance_to: u128 = kani::any();
        let amount: u128 = kani::any();

        kani::assume(balance_from >= amount);
        kani::assume(balance_to <= u128::MAX - amount);
        kani::assume(balance_from <= u128::MAX - balance_to);

        let Ok((new_from, new_to)) = transfer_pure(balance_from, balance_to, amount) else {
            kani::unreachable();
        };

        assert!(new_from + new_to == balance_from + balance_to, "Conservation of supply");
    }

    #[kani::proof]
    fn verify_transfer_overdraft_rejected() {
        let balance_from: u128 = kani::any();
        let balance_to: u128 = kani::any();
        let amount: u128 = kani::any();

        kani::assume(balance_from < amount);

        let result = transfer_pure(balance_from, balance_to, amount);
        assert!(result == Err(LedgerError::InsufficientBalance));
    }

    #[kani::proof]
    fn verify_mint_burn_symmetry() {
        let supply: u128 = kani::any();
        let balance: u128 = kani::any();
        let amount: u128 = kani::any();

        kani::assume(balance <= supply);
        kani::assume(supply <= u128::MAX - amount);

        let Ok((minted_supply, minted_balance)) = mint_pure(supply, balance, amount) else {
            kani::unreachable();
        };
        let Ok((burned_supply, burned_balance)) = burn_pure(minted_supply, minted_balance, amount)
        else {
            kani::unreachable();
        };

        assert!(burned_supply == supply);
        assert!(burned_balance == balance);
    }

    #[kani::proof]
    fn verify_allowance_bound() {
        let allowance: u128 = kani::any();
        let amount: u128 = kani::any();

        match spend_allowance(allowance, amount) {
            Ok(rest) => assert!(amount <= allowance && rest == allowance - amount),
            Err(e) => assert!(amount > allowance && e == LedgerError::InsufficientAllowance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_moves_amount() {
        assert_eq!(transfer_pure(100, 5, 40), Ok((60, 45)));
    }

    #[test]
    fn test_transfer_overdraft() {
        assert_eq!(transfer_pure(10, 0, 11), Err(LedgerError::InsufficientBalance));
    }

    #[test]
    fn test_transfer_receiver_overflow() {
        assert_eq!(
            transfer_pure(10, u128::MAX, 1),
            Err(LedgerError::ArithmeticOverflow)
        );
    }

    #[test]
    fn test_mint_supply_overflow() {
        assert_eq!(mint_pure(u128::MAX, 0, 1), Err(LedgerError::ArithmeticOverflow));
    }

    #[test]
    fn test_burn_insufficient() {
        assert_eq!(burn_pure(100, 3, 4), Err(LedgerError::InsufficientBalance));
        assert_eq!(burn_pure(100, 3, 3), Ok((97, 0)));
    }

    #[test]
    fn test_allowance_floor() {
        assert_eq!(decrease_allowance_pure(5, 9), 0);
        assert_eq!(decrease_allowance_pure(9, 5), 4);
        assert_eq!(spend_allowance(4, 5), Err(LedgerError::InsufficientAllowance));
    }

    #[test]
    fn test_guarded_ops() {
        assert_eq!(checked_sub(0, 1), Err(LedgerError::ArithmeticUnderflow));
        assert_eq!(checked_mul(u128::MAX, 2), Err(LedgerError::ArithmeticOverflow));
        assert_eq!(checked_div(1, 0), Err(LedgerError::ArithmeticOverflow));
        assert_eq!(checked_div(9, 3), Ok(3));
    }
}
