use crate::error::SaleError;

pub fn checked_add(a: u128, b: u128) -> Result<u128, SaleError> {
    a.checked_add(b).ok_or(SaleError::ArithmeticOverflow)
}

pub fn checked_sub(a: u128, b: u128) -> Result<u128, SaleError> {
    a.checked_sub(b).ok_or(SaleError::ArithmeticUnderflow)
}

pub fn checked_mul(a: u128, b: u128) -> Result<u128, SaleError> {
    a.checked_mul(b).ok_or(SaleError::ArithmeticOverflow)
}

pub fn checked_div(a: u128, b: u128) -> Result<u128, SaleError> {
    a.checked_div(b).ok_or(SaleError::ArithmeticOverflow)
}

/// Payment tokens speak `i128`; the sale keeps its books in `u128`.
pub fn to_payment_amount(amount: u128) -> Result<i128, SaleError> {
    i128::try_from(amount).map_err(|_| SaleError::ArithmeticOverflow)
}
