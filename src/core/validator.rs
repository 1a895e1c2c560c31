//! Business-rule validation for charge and use amounts
//!
//! Pure, stateless functions evaluated before any mutation. Neither
//! touches shared state nor performs I/O, so they can be called inside
//! or outside a critical section without affecting locking behavior.

use crate::types::LedgerError;

/// Maximum permissible balance immediately after a successful charge
pub const CHARGE_LIMIT: i64 = 1_000_000;

/// Check that `amount` may be charged on top of `balance`
///
/// # Arguments
///
/// * `balance` - The current balance read under the balance write lock
/// * `amount` - The requested charge amount
///
/// # Errors
///
/// * `InvalidAmount` - if `amount` is zero or negative
/// * `LimitExceeded` - if `balance + amount` exceeds [`CHARGE_LIMIT`] or
///   does not fit in an `i64` (checked arithmetic, never a wrapped sum)
pub fn validate_chargeable(balance: i64, amount: i64) -> Result<(), LedgerError> {
    if amount <= 0 {
        return Err(LedgerError::invalid_amount(amount));
    }

    match balance.checked_add(amount) {
        Some(charged) if charged <= CHARGE_LIMIT => Ok(()),
        _ => Err(LedgerError::limit_exceeded(balance, amount)),
    }
}

/// Check that `amount` may be used from `balance`
///
/// # Arguments
///
/// * `balance` - The current balance read under the balance write lock
/// * `amount` - The requested use amount
///
/// # Errors
///
/// * `InvalidAmount` - if `amount` is zero or negative
/// * `InsufficientBalance` - if `balance < amount`
pub fn validate_useable(balance: i64, amount: i64) -> Result<(), LedgerError> {
    if amount <= 0 {
        return Err(LedgerError::invalid_amount(amount));
    }

    if balance < amount {
        return Err(LedgerError::insufficient_balance(balance, amount));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::small_charge(0, 100)]
    #[case::exactly_at_limit(0, CHARGE_LIMIT)]
    #[case::fills_to_limit(999_999, 1)]
    #[case::minimal_amount(500, 1)]
    fn test_validate_chargeable_accepts(#[case] balance: i64, #[case] amount: i64) {
        assert!(validate_chargeable(balance, amount).is_ok());
    }

    #[rstest]
    #[case::zero_amount(100, 0)]
    #[case::negative_amount(100, -50)]
    fn test_validate_chargeable_rejects_non_positive_amount(
        #[case] balance: i64,
        #[case] amount: i64,
    ) {
        assert_eq!(
            validate_chargeable(balance, amount),
            Err(LedgerError::invalid_amount(amount))
        );
    }

    #[rstest]
    #[case::one_past_limit(0, CHARGE_LIMIT + 1)]
    #[case::limit_already_reached(CHARGE_LIMIT, 1)]
    #[case::large_amount(999_999, 2)]
    #[case::overflowing_sum(1, i64::MAX)]
    #[case::max_against_max(i64::MAX, i64::MAX)]
    fn test_validate_chargeable_rejects_over_limit(#[case] balance: i64, #[case] amount: i64) {
        assert_eq!(
            validate_chargeable(balance, amount),
            Err(LedgerError::limit_exceeded(balance, amount))
        );
    }

    #[rstest]
    #[case::exact_balance(100, 100)]
    #[case::partial_use(100, 30)]
    #[case::minimal_use(1, 1)]
    fn test_validate_useable_accepts(#[case] balance: i64, #[case] amount: i64) {
        assert!(validate_useable(balance, amount).is_ok());
    }

    #[rstest]
    #[case::zero_amount(100, 0)]
    #[case::negative_amount(100, -1)]
    fn test_validate_useable_rejects_non_positive_amount(
        #[case] balance: i64,
        #[case] amount: i64,
    ) {
        assert_eq!(
            validate_useable(balance, amount),
            Err(LedgerError::invalid_amount(amount))
        );
    }

    #[rstest]
    #[case::empty_balance(0, 1)]
    #[case::one_short(99, 100)]
    #[case::huge_request(500, i64::MAX)]
    fn test_validate_useable_rejects_insufficient_balance(
        #[case] balance: i64,
        #[case] amount: i64,
    ) {
        assert_eq!(
            validate_useable(balance, amount),
            Err(LedgerError::insufficient_balance(balance, amount))
        );
    }
}
