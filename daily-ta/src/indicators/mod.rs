use crate::error::TaError;
use rust_decimal::Decimal;

pub mod day_change;
pub mod deviation;
pub mod moving_average;

pub use day_change::add_multi_day_change;
pub use deviation::add_pct_from_sma;
pub use moving_average::add_moving_average;

/// Percent change from `start` to `end`: `((end - start) / start) * 100`.
///
/// Fails with [`TaError::DivisionByZero`] if `start` is zero, and with [`TaError::Overflow`]
/// if the result does not fit in a [`Decimal`].
pub fn pct_change(start: Decimal, end: Decimal) -> Result<Decimal, TaError> {
    if start.is_zero() {
        return Err(TaError::DivisionByZero);
    }

    end.checked_sub(start)
        .and_then(|change| change.checked_div(start))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or(TaError::Overflow)
}
