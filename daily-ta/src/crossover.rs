use crate::{
    column::{ColumnName, PriceField},
    error::TaError,
    indicators::moving_average::ensure_moving_average,
    table::{Column, PriceTable},
};
use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Type of crossover event detected between two data series.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Cross {
    Above,
    Below,
}

/// Determine if `fast` crossed `slow` between the previous and current values.
///
/// Touching the slow series counts as a cross once the fast series was strictly on the
/// other side of it.
pub fn crossover(
    prev_fast: Decimal,
    prev_slow: Decimal,
    fast: Decimal,
    slow: Decimal,
) -> Option<Cross> {
    if fast >= slow && prev_fast < prev_slow {
        Some(Cross::Above)
    } else if fast <= slow && prev_fast > prev_slow {
        Some(Cross::Below)
    } else {
        None
    }
}

/// Crossover signal recorded for a single [`PriceTable`] row.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Display, Deserialize, Serialize,
)]
pub enum CrossSignal {
    /// Crossed upward through the reference series.
    #[serde(rename = "above")]
    #[display("above")]
    Above,

    /// Crossed downward through the reference series.
    #[serde(rename = "below")]
    #[display("below")]
    Below,

    /// Both series are defined but did not cross.
    #[serde(rename = "false")]
    #[display("false")]
    NoCross,

    /// Not enough history for the series to be compared.
    #[serde(rename = "none")]
    #[display("none")]
    Undefined,
}

impl From<Option<Cross>> for CrossSignal {
    fn from(cross: Option<Cross>) -> Self {
        match cross {
            Some(Cross::Above) => CrossSignal::Above,
            Some(Cross::Below) => CrossSignal::Below,
            None => CrossSignal::NoCross,
        }
    }
}

/// Append the `"PA crossed <sma_length> SMA"` signals of price crossing its simple moving
/// average, computing the `"<sma_length> MA"` column first if it is missing.
///
/// Rows with index `<= sma_length`, or where the moving average is undefined, are
/// [`CrossSignal::Undefined`].
pub fn add_price_sma_cross(
    sma_length: usize,
    table: &mut PriceTable,
    adjusted: bool,
) -> Result<(), TaError> {
    let ma_name = ensure_moving_average(sma_length, table, adjusted)?;
    let source = PriceField::select(adjusted);

    let prices = table.price_field(adjusted)?;
    let averages = table.indicator(&ma_name)?;

    let mut signals = Vec::with_capacity(prices.len());
    let mut previous: Option<(Decimal, Option<Decimal>)> = None;

    let rows = prices.iter().copied().zip(averages.iter().copied());
    for (index, (price, average)) in rows.enumerate() {
        let signal = match (average, previous) {
            (Some(average), Some((prev_price, Some(prev_average))))
                if index > sma_length && !average.is_zero() =>
            {
                CrossSignal::from(crossover(prev_price, prev_average, price, average))
            }
            _ => CrossSignal::Undefined,
        };

        signals.push(signal);
        previous = Some((price, average));
    }

    let name = ColumnName::price_sma_cross(sma_length);
    table.insert(name.clone(), Column::Signal(signals))?;

    debug!(column = %name, rows = table.len(), %source, "added price SMA crossover");
    Ok(())
}

/// Append the `"<sma_one> SMA crossed <sma_two> SMA"` signals of the first simple moving
/// average crossing the second, computing either `"<P> MA"` column first if it is missing.
///
/// Rows with index `<= max(sma_one, sma_two)` are [`CrossSignal::Undefined`]. Equal
/// lengths fail with [`TaError::InvalidArgument`] before the table is modified.
pub fn add_sma_cross_sma(
    sma_one: usize,
    sma_two: usize,
    table: &mut PriceTable,
    adjusted: bool,
) -> Result<(), TaError> {
    if sma_one == 0 || sma_two == 0 {
        return Err(TaError::zero_length("moving average length"));
    }
    if sma_one == sma_two {
        return Err(TaError::InvalidArgument(format!(
            "SMA crossover requires two different lengths, received {sma_one} twice"
        )));
    }

    let one_name = ensure_moving_average(sma_one, table, adjusted)?;
    let two_name = ensure_moving_average(sma_two, table, adjusted)?;
    let longer = sma_one.max(sma_two);

    let ones = table.indicator(&one_name)?;
    let twos = table.indicator(&two_name)?;

    let mut signals = Vec::with_capacity(ones.len());
    let mut previous: Option<(Option<Decimal>, Option<Decimal>)> = None;

    let rows = ones.iter().copied().zip(twos.iter().copied());
    for (index, (one, two)) in rows.enumerate() {
        let signal = match (one, two, previous) {
            (Some(one), Some(two), Some((Some(prev_one), Some(prev_two)))) if index > longer => {
                CrossSignal::from(crossover(prev_one, prev_two, one, two))
            }
            _ => CrossSignal::Undefined,
        };

        signals.push(signal);
        previous = Some((one, two));
    }

    let name = ColumnName::sma_cross_sma(sma_one, sma_two);
    table.insert(name.clone(), Column::Signal(signals))?;

    debug!(column = %name, rows = table.len(), longer, "added SMA crossover");
    Ok(())
}
