use crate::{
    column::{ColumnName, PriceField},
    error::TaError,
    table::{Column, PriceTable},
};
use rust_decimal::Decimal;
use std::collections::VecDeque;
use tracing::debug;

/// Simple moving average over a bounded window of the most recent values.
#[derive(Debug, Clone)]
pub struct SimpleMovingAverage {
    period: usize,
    values: VecDeque<Decimal>,
    sum: Decimal,
}

impl SimpleMovingAverage {
    /// Create a new SMA with the given period.
    ///
    /// Fails with [`TaError::InvalidArgument`] if `period` is zero.
    pub fn new(period: usize) -> Result<Self, TaError> {
        if period == 0 {
            return Err(TaError::zero_length("moving average length"));
        }

        Ok(Self {
            period,
            values: VecDeque::with_capacity(period),
            sum: Decimal::ZERO,
        })
    }

    /// Push a new value into the window, returning the latest average once the window
    /// holds `period` values.
    ///
    /// Fails with [`TaError::Overflow`] if the window sum does not fit in a [`Decimal`], in
    /// which case the window is left unchanged.
    pub fn update(&mut self, value: Decimal) -> Result<Option<Decimal>, TaError> {
        let mut sum = self.sum.checked_add(value).ok_or(TaError::Overflow)?;
        if self.values.len() == self.period {
            if let Some(old) = self.values.front() {
                sum = sum.checked_sub(*old).ok_or(TaError::Overflow)?;
            }
            self.values.pop_front();
        }

        self.values.push_back(value);
        self.sum = sum;
        Ok(self.average())
    }

    /// Current average, if the window is full.
    pub fn average(&self) -> Option<Decimal> {
        (self.values.len() == self.period).then(|| self.sum / Decimal::from(self.period))
    }

    pub fn period(&self) -> usize {
        self.period
    }
}

/// Append the `"<length> MA"` trailing simple moving average of the selected price column.
///
/// Rows before index `length - 1` hold the undefined sentinel.
pub fn add_moving_average(
    length: usize,
    table: &mut PriceTable,
    adjusted: bool,
) -> Result<(), TaError> {
    let mut sma = SimpleMovingAverage::new(length)?;
    let source = PriceField::select(adjusted);

    let averages = table
        .price_field(adjusted)?
        .iter()
        .map(|price| sma.update(*price))
        .collect::<Result<Vec<_>, _>>()?;

    let name = ColumnName::moving_average(length);
    table.insert(name.clone(), Column::Indicator(averages))?;

    debug!(column = %name, rows = table.len(), %source, "added moving average");
    Ok(())
}

/// Add the `"<length> MA"` column unless the table already contains one by that name.
pub(crate) fn ensure_moving_average(
    length: usize,
    table: &mut PriceTable,
    adjusted: bool,
) -> Result<ColumnName, TaError> {
    let name = ColumnName::moving_average(length);
    if !table.contains(&name) {
        debug!(column = %name, "moving average column missing, computing");
        add_moving_average(length, table, adjusted)?;
    }
    Ok(name)
}
