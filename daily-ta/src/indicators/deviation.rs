use crate::{
    column::{ColumnName, PriceField},
    error::TaError,
    indicators::{moving_average::ensure_moving_average, pct_change},
    table::{Column, PriceTable},
};
use tracing::debug;

/// Append the `"Diff from <sma_length> SMA"` percent deviation of price from its simple
/// moving average, computing the `"<sma_length> MA"` column first if it is missing.
///
/// Rows where the moving average is undefined (or zero) hold the undefined sentinel.
pub fn add_pct_from_sma(
    sma_length: usize,
    table: &mut PriceTable,
    adjusted: bool,
) -> Result<(), TaError> {
    let ma_name = ensure_moving_average(sma_length, table, adjusted)?;
    let source = PriceField::select(adjusted);

    let prices = table.price_field(adjusted)?;
    let averages = table.indicator(&ma_name)?;

    let differences = prices
        .iter()
        .zip(averages)
        .map(|(price, average)| match average {
            Some(average) if !average.is_zero() => pct_change(*average, *price).map(Some),
            _ => Ok(None),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let name = ColumnName::pct_from_sma(sma_length);
    table.insert(name.clone(), Column::Indicator(differences))?;

    debug!(column = %name, rows = table.len(), %source, "added percent from SMA");
    Ok(())
}
