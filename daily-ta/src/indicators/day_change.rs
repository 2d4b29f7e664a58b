use crate::{
    column::{ColumnName, PriceField},
    error::TaError,
    indicators::pct_change,
    table::{Column, PriceTable},
};
use tracing::debug;

/// Append the `"<days> DAY CHANGE"` percent change from each row's price to the price
/// `days` rows ahead.
///
/// The final `days` rows have no future price and hold the undefined sentinel.
pub fn add_multi_day_change(
    days: usize,
    table: &mut PriceTable,
    adjusted: bool,
) -> Result<(), TaError> {
    if days == 0 {
        return Err(TaError::zero_length("multi day change horizon"));
    }

    let source = PriceField::select(adjusted);
    let prices = table.price_field(adjusted)?;

    let changes = (0..prices.len())
        .map(|index| {
            match index.checked_add(days).and_then(|future| prices.get(future)) {
                Some(future) => pct_change(prices[index], *future).map(Some),
                None => Ok(None),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    let name = ColumnName::multi_day_change(days);
    table.insert(name.clone(), Column::Indicator(changes))?;

    debug!(column = %name, rows = table.len(), %source, "added multi day change");
    Ok(())
}
