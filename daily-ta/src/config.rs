use crate::{
    crossover::{add_price_sma_cross, add_sma_cross_sma},
    error::TaError,
    indicators::{add_moving_average, add_multi_day_change, add_pct_from_sma},
    table::PriceTable,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Configuration of a single indicator column to add to a [`PriceTable`].
///
/// eg/ `{"kind": "sma_cross_sma", "sma_one": 50, "sma_two": 200, "adjusted": true}`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IndicatorConfig {
    MovingAverage {
        length: usize,
        #[serde(default)]
        adjusted: bool,
    },
    MultiDayChange {
        days: usize,
        #[serde(default)]
        adjusted: bool,
    },
    PctFromSma {
        sma_length: usize,
        #[serde(default)]
        adjusted: bool,
    },
    PriceSmaCross {
        sma_length: usize,
        #[serde(default)]
        adjusted: bool,
    },
    SmaCrossSma {
        sma_one: usize,
        sma_two: usize,
        #[serde(default)]
        adjusted: bool,
    },
}

impl IndicatorConfig {
    /// Add the configured indicator column to the [`PriceTable`].
    pub fn apply(&self, table: &mut PriceTable) -> Result<(), TaError> {
        match *self {
            IndicatorConfig::MovingAverage { length, adjusted } => {
                add_moving_average(length, table, adjusted)
            }
            IndicatorConfig::MultiDayChange { days, adjusted } => {
                add_multi_day_change(days, table, adjusted)
            }
            IndicatorConfig::PctFromSma {
                sma_length,
                adjusted,
            } => add_pct_from_sma(sma_length, table, adjusted),
            IndicatorConfig::PriceSmaCross {
                sma_length,
                adjusted,
            } => add_price_sma_cross(sma_length, table, adjusted),
            IndicatorConfig::SmaCrossSma {
                sma_one,
                sma_two,
                adjusted,
            } => add_sma_cross_sma(sma_one, sma_two, table, adjusted),
        }
    }
}

/// Apply each [`IndicatorConfig`] in order, stopping at the first error.
pub fn apply_all<'a, Configs>(configs: Configs, table: &mut PriceTable) -> Result<(), TaError>
where
    Configs: IntoIterator<Item = &'a IndicatorConfig>,
{
    let mut applied = 0;
    for config in configs {
        config.apply(table)?;
        applied += 1;
    }

    info!(applied, rows = table.len(), "applied indicator configs");
    Ok(())
}
