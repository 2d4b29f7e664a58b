#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    unused_crate_dependencies,
    unused_extern_crates,
    clippy::unused_self,
    clippy::useless_let_if_seq,
    missing_debug_implementations,
    rust_2018_idioms,
    rust_2024_compatibility
)]

//! Technical analysis over daily price tables.
//!
//! A [`PriceTable`] holds time-ordered daily price rows (oldest first) as named columns.
//! Each indicator computer borrows the table mutably and appends exactly one derived
//! column:
//!
//! * [`add_moving_average`]: `"<P> MA"` trailing simple moving average.
//! * [`add_multi_day_change`]: `"<D> DAY CHANGE"` forward looking percent change.
//! * [`add_pct_from_sma`]: `"Diff from <P> SMA"` percent deviation of price from its SMA.
//! * [`add_price_sma_cross`]: `"PA crossed <P> SMA"` price vs. SMA crossover signals.
//! * [`add_sma_cross_sma`]: `"<P1> SMA crossed <P2> SMA"` SMA vs. SMA crossover signals.
//!
//! Computers that depend on a moving average column create it on demand if the table does
//! not already contain it.
//!
//! ## Example
//! ```
//! use daily_ta::{PriceTable, add_moving_average, column::ColumnName};
//! use rust_decimal::Decimal;
//!
//! let mut table = PriceTable::new();
//! table
//!     .insert_prices("close", [10, 11, 9, 12, 13].map(Decimal::from))
//!     .unwrap();
//!
//! add_moving_average(3, &mut table, false).unwrap();
//!
//! let averages = table.indicator(&ColumnName::moving_average(3)).unwrap();
//! assert_eq!(averages[0], None);
//! assert_eq!(averages[2], Some(Decimal::from(10)));
//! ```

/// Column naming conventions and the `close` / `adjClose` price selector.
pub mod column;

/// Serde driven indicator configuration.
pub mod config;

/// Crossover signal detection.
pub mod crossover;

/// All errors generated in `daily-ta`.
pub mod error;

/// Moving average, period change and deviation computers.
pub mod indicators;

/// Default `tracing` subscriber initialisation.
pub mod logging;

/// Daily price records as delivered by the market data source.
pub mod record;

/// [`PriceTable`] and its column storage.
pub mod table;

pub use crossover::{CrossSignal, add_price_sma_cross, add_sma_cross_sma};
pub use error::TaError;
pub use indicators::{
    add_moving_average, add_multi_day_change, add_pct_from_sma, pct_change,
    moving_average::SimpleMovingAverage,
};
pub use table::PriceTable;
