use daily_ta::{
    PriceTable, TaError,
    config::{IndicatorConfig, apply_all},
    logging::init_logging,
};
use tracing::info;

const DAILY_PRICES: &str = include_str!("data/daily_prices.json");

const INDICATORS: &str = r#"[
    {"kind": "moving_average", "length": 5},
    {"kind": "multi_day_change", "days": 3},
    {"kind": "pct_from_sma", "sma_length": 10},
    {"kind": "price_sma_cross", "sma_length": 10},
    {"kind": "sma_cross_sma", "sma_one": 5, "sma_two": 20, "adjusted": true}
]"#;

fn main() -> Result<(), TaError> {
    init_logging();

    let mut table = PriceTable::from_json(DAILY_PRICES)?;
    let configs = serde_json::from_str::<Vec<IndicatorConfig>>(INDICATORS)?;

    apply_all(&configs, &mut table)?;
    info!(
        rows = table.len(),
        columns = table.column_names().count(),
        "computed indicators"
    );

    println!("{}", serde_json::to_string_pretty(&table)?);
    Ok(())
}
