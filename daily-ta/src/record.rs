use crate::{column::ColumnName, error::TaError, table::PriceTable};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Daily price observation for a single trading day, keyed the way the Tiingo daily prices
/// endpoint keys them.
///
/// eg/ `{"date": "2019-01-02T00:00:00.000Z", "close": 157.92, "adjClose": 38.3, ...}`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    pub date: DateTime<Utc>,
    pub close: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<Decimal>,
    pub adj_close: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adj_high: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adj_low: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adj_open: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adj_volume: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub div_cash: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_factor: Option<Decimal>,
}

type OptionalField = (&'static str, fn(&PriceRecord) -> Option<Decimal>);

const OPTIONAL_FIELDS_PRE_ADJUSTED: [OptionalField; 4] = [
    ("high", |record| record.high),
    ("low", |record| record.low),
    ("open", |record| record.open),
    ("volume", |record| record.volume),
];

const OPTIONAL_FIELDS_POST_ADJUSTED: [OptionalField; 6] = [
    ("adjHigh", |record| record.adj_high),
    ("adjLow", |record| record.adj_low),
    ("adjOpen", |record| record.adj_open),
    ("adjVolume", |record| record.adj_volume),
    ("divCash", |record| record.div_cash),
    ("splitFactor", |record| record.split_factor),
];

impl PriceTable {
    /// Construct a [`PriceTable`] indexed by trading day from records ordered oldest first.
    ///
    /// `close` and `adjClose` are always present. Optional fields become columns only when
    /// every record provides them.
    pub fn from_records(records: &[PriceRecord]) -> Result<Self, TaError> {
        let mut table =
            PriceTable::with_dates(records.iter().map(|record| record.date).collect());

        table.insert_prices("close", records.iter().map(|record| record.close))?;
        insert_optional(&mut table, records, &OPTIONAL_FIELDS_PRE_ADJUSTED)?;
        table.insert_prices("adjClose", records.iter().map(|record| record.adj_close))?;
        insert_optional(&mut table, records, &OPTIONAL_FIELDS_POST_ADJUSTED)?;

        debug!(
            rows = table.len(),
            columns = table.column_names().count(),
            "built PriceTable from records"
        );
        Ok(table)
    }

    /// Construct a [`PriceTable`] from a JSON array of [`PriceRecord`]s.
    pub fn from_json(json: &str) -> Result<Self, TaError> {
        let records = serde_json::from_str::<Vec<PriceRecord>>(json)?;
        Self::from_records(&records)
    }
}

fn insert_optional(
    table: &mut PriceTable,
    records: &[PriceRecord],
    fields: &[OptionalField],
) -> Result<(), TaError> {
    if records.is_empty() {
        return Ok(());
    }

    for (name, field) in fields {
        let values = records
            .iter()
            .map(|record| field(record))
            .collect::<Option<Vec<_>>>();

        if let Some(values) = values {
            table.insert_prices(ColumnName::new(*name), values)?;
        }
    }

    Ok(())
}
