use crate::{
    column::{ColumnName, PriceField},
    crossover::CrossSignal,
    error::TaError,
};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer, ser::SerializeMap, ser::SerializeSeq};
use tracing::debug;

/// Values held by a single [`PriceTable`] column.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Observed prices (eg/ `close`, `adjClose`).
    Price(Vec<Decimal>),

    /// Derived numeric indicator. `None` marks a row where the indicator is not yet defined,
    /// and serialises as `0`.
    Indicator(Vec<Option<Decimal>>),

    /// Crossover signal per row.
    Signal(Vec<CrossSignal>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Price(values) => values.len(),
            Column::Indicator(values) => values.len(),
            Column::Signal(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Human readable name of the kind of values this [`Column`] holds.
    pub fn kind(&self) -> &'static str {
        match self {
            Column::Price(_) => "price",
            Column::Indicator(_) => "indicator",
            Column::Signal(_) => "signal",
        }
    }
}

/// Time-ordered table of daily price observations.
///
/// Row `i` chronologically precedes row `i + 1`, and rows are never reordered. Columns
/// are kept in insertion order and are unique by [`ColumnName`]; inserting a column under
/// an existing name replaces its values in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    rows: usize,
    dates: Option<Vec<DateTime<Utc>>>,
    columns: IndexMap<ColumnName, Column>,
}

impl PriceTable {
    /// Construct a new empty [`PriceTable`]. The first inserted column fixes the row count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a new [`PriceTable`] indexed by the provided trading days.
    pub fn with_dates(dates: Vec<DateTime<Utc>>) -> Self {
        Self {
            rows: dates.len(),
            dates: Some(dates),
            columns: IndexMap::new(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Trading day of each row, if the table was built with a date index.
    pub fn dates(&self) -> Option<&[DateTime<Utc>]> {
        self.dates.as_deref()
    }

    pub fn contains<Name>(&self, name: &Name) -> bool
    where
        Name: AsRef<str> + ?Sized,
    {
        self.columns.contains_key(name.as_ref())
    }

    pub fn column<Name>(&self, name: &Name) -> Option<&Column>
    where
        Name: AsRef<str> + ?Sized,
    {
        self.columns.get(name.as_ref())
    }

    /// Iterator over all [`ColumnName`]s in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &ColumnName> {
        self.columns.keys()
    }

    /// Insert a column of observed prices, eg/ `close`.
    pub fn insert_prices<Name, Values>(
        &mut self,
        name: Name,
        values: Values,
    ) -> Result<(), TaError>
    where
        Name: Into<ColumnName>,
        Values: IntoIterator<Item = Decimal>,
    {
        self.insert(name.into(), Column::Price(values.into_iter().collect()))
    }

    /// Insert a [`Column`], replacing any existing column with the same name.
    ///
    /// Fails with [`TaError::ColumnLength`] if the column length does not match the number
    /// of rows already in the table.
    pub fn insert(&mut self, name: ColumnName, column: Column) -> Result<(), TaError> {
        if self.dates.is_none() && self.columns.is_empty() {
            self.rows = column.len();
        } else if column.len() != self.rows {
            return Err(TaError::ColumnLength {
                name,
                expected: self.rows,
                actual: column.len(),
            });
        }

        if let Some(previous) = self.columns.insert(name.clone(), column) {
            debug!(
                column = %name,
                previous_kind = previous.kind(),
                "replaced existing PriceTable column"
            );
        }

        Ok(())
    }

    /// Observed prices of the [`PriceField`] selected by `adjusted`.
    pub fn price_field(&self, adjusted: bool) -> Result<&[Decimal], TaError> {
        self.prices(&PriceField::select(adjusted).column_name())
    }

    pub fn prices<Name>(&self, name: &Name) -> Result<&[Decimal], TaError>
    where
        Name: AsRef<str> + ?Sized,
    {
        match self.try_column(name)? {
            Column::Price(values) => Ok(values),
            other => Err(kind_error(name, "price", other)),
        }
    }

    pub fn indicator<Name>(&self, name: &Name) -> Result<&[Option<Decimal>], TaError>
    where
        Name: AsRef<str> + ?Sized,
    {
        match self.try_column(name)? {
            Column::Indicator(values) => Ok(values),
            other => Err(kind_error(name, "indicator", other)),
        }
    }

    pub fn signals<Name>(&self, name: &Name) -> Result<&[CrossSignal], TaError>
    where
        Name: AsRef<str> + ?Sized,
    {
        match self.try_column(name)? {
            Column::Signal(values) => Ok(values),
            other => Err(kind_error(name, "signal", other)),
        }
    }

    fn try_column<Name>(&self, name: &Name) -> Result<&Column, TaError>
    where
        Name: AsRef<str> + ?Sized,
    {
        self.column(name)
            .ok_or_else(|| TaError::MissingColumn(ColumnName::new(name.as_ref())))
    }
}

fn kind_error<Name>(name: &Name, expected: &'static str, actual: &Column) -> TaError
where
    Name: AsRef<str> + ?Sized,
{
    TaError::ColumnKind {
        name: ColumnName::new(name.as_ref()),
        expected,
        actual: actual.kind(),
    }
}

/// Serialises as a sequence of row objects, eg/
/// `[{"date": "...", "close": 10.0, "3 MA": 0.0, "PA crossed 3 SMA": "none"}, ...]`.
impl Serialize for PriceTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut rows = serializer.serialize_seq(Some(self.rows))?;
        for index in 0..self.rows {
            rows.serialize_element(&Row { table: self, index })?;
        }
        rows.end()
    }
}

struct Row<'a> {
    table: &'a PriceTable,
    index: usize,
}

impl Serialize for Row<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let date = self
            .table
            .dates
            .as_ref()
            .and_then(|dates| dates.get(self.index));

        let mut row = serializer.serialize_map(Some(
            self.table.columns.len() + usize::from(date.is_some()),
        ))?;

        if let Some(date) = date {
            row.serialize_entry("date", date)?;
        }

        for (name, column) in &self.table.columns {
            match column {
                Column::Price(values) => row.serialize_entry(name, &values[self.index])?,
                Column::Indicator(values) => {
                    row.serialize_entry(name, &values[self.index].unwrap_or(Decimal::ZERO))?
                }
                Column::Signal(values) => row.serialize_entry(name, &values[self.index])?,
            }
        }

        row.end()
    }
}
