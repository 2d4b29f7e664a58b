use derive_more::Display;
use serde::{Deserialize, Serialize};
use smol_str::{SmolStr, format_smolstr};
use std::borrow::Borrow;

/// New type representing the name of a [`PriceTable`](crate::PriceTable) column.
///
/// eg/ "close", "adjClose", "20 MA", "Diff from 50 SMA", etc.
#[derive(
    Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Display, Deserialize, Serialize,
)]
pub struct ColumnName(SmolStr);

impl ColumnName {
    /// Construct a new [`ColumnName`] from the provided `Into<SmolStr>` value.
    pub fn new<S>(name: S) -> Self
    where
        S: Into<SmolStr>,
    {
        Self(name.into())
    }

    /// `"<length> MA"`
    pub fn moving_average(length: usize) -> Self {
        Self(format_smolstr!("{length} MA"))
    }

    /// `"<days> DAY CHANGE"`
    pub fn multi_day_change(days: usize) -> Self {
        Self(format_smolstr!("{days} DAY CHANGE"))
    }

    /// `"Diff from <sma_length> SMA"`
    pub fn pct_from_sma(sma_length: usize) -> Self {
        Self(format_smolstr!("Diff from {sma_length} SMA"))
    }

    /// `"PA crossed <sma_length> SMA"`
    pub fn price_sma_cross(sma_length: usize) -> Self {
        Self(format_smolstr!("PA crossed {sma_length} SMA"))
    }

    /// `"<sma_one> SMA crossed <sma_two> SMA"`
    pub fn sma_cross_sma(sma_one: usize, sma_two: usize) -> Self {
        Self(format_smolstr!("{sma_one} SMA crossed {sma_two} SMA"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ColumnName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ColumnName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ColumnName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<PriceField> for ColumnName {
    fn from(field: PriceField) -> Self {
        Self::new(field.as_str())
    }
}

/// Price field an indicator reads from.
#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Default,
    Display,
    Deserialize,
    Serialize,
)]
pub enum PriceField {
    /// Raw closing price.
    #[default]
    #[serde(rename = "close")]
    #[display("close")]
    Close,

    /// Split and dividend adjusted closing price.
    #[serde(rename = "adjClose")]
    #[display("adjClose")]
    AdjClose,
}

impl PriceField {
    /// Select the split adjusted close when `adjusted` is true, otherwise the raw close.
    pub fn select(adjusted: bool) -> Self {
        match adjusted {
            true => PriceField::AdjClose,
            false => PriceField::Close,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceField::Close => "close",
            PriceField::AdjClose => "adjClose",
        }
    }

    pub fn column_name(&self) -> ColumnName {
        ColumnName::from(*self)
    }
}
