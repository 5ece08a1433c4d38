use crate::catalog::{BadiMonth, CatalogError};
use serde::{Deserialize, Serialize};

/// Feast metadata for one day, shaped for the JSON the API returns.
///
/// Absent fields are skipped when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeastInfo {
    pub is_feast:          bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feast_name:        Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_name:        Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_number:      Option<u8>,
    /// Set when the month could not be resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error:             Option<String>,
}

impl FeastInfo {
    /// The feast of `month`
    pub fn feast(month: &BadiMonth) -> Self {
        Self {
            is_feast:          true,
            feast_name:        Some(month.feast_name()),
            month_name:        Some(month.name().to_owned()),
            month_translation: Some(month.translation().to_owned()),
            month_number:      Some(month.number()),
            error:             None,
        }
    }

    /// An ordinary day
    pub fn none() -> Self {
        Self::default()
    }

    /// A would-be feast whose month is missing from the catalog
    pub fn lookup_failed(error: &CatalogError) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::default()
        }
    }
}
