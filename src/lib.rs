//! Gregorian to Badí' calendar conversion.
//!
//! Every conversion is computed by day-offset arithmetic from a single
//! calibration pair, [`ReferenceAnchor::STANDARD`]. On top of the raw
//! position the converter derives feast days (the first day of each month
//! slot) and French day descriptions resolved against a [`MonthCatalog`].
//!
//! ```
//! use badi_calendar::{CalendarConverter, GregorianDate};
//!
//! let converter = CalendarConverter::standard();
//! let date = GregorianDate::new(2025, 9, 27).unwrap();
//!
//! assert_eq!(converter.gregorian_to_badi(date).as_tuple(), (1, 11, 182));
//! assert_eq!(
//!     converter.feast_info(date).feast_name.as_deref(),
//!     Some("Fête de Mashíyyat")
//! );
//! ```

mod badi;
mod catalog;
mod config;
mod consts;
mod converter;
mod feast;
mod gregorian;
mod locale;
mod prelude;

pub use badi::{BadiDate, BadiDateError, DayKind};
pub use catalog::{BadiMonth, CatalogError, MonthCatalog};
pub use config::{ConverterConfig, ReferenceAnchor, YearLength, is_badi_leap_year};
pub use consts::*;
pub use converter::{CalendarConverter, DayInfo};
pub use feast::FeastInfo;
pub use gregorian::{GregorianDate, days_in_month, is_leap_year};
pub use locale::ordinal_suffix;

use crate::prelude::*;

/// Errors raised while building a [`GregorianDate`].
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}
