use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::badi::BadiDate;
use crate::catalog::{BadiMonth, CatalogError, MonthCatalog};
use crate::config::{ConverterConfig, ReferenceAnchor};
use crate::consts::{
    BADI_DAYS_PER_MONTH, BADI_GREGORIAN_YEAR_OFFSET, BADI_LAST_MONTH,
    BADI_MONTHS_BEFORE_INTERCALARY, BADI_YEAR_DAYS, MAX_YEAR, MIN_DAY,
};
use crate::feast::FeastInfo;
use crate::gregorian::GregorianDate;
use crate::{ParseError, locale};

/// Badí' years that can map into Gregorian years 1..=9999 under either
/// year-length rule (the fixed rule drifts about a day every four years).
const SUPPORTED_BADI_YEARS: RangeInclusive<i32> =
    (1 - BADI_GREGORIAN_YEAR_OFFSET - 16)..=(MAX_YEAR as i32 - BADI_GREGORIAN_YEAR_OFFSET + 16);

/// Longest possible wait for a feast: a year plus a month, reached only when
/// catalog entries are missing.
const MAX_FEAST_SEARCH_DAYS: i64 = BADI_YEAR_DAYS as i64 + BADI_DAYS_PER_MONTH as i64;

/// Everything known about one Gregorian day, as returned by the date endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayInfo {
    pub gregorian_date: GregorianDate,
    pub badi_date:      BadiDate,
    pub formatted_info: String,
    pub feast:          FeastInfo,
}

/// Converts Gregorian dates to Badí' positions relative to
/// [`ReferenceAnchor::STANDARD`] and derives feast and description data.
///
/// The month catalog is an immutable snapshot given at construction; the
/// converter holds no other state and can be shared freely between threads.
///
/// # Example
///
/// ```
/// use badi_calendar::{CalendarConverter, GregorianDate};
///
/// let converter = CalendarConverter::standard();
/// let date: GregorianDate = "2024-04-28".parse().unwrap();
///
/// assert_eq!(converter.gregorian_to_badi(date).as_tuple(), (1, 3, 181));
/// assert_eq!(
///     converter.describe_day(date),
///     "28 AVR - 1 Jamál (Beauté - 3ème mois)"
/// );
/// assert!(converter.feast_info(date).is_feast);
/// ```
#[derive(Debug, Clone)]
pub struct CalendarConverter {
    catalog: MonthCatalog,
    config:  ConverterConfig,
}

impl CalendarConverter {
    /// Creates a converter with the default (fixed 365-day) configuration.
    pub fn new(catalog: MonthCatalog) -> Self {
        Self::with_config(catalog, ConverterConfig::default())
    }

    pub fn with_config(catalog: MonthCatalog, config: ConverterConfig) -> Self {
        if !catalog.is_complete() {
            warn!(missing = ?catalog.missing(), "month catalog is incomplete");
        }
        debug!(
            months = catalog.len(),
            year_length = ?config.year_length(),
            "calendar converter ready"
        );
        Self { catalog, config }
    }

    /// Converter over [`MonthCatalog::standard`] with default configuration
    pub fn standard() -> Self {
        Self::new(MonthCatalog::standard())
    }

    pub const fn catalog(&self) -> &MonthCatalog {
        &self.catalog
    }

    pub const fn config(&self) -> ConverterConfig {
        self.config
    }

    pub const fn anchor(&self) -> ReferenceAnchor {
        ReferenceAnchor::STANDARD
    }

    /// Badí' position of a Gregorian date.
    ///
    /// The signed day distance to the anchor is added to the anchor's offset
    /// within its year, then folded into a year and a day of that year.
    pub fn gregorian_to_badi(&self, date: GregorianDate) -> BadiDate {
        let anchor = self.anchor();
        let rule = self.config.year_length();
        let total_offset = anchor.year_offset() + anchor.gregorian().days_until(date);
        let (year, offset) = rule.normalize(anchor.badi().year(), total_offset);
        let badi = BadiDate::from_year_offset(offset, year, rule.intercalary_days(year));
        trace!(%date, %badi, intercalary = badi.is_intercalary(), "converted");
        badi
    }

    /// Gregorian date of a Badí' position.
    ///
    /// Returns `None` if the position does not exist in its year (e.g. a fifth
    /// intercalary day in an ordinary year) or falls outside years 1..=9999.
    pub fn badi_to_gregorian(&self, date: BadiDate) -> Option<GregorianDate> {
        if !SUPPORTED_BADI_YEARS.contains(&date.year()) {
            return None;
        }
        let anchor = self.anchor();
        let rule = self.config.year_length();
        let offset = date.year_offset(rule.intercalary_days(date.year()))?;
        let year_start = anchor.year_start_day_number()
            + rule.days_between_year_starts(anchor.badi().year(), date.year());
        GregorianDate::from_day_number(year_start + i64::from(offset))
    }

    /// French description of a day, e.g.
    /// `"27 SEP - 1 Mashíyyat (Volonté - 11ème mois)"`.
    ///
    /// # Errors
    /// Returns `CatalogError::MissingMonth` if the catalog lacks the month.
    pub fn try_describe_day(&self, date: GregorianDate) -> Result<String, CatalogError> {
        let badi = self.gregorian_to_badi(date);
        let month = self.catalog.require(badi.month())?;
        Ok(locale::day_description(date, badi, month))
    }

    /// Like [`Self::try_describe_day`], but a missing month yields a
    /// diagnostic text instead of an error.
    pub fn describe_day(&self, date: GregorianDate) -> String {
        let badi = self.gregorian_to_badi(date);
        if let Some(month) = self.catalog.get(badi.month()) {
            locale::day_description(date, badi, month)
        } else {
            warn!(%date, month = badi.month(), "cannot describe day: month missing from catalog");
            locale::missing_month_description(date, badi)
        }
    }

    /// Feast data for a day: a feast is the first day of any month slot.
    ///
    /// A feast whose month is missing from the catalog is reported as a
    /// non-feast carrying an error note.
    pub fn feast_info(&self, date: GregorianDate) -> FeastInfo {
        let badi = self.gregorian_to_badi(date);
        if !badi.is_feast() {
            return FeastInfo::none();
        }
        match self.catalog.require(badi.month()) {
            Ok(month) => FeastInfo::feast(month),
            Err(err) => {
                warn!(%date, %err, "feast lookup failed");
                FeastInfo::lookup_failed(&err)
            }
        }
    }

    /// Conversion, description and feast data in one value
    pub fn day_info(&self, date: GregorianDate) -> DayInfo {
        DayInfo {
            gregorian_date: date,
            badi_date:      self.gregorian_to_badi(date),
            formatted_info: self.describe_day(date),
            feast:          self.feast_info(date),
        }
    }

    /// Gregorian dates of the feasts of `badi_year`, in calendar order.
    ///
    /// Includes the first intercalary day, which occupies slot 19 and so is
    /// reported as a feast of 'Alá. Months missing from the catalog are skipped.
    pub fn feasts_in_year(&self, badi_year: i32) -> Vec<(GregorianDate, &BadiMonth)> {
        (1..=BADI_MONTHS_BEFORE_INTERCALARY)
            .filter_map(|month| BadiDate::new(MIN_DAY, month, badi_year))
            .chain(BadiDate::intercalary(MIN_DAY, badi_year))
            .chain(BadiDate::new(MIN_DAY, BADI_LAST_MONTH, badi_year))
            .filter_map(|badi| {
                let date = self.badi_to_gregorian(badi)?;
                let month = self.catalog.get(badi.month())?;
                Some((date, month))
            })
            .collect()
    }

    /// First feast on or after `from` whose month is in the catalog
    pub fn next_feast(&self, from: GregorianDate) -> Option<(GregorianDate, &BadiMonth)> {
        (0..=MAX_FEAST_SEARCH_DAYS)
            .map_while(|days| from.add_days(days))
            .find_map(|date| {
                let badi = self.gregorian_to_badi(date);
                if !badi.is_feast() {
                    return None;
                }
                self.catalog.get(badi.month()).map(|month| (date, month))
            })
    }

    /// [`Self::gregorian_to_badi`] for unvalidated components
    ///
    /// # Errors
    /// Returns `ParseError` if the components do not form a valid date.
    pub fn gregorian_to_badi_ymd(
        &self,
        year: u16,
        month: u8,
        day: u8,
    ) -> Result<BadiDate, ParseError> {
        Ok(self.gregorian_to_badi(GregorianDate::new(year, month, day)?))
    }

    /// [`Self::describe_day`] for unvalidated components
    ///
    /// # Errors
    /// Returns `ParseError` if the components do not form a valid date.
    pub fn describe_day_ymd(&self, year: u16, month: u8, day: u8) -> Result<String, ParseError> {
        Ok(self.describe_day(GregorianDate::new(year, month, day)?))
    }

    /// [`Self::feast_info`] for unvalidated components
    ///
    /// # Errors
    /// Returns `ParseError` if the components do not form a valid date.
    pub fn feast_info_ymd(&self, year: u16, month: u8, day: u8) -> Result<FeastInfo, ParseError> {
        Ok(self.feast_info(GregorianDate::new(year, month, day)?))
    }
}

impl Default for CalendarConverter {
    fn default() -> Self {
        Self::standard()
    }
}
