//! Converter configuration and the reference anchor.

use crate::badi::{BadiDate, DayKind};
use crate::consts::{
    BADI_DAYS_PER_MONTH, BADI_GREGORIAN_YEAR_OFFSET, BADI_YEAR_DAYS, INTERCALARY_DAYS,
    INTERCALARY_DAYS_LEAP,
};
use crate::gregorian::{GregorianDate, is_leap_year};
use serde::{Deserialize, Serialize};

/// The calibration pair every conversion is computed from.
///
/// 2025-09-27 is 1 Mashíyyat (month 11) 182 B.E. Changing it shifts every
/// derived date, so it is a constant rather than a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceAnchor {
    gregorian: GregorianDate,
    badi:      BadiDate,
}

impl ReferenceAnchor {
    pub const STANDARD: Self = Self {
        gregorian: GregorianDate::from_parts_unchecked(2025, 9, 27),
        badi:      BadiDate::from_parts(1, 11, 182, DayKind::Ordinary),
    };

    pub const fn gregorian(&self) -> GregorianDate {
        self.gregorian
    }

    pub const fn badi(&self) -> BadiDate {
        self.badi
    }

    /// 0-based offset of the anchor within its Badí' year
    pub const fn year_offset(&self) -> i64 {
        (self.badi.day() as i64 - 1) + (self.badi.month() as i64 - 1) * BADI_DAYS_PER_MONTH as i64
    }

    /// Day number of the first day of the anchor's Badí' year
    pub const fn year_start_day_number(&self) -> i64 {
        self.gregorian.day_number() - self.year_offset()
    }
}

/// How long a Badí' year is when crossing year boundaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearLength {
    /// Every year is 365 days with 4 intercalary days.
    ///
    /// Drifts by one day per Gregorian leap year away from the anchor.
    #[default]
    Fixed,
    /// Leap years have 366 days and 5 intercalary days.
    ///
    /// Badí' year `y` is a leap year when the Gregorian February it spans
    /// (in year `y + 1844`) has 29 days.
    IntercalaryAware,
}

impl YearLength {
    /// Number of intercalary days in `badi_year`
    pub const fn intercalary_days(self, badi_year: i32) -> u8 {
        match self {
            Self::Fixed => INTERCALARY_DAYS,
            Self::IntercalaryAware => {
                if is_badi_leap_year(badi_year) {
                    INTERCALARY_DAYS_LEAP
                } else {
                    INTERCALARY_DAYS
                }
            }
        }
    }

    /// Number of days in `badi_year`
    pub const fn days_in_year(self, badi_year: i32) -> i64 {
        BADI_YEAR_DAYS as i64 + (self.intercalary_days(badi_year) - INTERCALARY_DAYS) as i64
    }

    /// Splits an offset counted from the start of `base_year` into a year and
    /// an offset inside that year, walking whole years in either direction.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn normalize(self, base_year: i32, mut offset: i64) -> (i32, u16) {
        let mut year = base_year;
        match self {
            Self::Fixed => {
                let days = BADI_YEAR_DAYS as i64;
                year += offset.div_euclid(days) as i32;
                offset = offset.rem_euclid(days);
            }
            Self::IntercalaryAware => {
                while offset < 0 {
                    year -= 1;
                    offset += self.days_in_year(year);
                }
                while offset >= self.days_in_year(year) {
                    offset -= self.days_in_year(year);
                    year += 1;
                }
            }
        }
        (year, offset as u16)
    }

    /// Days from the start of `base_year` to the start of `year`
    pub fn days_between_year_starts(self, base_year: i32, year: i32) -> i64 {
        match self {
            Self::Fixed => (i64::from(year) - i64::from(base_year)) * BADI_YEAR_DAYS as i64,
            Self::IntercalaryAware => {
                if year >= base_year {
                    (base_year..year).map(|y| self.days_in_year(y)).sum()
                } else {
                    -(year..base_year).map(|y| self.days_in_year(y)).sum::<i64>()
                }
            }
        }
    }
}

/// `true` when Badí' year `badi_year` contains a Gregorian 29 February
pub const fn is_badi_leap_year(badi_year: i32) -> bool {
    is_leap_year(badi_year as i64 + BADI_GREGORIAN_YEAR_OFFSET as i64 + 1)
}

/// Settings for a [`crate::CalendarConverter`].
///
/// # Example
///
/// ```
/// use badi_calendar::{ConverterConfig, YearLength};
///
/// let config = ConverterConfig::new().with_year_length(YearLength::IntercalaryAware);
/// assert_eq!(config.year_length(), YearLength::IntercalaryAware);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    year_length: YearLength,
}

impl ConverterConfig {
    /// Defaults: fixed 365-day years.
    pub const fn new() -> Self {
        Self {
            year_length: YearLength::Fixed,
        }
    }

    /// Sets the year-length rule.
    pub const fn with_year_length(mut self, year_length: YearLength) -> Self {
        self.year_length = year_length;
        self
    }

    pub const fn year_length(&self) -> YearLength {
        self.year_length
    }
}
