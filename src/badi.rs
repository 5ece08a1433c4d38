use crate::consts::{
    BADI_DAYS_PER_MONTH, BADI_LAST_MONTH, BADI_MONTHS, BADI_MONTHS_BEFORE_INTERCALARY,
    INTERCALARY_DAYS_LEAP, INTERCALARY_START_OFFSET, MIN_DAY,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which part of the Badí' year a day belongs to.
///
/// The intercalary days and the month of 'Alá share month slot 19, so the
/// `(day, month, year)` triple alone cannot tell them apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// A day of one of the 19 named months
    #[default]
    Ordinary,
    /// One of the intercalary days (Ayyám-i-Há) preceding 'Alá
    Intercalary,
}

/// A position in the Badí' calendar.
///
/// Only produced by [`crate::CalendarConverter`] or by the checked
/// constructors below; never persisted by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{day}/{month}/{year}")]
#[serde(try_from = "RawBadiDate", into = "RawBadiDate")]
pub struct BadiDate {
    day:   u8,
    month: u8,
    year:  i32,
    kind:  DayKind,
}

/// Error for a Badí' position that does not exist in any year.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BadiDateError {
    #[error("Invalid Badí' month: {month} (must be 1-{})", BADI_MONTHS)]
    InvalidMonth { month: u8 },

    #[error("Invalid Badí' day: {day} (must be 1-{})", BADI_DAYS_PER_MONTH)]
    InvalidDay { day: u8 },

    #[error("Invalid intercalary day: {day} (must be 1-{})", INTERCALARY_DAYS_LEAP)]
    InvalidIntercalaryDay { day: u8 },

    #[error("Intercalary days belong to month {}, found {month}", BADI_LAST_MONTH)]
    IntercalaryMonth { month: u8 },
}

/// Unchecked wire form of [`BadiDate`]
#[derive(Serialize, Deserialize)]
struct RawBadiDate {
    day:   u8,
    month: u8,
    year:  i32,
    #[serde(default)]
    kind:  DayKind,
}

impl TryFrom<RawBadiDate> for BadiDate {
    type Error = BadiDateError;

    fn try_from(raw: RawBadiDate) -> Result<Self, Self::Error> {
        match raw.kind {
            DayKind::Ordinary => {
                if raw.month < 1 || raw.month > BADI_MONTHS {
                    return Err(BadiDateError::InvalidMonth { month: raw.month });
                }
                Self::new(raw.day, raw.month, raw.year)
                    .ok_or(BadiDateError::InvalidDay { day: raw.day })
            }
            DayKind::Intercalary => {
                if raw.month != BADI_LAST_MONTH {
                    return Err(BadiDateError::IntercalaryMonth { month: raw.month });
                }
                Self::intercalary(raw.day, raw.year)
                    .ok_or(BadiDateError::InvalidIntercalaryDay { day: raw.day })
            }
        }
    }
}

impl From<BadiDate> for RawBadiDate {
    fn from(date: BadiDate) -> Self {
        Self {
            day:   date.day,
            month: date.month,
            year:  date.year,
            kind:  date.kind,
        }
    }
}

impl BadiDate {
    /// Creates a day of a named month (1..=19).
    /// Returns `None` if the month or day is out of range.
    pub const fn new(day: u8, month: u8, year: i32) -> Option<Self> {
        if month < 1 || month > BADI_MONTHS || day < MIN_DAY || day > BADI_DAYS_PER_MONTH {
            return None;
        }
        Some(Self::from_parts(day, month, year, DayKind::Ordinary))
    }

    /// Creates an intercalary day.
    ///
    /// Accepts days up to the leap-year count; whether day 5 exists in `year`
    /// depends on the year-length rule and is checked on conversion.
    pub const fn intercalary(day: u8, year: i32) -> Option<Self> {
        if day < MIN_DAY || day > INTERCALARY_DAYS_LEAP {
            return None;
        }
        Some(Self::from_parts(day, BADI_LAST_MONTH, year, DayKind::Intercalary))
    }

    pub(crate) const fn from_parts(day: u8, month: u8, year: i32, kind: DayKind) -> Self {
        Self {
            day,
            month,
            year,
            kind,
        }
    }

    /// Maps an offset within the year (0-based) to a Badí' position.
    ///
    /// Offsets below 342 fall in months 1..=18; the next `intercalary_days`
    /// offsets are intercalary days in slot 19; the rest is 'Alá, also slot 19.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn from_year_offset(offset: u16, year: i32, intercalary_days: u8) -> Self {
        let per_month = BADI_DAYS_PER_MONTH as u16;
        if offset < INTERCALARY_START_OFFSET {
            Self::from_parts(
                (offset % per_month + 1) as u8,
                (offset / per_month + 1) as u8,
                year,
                DayKind::Ordinary,
            )
        } else if offset < INTERCALARY_START_OFFSET + intercalary_days as u16 {
            Self::from_parts(
                (offset - INTERCALARY_START_OFFSET + 1) as u8,
                BADI_LAST_MONTH,
                year,
                DayKind::Intercalary,
            )
        } else {
            Self::from_parts(
                (offset - INTERCALARY_START_OFFSET - intercalary_days as u16 + 1) as u8,
                BADI_LAST_MONTH,
                year,
                DayKind::Ordinary,
            )
        }
    }

    /// 0-based offset within the year, given that year's intercalary day count.
    /// Returns `None` if the position does not exist in such a year.
    pub(crate) const fn year_offset(self, intercalary_days: u8) -> Option<u16> {
        if self.day < MIN_DAY
            || self.day > BADI_DAYS_PER_MONTH
            || self.month < 1
            || self.month > BADI_MONTHS
        {
            return None;
        }
        let day = self.day as u16 - 1;
        match self.kind {
            DayKind::Intercalary => {
                if self.day > intercalary_days {
                    None
                } else {
                    Some(INTERCALARY_START_OFFSET + day)
                }
            }
            DayKind::Ordinary if self.month <= BADI_MONTHS_BEFORE_INTERCALARY => {
                Some((self.month as u16 - 1) * BADI_DAYS_PER_MONTH as u16 + day)
            }
            DayKind::Ordinary => Some(INTERCALARY_START_OFFSET + intercalary_days as u16 + day),
        }
    }

    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Month slot 1..=19 (19 for both the intercalary days and 'Alá)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn kind(self) -> DayKind {
        self.kind
    }

    pub const fn is_intercalary(self) -> bool {
        matches!(self.kind, DayKind::Intercalary)
    }

    /// First day of a month slot. Intercalary day 1 counts too, since it
    /// occupies slot 19.
    pub const fn is_feast(self) -> bool {
        self.day == MIN_DAY
    }

    /// `(day, month, year)` as exposed to callers
    pub const fn as_tuple(self) -> (u8, u8, i32) {
        (self.day, self.month, self.year)
    }

    /// Position inside the year that orders correctly for any intercalary
    /// count: 'Alá is placed after the longest possible intercalary period.
    const fn sort_key(self) -> (i32, u16) {
        let offset = match self.year_offset(INTERCALARY_DAYS_LEAP) {
            Some(offset) => offset,
            None => INTERCALARY_START_OFFSET,
        };
        (self.year, offset)
    }
}

impl PartialOrd for BadiDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BadiDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl From<BadiDate> for (u8, u8, i32) {
    fn from(date: BadiDate) -> Self {
        date.as_tuple()
    }
}
