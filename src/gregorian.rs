use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP,
    FRENCH_MONTH_ABBREVIATIONS, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY,
};
use crate::ParseError;
use crate::prelude::*;
use std::str::FromStr;

/// Days from 0000-03-01 to 1970-01-01, the shift between the era-based count and
/// the Unix day number.
const UNIX_EPOCH_SHIFT: i64 = 719_468;
/// Days in a 400-year Gregorian era
const DAYS_PER_ERA: i64 = 146_097;

/// A validated proleptic Gregorian calendar date.
///
/// Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct GregorianDate {
    year:  u16,
    month: u8,
    day:   u8,
}

impl GregorianDate {
    /// Creates a date, validating year (1..=9999), month and day for that month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear`, `InvalidMonth` or `InvalidDay`.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        if year == 0 || year > MAX_YEAR {
            return Err(ParseError::InvalidYear(year));
        }
        if month == 0 || month > MAX_MONTH {
            return Err(ParseError::InvalidMonth(month));
        }
        if day < MIN_DAY || day > days_in_month(year, month) {
            return Err(ParseError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date from components known to be valid at compile time.
    pub(crate) const fn from_parts_unchecked(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    #[inline]
    pub const fn year(self) -> u16 {
        self.year
    }

    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Signed number of days since 1970-01-01
    pub const fn day_number(self) -> i64 {
        days_from_civil(self.year as i64, self.month, self.day)
    }

    /// Inverse of [`Self::day_number`].
    /// Returns `None` if the day falls outside years 1..=9999.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_day_number(days: i64) -> Option<Self> {
        let (year, month, day) = civil_from_days(days);
        if year < 1 || year > MAX_YEAR as i64 {
            return None;
        }
        Some(Self::from_parts_unchecked(year as u16, month, day))
    }

    /// Signed day count from `self` to `other` (negative if `other` is earlier)
    pub const fn days_until(self, other: Self) -> i64 {
        other.day_number() - self.day_number()
    }

    /// Moves the date by `days` (either direction).
    /// Returns `None` if the result leaves the supported year range.
    pub const fn add_days(self, days: i64) -> Option<Self> {
        Self::from_day_number(self.day_number() + days)
    }

    /// Three-letter uppercase French abbreviation of the month, e.g. `"FÉV"`
    pub const fn french_month_abbreviation(self) -> &'static str {
        FRENCH_MONTH_ABBREVIATIONS[(self.month - 1) as usize]
    }

    /// Parses a field of exactly `width` ASCII digits.
    fn parse_field<T: FromStr>(s: &str, width: usize) -> Result<T, ParseError> {
        if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    /// Parses a strict ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY-MM-DD, found {} {} separator(s) in {trimmed}",
                parts.len() - 1,
                DATE_SEPARATOR
            )));
        };

        let year = Self::parse_field::<u16>(year, 4)?;
        let month = Self::parse_field::<u8>(month, 2)?;
        let day = Self::parse_field::<u8>(day, 2)?;
        Self::new(year, month, day)
    }
}

impl TryFrom<(u16, u8, u8)> for GregorianDate {
    type Error = ParseError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl From<GregorianDate> for (u16, u8, u8) {
    fn from(date: GregorianDate) -> Self {
        (date.year, date.month, date.day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

pub const fn is_leap_year(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE as i64 == 0 && year % CENTURY_CYCLE as i64 != 0)
        || (year % GREGORIAN_CYCLE as i64 == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year as i64) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Day number (days since 1970-01-01) of a civil date.
///
/// Years are counted from March so the leap day falls at the end of each
/// 400-year era.
pub const fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let y = if month <= FEBRUARY { year - 1 } else { year };
    let era = y.div_euclid(GREGORIAN_CYCLE as i64);
    let year_of_era = y - era * GREGORIAN_CYCLE as i64;
    let shifted_month = (month as i64 + 9) % 12;
    let day_of_year = (153 * shifted_month + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_ERA + day_of_era - UNIX_EPOCH_SHIFT
}

/// Civil date `(year, month, day)` of a day number.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + UNIX_EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let day_of_era = z - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let year = year_of_era + era * GREGORIAN_CYCLE as i64;
    let year = if month <= FEBRUARY as i64 { year + 1 } else { year };
    (year, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> GregorianDate {
        GregorianDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_new_valid() {
        assert!(GregorianDate::new(1, 1, 1).is_ok());
        assert!(GregorianDate::new(2024, 2, 29).is_ok());
        assert!(GregorianDate::new(9999, 12, 31).is_ok());
    }

    #[test]
    fn test_new_invalid_components() {
        assert!(matches!(
            GregorianDate::new(0, 1, 1),
            Err(ParseError::InvalidYear(0))
        ));
        assert!(matches!(
            GregorianDate::new(10000, 1, 1),
            Err(ParseError::InvalidYear(10000))
        ));
        assert!(matches!(
            GregorianDate::new(2024, 13, 1),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            GregorianDate::new(2024, 1, 32),
            Err(ParseError::InvalidDay {
                year: 2024,
                month: 1,
                day: 32
            })
        ));
        assert!(matches!(
            GregorianDate::new(2023, 2, 29),
            Err(ParseError::InvalidDay { .. })
        ));
        assert!(matches!(
            GregorianDate::new(2024, 4, 0),
            Err(ParseError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_parse_iso() {
        let d: GregorianDate = "2024-04-28".parse().unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2024, 4, 28));

        let d: GregorianDate = " 2025-09-27 ".parse().unwrap();
        assert_eq!(d, date(2025, 9, 27));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "".parse::<GregorianDate>(),
            Err(ParseError::EmptyInput)
        ));
        assert!(matches!(
            "2024-04".parse::<GregorianDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-04-28-01".parse::<GregorianDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "04/28/2024".parse::<GregorianDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-XX-28".parse::<GregorianDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-02-30".parse::<GregorianDate>(),
            Err(ParseError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_parse_requires_fixed_width_digits() {
        for input in ["+2024-+4-+28", "2024-4-28", "2024-04-8", "24-04-28", "02024-04-28", "2024-04-+8"] {
            assert!(
                matches!(input.parse::<GregorianDate>(), Err(ParseError::InvalidFormat(_))),
                "{input} should be rejected"
            );
        }
        assert!(matches!(
            "0000-01-01".parse::<GregorianDate>(),
            Err(ParseError::InvalidYear(0))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(date(2024, 4, 8).to_string(), "2024-04-08");
        assert_eq!(date(812, 1, 1).to_string(), "0812-01-01");
    }

    #[test]
    fn test_day_number_known_values() {
        assert_eq!(date(1970, 1, 1).day_number(), 0);
        assert_eq!(date(1970, 1, 2).day_number(), 1);
        assert_eq!(date(1969, 12, 31).day_number(), -1);
        assert_eq!(date(2000, 3, 1).day_number(), 11_017);
        assert_eq!(date(1, 1, 1).day_number(), -719_162);
    }

    #[test]
    fn test_day_number_inverse() {
        for d in [
            date(1, 1, 1),
            date(1900, 2, 28),
            date(1900, 3, 1),
            date(2000, 2, 29),
            date(2024, 12, 31),
            date(9999, 12, 31),
        ] {
            assert_eq!(GregorianDate::from_day_number(d.day_number()), Some(d));
        }
    }

    #[test]
    fn test_from_day_number_out_of_range() {
        let first = date(1, 1, 1).day_number();
        let last = date(9999, 12, 31).day_number();
        assert_eq!(GregorianDate::from_day_number(first - 1), None);
        assert_eq!(GregorianDate::from_day_number(last + 1), None);
    }

    #[test]
    fn test_days_until_and_add_days() {
        let a = date(2024, 4, 28);
        let b = date(2025, 9, 27);
        assert_eq!(a.days_until(b), 517);
        assert_eq!(b.days_until(a), -517);
        assert_eq!(a.add_days(517), Some(b));
        assert_eq!(b.add_days(-517), Some(a));
        assert_eq!(date(2024, 2, 28).add_days(1), Some(date(2024, 2, 29)));
        assert_eq!(date(2023, 2, 28).add_days(1), Some(date(2023, 3, 1)));
        assert_eq!(date(9999, 12, 31).add_days(1), None);
    }

    #[test]
    fn test_french_month_abbreviation() {
        assert_eq!(date(2024, 1, 5).french_month_abbreviation(), "JAN");
        assert_eq!(date(2024, 2, 5).french_month_abbreviation(), "FÉV");
        assert_eq!(date(2024, 8, 5).french_month_abbreviation(), "AOU");
        assert_eq!(date(2024, 12, 5).french_month_abbreviation(), "DÉC");
    }

    #[test]
    fn test_ordering() {
        assert!(date(2024, 12, 31) < date(2025, 1, 1));
        assert!(date(2025, 1, 31) < date(2025, 2, 1));
        assert!(date(2025, 2, 1) < date(2025, 2, 2));
    }

    #[test]
    fn test_tuple_conversions() {
        let d: GregorianDate = (2024, 4, 28).try_into().unwrap();
        let parts: (u16, u8, u8) = d.into();
        assert_eq!(parts, (2024, 4, 28));

        let result: Result<GregorianDate, _> = (2024, 2, 30).try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(2024, 4, 28);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""2024-04-28""#);
        let parsed: GregorianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);

        let result: Result<GregorianDate, _> = serde_json::from_str(r#""2024-13-01""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        i64,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2025,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2100,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }
}
