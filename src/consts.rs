/// Maximum valid Gregorian year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid Gregorian month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

// --- Badí' calendar ---

/// Days in every named Badí' month
pub const BADI_DAYS_PER_MONTH: u8 = 19;

/// Number of named Badí' months
pub const BADI_MONTHS: u8 = 19;

/// Months 1..=18 precede the intercalary period
pub const BADI_MONTHS_BEFORE_INTERCALARY: u8 = 18;

/// Month slot shared by the intercalary days and 'Alá
pub const BADI_LAST_MONTH: u8 = 19;

/// Day offset within the year at which the intercalary period starts (18 × 19)
pub const INTERCALARY_START_OFFSET: u16 =
    BADI_MONTHS_BEFORE_INTERCALARY as u16 * BADI_DAYS_PER_MONTH as u16;

/// Intercalary days in an ordinary Badí' year
pub const INTERCALARY_DAYS: u8 = 4;

/// Intercalary days in a leap Badí' year
pub const INTERCALARY_DAYS_LEAP: u8 = 5;

/// Length of an ordinary Badí' year
pub const BADI_YEAR_DAYS: u16 = 365;

/// Gregorian year in which Badí' year `y` begins is `y + BADI_GREGORIAN_YEAR_OFFSET`
pub const BADI_GREGORIAN_YEAR_OFFSET: i32 = 1843;

// --- French labels ---

/// Three-letter uppercase French Gregorian month abbreviations (index 0 is January)
pub const FRENCH_MONTH_ABBREVIATIONS: [&str; 12] = [
    "JAN", "FÉV", "MAR", "AVR", "MAI", "JUN", "JUL", "AOU", "SEP", "OCT", "NOV", "DÉC",
];

/// Prefix of every feast name
pub const FEAST_NAME_PREFIX: &str = "Fête de ";
