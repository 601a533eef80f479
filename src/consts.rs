/// Letters recognized as format placeholders
pub const PLACEHOLDERS: [char; 6] = ['Y', 'y', 'M', 'm', 'D', 'd'];

/// Character that suppresses substitution of the placeholder letter after it
pub const ESCAPE_CHAR: char = '\\';

/// Minimum width of a zero-padded year component
pub const YEAR_DIGITS: usize = 4;

/// Minimum width of zero-padded month and day components
pub const COMPONENT_DIGITS: usize = 2;

/// Highest valid zero-based month index (December)
pub const MAX_MONTH_INDEX: u8 = 11;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Zero-based index for February
pub const FEBRUARY: u8 = 1;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month, indexed by zero-based month index
/// February shows 28 days (non-leap year default, adjusted by `is_leap_year` check)
pub const DAYS_IN_MONTH: [u8; 12] = [
    31, // January
    28, // February (non-leap)
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
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;
