// Width related constants
pub const DEFAULT_AMOUNT_WIDTH: usize = 5;
pub const MIN_AMOUNT_WIDTH: usize = 3;
// Widths below this switch to the narrow regime
pub const WIDE_REGIME_MIN_WIDTH: usize = 4;
// Plain numbers wider than this get a trailing space instead of a suffix
pub const PAD_PLAIN_ABOVE_WIDTH: usize = 5;

// Regime cutoffs: largest amount printed without a suffix, and the scaled
// value at which the next SI prefix takes over
pub const WIDE_PLAIN_MAX: u64 = 5000;
pub const WIDE_SCALED_MAX: f64 = 999.5;
pub const NARROW_PLAIN_MAX: u64 = 999;
pub const NARROW_SCALED_MAX: f64 = 99.5;

pub const SI_STEP: f64 = 1000.0;
// zetta and yotta are unreachable from a u64, kept so the table is complete
pub const SI_PREFIXES: [char; 8] = ['k', 'M', 'G', 'T', 'P', 'E', 'Z', 'Y'];
pub const SUB_SECOND_PREFIXES: [char; 3] = ['m', 'u', 'n'];

pub const BYTE_UNIT: &str = "B";
pub const RATE_UNIT: &str = "/s";

pub const SECS_PER_MINUTE: f64 = 60.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;
pub const HOURS_PER_DAY: f64 = 24.0;
// Julian year, c.f. the sidereal 365.256363004d
pub const DAYS_PER_YEAR: f64 = 365.25;
