use crate::*;
use libtest_mimic::Trial;
use quantity::error::{Error, Result};
use quantity::format_duration;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const YEAR: f64 = 365.25 * DAY;

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend(trials!(
        test_duration_sub_second,
        test_duration_seconds,
        test_duration_minutes,
        test_duration_hours,
        test_duration_days,
        test_duration_years,
        test_duration_fixed_width,
        test_duration_remainder_carry,
        test_duration_rejects_invalid_input
    ));
}

fn check(cases: &[(f64, &str)]) -> Result<()> {
    for &(secs, expected) in cases {
        assert_eq!(format_duration(secs)?, expected, "formatting {secs}s");
    }
    Ok(())
}

pub fn test_duration_sub_second() -> Result<()> {
    check(&[
        (0.0, "0.0ns"),
        (1e-12, "0.0ns"),
        (3e-9, "3.0ns"),
        (0.000_042, " 42us"),
        (0.001, "1.0ms"),
        (0.0015, "1.5ms"),
        (0.0123, " 12ms"),
        (0.5, "500ms"),
        (0.9994, "999ms"),
    ])
}

pub fn test_duration_seconds() -> Result<()> {
    check(&[
        (1.0, "1.00s"),
        (5.0, "5.00s"),
        (9.99, "9.99s"),
        (12.34, "12.3s"),
        (59.9, "59.9s"),
    ])
}

pub fn test_duration_minutes() -> Result<()> {
    check(&[
        (60.0, "1m00s"),
        (65.0, "1m05s"),
        (599.0, "9m59s"),
        (700.0, "11.7m"),
        (3661.0, "61.0m"),
        (90.0 * MINUTE, "90.0m"),
    ])
}

pub fn test_duration_hours() -> Result<()> {
    check(&[
        (2.0 * HOUR, "2h00m"),
        (2.0 * HOUR + 30.0 * MINUTE, "2h30m"),
        (9.0 * HOUR + 59.0 * MINUTE, "9h59m"),
        (10.0 * HOUR + 5.0 * MINUTE, "10h5m"),
        (12.0 * HOUR + 30.0 * MINUTE, "12.5h"),
    ])
}

pub fn test_duration_days() -> Result<()> {
    check(&[
        (DAY, "1d00h"),
        (DAY + HOUR, "1d01h"),
        (9.0 * DAY + 23.0 * HOUR, "9d23h"),
        (10.0 * DAY + 3.0 * HOUR, "10d3h"),
        (15.0 * DAY + 12.0 * HOUR, "15.5d"),
        (100.0 * DAY, " 100d"),
        (200.0 * DAY, " 200d"),
        (730.0 * DAY, " 730d"),
    ])
}

pub fn test_duration_years() -> Result<()> {
    check(&[
        (1e8, "3.17y"),
        (2.5 * YEAR, "2.50y"),
        (42.0 * YEAR, "42.0y"),
        (500.0 * YEAR, " 500y"),
        (12_345.0 * YEAR, "12345y"),
    ])
}

/// Bands where an independently rounded remainder can carry to 6 columns.
fn carries_remainder(secs: f64) -> bool {
    (10.0 * HOUR..DAY).contains(&secs) || (10.0 * DAY..99.95 * DAY).contains(&secs)
}

pub fn test_duration_fixed_width() -> Result<()> {
    // every step below 10k years, a little off the round values
    let mut secs = 1e-10;
    while secs < 9_000.0 * YEAR {
        let s = format_duration(secs)?;
        if carries_remainder(secs) {
            assert!((5..=6).contains(&s.len()), "formatting {secs}s gave {s:?}");
        } else {
            assert_eq!(s.len(), 5, "formatting {secs}s gave {s:?}");
        }
        secs *= 1.37;
    }
    Ok(())
}

pub fn test_duration_remainder_carry() -> Result<()> {
    check(&[
        (10.0 * HOUR + 9.0 * MINUTE + 40.0, "10h10m"),
        (11.0 * HOUR + 9.0 * MINUTE + 31.0, "11h10m"),
        (10.0 * DAY + 9.75 * HOUR, "10d10h"),
    ])
}

pub fn test_duration_rejects_invalid_input() -> Result<()> {
    for secs in [-1.0, -1e-9, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(
            matches!(format_duration(secs), Err(Error::InvalidDuration { .. })),
            "{secs} should be rejected"
        );
    }
    assert_eq!(format_duration(-0.0)?, "0.0ns");
    assert_eq!(format_duration(-0.0)?, format_duration(0.0)?);
    Ok(())
}
