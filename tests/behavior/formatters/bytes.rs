use crate::*;
use libtest_mimic::Trial;
use quantity::error::Result;
use quantity::{format_amount, format_bytes};

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend(trials!(
        test_bytes_default_width,
        test_bytes_scaled,
        test_bytes_small_width_clamps,
        test_bytes_fixed_width_sweep
    ));
}

pub fn test_bytes_default_width() -> Result<()> {
    assert_eq!(format_bytes(0, None), "    0B");
    assert_eq!(format_bytes(5000, None), " 5000B");
    assert_eq!(format_bytes(5000, Some(6)), " 5000B");
    Ok(())
}

pub fn test_bytes_scaled() -> Result<()> {
    assert_eq!(format_bytes(1_048_576, Some(7)), "1.049MB");
    assert_eq!(format_bytes(6000, Some(4)), " 6kB");
    assert_eq!(format_bytes(u64::MAX, None), "18.4EB");
    Ok(())
}

pub fn test_bytes_small_width_clamps() -> Result<()> {
    // the amount part never goes below 3 columns
    for width in 0..=4 {
        assert_eq!(format_bytes(123, Some(width)), "123B");
    }
    Ok(())
}

pub fn test_bytes_fixed_width_sweep() -> Result<()> {
    let samples = [0, 1, 999, 1000, 5000, 5001, 65_536, 1 << 30, 1 << 50, u64::MAX];
    for width in 0..=20usize {
        let expected = effective_width(width.saturating_sub(1)) + 1;
        for &n in &samples {
            let s = format_bytes(n, Some(width));
            assert_eq!(s.len(), expected, "formatting {n} at width {width} gave {s:?}");
            assert!(s.ends_with('B'));
            assert_eq!(
                &s[..s.len() - 1],
                format_amount(n, Some(width.saturating_sub(1)))
            );
        }
    }
    Ok(())
}
