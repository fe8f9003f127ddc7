use crate::quantity::constants::{
    DEFAULT_AMOUNT_WIDTH, MIN_AMOUNT_WIDTH, NARROW_PLAIN_MAX, NARROW_SCALED_MAX,
    PAD_PLAIN_ABOVE_WIDTH, SI_PREFIXES, SI_STEP, WIDE_PLAIN_MAX, WIDE_REGIME_MIN_WIDTH,
    WIDE_SCALED_MAX,
};

/// Threshold set picked from the working width.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Regime {
    width: usize,
    plain_max: u64,
    scaled_max: f64,
}

impl Regime {
    fn for_width(width: Option<usize>) -> Self {
        match width.unwrap_or(DEFAULT_AMOUNT_WIDTH) {
            w if w < WIDE_REGIME_MIN_WIDTH => Self {
                width: MIN_AMOUNT_WIDTH,
                plain_max: NARROW_PLAIN_MAX,
                scaled_max: NARROW_SCALED_MAX,
            },
            w => Self {
                width: w,
                plain_max: WIDE_PLAIN_MAX,
                scaled_max: WIDE_SCALED_MAX,
            },
        }
    }
}

/// Format a unitless count into exactly `width` characters, using an SI
/// prefix once the number no longer fits as plain digits.
///
/// `None` selects the default width of 5. Widths below 4 are clamped to 3
/// and use tighter cutoffs (plain up to 999, then `" 1k"`, `"10k"`, ...).
///
/// Amounts beyond the last prefix keep the `Y` suffix and may spill past the
/// requested width; a `u64` never gets there.
pub fn format_amount(amount: u64, width: Option<usize>) -> String {
    let regime = Regime::for_width(width);
    log::trace!("format_amount amount={amount} width={width:?} regime={regime:?}");

    if amount <= regime.plain_max {
        let pad = if regime.width > PAD_PLAIN_ABOVE_WIDTH { " " } else { "" };
        let digits = regime.width - pad.len();
        return format!("{amount:>digits$}{pad}");
    }

    let (scaled, prefix) = scale(amount as f64, regime.scaled_max);

    // one column goes to the prefix letter
    let width = regime.width - 1;
    let digits = integer_digits(scaled);
    let precision = if width > digits + 1 {
        width - digits - 1
    } else {
        0
    };

    let rendered = format!("{scaled:>width$.precision$}{prefix}");
    if scaled < 0.95 {
        // the leading "0" is implied; dropping it gives back the column
        // the fraction borrowed
        return rendered[1..].to_string();
    }
    rendered
}

/// Divide by 1000 until the value drops below `max`, returning the scaled
/// value and the prefix reached. Stops at the last prefix regardless.
fn scale(mut value: f64, max: f64) -> (f64, char) {
    let mut prefix = SI_PREFIXES[0];
    for p in SI_PREFIXES {
        value /= SI_STEP;
        prefix = p;
        if value < max {
            break;
        }
    }
    (value, prefix)
}

/// Integer digits the scaled value will print with once rounded.
fn integer_digits(value: f64) -> usize {
    if value < 0.95 {
        0
    } else if value < 9.5 {
        1
    } else if value < 99.5 {
        2
    } else {
        3
    }
}
