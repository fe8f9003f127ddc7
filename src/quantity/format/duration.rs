use crate::error::{Error, Result};
use crate::quantity::constants::{
    DAYS_PER_YEAR, HOURS_PER_DAY, MINUTES_PER_HOUR, SECS_PER_MINUTE, SI_STEP, SUB_SECOND_PREFIXES,
};

/// Format a duration given in seconds into a 5 character string.
///
/// The unit is picked by magnitude, from `ns` up to `y`:
///
/// ```text
///   0.0000123 -> " 12us"      0.0015 -> "1.5ms"     0.5   -> "500ms"
///   5         -> "5.00s"      65     -> "1m05s"     700   -> "11.7m"
///   7200      -> "2h00m"      90000  -> "1d01h"     1e8   -> "3.17y"
/// ```
///
/// Past 9999 years the year count keeps growing and so does the output.
///
/// Compound forms round their remainder on its own, so a remainder just
/// under 10 can carry into a sixth column: 36571 -> `"10h10m"`, and likewise
/// `"10d10h"` between 10 and 100 days.
///
/// # Errors
/// * [`Error::InvalidDuration`] if `secs` is negative, NaN or infinite
pub fn format_duration(secs: f64) -> Result<String> {
    check_duration(secs).map(render)
}

pub(crate) fn check_duration(secs: f64) -> Result<f64> {
    if !secs.is_finite() || secs < 0.0 {
        return Err(Error::InvalidDuration { secs });
    }
    // -0.0 passes the check above but would print its sign
    Ok(secs.abs())
}

/// Floor division returning `(quotient, remainder)`, valid for fractional
/// inputs.
fn divmod(a: f64, b: f64) -> (f64, f64) {
    let q = (a / b).floor();
    (q, a - q * b)
}

/// Render an already validated, non-negative finite duration.
pub(crate) fn render(secs: f64) -> String {
    let mut dt = secs;
    log::trace!("format_duration secs={secs}");

    if dt < SECS_PER_MINUTE {
        return render_sub_minute(dt);
    }

    if dt < 10.0 * SECS_PER_MINUTE {
        let (m, s) = divmod(dt, SECS_PER_MINUTE);
        return format!("{m:.0}m{s:02.0}s");
    }

    dt /= SECS_PER_MINUTE;

    if dt < 99.95 {
        return format!("{dt:3.1}m");
    }

    if dt < 10.0 * MINUTES_PER_HOUR {
        let (h, m) = divmod(dt, MINUTES_PER_HOUR);
        return format!("{h:.0}h{m:02.0}m");
    }

    if dt < HOURS_PER_DAY * MINUTES_PER_HOUR {
        let (h, m) = divmod(dt, MINUTES_PER_HOUR);
        if m < 10.0 {
            return format!("{h:.0}h{m:1.0}m");
        }
        return format!("{:3.1}h", dt / MINUTES_PER_HOUR);
    }

    dt /= MINUTES_PER_HOUR;

    if dt < 10.0 * HOURS_PER_DAY {
        let (d, h) = divmod(dt, HOURS_PER_DAY);
        return format!("{d:.0}d{h:02.0}h");
    }

    if dt < 99.95 * HOURS_PER_DAY {
        let (d, h) = divmod(dt, HOURS_PER_DAY);
        if h < 10.0 {
            return format!("{d:.0}d{h:.0}h");
        }
        return format!("{:4.1}d", dt / HOURS_PER_DAY);
    }

    dt /= HOURS_PER_DAY;

    if dt < 2.0 * DAYS_PER_YEAR {
        return format!("{dt:4.0}d");
    }

    dt /= DAYS_PER_YEAR;

    if dt < 9.995 {
        format!("{dt:4.2}y")
    } else if dt < 99.95 {
        format!("{dt:4.1}y")
    } else {
        format!("{dt:4.0}y")
    }
}

fn render_sub_minute(secs: f64) -> String {
    if secs >= 9.995 {
        return format!("{secs:.1}s");
    }
    if secs >= 0.9995 {
        return format!("{secs:.2}s");
    }

    // below a nanosecond everything lands on "n"
    let mut dt = secs;
    let mut prefix = SUB_SECOND_PREFIXES[0];
    for p in SUB_SECOND_PREFIXES {
        dt *= SI_STEP;
        prefix = p;
        if dt >= 0.9995 {
            break;
        }
    }

    if dt > 9.5 {
        format!("{dt:3.0}{prefix}s")
    } else {
        format!("{dt:.1}{prefix}s")
    }
}
