use crate::constants::{Degree, Hour, Radian, DEGRAD, HOURRAD};

/// Convert a right ascension stored in radians to hours.
pub fn rad_to_hours(angle: Radian) -> Hour {
    angle * HOURRAD
}

/// Convert an angle stored in radians to degrees.
pub fn rad_to_deg(angle: Radian) -> Degree {
    angle * DEGRAD
}

/// Split a non-negative value into (units, minutes, seconds) with `prec`
/// decimals on the seconds, carrying a rounded `60.000` into the minutes.
fn sexagesimal(value: f64, prec: usize) -> (u32, u32, f64) {
    let scale = 10f64.powi(prec as i32);
    let total_seconds = (value * 3600.0 * scale).round() / scale;

    let units = (total_seconds / 3600.0).floor();
    let rest = total_seconds - units * 3600.0;
    let minutes = (rest / 60.0).floor();
    let seconds = rest - minutes * 60.0;

    (units as u32, minutes as u32, seconds.max(0.0))
}

/// Right ascension in radians as `HHhMMmSS.sss…s`, wrapped to `[0h, 24h)`.
///
/// Arguments
/// -----------------
/// * `ra`: right ascension in radians
/// * `prec`: number of decimals on the seconds
pub fn ra_to_hms(ra: Radian, prec: usize) -> String {
    let hours = rad_to_hours(ra).rem_euclid(24.0);
    let (h, m, s) = sexagesimal(hours, prec);
    let h = h % 24;
    let width = if prec == 0 { 2 } else { prec + 3 };
    format!("{h:02}h{m:02}m{s:0width$.prec$}s")
}

/// Declination in radians as `±DDdMMmSS.sss…s`.
///
/// Arguments
/// -----------------
/// * `dec`: declination in radians
/// * `prec`: number of decimals on the seconds
pub fn dec_to_dms(dec: Radian, prec: usize) -> String {
    let degrees = rad_to_deg(dec);
    let sign = if degrees < 0.0 { '-' } else { '+' };
    let (d, m, s) = sexagesimal(degrees.abs(), prec);
    let width = if prec == 0 { 2 } else { prec + 3 };
    format!("{sign}{d:02}d{m:02}m{s:0width$.prec$}s")
}
