use hifitime::{Epoch, TimeScale, Unit};

/// Build the UTC instant of a day count split into integer and fractional parts.
///
/// Arguments
/// -----------------
/// * `mjd`: integer Modified Julian Day (day 0 = 1858-11-17 00:00 UTC)
/// * `fracmjd`: fraction of that day elapsed, in `[0, 1)`
///
/// Return
/// ----------
/// * The corresponding [`Epoch`] on the UTC scale.
///
/// The integer day is converted exactly and the fraction is added as a
/// duration, so the sub-microsecond part of `fracmjd` is not lost in the sum
/// `mjd + fracmjd`.
pub fn epoch_from_split_mjd(mjd: i64, fracmjd: f64) -> Epoch {
    Epoch::from_mjd_utc(mjd as f64) + Unit::Day * fracmjd
}

/// ISO 8601 rendering of an epoch on the UTC scale, e.g. `2021-01-02T21:35:16.423809186 UTC`.
pub fn iso_utc(epoch: Epoch) -> String {
    format!("{}", epoch.to_time_scale(TimeScale::UTC))
}
