//! Lunar phase from a calendar date.
//!
//! Illumination uses the low-precision lunar ephemeris from Meeus,
//! *Astronomical Algorithms* (ch. 48), evaluated at 00:00 UTC of the date.
//! Accuracy is around 0.01 of the disc, well inside the classification bands.

use chrono::{Datelike, NaiveDate};

use crate::model::MoonPhase;

/// Julian day of 2000-01-01 12:00 TT.
const J2000: f64 = 2_451_545.0;

/// `num_days_from_ce` of 2000-01-01.
const J2000_DAYS_FROM_CE: i32 = 730_120;

/// Illuminated fraction of the lunar disc in `[0, 1]` at midnight UTC.
pub fn illumination(date: NaiveDate) -> f64 {
    // Days from J2000 noon to this date's midnight.
    let days = f64::from(date.num_days_from_ce() - J2000_DAYS_FROM_CE) - 0.5;
    illumination_at_jd(J2000 + days)
}

fn illumination_at_jd(jd: f64) -> f64 {
    let t = (jd - J2000) / 36_525.0;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    // Mean elongation of the Moon.
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    // Sun's mean anomaly.
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    // Moon's mean anomaly.
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;

    let phase_angle = 180.0 - d - 6.289 * sin_deg(mp) + 2.100 * sin_deg(m)
        - 1.274 * sin_deg(2.0 * d - mp)
        - 0.658 * sin_deg(2.0 * d)
        - 0.214 * sin_deg(2.0 * mp)
        - 0.110 * sin_deg(d);

    ((1.0 + phase_angle.to_radians().cos()) / 2.0).clamp(0.0, 1.0)
}

fn sin_deg(deg: f64) -> f64 {
    deg.to_radians().sin()
}

/// Buckets an illumination percentage into a phase category.
pub fn classify_percent(percent: f64) -> MoonPhase {
    if !(5.0..=95.0).contains(&percent) {
        MoonPhase::NewMoon
    } else if percent < 45.0 {
        MoonPhase::WaxingMoon
    } else if percent <= 55.0 {
        MoonPhase::FullMoon
    } else {
        MoonPhase::WaningMoon
    }
}

pub fn classify(date: NaiveDate) -> MoonPhase {
    classify_percent(illumination(date) * 100.0)
}
