use crate::{aggregate::PeriodAggregate, model::MoonPhase};

pub const MAX_SCORE: u8 = 10;

/// Bite score in `0..=10` for one period.
pub fn score(aggregate: &PeriodAggregate, moon: MoonPhase) -> u8 {
    let total = moon_points(moon)
        + temperature_points(aggregate.temperature_c)
        + wind_points(aggregate.wind_mps)
        + rain_points(aggregate.precipitation_mm)
        + humidity_points(aggregate.humidity_pct)
        + pressure_points(aggregate.pressure_mmhg);

    total.min(MAX_SCORE)
}

fn moon_points(moon: MoonPhase) -> u8 {
    match moon {
        MoonPhase::WaxingMoon | MoonPhase::FullMoon => 3,
        MoonPhase::WaningMoon => 1,
        MoonPhase::NewMoon => 0,
    }
}

fn temperature_points(celsius: f64) -> u8 {
    if (15.0..=25.0).contains(&celsius) {
        2
    } else if (10.0..15.0).contains(&celsius) || (celsius > 25.0 && celsius <= 30.0) {
        1
    } else {
        0
    }
}

fn wind_points(mps: f64) -> u8 {
    if mps <= 3.0 {
        2
    } else if mps <= 5.0 {
        1
    } else {
        0
    }
}

fn rain_points(mm: f64) -> u8 {
    if mm == 0.0 {
        2
    } else if mm < 2.0 {
        1
    } else {
        0
    }
}

fn humidity_points(pct: f64) -> u8 {
    u8::from((40.0..=70.0).contains(&pct))
}

fn pressure_points(mmhg: f64) -> u8 {
    if (750.0..=770.0).contains(&mmhg) {
        2
    } else if (740.0..750.0).contains(&mmhg) || (mmhg > 770.0 && mmhg <= 780.0) {
        1
    } else {
        0
    }
}
