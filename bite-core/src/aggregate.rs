use serde::Serialize;
use tracing::warn;

use crate::model::{DayForecast, HourlyObservation, Period};

pub const HPA_TO_MMHG: f64 = 0.750062;

/// Averaged conditions over the hours of one period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodAggregate {
    pub hours: usize,
    pub temperature_c: f64,
    pub wind_mps: f64,
    pub precipitation_mm: f64,
    pub humidity_pct: f64,
    pub pressure_hpa: f64,
    pub pressure_mmhg: f64,
}

impl PeriodAggregate {
    fn from_hours(hours: &[&HourlyObservation]) -> Option<Self> {
        if hours.is_empty() {
            return None;
        }
        let n = hours.len() as f64;
        let mean = |f: fn(&HourlyObservation) -> f64| hours.iter().map(|h| f(h)).sum::<f64>() / n;

        let pressure_hpa = mean(|h| h.pressure_hpa);
        Some(Self {
            hours: hours.len(),
            temperature_c: mean(|h| h.temperature_c),
            wind_mps: mean(HourlyObservation::wind_mps),
            precipitation_mm: hours.iter().map(|h| h.precipitation_mm).sum(),
            humidity_pct: mean(|h| h.humidity_pct),
            pressure_hpa,
            pressure_mmhg: pressure_hpa * HPA_TO_MMHG,
        })
    }
}

/// Aggregates indexed by [`Period`]; periods without hours are absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodAggregates([Option<PeriodAggregate>; 4]);

impl PeriodAggregates {
    pub fn get(&self, period: Period) -> Option<&PeriodAggregate> {
        self.0[period.index()].as_ref()
    }

    /// Non-empty periods in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Period, &PeriodAggregate)> {
        Period::ALL.into_iter().filter_map(|p| self.get(p).map(|a| (p, a)))
    }

    pub fn len(&self) -> usize {
        self.0.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits a day's hours into periods and reduces each one.
///
/// Hours whose timestamp cannot be read are left out.
pub fn aggregate(day: &DayForecast) -> PeriodAggregates {
    let mut buckets: [Vec<&HourlyObservation>; 4] = Default::default();

    for obs in &day.hours {
        match obs.hour().and_then(Period::from_hour) {
            Some(period) => buckets[period.index()].push(obs),
            None => warn!(date = %day.date, time = %obs.time, "skipping hour with malformed timestamp"),
        }
    }

    PeriodAggregates(buckets.map(|hours| PeriodAggregate::from_hours(&hours)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn hour(h: u32, temp: f64) -> HourlyObservation {
        HourlyObservation {
            time: format!("2025-09-29 {h:02}:00"),
            temperature_c: temp,
            wind_kph: 7.2,
            precipitation_mm: 0.5,
            humidity_pct: 60.0,
            pressure_hpa: 1013.0,
        }
    }

    fn day(hours: Vec<HourlyObservation>) -> DayForecast {
        DayForecast { date: NaiveDate::from_ymd_opt(2025, 9, 29).unwrap(), hours }
    }

    #[test]
    fn full_day_fills_every_period() {
        let d = day((0..24).map(|h| hour(h, f64::from(h))).collect());
        let aggs = aggregate(&d);

        assert_eq!(aggs.len(), 4);
        assert_eq!(aggs.iter().map(|(_, a)| a.hours).sum::<usize>(), 24);
        let order: Vec<Period> = aggs.iter().map(|(p, _)| p).collect();
        assert_eq!(order, Period::ALL.to_vec());
    }

    #[test]
    fn reductions_per_period() {
        let d = day((0..24).map(|h| hour(h, f64::from(h))).collect());
        let aggs = aggregate(&d);

        let morning = aggs.get(Period::Morning).unwrap();
        // mean of 6..=11
        assert!((morning.temperature_c - 8.5).abs() < 1e-9);
        assert!((morning.wind_mps - 2.0).abs() < 1e-9);
        assert!((morning.precipitation_mm - 3.0).abs() < 1e-9);
        assert!((morning.humidity_pct - 60.0).abs() < 1e-9);
        assert!((morning.pressure_hpa - 1013.0).abs() < 1e-9);
        assert!((morning.pressure_mmhg - 1013.0 * HPA_TO_MMHG).abs() < 1e-9);

        let night = aggs.get(Period::Night).unwrap();
        assert!((night.temperature_c - 2.5).abs() < 1e-9);
    }

    #[test]
    fn empty_periods_are_absent() {
        let d = day((6..12).map(|h| hour(h, 20.0)).collect());
        let aggs = aggregate(&d);

        assert_eq!(aggs.len(), 1);
        assert!(aggs.get(Period::Morning).is_some());
        assert!(aggs.get(Period::Day).is_none());
        assert!(aggs.get(Period::Evening).is_none());
        assert!(aggs.get(Period::Night).is_none());
    }

    #[test]
    fn malformed_timestamps_are_skipped() {
        let mut hours: Vec<_> = (0..24).map(|h| hour(h, 10.0)).collect();
        hours[7].time = "not a time".to_string();
        hours[13].time = String::new();
        let aggs = aggregate(&day(hours));

        assert_eq!(aggs.get(Period::Morning).unwrap().hours, 5);
        assert_eq!(aggs.get(Period::Day).unwrap().hours, 5);
        assert_eq!(aggs.iter().map(|(_, a)| a.hours).sum::<usize>(), 22);
    }

    #[test]
    fn empty_day_has_no_aggregates() {
        assert!(aggregate(&day(Vec::new())).is_empty());
    }
}
