use std::fmt::{self, Write};

use bite_core::DailySummary;

/// Plain-text rendering of a summary for the terminal.
pub fn render(out: &mut impl Write, summary: &DailySummary, location: Option<&str>) -> fmt::Result {
    let place = location.unwrap_or(summary.city.as_str());

    writeln!(out, "Bite forecast for {place} on {}", summary.date)?;
    if summary.is_fallback() {
        writeln!(out, "(no forecast for {}, showing {})", summary.date, summary.forecast_date)?;
    }
    if let Some(first) = summary.records.first() {
        writeln!(out, "Moon: {}", first.moon_phase)?;
    }
    writeln!(out)?;

    for r in &summary.records {
        writeln!(out, "{}", r.period)?;
        writeln!(
            out,
            "  Temperature {} | Wind {} | Rain {} | Humidity {} | Pressure {}",
            r.temp, r.wind, r.rain, r.humidity, r.pressure
        )?;
        writeln!(out, "  Score {}/10: {}", r.score, r.advice)?;
        writeln!(out)?;
    }

    writeln!(out, "Average score: {:.1}/10", summary.avg_score)?;
    writeln!(out, "{}", summary.summary_advice)
}
