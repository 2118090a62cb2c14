//! Rendering projection results as CSV, JSON and plain text tables

use crate::error::OutputError;
use crate::projection::{ProjectionResult, ProjectionSummary, YearSnapshot};
use crate::sweep::SweepPoint;
use std::fmt::Write as _;
use std::io::Write;

const CSV_HEADER: [&str; 8] = [
    "Year",
    "TotalSupply",
    "CirculatingSupply",
    "StakedSupply",
    "BurnedSupply",
    "EffectiveInflation",
    "StakingParticipation",
    "GovernanceParticipation",
];

/// Format a metric for display, guarding against NaN and infinity
pub fn format_metric(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{:.*}", decimals, value)
    } else {
        "n/a".to_string()
    }
}

/// Write one CSV row per snapshot, with a header row
pub fn write_csv<W: Write>(writer: W, snapshots: &[YearSnapshot]) -> Result<(), OutputError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for s in snapshots {
        wtr.write_record(&[
            s.year.to_string(),
            format!("{:.2}", s.total_supply),
            format!("{:.2}", s.circulating_supply),
            format!("{:.2}", s.staked_supply),
            format!("{:.2}", s.burned_supply),
            format!("{:.6}", s.effective_inflation),
            format!("{:.6}", s.staking_participation),
            format!("{:.6}", s.governance_participation),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Pretty JSON of the full result (parameters plus snapshots)
pub fn to_json(result: &ProjectionResult) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Fixed-width text table followed by the summary block
pub fn render_table(result: &ProjectionResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4} | {:>16} | {:>16} | {:>16} | {:>14} | {:>9} | {:>9} | {:>9}",
        "Year", "Total", "Circulating", "Staked", "Burned", "Infl %", "Stake %", "Gov %"
    );
    let _ = writeln!(out, "{}", "-".repeat(114));
    for s in &result.snapshots {
        let _ = writeln!(
            out,
            "{:>4} | {:>16} | {:>16} | {:>16} | {:>14} | {:>9} | {:>9} | {:>9}",
            s.year,
            format_metric(s.total_supply, 0),
            format_metric(s.circulating_supply, 0),
            format_metric(s.staked_supply, 0),
            format_metric(s.burned_supply, 0),
            format_metric(s.effective_inflation, 2),
            format_metric(s.staking_participation, 2),
            format_metric(s.governance_participation, 2),
        );
    }

    if let Some(summary) = result.summary() {
        out.push('\n');
        out.push_str(&render_summary(&summary));
    }
    out
}

pub fn render_summary(summary: &ProjectionSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Summary (year {}):", summary.final_year);
    let _ = writeln!(out, "  Total supply:          {}", format_metric(summary.final_total_supply, 0));
    let _ = writeln!(out, "  Circulating supply:    {}", format_metric(summary.final_circulating_supply, 0));
    let _ = writeln!(out, "  Staked supply:         {}", format_metric(summary.final_staked_supply, 0));
    let _ = writeln!(out, "  Burned supply:         {}", format_metric(summary.final_burned_supply, 0));
    let _ = writeln!(out, "  Staking participation: {}%", format_metric(summary.final_staking_participation, 2));
    let _ = writeln!(out, "  Average inflation:     {}%", format_metric(summary.average_effective_inflation, 2));
    let _ = writeln!(
        out,
        "  Peak total supply:     {} (year {})",
        format_metric(summary.peak_total_supply, 0),
        summary.peak_year
    );
    if summary.degenerate {
        let _ = writeln!(out, "  Warning: projection contains non-finite values");
    }
    out
}

/// One CSV row per sweep value
pub fn write_sweep_csv<W: Write>(writer: W, points: &[SweepPoint]) -> Result<(), OutputError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([
        "Value",
        "FinalTotalSupply",
        "FinalCirculatingSupply",
        "FinalStakedSupply",
        "FinalBurnedSupply",
        "FinalStakingParticipation",
        "AverageInflation",
        "Degenerate",
    ])?;
    for p in points {
        let s = &p.summary;
        wtr.write_record(&[
            p.value.to_string(),
            format!("{:.2}", s.final_total_supply),
            format!("{:.2}", s.final_circulating_supply),
            format!("{:.2}", s.final_staked_supply),
            format!("{:.2}", s.final_burned_supply),
            format!("{:.6}", s.final_staking_participation),
            format!("{:.6}", s.average_effective_inflation),
            s.degenerate.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SimulationParameters;
    use crate::projection::ProjectionEngine;

    fn small_result() -> ProjectionResult {
        let params = SimulationParameters { simulation_years: 2, ..Default::default() };
        ProjectionEngine::new(params).run()
    }

    #[test]
    fn test_format_metric_guards_non_finite() {
        assert_eq!(format_metric(12.3456, 2), "12.35");
        assert_eq!(format_metric(f64::NAN, 2), "n/a");
        assert_eq!(format_metric(f64::INFINITY, 0), "n/a");
    }

    #[test]
    fn test_csv_rows() {
        let result = small_result();
        let mut buf = Vec::new();
        write_csv(&mut buf, &result.snapshots).expect("write csv");
        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Year,TotalSupply"));
        assert!(lines[1].starts_with("0,100000000.00,20000000.00,5000000.00,0.00,"));
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = to_json(&small_result()).expect("json");
        assert!(json.contains("\"initialSupply\""));
        assert!(json.contains("\"stakingParticipation\""));

        let parsed: ProjectionResult = serde_json::from_str(&json).expect("round trip");
        assert_eq!(parsed.snapshots.len(), 3);
    }

    #[test]
    fn test_table_contains_summary() {
        let table = render_table(&small_result());
        assert!(table.contains("Summary (year 2)"));
        assert!(!table.contains("non-finite"));
    }
}
