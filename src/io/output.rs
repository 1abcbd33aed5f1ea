//! Report writers: JSON, terminal, and markdown renderings of a scoring
//! run or a sensitivity sweep.

use crate::core::RiskCategory;
use crate::pipeline::ScoreReport;
use crate::scoring::sensitivity::ScenarioRisk;
use clap::ValueEnum;
use colored::*;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
    Markdown,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &ScoreReport) -> anyhow::Result<()>;
    fn write_sensitivity(&mut self, table: &[ScenarioRisk]) -> anyhow::Result<()>;
}

/// Build a writer for the chosen format, targeting a file or stdout.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let target: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(target)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(target)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(target)),
    })
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_sensitivity(&mut self, table: &[ScenarioRisk]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(table)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn district_table(report: &ScoreReport) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                "Rank",
                "District",
                "Hazard",
                "Exposure",
                "Capacity",
                "Vulnerability",
                "Risk",
                "Category",
            ]);

        for entry in &report.districts {
            let scores = &entry.result.scores;
            table.add_row(vec![
                entry.rank.to_string(),
                entry.result.district.clone(),
                format!("{:.1}", scores.hazard),
                format!("{:.1}", scores.exposure),
                format!("{:.1}", scores.adaptive_capacity),
                format!("{:.1}", scores.vulnerability),
                format!("{:.1}", scores.risk),
                entry.result.category.to_string(),
            ]);
        }

        table
    }
}

fn category_colored(category: RiskCategory) -> ColoredString {
    match category {
        RiskCategory::VeryHigh => category.label().red().bold(),
        RiskCategory::High => category.label().red(),
        RiskCategory::Medium => category.label().yellow(),
        RiskCategory::Low => category.label().green(),
        RiskCategory::VeryLow => category.label().cyan(),
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "CLIMATE RISK ASSESSMENT".bold())?;
        writeln!(
            self.writer,
            "Generated {} | ranked by {:?} | {} districts",
            report.generated_at.format("%Y-%m-%d %H:%M UTC"),
            report.ranked_by,
            report.distribution.total_districts
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", Self::district_table(report))?;

        let dist = &report.distribution;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{}: {} | {}: {} | {}: {} | {}: {} | {}: {}",
            category_colored(RiskCategory::VeryHigh),
            dist.very_high_count,
            category_colored(RiskCategory::High),
            dist.high_count,
            category_colored(RiskCategory::Medium),
            dist.medium_count,
            category_colored(RiskCategory::Low),
            dist.low_count,
            category_colored(RiskCategory::VeryLow),
            dist.very_low_count,
        )?;
        Ok(())
    }

    fn write_sensitivity(&mut self, rows: &[ScenarioRisk]) -> anyhow::Result<()> {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["District", "Scenario", "Risk"]);

        for row in rows {
            table.add_row(vec![
                row.district.clone(),
                row.scenario.clone(),
                format!("{:.1}", row.risk_score),
            ]);
        }

        writeln!(self.writer, "{}", "WEIGHTING SCENARIO SWEEP".bold())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Climate Risk Assessment")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "## Ranked Districts")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Rank | District | Hazard | Exposure | Capacity | Vulnerability | Risk | Category |"
        )?;
        writeln!(
            self.writer,
            "|------|----------|--------|----------|----------|---------------|------|----------|"
        )?;
        for entry in &report.districts {
            let scores = &entry.result.scores;
            writeln!(
                self.writer,
                "| {} | {} | {:.1} | {:.1} | {:.1} | {:.1} | {:.1} | {} |",
                entry.rank,
                entry.result.district,
                scores.hazard,
                scores.exposure,
                scores.adaptive_capacity,
                scores.vulnerability,
                scores.risk,
                entry.result.category,
            )?;
        }
        writeln!(self.writer)?;

        let dist = &report.distribution;
        writeln!(self.writer, "## Risk Distribution")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Category | Districts |")?;
        writeln!(self.writer, "|----------|-----------|")?;
        writeln!(self.writer, "| Very High | {} |", dist.very_high_count)?;
        writeln!(self.writer, "| High | {} |", dist.high_count)?;
        writeln!(self.writer, "| Medium | {} |", dist.medium_count)?;
        writeln!(self.writer, "| Low | {} |", dist.low_count)?;
        writeln!(self.writer, "| Very Low | {} |", dist.very_low_count)?;
        Ok(())
    }

    fn write_sensitivity(&mut self, rows: &[ScenarioRisk]) -> anyhow::Result<()> {
        writeln!(self.writer, "# Weighting Scenario Sweep")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| District | Scenario | Risk |")?;
        writeln!(self.writer, "|----------|----------|------|")?;
        for row in rows {
            writeln!(
                self.writer,
                "| {} | {} | {:.1} |",
                row.district, row.scenario, row.risk_score
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RiskConfig;
    use crate::core::{DistrictRow, HazardIndicators};
    use crate::pipeline::build_report;
    use crate::ranking::ScoreField;

    fn sample_report() -> ScoreReport {
        let rows = vec![DistrictRow {
            district: "Chikwawa".to_string(),
            hazard: HazardIndicators {
                flood_risk: Some(90.0),
                ..HazardIndicators::default()
            },
            ..DistrictRow::default()
        }];
        build_report(&rows, &RiskConfig::default(), ScoreField::Risk, false).unwrap()
    }

    #[test]
    fn json_writer_round_trips_the_report() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed["districts"][0]["district"], "Chikwawa");
        assert_eq!(parsed["districts"][0]["rank"], 1);
    }

    #[test]
    fn markdown_writer_emits_a_ranked_table() {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("# Climate Risk Assessment"));
        assert!(text.contains("| 1 | Chikwawa |"));
        assert!(text.contains("## Risk Distribution"));
    }

    #[test]
    fn terminal_writer_includes_district_and_counts() {
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Chikwawa"));
        assert!(text.contains("1 districts"));
    }

    #[test]
    fn sensitivity_rows_render_in_all_formats() {
        let rows = vec![ScenarioRisk {
            district: "Zomba".to_string(),
            scenario: "baseline".to_string(),
            risk_score: 42.5,
        }];

        let mut json = Vec::new();
        JsonWriter::new(&mut json).write_sensitivity(&rows).unwrap();
        assert!(String::from_utf8(json).unwrap().contains("baseline"));

        let mut markdown = Vec::new();
        MarkdownWriter::new(&mut markdown)
            .write_sensitivity(&rows)
            .unwrap();
        assert!(String::from_utf8(markdown).unwrap().contains("| Zomba | baseline | 42.5 |"));

        let mut terminal = Vec::new();
        TerminalWriter::new(&mut terminal)
            .write_sensitivity(&rows)
            .unwrap();
        assert!(String::from_utf8(terminal).unwrap().contains("Zomba"));
    }
}
