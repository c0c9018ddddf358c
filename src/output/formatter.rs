//! Output formatters: console, JSON and CSV

use crate::config::OutputFormat;
use crate::error::{Result, ResumeRankerError};
use crate::output::report::*;
use crate::processing::ranking::RankedResult;
use colored::{Color, Colorize};
use std::collections::HashSet;
use std::path::Path;

/// Trait for rendering reports in one output format
pub trait OutputFormatter {
    fn format_ranking(&self, report: &RankingReport) -> Result<String>;
    fn format_gap(&self, report: &GapAnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Human-readable terminal output
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

/// Ranked-results export, one row per candidate
pub struct CsvFormatter;

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    csv_formatter: CsvFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let (prefix, color) = match level {
            1 => ("█", Color::Blue),
            2 => ("▓", Color::Green),
            _ => ("▒", Color::Yellow),
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_similarity_badge(&self, similarity: f64) -> String {
        let color = if similarity >= 70.0 {
            Color::Green
        } else if similarity >= 40.0 {
            Color::Yellow
        } else {
            Color::Red
        };

        self.colorize(&format!("{:>6.2}%", similarity), color)
    }

    fn format_candidate_label(result: &RankedResult) -> String {
        match (&result.candidate_name, result.primary_email()) {
            (Some(name), Some(email)) => format!("{} <{}>", name, email),
            (Some(name), None) => name.clone(),
            (None, Some(email)) => email.to_string(),
            (None, None) => NOT_AVAILABLE.to_string(),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_ranking(&self, report: &RankingReport) -> Result<String> {
        let batch = &report.batch;
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME RANKING", 1));
        output.push_str(&format!(
            "Role: {} | Generated: {} | Processing time: {}ms\n",
            self.colorize(&batch.role, Color::Cyan),
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            batch.processing_time_ms
        ));

        output.push_str(&self.format_header("Ranked Candidates", 2));
        if batch.results.is_empty() {
            output.push_str("No documents could be ranked.\n");
        }

        for result in &batch.results {
            output.push_str(&format!(
                "#{:<3} {}  {}  ({})\n",
                result.rank,
                self.format_similarity_badge(result.similarity),
                Self::format_candidate_label(result),
                result.filename
            ));

            let skills = if result.present_skills.is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                result.present_skills.join(", ")
            };
            output.push_str(&format!(
                "      Skills: {} [{}/{}]\n",
                skills,
                result.present_skills.len(),
                batch.required_skills.len()
            ));

            if self.detailed {
                let present: HashSet<&str> = result.present_skills.iter().map(String::as_str).collect();
                let missing: Vec<&str> = batch
                    .required_skills
                    .iter()
                    .map(String::as_str)
                    .filter(|skill| !present.contains(skill))
                    .collect();
                if !missing.is_empty() {
                    output.push_str(&format!(
                        "      Missing: {}\n",
                        self.colorize(&missing.join(", "), Color::Red)
                    ));
                }
                if result.emails.len() > 1 {
                    output.push_str(&format!("      Emails: {}\n", result.emails.join(", ")));
                }
            }
        }

        if !batch.failures.is_empty() {
            output.push_str(&self.format_header("Failed Documents", 2));
            for failure in &batch.failures {
                output.push_str(&format!(
                    "{} {}: {}\n",
                    self.colorize("✗", Color::Red),
                    failure.filename,
                    failure.reason
                ));
            }
        }

        Ok(output)
    }

    fn format_gap(&self, report: &GapAnalysisReport) -> Result<String> {
        let analysis = &report.analysis;
        let gap = &analysis.gap;
        let mut output = String::new();

        output.push_str(&self.format_header("SKILL GAP ANALYSIS", 1));
        output.push_str(&format!(
            "Role: {} | Resume: {}\n",
            self.colorize(&analysis.role, Color::Cyan),
            analysis.filename
        ));
        output.push_str(&format!(
            "Coverage: {}/{} ({:.0}%)\n",
            gap.present_skills.len(),
            gap.present_skills.len() + gap.missing_skills.len(),
            gap.coverage() * 100.0
        ));

        output.push_str(&self.format_header("Present Skills", 2));
        if gap.present_skills.is_empty() {
            output.push_str("None\n");
        }
        for skill in &gap.present_skills {
            output.push_str(&format!("{} {}\n", self.colorize("✓", Color::Green), skill));
        }

        output.push_str(&self.format_header("Missing Skills", 2));
        if gap.missing_skills.is_empty() {
            output.push_str("None\n");
        }
        for skill in &gap.missing_skills {
            output.push_str(&format!("{} {}\n", self.colorize("✗", Color::Red), skill));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_ranking(&self, report: &RankingReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn format_gap(&self, report: &GapAnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl CsvFormatter {
    fn writer() -> csv::Writer<Vec<u8>> {
        csv::Writer::from_writer(Vec::new())
    }

    fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
        let bytes = writer
            .into_inner()
            .map_err(|e| csv_error(e.error()))?;
        String::from_utf8(bytes).map_err(csv_error)
    }
}

fn csv_error(e: impl std::fmt::Display) -> ResumeRankerError {
    ResumeRankerError::OutputFormatting(format!("Failed to write CSV: {}", e))
}

impl OutputFormatter for CsvFormatter {
    fn format_ranking(&self, report: &RankingReport) -> Result<String> {
        let mut writer = Self::writer();
        writer.write_record(EXPORT_HEADER).map_err(csv_error)?;
        for row in report.export_rows() {
            writer.write_record(row.fields()).map_err(csv_error)?;
        }
        Self::finish(writer)
    }

    fn format_gap(&self, report: &GapAnalysisReport) -> Result<String> {
        let gap = &report.analysis.gap;
        let mut writer = Self::writer();
        writer.write_record(["Skill", "Status"]).map_err(csv_error)?;
        for skill in &gap.present_skills {
            writer.write_record([skill.as_str(), "Present"]).map_err(csv_error)?;
        }
        for skill in &gap.missing_skills {
            writer.write_record([skill.as_str(), "Missing"]).map_err(csv_error)?;
        }
        Self::finish(writer)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Csv
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            csv_formatter: CsvFormatter,
        }
    }

    fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        let formatter: &dyn OutputFormatter = match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Csv => &self.csv_formatter,
        };
        debug_assert_eq!(formatter.supports_format(), format);
        formatter
    }

    pub fn generate_ranking(&self, report: &RankingReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_ranking(report)
    }

    pub fn generate_gap(&self, report: &GapAnalysisReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_gap(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content).map_err(|e| {
        ResumeRankerError::OutputFormatting(format!(
            "Failed to write report to {}: {}",
            file_path.display(),
            e
        ))
    })
}

pub fn suggest_filename(format: OutputFormat, base_name: &str, timestamp: bool) -> String {
    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}{}.json", base_name, timestamp_suffix),
        OutputFormat::Csv => format!("{}{}.csv", base_name, timestamp_suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::{BatchReport, DocumentFailure, GapAnalysis};
    use crate::processing::skill_matcher::GapReport;

    fn sample_ranking() -> RankingReport {
        RankingReport::new(BatchReport {
            role: "Web Developer".to_string(),
            required_skills: vec!["HTML".into(), "CSS".into(), "React".into()],
            results: vec![
                RankedResult {
                    rank: 1,
                    filename: "jane.pdf".into(),
                    candidate_name: Some("Jane Doe".into()),
                    emails: vec!["jane@doe.dev".into()],
                    present_skills: vec!["HTML".into(), "React".into()],
                    similarity: 73.46,
                },
                RankedResult {
                    rank: 2,
                    filename: "anon.pdf".into(),
                    candidate_name: None,
                    emails: Vec::new(),
                    present_skills: Vec::new(),
                    similarity: 0.0,
                },
            ],
            failures: vec![DocumentFailure {
                filename: "broken.pdf".into(),
                reason: "Extraction error: PDF contains no pages".into(),
            }],
            processing_time_ms: 12,
        })
    }

    fn sample_gap() -> GapAnalysisReport {
        GapAnalysisReport::new(GapAnalysis {
            role: "Web Developer".into(),
            filename: "jane.pdf".into(),
            gap: GapReport {
                present_skills: vec!["HTML".into()],
                missing_skills: vec!["CSS".into(), "React".into()],
            },
        })
    }

    #[test]
    fn test_generator_dispatches_by_format() {
        let generator = ReportGenerator::with_options(false, false, false);
        for format in [OutputFormat::Console, OutputFormat::Json, OutputFormat::Csv] {
            assert_eq!(generator.formatter(format).supports_format(), format);
        }
    }

    #[test]
    fn test_csv_export_layout() {
        let csv = CsvFormatter.format_ranking(&sample_ranking()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Rank,Name,Email,Skills Present,Similarity");
        assert_eq!(lines[1], "1,Jane Doe,jane@doe.dev,\"HTML, React\",73.46");
        assert_eq!(lines[2], "2,N/A,N/A,N/A,0.0");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_csv_quotes_embedded_separators() {
        let mut report = sample_gap();
        report.analysis.gap.present_skills = vec!["Say \"hi\", then".into()];
        report.analysis.gap.missing_skills.clear();

        let csv = CsvFormatter.format_gap(&report).unwrap();
        assert_eq!(csv, "Skill,Status\n\"Say \"\"hi\"\", then\",Present\n");
    }

    #[test]
    fn test_csv_gap() {
        let csv = CsvFormatter.format_gap(&sample_gap()).unwrap();
        assert_eq!(csv, "Skill,Status\nHTML,Present\nCSS,Missing\nReact,Missing\n");
    }

    #[test]
    fn test_console_ranking_without_colors() {
        let formatter = ConsoleFormatter::new(false, true);
        let text = formatter.format_ranking(&sample_ranking()).unwrap();

        assert!(text.contains("Role: Web Developer"));
        assert!(text.contains("Jane Doe <jane@doe.dev>"));
        assert!(text.contains("Skills: HTML, React [2/3]"));
        assert!(text.contains("Missing: CSS"));
        assert!(text.contains("broken.pdf: Extraction error"));
    }

    #[test]
    fn test_console_gap_without_colors() {
        let formatter = ConsoleFormatter::new(false, false);
        let text = formatter.format_gap(&sample_gap()).unwrap();

        assert!(text.contains("Coverage: 1/3 (33%)"));
        assert!(text.contains("✓ HTML"));
        assert!(text.contains("✗ React"));
    }

    #[test]
    fn test_json_round_trip_fields() {
        let json = JsonFormatter::new(false).format_ranking(&sample_ranking()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["batch"]["results"][0]["rank"], 1);
        assert_eq!(value["batch"]["results"][0]["similarity"], 73.46);
        assert_eq!(value["batch"]["failures"][0]["filename"], "broken.pdf");
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::with_options(false, false, false);
        let report = sample_ranking();

        let csv = generator.generate_ranking(&report, OutputFormat::Csv).unwrap();
        assert!(csv.starts_with("Rank,"));
        let json = generator.generate_ranking(&report, OutputFormat::Json).unwrap();
        assert!(json.starts_with('{'));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(
            suggest_filename(OutputFormat::Csv, "ranked_resumes", false),
            "ranked_resumes.csv"
        );
        assert!(suggest_filename(OutputFormat::Json, "gap", true).starts_with("gap_"));
    }

    #[test]
    fn test_save_report_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("ranked_resumes.csv");

        save_report_to_file("Rank\n", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Rank\n");
    }
}
