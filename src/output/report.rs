//! Inspection report rendering

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::inspect::{InconsistentLine, Inspection};

/// Trait for inspection report formatters
pub trait ReportFormatter {
    /// Render an inspection to a writer
    fn render(&self, inspection: &Inspection, path: &Path, writer: &mut dyn WriteColor) -> Result<()>;
}

/// Colored terminal report
pub struct TerminalReport;

impl TerminalReport {
    fn write_label(&self, writer: &mut dyn WriteColor, label: &str) -> Result<()> {
        writer.set_color(ColorSpec::new().set_bold(true))?;
        write!(writer, "{:<18}", label)?;
        writer.reset()?;
        Ok(())
    }
}

impl ReportFormatter for TerminalReport {
    fn render(&self, inspection: &Inspection, path: &Path, writer: &mut dyn WriteColor) -> Result<()> {
        writeln!(writer, "csvdata: {}", path.display())?;
        writeln!(writer)?;

        self.write_label(writer, "Row delimiter:")?;
        writeln!(writer, "{}", describe_delimiter(inspection.row_delimiter))?;
        self.write_label(writer, "Column delimiter:")?;
        writeln!(writer, "{}", describe_delimiter(inspection.column_delimiter))?;
        self.write_label(writer, "Header:")?;
        writeln!(writer, "{}", inspection.header.join(", "))?;
        self.write_label(writer, "Expected fields:")?;
        writeln!(writer, "{}", inspection.expected_fields)?;
        self.write_label(writer, "Data lines:")?;
        writeln!(writer, "{}", inspection.data_lines)?;
        writeln!(writer)?;

        if inspection.is_consistent() {
            writer.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            writeln!(writer, "All data lines are consistent")?;
            writer.reset()?;
            return Ok(());
        }

        writer.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        writeln!(
            writer,
            "{} of {} data lines have an unexpected field count:",
            inspection.inconsistent_lines.len(),
            inspection.data_lines
        )?;
        writer.reset()?;
        for InconsistentLine { line, fields } in &inspection.inconsistent_lines {
            writeln!(writer, "  line {}: {} fields", line, fields)?;
        }

        Ok(())
    }
}

/// JSON report
pub struct JsonReport {
    pretty: bool,
}

impl JsonReport {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonReport {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonReportBody<'a> {
    file: String,
    consistent: bool,
    #[serde(flatten)]
    inspection: &'a Inspection,
}

impl ReportFormatter for JsonReport {
    fn render(&self, inspection: &Inspection, path: &Path, writer: &mut dyn WriteColor) -> Result<()> {
        let body = JsonReportBody {
            file: path.display().to_string(),
            consistent: inspection.is_consistent(),
            inspection,
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &body)?;
        } else {
            serde_json::to_writer(&mut *writer, &body)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

/// Human-readable name of a delimiter character
pub fn describe_delimiter(delimiter: char) -> String {
    match delimiter {
        '\n' => "newline (\\n)".to_string(),
        '\t' => "tab (\\t)".to_string(),
        '\r' => "carriage return (\\r)".to_string(),
        ' ' => "space".to_string(),
        other => format!("'{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParseOptions;
    use crate::inspect::inspect;
    use termcolor::NoColor;

    fn render_to_string(formatter: &dyn ReportFormatter, text: &str) -> String {
        let inspection = inspect(text, &ParseOptions::new(), None);
        let mut writer = NoColor::new(Vec::new());
        formatter
            .render(&inspection, Path::new("data.csv"), &mut writer)
            .unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_terminal_report() {
        let report = render_to_string(&TerminalReport, "a,b\n1,2\n3,4,5");

        assert!(report.contains("csvdata: data.csv"));
        assert!(report.contains("newline (\\n)"));
        assert!(report.contains("','"));
        assert!(report.contains("line 3: 3 fields"));
    }

    #[test]
    fn test_json_report() {
        let report = render_to_string(&JsonReport::compact(), "a,b\n1,2\n3,4");
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();

        assert_eq!(value["file"], "data.csv");
        assert_eq!(value["consistent"], true);
        assert_eq!(value["column_delimiter"], ",");
        assert_eq!(value["data_lines"], 2);
    }
}
