//! Output: table serialization and inspection reports

mod report;
mod text;

use std::path::Path;

use anyhow::Result;
use termcolor::{ColorChoice, StandardStream};

use crate::config::OutputFormat;
use crate::inspect::Inspection;

pub use report::{describe_delimiter, JsonReport, ReportFormatter, TerminalReport};
pub use text::render;

/// Factory for creating report formatters
pub struct ReportFactory;

impl ReportFactory {
    /// Create a report formatter based on format type
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Terminal => Box::new(TerminalReport),
            OutputFormat::Json => Box::new(JsonReport::new()),
        }
    }
}

/// Render an inspection report to stdout
pub fn report_to_stdout(
    inspection: &Inspection,
    path: &Path,
    format: OutputFormat,
    color_choice: ColorChoice,
) -> Result<()> {
    let formatter = ReportFactory::create(format);
    let mut stdout = StandardStream::stdout(color_choice);
    formatter.render(inspection, path, &mut stdout)
}
