use crate::core::Severity;
use crate::diagnostics::Diagnostic;
use colored::*;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

/// Reporting sink for rendered diagnostics.
///
/// Hosts with their own reporting pipeline implement this; the built-in
/// writers cover plain JSON and colored terminal output.
pub trait OutputWriter {
    fn write_diagnostics(&mut self, diagnostics: &[Diagnostic]) -> anyhow::Result<()>;
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
    fn write_diagnostics(&mut self, diagnostics: &[Diagnostic]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(diagnostics)?;
        self.writer.write_all(json.as_bytes())?;
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

    fn severity_label(severity: Severity) -> ColoredString {
        match severity {
            Severity::Info => "info".normal(),
            Severity::Warning => "warning".yellow().bold(),
            Severity::Major => "major".red(),
            Severity::Critical => "critical".red().bold(),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_diagnostics(&mut self, diagnostics: &[Diagnostic]) -> anyhow::Result<()> {
        for diagnostic in diagnostics {
            let label = Self::severity_label(diagnostic.severity);
            match &diagnostic.location {
                Some(location) => writeln!(
                    self.writer,
                    "{}:{}:{}: {}[{}]: {}",
                    location.file.display(),
                    location.line,
                    location.column,
                    label,
                    diagnostic.id,
                    diagnostic.message
                )?,
                None => writeln!(
                    self.writer,
                    "{}[{}]: {}",
                    label, diagnostic.id, diagnostic.message
                )?,
            }
        }
        writeln!(
            self.writer,
            "{} naming violation(s) found",
            diagnostics.len()
        )?;
        Ok(())
    }
}

pub fn create_writer<W: Write + 'static>(writer: W, format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
