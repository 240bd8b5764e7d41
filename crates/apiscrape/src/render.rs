use std::fmt::Display;
use std::io::Write;

use serde::Serialize;

use crate::error::ScrapeError;
use crate::source::SourceId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonSection<'a, R> {
    source: SourceId,
    heading: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    records: Option<&'a [R]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    skipped: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Writes scrape results to an output sink, one section per source.
///
/// Text output separates sections with a blank line and starts each with an
/// `=== heading ===` banner. JSON output writes one object per source.
/// Failed writes are logged and otherwise ignored: the sink is the only place
/// results could be reported.
pub struct Printer<W: Write> {
    out: W,
    format: OutputFormat,
    sections: usize,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            sections: 0,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Plain status line, only shown in text output.
    pub fn status(&mut self, text: &str) {
        if self.format == OutputFormat::Text {
            self.emit(text);
        }
    }

    pub fn records<R: Display + Serialize>(
        &mut self,
        source: SourceId,
        heading: &str,
        records: &[R],
        empty_message: Option<&str>,
    ) {
        match self.format {
            OutputFormat::Text => {
                self.start_section();
                self.emit(&banner(heading));
                if records.is_empty()
                    && let Some(message) = empty_message
                {
                    self.emit(message);
                }
                for record in records {
                    self.emit(&record.to_string());
                }
            }
            OutputFormat::Json => self.json(&JsonSection {
                source,
                heading,
                records: Some(records),
                skipped: None,
                error: None,
            }),
        }
    }

    pub fn skipped(&mut self, source: SourceId, heading: &str, message: &str) {
        match self.format {
            OutputFormat::Text => {
                self.start_section();
                self.emit(&banner(heading));
                self.emit(message);
            }
            OutputFormat::Json => self.json(&JsonSection::<()> {
                source,
                heading,
                records: None,
                skipped: Some(message),
                error: None,
            }),
        }
    }

    /// Reports a failed source as a single diagnostic line.
    pub fn failure(&mut self, source: SourceId, heading: &str, error: &ScrapeError) {
        match self.format {
            OutputFormat::Text => {
                self.start_section();
                self.emit(&diagnostic(source, error));
            }
            OutputFormat::Json => self.json(&JsonSection::<()> {
                source,
                heading,
                records: None,
                skipped: None,
                error: Some(error.to_string()),
            }),
        }
    }

    fn start_section(&mut self) {
        if self.sections > 0 {
            self.emit("");
        }
        self.sections += 1;
    }

    fn json<T: Serialize>(&mut self, section: &T) {
        match serde_json::to_string_pretty(section) {
            Ok(json) => self.emit(&json),
            Err(e) => log::error!("Error serializing to JSON: {}", e),
        }
    }

    fn emit(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            log::warn!("Failed to write output: {}", e);
        }
    }
}

pub fn banner(heading: &str) -> String {
    format!("=== {} ===", heading)
}

/// `Error fetching <label>: <error>`, flattened onto one line.
pub fn diagnostic(source: SourceId, error: &ScrapeError) -> String {
    let message = error.to_string();
    format!(
        "Error fetching {}: {}",
        source.label(),
        message.split_whitespace().collect::<Vec<_>>().join(" ")
    )
}
