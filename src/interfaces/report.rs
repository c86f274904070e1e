use crate::error::{Result, ShowcaseError};
use crate::media::PlayOutcome;
use crate::payment::Receipt;
use crate::pizza::PizzaOrder;
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum OutputFormat {
    /// Human-readable console lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("text") {
            Ok(OutputFormat::Text)
        } else if s.eq_ignore_ascii_case("json") {
            Ok(OutputFormat::Json)
        } else {
            Err(ShowcaseError::UnknownOutputFormat(s.to_string()))
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Writes demo results to any `Write` sink (e.g. stdout, a buffer).
pub struct ReportWriter<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn write_receipt(&mut self, receipt: &Receipt) -> Result<()> {
        self.write_record(receipt, Some(receipt))
    }

    /// Inert outcomes print nothing in text mode.
    pub fn write_play(&mut self, outcome: &PlayOutcome) -> Result<()> {
        let message = outcome.message();
        self.write_record(outcome, message.as_ref())
    }

    pub fn write_order(&mut self, order: &PizzaOrder) -> Result<()> {
        self.write_record(order, Some(order))
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_record<T, D>(&mut self, record: &T, text: Option<&D>) -> Result<()>
    where
        T: Serialize + ?Sized,
        D: fmt::Display + ?Sized,
    {
        match self.format {
            OutputFormat::Text => {
                if let Some(text) = text {
                    writeln!(self.writer, "{text}")?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.writer, record)?;
                writeln!(self.writer)?;
            }
        }
        Ok(())
    }
}
