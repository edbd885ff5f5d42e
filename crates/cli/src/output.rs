//! Writes composed bouquets, one per line.

use std::io::Write;

use bouquet_composer::Bouquet;
use bouquet_events::EventSink;

use crate::config::OutputFormat;
use crate::dto::BouquetDto;

#[derive(Debug)]
pub struct LineSink<W> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> LineSink<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> EventSink<Bouquet> for LineSink<W> {
    type Error = std::io::Error;

    fn publish(&mut self, bouquet: Bouquet) -> Result<(), Self::Error> {
        match self.format {
            OutputFormat::Text => writeln!(self.writer, "{bouquet}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.writer, &BouquetDto::from(&bouquet))?;
                writeln!(self.writer)?;
            }
        }
        // Bouquets are reported as they are composed, not at exit.
        self.writer.flush()
    }
}
