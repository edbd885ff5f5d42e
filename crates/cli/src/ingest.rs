//! Two-phase ingestion: the design section, then the stem section.
//!
//! Each section is a run of non-empty lines ended by a blank line or end of
//! input. The first malformed record aborts ingestion.

use std::convert::Infallible;
use std::io::BufRead;

use thiserror::Error;

use bouquet_composer::{Bouquet, Composer};
use bouquet_core::DomainError;
use bouquet_designs::{Design, DesignCatalog, Stem};
use bouquet_events::EventSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Design,
    Stem,
}

impl core::fmt::Display for Section {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Section::Design => f.write_str("design"),
            Section::Stem => f.write_str("stem"),
        }
    }
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("{section} record {record:?} on line {line} broke the {rule} rule: {source}", rule = .source.rule())]
    Record {
        section: Section,
        line: usize,
        record: String,
        #[source]
        source: DomainError,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<Infallible> for IngestError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Line reader that hands out one section at a time.
#[derive(Debug)]
pub struct Records<R> {
    reader: R,
    line: usize,
    buf: String,
}

impl<R: BufRead> Records<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buf: String::new(),
        }
    }

    /// Next record of the current section with its 1-based line number.
    ///
    /// `None` once the section ends (blank line or end of input). Trailing
    /// whitespace, including `\r`, is not part of a record.
    pub fn next_record(&mut self) -> Result<Option<(usize, String)>, IngestError> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        let record = self.buf.trim_end();
        if record.is_empty() {
            return Ok(None);
        }
        Ok(Some((self.line, record.to_string())))
    }

    /// Lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line
    }
}

/// Counters for one stem section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    pub stems: u64,
    pub bouquets: u64,
    /// Stems still on hand when the section ended.
    pub leftover: u64,
}

/// Design phase: parse every design record of the first section.
pub fn ingest_designs<R: BufRead>(records: &mut Records<R>) -> Result<DesignCatalog, IngestError> {
    let mut catalog = DesignCatalog::new();
    while let Some((line, record)) = records.next_record()? {
        match record.parse::<Design>() {
            Ok(design) => catalog.register(design),
            Err(source) => {
                return Err(IngestError::Record {
                    section: Section::Design,
                    line,
                    record,
                    source,
                });
            }
        }
    }
    tracing::info!(designs = catalog.len(), "design catalog built");
    Ok(catalog)
}

/// Stem phase: feed every stem of the next section to `composer`,
/// publishing bouquets in arrival order.
pub fn ingest_stems<R, S>(
    records: &mut Records<R>,
    composer: &mut Composer,
    sink: &mut S,
) -> Result<StreamSummary, IngestError>
where
    R: BufRead,
    S: EventSink<Bouquet>,
    S::Error: Into<IngestError>,
{
    let mut summary = StreamSummary::default();
    while let Some((line, record)) = records.next_record()? {
        let stem = match record.parse::<Stem>() {
            Ok(stem) => stem,
            Err(source) => {
                return Err(IngestError::Record {
                    section: Section::Stem,
                    line,
                    record,
                    source,
                });
            }
        };
        summary.stems += 1;
        if let Some(bouquet) = composer.try_compose(stem) {
            summary.bouquets += 1;
            sink.publish(bouquet).map_err(Into::<IngestError>::into)?;
        }
    }
    summary.leftover = composer.supply().total_on_hand();
    Ok(summary)
}
