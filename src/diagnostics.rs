//! Self-test hook for checking the catalog against a real page.
//!
//! Runs every section's region locator and record extractor, handing each event to a
//! [`Reporter`] and returning per-section counts, so development runs can see exactly what
//! each pattern captured without the generator touching any global state.

use crate::catalog::{Catalog, SectionKind};
use crate::error::Result;
use crate::extract::{extract, Record};
use crate::region::Region;
use serde::Serialize;
use std::io::{self, Write};

/// Receives self-test events. Every method defaults to doing nothing.
pub trait Reporter {
    /// The page has no section of this kind.
    ///
    /// # Errors
    ///
    /// Implementations writing to a stream return its failures.
    fn section_absent(&mut self, kind: SectionKind) -> io::Result<()> {
        let _ = kind;
        Ok(())
    }

    /// The region locator found `kind` at `region`.
    ///
    /// # Errors
    ///
    /// Implementations writing to a stream return its failures.
    fn region_located(&mut self, kind: SectionKind, region: Region) -> io::Result<()> {
        let _ = (kind, region);
        Ok(())
    }

    /// A record was matched.
    ///
    /// # Errors
    ///
    /// Implementations writing to a stream return its failures.
    fn record_found(&mut self, record: &Record<'_>) -> io::Result<()> {
        let _ = record;
        Ok(())
    }
}

/// Reporter that discards every event.
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Reporter printing every event and captured component to a writer.
pub struct WriterReporter<W: Write> {
    writer: W,
}

impl<W: Write> WriterReporter<W> {
    #[must_use]
    /// Report to `writer`.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    #[must_use]
    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for WriterReporter<W> {
    fn section_absent(&mut self, kind: SectionKind) -> io::Result<()> {
        writeln!(self.writer, "This page has no {kind}\n")
    }

    fn region_located(&mut self, kind: SectionKind, region: Region) -> io::Result<()> {
        writeln!(self.writer, "{kind} [{}, {}]", region.start, region.end)
    }

    fn record_found(&mut self, record: &Record<'_>) -> io::Result<()> {
        writeln!(self.writer, "Found a {}", record.kind())?;
        for (component, text) in record.components() {
            writeln!(self.writer, "{component}: {}", text.unwrap_or("null"))?;
        }
        writeln!(self.writer)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// What the self-test found for one section kind.
pub struct SectionReport {
    /// Section kind tested.
    pub kind: SectionKind,
    /// Located section region, absent when the page lacks the start marker.
    pub region: Option<Region>,
    /// Number of records matched.
    pub records: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
/// Per-kind results of a self-test run, in catalog order.
pub struct SelfTestReport {
    /// One entry per section kind.
    pub sections: Vec<SectionReport>,
}

impl SelfTestReport {
    #[must_use]
    /// Records matched for `kind`, zero if it was not tested.
    pub fn count(&self, kind: SectionKind) -> usize {
        self.sections
            .iter()
            .find(|section| section.kind == kind)
            .map_or(0, |section| section.records)
    }
}

/// Scan `document` with every section of `catalog`, reporting each region and record.
///
/// Every kind runs the region locator. Class summary records are still searched across
/// the whole page, so a page without the class start marker can report the section as
/// absent and yet count its class record.
///
/// # Errors
///
/// Propagates malformed regions, aborted scans and reporter write failures.
pub fn self_test<R: Reporter + ?Sized>(
    document: &str,
    catalog: &Catalog,
    reporter: &mut R,
) -> Result<SelfTestReport> {
    let mut report = SelfTestReport::default();

    for kind in SectionKind::ALL {
        let region = catalog.locate(document, kind)?;
        match region {
            None => reporter.section_absent(kind)?,
            Some(region) => reporter.region_located(kind, region)?,
        }

        let mut records = 0;
        if let Some(scope) = catalog.scope(document, kind)? {
            for record in extract(document, scope, catalog.section(kind)) {
                reporter.record_found(&record?)?;
                records += 1;
            }
        }

        report.sections.push(SectionReport {
            kind,
            region,
            records,
        });
    }

    Ok(report)
}

#[cfg(test)]
#[path = "tests/diagnostics.rs"]
mod tests;
