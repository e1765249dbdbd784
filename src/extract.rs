//! Record extraction: sequential, non-overlapping pattern matches inside a region.
//!
//! Extraction is purely structural. Captured text keeps its markup; cleaning it up is the
//! renderer's job.

use crate::catalog::{CompiledSection, SectionKind};
use crate::component::Component;
use crate::error::{Error, Result};
use crate::region::Region;
use fancy_regex::{CaptureMatches, Captures};

#[derive(Clone, Debug, PartialEq, Eq)]
/// One matched entry: a field, constructor, method, or the class header.
///
/// Components the section does not declare are always absent, and empty captures are
/// treated as absent so a present component always carries text.
pub struct Record<'t> {
    kind: SectionKind,
    span: Region,
    parts: [Option<&'t str>; Component::COUNT],
}

impl<'t> Record<'t> {
    fn from_captures(kind: SectionKind, offset: usize, captures: &Captures<'t>) -> Self {
        let mut parts = [None; Component::COUNT];
        for &component in kind.def().components {
            parts[component.index()] = captures
                .name(component.name())
                .map(|m| m.as_str())
                .filter(|text| !text.is_empty());
        }
        let span = match captures.get(0) {
            Some(whole) => Region::new(offset + whole.start(), offset + whole.end()),
            None => Region::new(offset, offset),
        };
        Self { kind, span, parts }
    }

    #[must_use]
    /// Build a record from explicit component text.
    ///
    /// Components `kind` does not declare and empty texts are dropped, as for matched records.
    pub fn from_parts(kind: SectionKind, span: Region, parts: &[(Component, &'t str)]) -> Self {
        let mut record = Self {
            kind,
            span,
            parts: [None; Component::COUNT],
        };
        for &(component, text) in parts {
            if kind.declares(component) && !text.is_empty() {
                record.parts[component.index()] = Some(text);
            }
        }
        record
    }

    #[must_use]
    /// Section kind this record was matched for.
    pub const fn kind(&self) -> SectionKind {
        self.kind
    }

    #[must_use]
    /// Span of the whole match within the page.
    pub const fn span(&self) -> Region {
        self.span
    }

    #[must_use]
    /// Raw captured text of `component`, if present.
    pub const fn get(&self, component: Component) -> Option<&'t str> {
        self.parts[component.index()]
    }

    /// Declared components of this record's kind with their captured text.
    pub fn components(&self) -> impl Iterator<Item = (Component, Option<&'t str>)> + '_ {
        self.kind
            .def()
            .components
            .iter()
            .map(|&component| (component, self.get(component)))
    }
}

/// Lazy iterator over the records of one section.
///
/// Each step resumes scanning where the previous match ended.
pub struct Records<'c, 't> {
    kind: SectionKind,
    offset: usize,
    matches: Option<CaptureMatches<'c, 't>>,
}

impl<'c, 't> Records<'c, 't> {
    #[must_use]
    /// Scan `region` of `document` with the record pattern of `section`.
    pub fn new(document: &'t str, region: Region, section: &'c CompiledSection) -> Self {
        let text = region.slice(document);
        Self {
            kind: section.kind(),
            offset: region.start,
            matches: Some(section.record_pattern().captures_iter(text)),
        }
    }

    #[must_use]
    /// An iterator yielding nothing, for sections the page does not have.
    pub const fn empty(section: &CompiledSection) -> Self {
        Self {
            kind: section.kind(),
            offset: 0,
            matches: None,
        }
    }
}

impl<'t> Iterator for Records<'_, 't> {
    type Item = Result<Record<'t>>;

    fn next(&mut self) -> Option<Self::Item> {
        let captures = self.matches.as_mut()?.next()?;
        let item = captures
            .map(|captures| Record::from_captures(self.kind, self.offset, &captures))
            .map_err(|source| Error::MatchFailed {
                kind: self.kind,
                source: Box::new(source),
            });
        if item.is_err() {
            // the matcher cannot resume after an aborted search
            self.matches = None;
        }
        Some(item)
    }
}

/// Extract records of `section` from `region` of `document`.
#[must_use]
pub fn extract<'c, 't>(
    document: &'t str,
    region: Region,
    section: &'c CompiledSection,
) -> Records<'c, 't> {
    Records::new(document, region, section)
}

#[cfg(test)]
#[path = "tests/extract.rs"]
mod tests;
