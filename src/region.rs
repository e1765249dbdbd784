//! Region location: the byte span of a page holding one section's entries.
//!
//! A region opens just past a section's start marker and closes where the next section
//! boundary comment begins. Because every boundary comment in the template has the same
//! fixed width, one generic end marker finds "wherever the next section starts" no matter
//! which section that is.

use crate::catalog::CompiledSection;
use crate::error::{Error, Result};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
/// Half-open byte span `[start, end)` within a page.
pub struct Region {
    /// First byte of the region.
    pub start: usize,
    /// One past the last byte of the region.
    pub end: usize,
}

impl Region {
    #[must_use]
    /// Span from `start` up to (not including) `end`.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    /// Span covering all of `document`.
    pub const fn whole(document: &str) -> Self {
        Self::new(0, document.len())
    }

    #[must_use]
    /// Length of the span in bytes.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    /// Whether the span is empty.
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[must_use]
    /// Whether `offset` falls inside the span.
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    #[must_use]
    /// Text of `document` covered by the span.
    pub fn slice<'t>(&self, document: &'t str) -> &'t str {
        &document[self.start..self.end]
    }
}

/// Find the region of `section` in `document`.
///
/// Returns `Ok(None)` when the start marker is missing: the page simply has no such section
/// and callers skip it.
///
/// # Errors
///
/// Returns [`Error::MalformedRegion`] when the start marker is present but no section
/// boundary follows it, and [`Error::MatchFailed`] if a marker search aborts.
pub fn locate(document: &str, section: &CompiledSection) -> Result<Option<Region>> {
    let kind = section.kind();
    let scan_failed = |source| Error::MatchFailed {
        kind,
        source: Box::new(source),
    };

    let Some(opening) = section.start_marker().find(document).map_err(scan_failed)? else {
        return Ok(None);
    };
    let start = opening.end();

    let closing = section
        .end_marker()
        .find_from_pos(document, start)
        .map_err(scan_failed)?
        .ok_or(Error::MalformedRegion { kind, start })?;

    Ok(Some(Region::new(start, closing.start())))
}

#[cfg(test)]
#[path = "tests/region.rs"]
mod tests;
