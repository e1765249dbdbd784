//! Failures surfaced by the extraction engine and its file collaborators.

use crate::catalog::SectionKind;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while compiling the catalog, scanning a page or moving files around.
///
/// Absent sections are not errors; callers skip them.
#[derive(Error, Debug)]
pub enum Error {
    /// A record or marker pattern failed to compile.
    #[error("{kind} pattern failed to compile: {source}")]
    MalformedPattern {
        /// Section whose pattern is broken.
        kind: SectionKind,
        /// Compiler diagnostic.
        #[source]
        source: Box<fancy_regex::Error>,
    },

    /// The backtracking matcher gave up part way through a scan.
    #[error("matching {kind} records failed: {source}")]
    MatchFailed {
        /// Section being scanned.
        kind: SectionKind,
        /// Matcher diagnostic, usually an exhausted backtrack limit.
        #[source]
        source: Box<fancy_regex::Error>,
    },

    /// A section start marker was found but no section boundary follows it.
    #[error("{kind} starts at byte {start} but is never closed")]
    MalformedRegion {
        /// Section whose region is unterminated.
        kind: SectionKind,
        /// Offset just past the start marker.
        start: usize,
    },

    /// The page has no class declaration block.
    #[error("no class summary found in the page")]
    NoClassSummaryMatch,

    /// The input file exists but holds no text.
    #[error("input file {} is empty", path.display())]
    EmptyDocument {
        /// Path of the empty file.
        path: PathBuf,
    },

    /// Underlying file system or stream failure.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
