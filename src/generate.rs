//! Stub generation: walks a page section by section and assembles the skeleton source.
//!
//! Output is built fully in memory and only handed back once every section has rendered,
//! so a page that fails part way never yields a truncated stub.

use crate::catalog::{Catalog, SectionKind};
use crate::error::{Error, Result};
use crate::extract::extract;
use crate::render::render;

/// Render the class summary, then every field, constructor and method, then close the class.
///
/// Sections missing from the page are skipped. Records appear in page order; nothing is
/// reordered, deduplicated or validated.
///
/// # Errors
///
/// Returns [`Error::NoClassSummaryMatch`] if the page has no class declaration, and
/// propagates malformed regions or aborted scans from any section.
pub fn generate(document: &str, catalog: &Catalog) -> Result<String> {
    let class = catalog
        .records(document, SectionKind::ClassSummary)?
        .next()
        .ok_or(Error::NoClassSummaryMatch)??;

    let mut out = render(&class);

    for kind in SectionKind::MEMBERS {
        let Some(region) = catalog.locate(document, kind)? else {
            tracing::debug!(%kind, "section absent, skipping");
            continue;
        };
        tracing::debug!(%kind, start = region.start, end = region.end, "located section");

        let mut rendered = 0usize;
        for record in extract(document, region, catalog.section(kind)) {
            out.push('\n');
            out.push_str(&render(&record?));
            rendered += 1;
        }
        tracing::debug!(%kind, records = rendered, "rendered section");
    }

    out.push_str("\n}\n");
    Ok(out)
}

#[cfg(test)]
#[path = "tests/generate.rs"]
mod tests;
