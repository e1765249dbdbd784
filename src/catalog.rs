//! The pattern catalog: one structural definition per section of a documentation page.
//!
//! Each [`SectionKind`] carries its configuration as plain data in a [`SectionDef`]: the
//! record pattern, the components that pattern declares, how the declaration line is
//! assembled, and the pair of markers that bound the section. [`Catalog`] compiles all four
//! definitions once so pages can be scanned repeatedly without recompiling.
//!
//! The record patterns target a single page template and lean on non-greedy matching plus
//! tempered tokens (`(?:.(?!/div>))+`) to stay inside one block. They assume markup inside
//! captured text never nests angle brackets, which holds for the generator output they were
//! written against and for nothing broader.

use crate::component::Component;
use crate::error::{Error, Result};
use crate::extract::Records;
use crate::region::{self, Region};
use fancy_regex::{Regex, RegexBuilder};
use serde::Serialize;
use std::fmt;

/// Step budget for the backtracking record patterns when none is configured.
pub const DEFAULT_BACKTRACK_LIMIT: usize = 1_000_000;

/// Matches any of the fixed-width comments the template puts between sections.
const SECTION_BOUNDARY: &str = r"<!-- [= \w]{37} -->";

macro_rules! member_head {
    () => {
        r#"<li class="blockList">\r?\n<h4>\w+?</h4>\r?\n<pre>(?P<Name>(?:.(?!/pre>))+)</pre>\r?\n"#
    };
}

macro_rules! comment_block {
    () => {
        r#"(?:<div class="block">(?P<Comment>(?:.(?!/div>))+)</div>\r?\n)?"#
    };
}

macro_rules! override_tag {
    () => {
        r#"(?:<dt><span class="overrideSpecifyLabel">Overrides:</span></dt>\r?\n<dd>(?P<Override>.+?)</dd>\r?\n)?"#
    };
}

macro_rules! param_tags {
    () => {
        r#"(?:<dt><span class="paramLabel">Parameters:</span></dt>\r?\n(?P<Param>.+?)\r?\n)?"#
    };
}

macro_rules! return_tag {
    () => {
        r#"(?:<dt><span class="returnLabel">Returns:</span></dt>\r?\n<dd>(?P<Return>.+?)</dd>\r?\n)?"#
    };
}

macro_rules! throws_tags {
    () => {
        r#"(?:<dt><span class="throwsLabel">Throws:</span></dt>\r?\n<dd>(?P<Throw>.+?)</dd>\r?\n)?"#
    };
}

macro_rules! since_tag {
    () => {
        r#"(?:<dt><span class="simpleTagLabel">Since:</span></dt>\r?\n<dd>(?P<Since>.+?)</dd>\r?\n)?"#
    };
}

macro_rules! see_tag {
    () => {
        r#"(?:<dt><span class="seeLabel">See Also:</span></dt>\r?\n<dd>(?P<SeeAlso>.+?)</dd>\r?\n)?"#
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
/// The four sections of a page the extractor understands.
pub enum SectionKind {
    /// The class declaration and its documentation. Exactly one per page.
    ClassSummary,
    /// Detailed entries for declared fields.
    FieldDetail,
    /// Detailed entries for constructors.
    ConstructorDetail,
    /// Detailed entries for methods.
    MethodDetail,
}

/// Static configuration of one section kind.
pub struct SectionDef {
    /// Record pattern with one named group per declared component.
    pub pattern: &'static str,
    /// Components the pattern declares, in capture order.
    pub components: &'static [Component],
    /// Components joined by single spaces to form the declaration line.
    pub declaration: &'static [Component],
    /// Text closing the declaration line.
    pub terminator: &'static str,
    /// Marker whose end opens the section region.
    pub start_marker: &'static str,
    /// Marker whose start closes the section region.
    pub end_marker: &'static str,
}

static CLASS_SUMMARY: SectionDef = SectionDef {
    pattern: concat!(
        "(?s)",
        r#"<pre>(?P<Type>.+?)<span class="typeNameLabel">(?P<Name>\w+?(?:&lt;.+?&gt;)?)</span>\r?\n"#,
        r"(?P<InheritanceAndOther>.+?)</pre>\r?\n",
        comment_block!(),
        r"(?:<dl>\r?\n",
        since_tag!(),
        see_tag!(),
        r"</dl>)?",
    ),
    components: &[
        Component::Type,
        Component::Name,
        Component::InheritanceAndOther,
        Component::Comment,
        Component::Since,
        Component::SeeAlso,
    ],
    declaration: &[
        Component::Type,
        Component::Name,
        Component::InheritanceAndOther,
    ],
    terminator: "{",
    start_marker: "<!-- ======== START OF CLASS DATA ======== -->",
    end_marker: SECTION_BOUNDARY,
};

static FIELD_DETAIL: SectionDef = SectionDef {
    pattern: concat!(
        "(?s)",
        member_head!(),
        comment_block!(),
        r"(?:<dl>\r?\n",
        since_tag!(),
        see_tag!(),
        r"</dl>\r?\n)?",
    ),
    components: &[
        Component::Name,
        Component::Comment,
        Component::Since,
        Component::SeeAlso,
    ],
    declaration: &[Component::Name],
    terminator: ";",
    start_marker: "<!-- ============ FIELD DETAIL =========== -->",
    end_marker: SECTION_BOUNDARY,
};

static CONSTRUCTOR_DETAIL: SectionDef = SectionDef {
    pattern: concat!(
        "(?s)",
        member_head!(),
        comment_block!(),
        r"(?:<dl>\r?\n",
        override_tag!(),
        param_tags!(),
        throws_tags!(),
        since_tag!(),
        see_tag!(),
        r"</dl>\r?\n)?",
    ),
    components: &[
        Component::Name,
        Component::Comment,
        Component::Override,
        Component::Param,
        Component::Throw,
        Component::Since,
        Component::SeeAlso,
    ],
    declaration: &[Component::Name],
    terminator: "{}",
    start_marker: "<!-- ========= CONSTRUCTOR DETAIL ======== -->",
    end_marker: SECTION_BOUNDARY,
};

static METHOD_DETAIL: SectionDef = SectionDef {
    pattern: concat!(
        "(?s)",
        member_head!(),
        comment_block!(),
        r"(?:<dl>\r?\n",
        override_tag!(),
        param_tags!(),
        return_tag!(),
        throws_tags!(),
        since_tag!(),
        see_tag!(),
        r"</dl>\r?\n)?",
    ),
    components: &[
        Component::Name,
        Component::Comment,
        Component::Override,
        Component::Param,
        Component::Return,
        Component::Throw,
        Component::Since,
        Component::SeeAlso,
    ],
    declaration: &[Component::Name],
    terminator: "{}",
    start_marker: "<!-- ============ METHOD DETAIL ========== -->",
    end_marker: SECTION_BOUNDARY,
};

impl SectionKind {
    /// Every kind, in the order sections are emitted.
    pub const ALL: [Self; 4] = [
        Self::ClassSummary,
        Self::FieldDetail,
        Self::ConstructorDetail,
        Self::MethodDetail,
    ];

    /// Kinds rendered as members inside the class body.
    pub const MEMBERS: [Self; 3] = [
        Self::FieldDetail,
        Self::ConstructorDetail,
        Self::MethodDetail,
    ];

    #[must_use]
    /// Static configuration for this kind.
    pub fn def(self) -> &'static SectionDef {
        match self {
            Self::ClassSummary => &CLASS_SUMMARY,
            Self::FieldDetail => &FIELD_DETAIL,
            Self::ConstructorDetail => &CONSTRUCTOR_DETAIL,
            Self::MethodDetail => &METHOD_DETAIL,
        }
    }

    #[must_use]
    /// Whether this kind's pattern captures `component`.
    pub fn declares(self, component: Component) -> bool {
        self.def().components.contains(&component)
    }

    #[must_use]
    /// Display name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ClassSummary => "ClassSummary",
            Self::FieldDetail => "FieldDetail",
            Self::ConstructorDetail => "ConstructorDetail",
            Self::MethodDetail => "MethodDetail",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One section kind with its patterns compiled.
#[derive(Debug)]
pub struct CompiledSection {
    kind: SectionKind,
    record: Regex,
    start_marker: Regex,
    end_marker: Regex,
}

impl CompiledSection {
    /// Compile the record and marker patterns of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPattern`] if any of the three patterns does not compile.
    pub fn compile(kind: SectionKind, backtrack_limit: usize) -> Result<Self> {
        let def = kind.def();
        let build = |pattern: &str| {
            RegexBuilder::new(pattern)
                .backtrack_limit(backtrack_limit)
                .build()
                .map_err(|source| Error::MalformedPattern {
                    kind,
                    source: Box::new(source),
                })
        };

        Ok(Self {
            kind,
            record: build(def.pattern)?,
            start_marker: build(def.start_marker)?,
            end_marker: build(def.end_marker)?,
        })
    }

    #[must_use]
    /// Section kind these patterns belong to.
    pub const fn kind(&self) -> SectionKind {
        self.kind
    }

    #[must_use]
    /// Compiled record pattern.
    pub const fn record_pattern(&self) -> &Regex {
        &self.record
    }

    #[must_use]
    /// Compiled region start marker.
    pub const fn start_marker(&self) -> &Regex {
        &self.start_marker
    }

    #[must_use]
    /// Compiled region end marker.
    pub const fn end_marker(&self) -> &Regex {
        &self.end_marker
    }
}

/// All four section kinds, compiled and ready to scan pages.
#[derive(Debug)]
pub struct Catalog {
    sections: Vec<CompiledSection>,
}

impl Catalog {
    /// Compile the catalog with [`DEFAULT_BACKTRACK_LIMIT`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPattern`] naming the first kind that fails to compile.
    pub fn new() -> Result<Self> {
        Self::with_backtrack_limit(DEFAULT_BACKTRACK_LIMIT)
    }

    /// Compile the catalog, bounding each record match to `backtrack_limit` steps.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPattern`] naming the first kind that fails to compile.
    pub fn with_backtrack_limit(backtrack_limit: usize) -> Result<Self> {
        let sections = SectionKind::ALL
            .into_iter()
            .map(|kind| CompiledSection::compile(kind, backtrack_limit))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { sections })
    }

    #[must_use]
    /// Compiled patterns for `kind`.
    pub fn section(&self, kind: SectionKind) -> &CompiledSection {
        &self.sections[kind.index()]
    }

    /// Locate the region of `kind` in `document`.
    ///
    /// # Errors
    ///
    /// See [`region::locate`].
    pub fn locate(&self, document: &str, kind: SectionKind) -> Result<Option<Region>> {
        region::locate(document, self.section(kind))
    }

    /// Span record matching is confined to for `kind`.
    ///
    /// The class summary is searched across the whole page; every other kind only inside
    /// its located region, and not at all when the page lacks that section.
    ///
    /// # Errors
    ///
    /// See [`region::locate`].
    pub fn scope(&self, document: &str, kind: SectionKind) -> Result<Option<Region>> {
        match kind {
            SectionKind::ClassSummary => Ok(Some(Region::whole(document))),
            _ => self.locate(document, kind),
        }
    }

    /// Lazily extract the records of `kind` from `document`.
    ///
    /// Yields nothing when the page has no such section.
    ///
    /// # Errors
    ///
    /// Fails only when the section's region is malformed; see [`region::locate`].
    pub fn records<'c, 't>(
        &'c self,
        document: &'t str,
        kind: SectionKind,
    ) -> Result<Records<'c, 't>> {
        let section = self.section(kind);
        Ok(match self.scope(document, kind)? {
            Some(region) => Records::new(document, region, section),
            None => Records::empty(section),
        })
    }
}

#[cfg(test)]
#[path = "tests/catalog.rs"]
mod tests;
