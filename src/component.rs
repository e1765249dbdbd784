//! The fixed vocabulary of named pieces a section pattern can capture.
//!
//! Every record pattern in the catalog names its capture groups after these variants, so
//! generic extraction and rendering code can walk a section's declared components without
//! knowing which kind of section it is looking at.

use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
/// A named, independently optional piece of captured text within a record.
pub enum Component {
    /// Declared type keyword phrase of a class, e.g. `public class `.
    Type,
    /// Class name, or the full declaration text of a member.
    Name,
    /// Extends/implements clause following the class name.
    InheritanceAndOther,
    /// Free-text documentation block.
    Comment,
    /// Reference to the member this one overrides.
    Override,
    /// Raw block of parameter entries.
    Param,
    /// Return value description.
    Return,
    /// Raw block of thrown exception entries.
    Throw,
    /// Version the item first appeared in.
    Since,
    /// Comma separated cross references.
    SeeAlso,
}

impl Component {
    /// Number of components in the vocabulary.
    pub const COUNT: usize = 10;

    /// Every component, in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Type,
        Self::Name,
        Self::InheritanceAndOther,
        Self::Comment,
        Self::Override,
        Self::Param,
        Self::Return,
        Self::Throw,
        Self::Since,
        Self::SeeAlso,
    ];

    #[must_use]
    /// Capture group name used for this component in record patterns.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Type => "Type",
            Self::Name => "Name",
            Self::InheritanceAndOther => "InheritanceAndOther",
            Self::Comment => "Comment",
            Self::Override => "Override",
            Self::Param => "Param",
            Self::Return => "Return",
            Self::Throw => "Throw",
            Self::Since => "Since",
            Self::SeeAlso => "SeeAlso",
        }
    }

    #[must_use]
    /// Position of this component in [`Component::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
