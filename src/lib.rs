//! docstub: skeleton source stubs from generated API-reference pages.
//!
//! A page is scanned with a fixed catalog of structural patterns (class summary, field,
//! constructor and method detail). Each section is bounded by its template markers, its
//! entries are matched in page order, and every entry is re-emitted as a documentation
//! comment plus a declaration with an empty body.
#![allow(clippy::multiple_crate_versions)]

pub mod catalog;
pub mod component;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod extract;
pub mod generate;
pub mod input;
pub mod prompt;
pub mod region;
pub mod render;

pub use catalog::{Catalog, SectionKind};
pub use component::Component;
pub use error::{Error, Result};
pub use extract::Record;
pub use generate::generate;
pub use region::Region;

#[cfg(test)]
#[path = "tests/fixtures.rs"]
mod fixtures;
