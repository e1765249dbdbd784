//! Rendering of a matched record into a documentation comment plus a stub declaration.
//!
//! Tags are always emitted in the same order (comment text, override, parameters, return,
//! throws, since, see-also) so output is deterministic regardless of page layout. Rendering
//! walks components rather than section kinds: a component a kind does not declare is
//! simply never present on its records.

use crate::component::Component;
use crate::extract::Record;
use regex::Regex;
use std::sync::LazyLock;

/// Order in which comment components are written.
pub const TAG_ORDER: [Component; 7] = [
    Component::Comment,
    Component::Override,
    Component::Param,
    Component::Return,
    Component::Throw,
    Component::Since,
    Component::SeeAlso,
];

// Every pattern here is a fixed literal known to compile.
// Markup is assumed flat: a tag is `<`, anything but angle brackets, `>`.
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^<>]+>").expect("tag pattern"));
static NUMERIC_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#[0-9]+;").expect("entity pattern"));
static RUN_OF_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("spaces pattern"));
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n").expect("break pattern"));
static WRAPPED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*\r?\n[ \t]*").expect("wrap pattern"));
static LIST_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*").expect("comma pattern"));
static ENTRY_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</dd>\r?\n?<dd>").expect("entry pattern"));

const CLOSE_ENTRY: &str = "</dd>";
const OPEN_ENTRY: &str = "<dd>";

#[must_use]
/// Remove every inline markup tag, leaving the text between them.
pub fn strip_tags(text: &str) -> String {
    TAG.replace_all(text, "").into_owned()
}

#[must_use]
/// Turn a comment block into comment body lines.
///
/// Runs of spaces collapse to one and every line break gains a `*` continuation.
pub fn comment_body(text: &str) -> String {
    let collapsed = RUN_OF_SPACES.replace_all(text, " ");
    LINE_BREAK.replace_all(&collapsed, "\n*").into_owned()
}

#[must_use]
/// Reduce declaration markup to a single-line signature.
pub fn clean_declaration(text: &str) -> String {
    let text = text.replace("&nbsp;", " ");
    let text = NUMERIC_ENTITY.replace_all(&text, "");
    let text = strip_tags(&text);
    let text = text
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&");
    WRAPPED_LINE.replace_all(&text, " ").trim().to_string()
}

#[must_use]
/// Split a see-also list on commas, keeping entry order.
pub fn split_see_also(text: &str) -> Vec<&str> {
    LIST_COMMA
        .split(text)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}

#[must_use]
/// Split a block of `<dd>` entries into one segment per entry.
///
/// Splits between one entry's closing `</dd>` and the next entry's opening `<dd>`, leaving
/// both markers on their own segment.
pub fn split_entries(block: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut from = 0;
    for boundary in ENTRY_BOUNDARY.find_iter(block) {
        entries.push(&block[from..boundary.start() + CLOSE_ENTRY.len()]);
        from = boundary.end() - OPEN_ENTRY.len();
    }
    entries.push(&block[from..]);
    entries
}

fn param_line(entry: &str) -> String {
    strip_tags(&entry.replace(" - ", " "))
}

/// Append the comment lines for `component` to `out`.
fn push_tag(out: &mut String, component: Component, text: &str) {
    match component {
        Component::Comment => push_line(out, &comment_body(text)),
        Component::Override => push_tagged(out, "@Override", text),
        Component::Param => {
            for entry in split_entries(text) {
                push_tagged(out, "@param", &param_line(entry));
            }
        }
        Component::Return => push_tagged(out, "@return", text),
        Component::Throw => {
            for entry in split_entries(text) {
                push_tagged(out, "@throws", &strip_tags(entry));
            }
        }
        Component::Since => push_tagged(out, "@since", text),
        Component::SeeAlso => {
            for entry in split_see_also(text) {
                push_tagged(out, "@see", entry);
            }
        }
        Component::Type | Component::Name | Component::InheritanceAndOther => {}
    }
}

fn push_tagged(out: &mut String, tag: &str, text: &str) {
    out.push_str("* ");
    out.push_str(tag);
    out.push(' ');
    out.push_str(text);
    out.push('\n');
}

fn push_line(out: &mut String, text: &str) {
    out.push_str("* ");
    out.push_str(text);
    out.push('\n');
}

#[must_use]
/// Documentation comment for `record`, from `/**` through `*/` and a trailing newline.
pub fn render_comment(record: &Record<'_>) -> String {
    let mut out = String::from("/**\n");
    for component in TAG_ORDER {
        if let Some(text) = record.get(component) {
            push_tag(&mut out, component, text);
        }
    }
    out.push_str("*/\n");
    out
}

#[must_use]
/// Declaration line for `record`, including its terminator.
pub fn render_declaration(record: &Record<'_>) -> String {
    let def = record.kind().def();
    let mut line = def
        .declaration
        .iter()
        .filter_map(|&component| record.get(component))
        .map(clean_declaration)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    line.push_str(def.terminator);
    line
}

#[must_use]
/// Render `record` as a comment block followed by its declaration line.
pub fn render(record: &Record<'_>) -> String {
    let mut out = render_comment(record);
    out.push_str(&render_declaration(record));
    out
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
