//! detag — locate the markup tag under a cursor and compute its removal span.
//!
//! Given a document, a cursor position (0-based character offset), and a
//! markup dialect (HTML, JSX/TSX, or Vue template), resolves the span of
//! text an editor should delete to remove the tag under the cursor: just
//! the tag token for self-closing and void elements, or the opening tag
//! through its matching closing tag, children included. Purely lexical:
//! no validation, no DOM, and malformed markup fails closed with `None`.
//!
//! # Example
//!
//! ```
//! use detag_core::{removal_span, Dialect, Span};
//!
//! let text = "<outer>text<inner>c</inner>more</outer>";
//! let span = removal_span(text, 13, Dialect::Html).unwrap();
//! assert_eq!(span, Span::new(11, 27)); // `<inner>c</inner>`
//! ```

pub mod matcher;
pub mod policy;
pub mod range;
pub mod resolver;
pub mod scanner;
pub mod token;

pub use policy::{
    Dialect, DialectPolicy, NameGrammar, UnsupportedLanguageError, DEFAULT_WINDOW_RADIUS,
    VUE_VOID_ELEMENTS,
};
pub use scanner::Scanner;
pub use token::{Span, TagInfo, TagToken};

/// Resolve the removal span for the tag under `cursor`, or `None` when the
/// cursor touches no tag token (or, for Vue, sits outside the first
/// `<template>` block).
pub fn removal_span(text: &str, cursor: usize, dialect: Dialect) -> Option<Span> {
    let policy = DialectPolicy::for_dialect(dialect);
    let chars: Vec<char> = text.chars().collect();
    let info = locate(&chars, cursor, &policy)?;
    Some(range::resolve_range(&chars, &info, &policy))
}

/// Locate the tag under `cursor` without resolving its full range.
///
/// A self-closing or void token yields `has_closing_tag == false`. An
/// opening token yields its own span with `has_closing_tag == true`. A
/// closing token is first paired with its opening token through the
/// nesting stack; the `TagInfo` then carries the opening token's span, so
/// the resolved range covers the whole element the cursor sits at the end
/// of. An unpaired closer yields `None`.
pub fn find_tag_at(text: &str, cursor: usize, policy: &DialectPolicy) -> Option<TagInfo> {
    let chars: Vec<char> = text.chars().collect();
    locate(&chars, cursor, policy)
}

/// Resolve the deletion span for a previously located tag.
pub fn tag_range(text: &str, info: &TagInfo, policy: &DialectPolicy) -> Span {
    let chars: Vec<char> = text.chars().collect();
    range::resolve_range(&chars, info, policy)
}

fn locate(chars: &[char], cursor: usize, policy: &DialectPolicy) -> Option<TagInfo> {
    let region = policy.region(chars)?;
    if !region.touches(cursor) {
        return None;
    }

    let window = scan_window(region, cursor, policy.window_radius);
    let tokens: Vec<TagToken> =
        Scanner::new(&chars[window.start..window.end], window.start, policy).collect();

    let index = resolver::nearest_index(&tokens, cursor)?;
    let hit = &tokens[index];

    if hit.self_closing {
        return Some(TagInfo {
            tag_name: hit.name.clone(),
            span: hit.span,
            has_closing_tag: false,
        });
    }
    if hit.closing {
        let open = matcher::open_for_close(&tokens, index)?;
        return Some(TagInfo {
            tag_name: open.name.clone(),
            span: open.span,
            has_closing_tag: true,
        });
    }
    Some(TagInfo {
        tag_name: hit.name.clone(),
        span: hit.span,
        has_closing_tag: true,
    })
}

/// Clamp the cursor-centered window to the permitted region. Offsets in
/// the window stay absolute; the scanner re-adds the window base.
fn scan_window(region: Span, cursor: usize, radius: Option<usize>) -> Span {
    match radius {
        None => region,
        Some(r) => Span::new(
            region.start.max(cursor.saturating_sub(r)),
            region.end.min(cursor.saturating_add(r)),
        ),
    }
}
