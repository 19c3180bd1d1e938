//! Per-dialect configuration.
//!
//! Each dialect is a small pure-data policy consumed by the shared scanning
//! core: tag-name grammar, void-element set, scan-window radius, fragment
//! permission, and (for Vue) the `<template>` region restriction. No
//! per-dialect subclassing, no shared mutable state.

use std::str::FromStr;

use crate::token::Span;

/// Scan-window radius, in characters on each side of the cursor, for the
/// dialects that bound their search (JSX and Vue). A responsiveness
/// heuristic for large files, not a correctness bound; override with
/// [`DialectPolicy::with_window_radius`].
pub const DEFAULT_WINDOW_RADIUS: usize = 1000;

/// Element names the Vue dialect treats as self-closing even without
/// explicit `/>` syntax.
pub const VUE_VOID_ELEMENTS: &[&str] = &["img", "br", "hr", "input", "meta"];

/// Supported markup dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Html,
    Jsx,
    Vue,
}

/// No dialect handles the given editor language identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no tag processor for language '{language}'")]
pub struct UnsupportedLanguageError {
    pub language: String,
}

impl FromStr for Dialect {
    type Err = UnsupportedLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(Self::Html),
            "jsx" | "tsx" | "javascriptreact" | "typescriptreact" => Ok(Self::Jsx),
            "vue" => Ok(Self::Vue),
            other => Err(UnsupportedLanguageError {
                language: other.to_string(),
            }),
        }
    }
}

/// Tag-name grammar. Names always begin with an ASCII letter; the variants
/// differ in which characters may continue the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameGrammar {
    /// Dotted component paths and kebab custom elements
    /// (`Namespace.Component`, `my-element`). HTML and JSX.
    Dotted,
    /// Anything up to whitespace, `>`, or `/`. Vue templates.
    Loose,
}

impl NameGrammar {
    pub fn is_name_start(c: char) -> bool {
        c.is_ascii_alphabetic()
    }

    pub fn is_name_continue(self, c: char) -> bool {
        match self {
            Self::Dotted => c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '.' | '-'),
            Self::Loose => !c.is_whitespace() && c != '>' && c != '/',
        }
    }
}

/// Immutable per-dialect configuration consumed by the scanner, matcher,
/// and range resolver.
#[derive(Debug, Clone)]
pub struct DialectPolicy {
    pub dialect: Dialect,
    pub name_grammar: NameGrammar,
    /// Whether `<>` / `</>` fragment tokens are recognized.
    pub allow_fragments: bool,
    /// Element names treated as self-closing without `/>`.
    pub void_elements: &'static [&'static str],
    /// Scan-window radius around the cursor; `None` scans the whole document.
    pub window_radius: Option<usize>,
}

impl DialectPolicy {
    pub fn for_dialect(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Html => Self {
                dialect,
                name_grammar: NameGrammar::Dotted,
                allow_fragments: false,
                void_elements: &[],
                window_radius: None,
            },
            Dialect::Jsx => Self {
                dialect,
                name_grammar: NameGrammar::Dotted,
                allow_fragments: true,
                void_elements: &[],
                window_radius: Some(DEFAULT_WINDOW_RADIUS),
            },
            Dialect::Vue => Self {
                dialect,
                name_grammar: NameGrammar::Loose,
                allow_fragments: false,
                void_elements: VUE_VOID_ELEMENTS,
                window_radius: Some(DEFAULT_WINDOW_RADIUS),
            },
        }
    }

    /// Override the scan-window radius (`None` = whole document).
    pub fn with_window_radius(mut self, radius: Option<usize>) -> Self {
        self.window_radius = radius;
        self
    }

    pub fn is_void(&self, name: &str) -> bool {
        self.void_elements.contains(&name)
    }

    /// The region of the document tags may be located in: the whole
    /// document, or for Vue the first `<template> ... </template>` block.
    /// `None` means this document has no usable region at all.
    pub fn region(&self, chars: &[char]) -> Option<Span> {
        match self.dialect {
            Dialect::Html | Dialect::Jsx => Some(Span::new(0, chars.len())),
            Dialect::Vue => template_region(chars),
        }
    }
}

/// Locate the first `<template>` block. The region starts just after the
/// literal `<template>` and ends at the end of the first `</template>`
/// that follows, closing tag included — a cursor on `</template>` itself
/// is still inside the region.
fn template_region(chars: &[char]) -> Option<Span> {
    const OPEN: &str = "<template>";
    const CLOSE: &str = "</template>";
    let open_at = find_literal(chars, OPEN, 0)?;
    let content_start = open_at + OPEN.len();
    let close_at = find_literal(chars, CLOSE, content_start)?;
    Some(Span::new(content_start, close_at + CLOSE.len()))
}

/// First occurrence of an ASCII literal in `chars` at or after `from`.
fn find_literal(chars: &[char], literal: &str, from: usize) -> Option<usize> {
    let needle: Vec<char> = literal.chars().collect();
    if chars.len() < needle.len() {
        return None;
    }
    (from..=chars.len() - needle.len()).find(|&i| chars[i..i + needle.len()] == needle[..])
}
