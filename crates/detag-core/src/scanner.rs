//! Tag token scanner.
//!
//! Extracts tag-like tokens (`<name ...>`, `</name>`, `<name .../>`, and
//! JSX fragments) from a window of document text. Attribute content is
//! consumed opaquely up to the next `>`; an unescaped `>` inside a quoted
//! attribute value therefore truncates the token. That mis-scan is an
//! accepted limitation of the lexical approach — downstream it fails
//! closed (no range, nothing deleted), never mis-deletes.

use crate::policy::{DialectPolicy, NameGrammar};
use crate::token::{Span, TagToken};

/// Scanner over a window of the document.
///
/// `base` is the absolute offset of `chars[0]`; every emitted span is
/// translated back to absolute document offsets. Implements `Iterator`,
/// so callers can stop early or collect the whole window.
pub struct Scanner<'a> {
    chars: &'a [char],
    base: usize,
    pos: usize,
    grammar: NameGrammar,
    allow_fragments: bool,
    void_elements: &'static [&'static str],
}

impl<'a> Scanner<'a> {
    pub fn new(chars: &'a [char], base: usize, policy: &DialectPolicy) -> Self {
        Self {
            chars,
            base,
            pos: 0,
            grammar: policy.name_grammar,
            allow_fragments: policy.allow_fragments,
            void_elements: policy.void_elements,
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    /// Try to scan one tag token starting at the `<` at `lt`.
    /// On failure the caller resumes scanning just past the `<`.
    fn scan_tag(&mut self, lt: usize) -> Option<TagToken> {
        self.pos = lt + 1;
        let closing = self.peek() == Some('/');
        if closing {
            self.advance();
        }

        // JSX fragments: `<>` and `</>`.
        if self.allow_fragments && self.peek() == Some('>') {
            self.advance();
            return Some(TagToken {
                name: String::new(),
                span: Span::new(self.base + lt, self.base + self.pos),
                self_closing: false,
                closing,
            });
        }

        let name = self.scan_name()?;

        // Attribute content is opaque: run to the terminating `>`,
        // inner `<` included. No `>` before the window ends: no token.
        let mut prev = ' ';
        loop {
            let c = self.advance()?;
            if c == '>' {
                break;
            }
            prev = c;
        }

        let self_closing =
            !closing && (prev == '/' || self.void_elements.contains(&name.as_str()));

        Some(TagToken {
            name,
            span: Span::new(self.base + lt, self.base + self.pos),
            self_closing,
            closing,
        })
    }

    fn scan_name(&mut self) -> Option<String> {
        let first = self.peek()?;
        if !NameGrammar::is_name_start(first) {
            return None;
        }
        let mut name = String::new();
        name.push(first);
        self.advance();
        while let Some(c) = self.peek() {
            if !self.grammar.is_name_continue(c) {
                break;
            }
            name.push(c);
            self.advance();
        }
        Some(name)
    }
}

impl Iterator for Scanner<'_> {
    type Item = TagToken;

    fn next(&mut self) -> Option<TagToken> {
        while !self.is_at_end() {
            if self.peek() == Some('<') {
                let lt = self.pos;
                if let Some(token) = self.scan_tag(lt) {
                    return Some(token);
                }
                // Not a tag after all: resume just past the `<`.
                self.pos = lt + 1;
            } else {
                self.pos += 1;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Dialect;
    use pretty_assertions::assert_eq;

    fn scan(text: &str, dialect: Dialect) -> Vec<TagToken> {
        let chars: Vec<char> = text.chars().collect();
        let policy = DialectPolicy::for_dialect(dialect);
        Scanner::new(&chars, 0, &policy).collect()
    }

    fn names(tokens: &[TagToken]) -> Vec<&str> {
        tokens.iter().map(|t| t.name.as_str()).collect()
    }

    // =========================================================================
    // Basic token forms
    // =========================================================================

    #[test]
    fn test_opening_closing_and_self_closing() {
        let tokens = scan("<div class=\"a\">x</div><img src=\"y\"/>", Dialect::Html);
        assert_eq!(names(&tokens), vec!["div", "div", "img"]);

        assert_eq!(tokens[0].span, Span::new(0, 15));
        assert!(!tokens[0].closing);
        assert!(!tokens[0].self_closing);

        assert_eq!(tokens[1].span, Span::new(16, 22));
        assert!(tokens[1].closing);

        assert_eq!(tokens[2].span, Span::new(22, 36));
        assert!(tokens[2].self_closing);
        assert!(!tokens[2].closing);
    }

    #[test]
    fn test_self_closing_with_space_before_slash() {
        let tokens = scan("<br />", Dialect::Html);
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].self_closing);
        assert_eq!(tokens[0].name, "br");
    }

    #[test]
    fn test_slash_not_adjacent_to_gt_is_not_self_closing() {
        // `/` buried in attributes does not mark the tag self-closing.
        let tokens = scan("<a href=\"x/y\">", Dialect::Html);
        assert!(!tokens[0].self_closing);
    }

    #[test]
    fn test_text_without_tags_yields_nothing() {
        assert!(scan("plain text, 1 < 2 and 3 > 2", Dialect::Html).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(scan("", Dialect::Html).is_empty());
    }

    // =========================================================================
    // Name grammar
    // =========================================================================

    #[test]
    fn test_dotted_component_names() {
        let tokens = scan("<Ns.Comp prop={1}></Ns.Comp>", Dialect::Jsx);
        assert_eq!(names(&tokens), vec!["Ns.Comp", "Ns.Comp"]);
    }

    #[test]
    fn test_kebab_custom_element_names() {
        let tokens = scan("<my-element></my-element>", Dialect::Html);
        assert_eq!(names(&tokens), vec!["my-element", "my-element"]);
    }

    #[test]
    fn test_name_must_start_with_letter() {
        // `<1>` is not a tag; the scanner moves on and finds `<b>`.
        let tokens = scan("<1> <b>", Dialect::Html);
        assert_eq!(names(&tokens), vec!["b"]);
    }

    #[test]
    fn test_vue_loose_names() {
        let tokens = scan("<my-comp.x></my-comp.x>", Dialect::Vue);
        assert_eq!(names(&tokens), vec!["my-comp.x", "my-comp.x"]);
    }

    // =========================================================================
    // Fragments
    // =========================================================================

    #[test]
    fn test_jsx_fragments() {
        let tokens = scan("<><b>x</b></>", Dialect::Jsx);
        assert_eq!(names(&tokens), vec!["", "b", "b", ""]);
        assert!(tokens[0].is_fragment());
        assert!(!tokens[0].closing);
        assert!(tokens[3].is_fragment());
        assert!(tokens[3].closing);
        assert_eq!(tokens[0].span, Span::new(0, 2));
        assert_eq!(tokens[3].span, Span::new(10, 13));
    }

    #[test]
    fn test_fragments_not_recognized_in_html() {
        let tokens = scan("<><b>x</b></>", Dialect::Html);
        assert_eq!(names(&tokens), vec!["b", "b"]);
    }

    // =========================================================================
    // Void elements
    // =========================================================================

    #[test]
    fn test_vue_void_element_without_slash() {
        let tokens = scan("<br>", Dialect::Vue);
        assert!(tokens[0].self_closing);
    }

    #[test]
    fn test_html_void_name_needs_explicit_slash() {
        // Plain HTML only honors explicit `/>`.
        let tokens = scan("<br>", Dialect::Html);
        assert!(!tokens[0].self_closing);
    }

    #[test]
    fn test_closing_void_name_stays_a_closer() {
        let tokens = scan("</br>", Dialect::Vue);
        assert!(tokens[0].closing);
        assert!(!tokens[0].self_closing);
    }

    // =========================================================================
    // Accepted lexical limitations
    // =========================================================================

    #[test]
    fn test_unescaped_gt_in_attribute_truncates_token() {
        let tokens = scan("<div class=\"test>content</div>", Dialect::Html);
        // The first `>` terminates the token mid-attribute.
        assert_eq!(tokens[0].span, Span::new(0, 17));
        assert_eq!(tokens[0].name, "div");
        assert_eq!(tokens[1].span, Span::new(24, 30));
        assert!(tokens[1].closing);
    }

    #[test]
    fn test_inner_lt_is_swallowed_by_attribute_scan() {
        // Mirrors the original regex: `[^>]*` runs over an inner `<`.
        let tokens = scan("<a <b> c", Dialect::Html);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "a");
        assert_eq!(tokens[0].span, Span::new(0, 6));
    }

    #[test]
    fn test_unterminated_tag_yields_no_token() {
        assert!(scan("<div class", Dialect::Html).is_empty());
    }

    // =========================================================================
    // Window offset translation
    // =========================================================================

    #[test]
    fn test_window_base_produces_absolute_spans() {
        let chars: Vec<char> = "aaaa<div>x</div>".chars().collect();
        let policy = DialectPolicy::for_dialect(Dialect::Html);
        let tokens: Vec<TagToken> = Scanner::new(&chars[4..], 4, &policy).collect();
        assert_eq!(tokens[0].span, Span::new(4, 9));
        assert_eq!(tokens[1].span, Span::new(10, 16));
    }

    #[test]
    fn test_scanner_is_lazy() {
        let chars: Vec<char> = "<a></a><b></b>".chars().collect();
        let policy = DialectPolicy::for_dialect(Dialect::Html);
        let mut scanner = Scanner::new(&chars, 0, &policy);
        assert_eq!(scanner.next().map(|t| t.name), Some("a".to_string()));
        assert_eq!(scanner.next().map(|t| t.name), Some("a".to_string()));
    }
}
