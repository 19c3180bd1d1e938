//! Full-range resolution for a located tag.

use crate::policy::DialectPolicy;
use crate::scanner::Scanner;
use crate::token::{Span, TagInfo};

/// Compute the deletion span for `info`.
///
/// A lone token (self-closing or void) is its own span. Otherwise scan
/// forward from the end of the opening token for the matching closer,
/// tracking same-name nesting with a depth counter so that a `<div>`
/// inside a `<div>` cannot steal the close. Resolution runs over the full
/// remaining text rather than the location window: once a tag is located,
/// its closer may legitimately sit far away.
///
/// No reachable closer degrades to the opening token's own span. Never
/// delete past a missing closer.
pub fn resolve_range(chars: &[char], info: &TagInfo, policy: &DialectPolicy) -> Span {
    if !info.has_closing_tag {
        return info.span;
    }

    let from = info.span.end.min(chars.len());
    let mut depth: usize = 0;
    for token in Scanner::new(&chars[from..], from, policy) {
        if token.name != info.tag_name {
            continue;
        }
        if token.closing {
            if depth == 0 {
                return Span::new(info.span.start, token.span.end);
            }
            depth -= 1;
        } else if !token.self_closing {
            depth += 1;
        }
    }

    info.span
}
