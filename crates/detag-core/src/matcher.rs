//! Open/close pairing for nested tags.
//!
//! Reconciles a token sequence with an explicit stack so that a closing
//! token pairs with the opening token at its nesting depth, which matters
//! whenever several tags share a name. Mismatched closers from malformed
//! markup drop silently: the pair never appears, and lookups on it find
//! nothing rather than deleting an unrelated region.

use crate::token::TagToken;

/// Pair of indexes into the scanned token sequence: `(open, close)`.
pub type TagPair = (usize, usize);

/// Pair every closing token with its opening token, respecting nesting.
///
/// Self-closing and void tokens never push. Fragments carry empty names,
/// so for them the name-equality check degenerates to pure pairing order.
pub fn match_pairs(tokens: &[TagToken]) -> Vec<TagPair> {
    let mut stack: Vec<usize> = Vec::new();
    let mut pairs = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        if token.self_closing {
            continue;
        }
        if token.closing {
            // A closer with an empty stack, or whose partner's name
            // differs, is malformed input: skip it.
            if let Some(open) = stack.pop() {
                if tokens[open].name == token.name {
                    pairs.push((open, index));
                }
            }
        } else {
            stack.push(index);
        }
    }

    pairs
}

/// The opening token paired with the closing token at `close`, if the
/// sequence nests properly around it.
pub fn open_for_close(tokens: &[TagToken], close: usize) -> Option<&TagToken> {
    match_pairs(tokens)
        .into_iter()
        .find(|&(_, c)| c == close)
        .map(|(open, _)| &tokens[open])
}
