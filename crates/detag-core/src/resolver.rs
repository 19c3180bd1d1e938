//! Nearest-tag resolution.
//!
//! Picks the single token "under the cursor" from a scanned window.
//! A token is a candidate when the cursor sits anywhere within or at the
//! edges of its span (both boundaries inclusive). Among candidates, the
//! winner is the one whose nearer boundary is closest to the cursor;
//! ties keep the first token in scan order, so at a shared boundary
//! between two adjacent tags the earlier one wins.

use crate::token::TagToken;

/// Index of the nearest candidate token, or `None` when the cursor
/// touches no token at all.
pub fn nearest_index(tokens: &[TagToken], cursor: usize) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None; // (distance, index)
    for (index, token) in tokens.iter().enumerate() {
        if !token.span.touches(cursor) {
            continue;
        }
        let distance = token.span.boundary_distance(cursor);
        // Strict improvement only: ties keep the earlier token.
        if best.map_or(true, |(d, _)| distance < d) {
            best = Some((distance, index));
        }
    }
    best.map(|(_, index)| index)
}

/// The nearest candidate token itself.
pub fn find_nearest(tokens: &[TagToken], cursor: usize) -> Option<&TagToken> {
    nearest_index(tokens, cursor).map(|index| &tokens[index])
}
