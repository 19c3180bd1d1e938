use serde::Serialize;

/// A character-offset range into the scanned document.
///
/// Offsets count characters, not bytes, matching how editor hosts address
/// positions. Deletion semantics are half-open (`[start, end)`); cursor
/// membership is inclusive at both boundaries, so a cursor sitting one past
/// the closing `>` still belongs to that tag. Several selection scenarios
/// depend on the inclusive end, so it is load-bearing, not an off-by-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// Inclusive-boundary membership test used for cursor hits.
    pub fn touches(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// Distance from `offset` to the nearer boundary.
    /// Only meaningful when `touches(offset)` holds.
    pub fn boundary_distance(&self, offset: usize) -> usize {
        (offset - self.start).min(self.end - offset)
    }
}

/// A lexical tag token: `<name ...>`, `</name>`, or `<name .../>`.
///
/// JSX fragments (`<>` and `</>`) carry an empty name and are matched by
/// pairing order alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagToken {
    pub name: String,
    pub span: Span,
    /// Explicit `/>` syntax, or a void element name under the dialect.
    pub self_closing: bool,
    /// `</name>` form.
    pub closing: bool,
}

impl TagToken {
    pub fn is_fragment(&self) -> bool {
        self.name.is_empty()
    }
}

/// The tag found under the cursor, before its full range is resolved.
///
/// `span` covers the opening (or lone) token only; the element's children
/// are accounted for later by range resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInfo {
    pub tag_name: String,
    pub span: Span,
    pub has_closing_tag: bool,
}
