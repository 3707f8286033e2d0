use core::ops::Range;

/// Byte range into the source text a declaration was resolved from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }

    /// The source text covered by this span, or `None` when the span is out
    /// of range or does not fall on character boundaries.
    pub fn str_of<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.0.clone())
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self(range)
    }
}
