//! Placeholder scanning.
//!
//! A placeholder is the shortest `{...}` run on a single line. Braces do not
//! nest: a `{` inside an open placeholder is plain inner text, and a `{` with
//! no `}` before the end of its line is ignored.

use std::ops::Range;

/// One `{...}` occurrence in a template, as byte offsets including braces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderSpan {
    /// Offset of the opening `{`.
    pub start: usize,
    /// Offset just past the closing `}`.
    pub end: usize,
}

impl PlaceholderSpan {
    /// The whole placeholder, braces included.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The text between the braces.
    pub fn inner_range(&self) -> Range<usize> {
        self.start + 1..self.end - 1
    }

    /// Inner text of this span within the template it was scanned from.
    pub fn inner<'a>(&self, template: &'a str) -> &'a str {
        &template[self.inner_range()]
    }
}

/// Find every placeholder in `template`, left to right.
pub fn scan(template: &str) -> Vec<PlaceholderSpan> {
    let bytes = template.as_bytes();
    let mut spans = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] == b'{' {
            let close = bytes[pos + 1..]
                .iter()
                .position(|&b| b == b'}' || b == b'\n')
                .map(|rel| pos + 1 + rel);
            if let Some(close) = close.filter(|&i| bytes[i] == b'}') {
                spans.push(PlaceholderSpan {
                    start: pos,
                    end: close + 1,
                });
                pos = close + 1;
                continue;
            }
        }
        pos += 1;
    }

    spans
}
