#![forbid(unsafe_code)]

//! Styled text buffer: graphemes with a foreground alpha channel.
//!
//! The animation unit is the extended grapheme cluster, so combining
//! sequences and emoji fade as a single glyph. A grapheme whose scalar
//! values are all whitespace is ineligible: it never receives an alpha
//! write and keeps its initial value.
//!
//! # Invariants
//!
//! 1. Alphas are always in [0.0, 1.0]; `set_alpha` clamps.
//! 2. Rebuilding from new text resets every alpha to 0 (fully
//!    transparent), regardless of the controller's visibility state.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// One grapheme cluster with its display width and current alpha.
#[derive(Debug, Clone)]
pub struct StyledGrapheme {
    cluster: String,
    width: u16,
    alpha: f32,
    eligible: bool,
}

impl StyledGrapheme {
    /// The underlying grapheme cluster.
    #[must_use]
    pub fn cluster(&self) -> &str {
        &self.cluster
    }

    /// Terminal display width of the cluster.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Current foreground alpha in [0.0, 1.0].
    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Whether the grapheme participates in fades (non-whitespace).
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.eligible
    }
}

/// An ordered sequence of (grapheme, alpha) pairs — the buffer the fade
/// engine mutates each frame.
#[derive(Debug, Clone, Default)]
pub struct StyledText {
    graphemes: Vec<StyledGrapheme>,
}

impl StyledText {
    /// Build a buffer from `text` with every alpha at 0.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let graphemes = text
            .graphemes(true)
            .map(|cluster| StyledGrapheme {
                cluster: cluster.to_string(),
                width: cluster.width() as u16,
                alpha: 0.0,
                eligible: cluster.chars().any(|c| !c.is_whitespace()),
            })
            .collect();
        Self { graphemes }
    }

    /// Number of grapheme clusters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graphemes.len()
    }

    /// Whether the buffer holds no graphemes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graphemes.is_empty()
    }

    /// The grapheme cluster at `index`.
    #[must_use]
    pub fn grapheme(&self, index: usize) -> Option<&str> {
        self.graphemes.get(index).map(|g| g.cluster.as_str())
    }

    /// Alpha at `index`, if in range.
    #[must_use]
    pub fn alpha(&self, index: usize) -> Option<f32> {
        self.graphemes.get(index).map(|g| g.alpha)
    }

    /// Write an alpha, clamped to [0.0, 1.0]. Out-of-range indices are
    /// ignored.
    pub fn set_alpha(&mut self, index: usize, alpha: f32) {
        if let Some(g) = self.graphemes.get_mut(index) {
            g.alpha = alpha.clamp(0.0, 1.0);
        }
    }

    /// Whether the grapheme at `index` participates in fades.
    #[must_use]
    pub fn is_eligible(&self, index: usize) -> bool {
        self.graphemes.get(index).is_some_and(|g| g.eligible)
    }

    /// Per-slot eligibility flags, in order.
    #[must_use]
    pub fn eligibility(&self) -> Vec<bool> {
        self.graphemes.iter().map(|g| g.eligible).collect()
    }

    /// Total display width of the buffer.
    #[must_use]
    pub fn display_width(&self) -> usize {
        self.graphemes.iter().map(|g| g.width as usize).sum()
    }

    /// Iterator over the graphemes in order.
    pub fn iter(&self) -> impl Iterator<Item = &StyledGrapheme> {
        self.graphemes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_fully_transparent() {
        let styled = StyledText::new("Hi there");
        assert_eq!(styled.len(), 8);
        for i in 0..styled.len() {
            assert_eq!(styled.alpha(i), Some(0.0));
        }
    }

    #[test]
    fn whitespace_is_ineligible() {
        let styled = StyledText::new("a b\tc\nd");
        let flags = styled.eligibility();
        assert_eq!(flags, vec![true, false, true, false, true, false, true]);
    }

    #[test]
    fn set_alpha_clamps() {
        let mut styled = StyledText::new("x");
        styled.set_alpha(0, 2.0);
        assert_eq!(styled.alpha(0), Some(1.0));
        styled.set_alpha(0, -0.5);
        assert_eq!(styled.alpha(0), Some(0.0));
    }

    #[test]
    fn set_alpha_out_of_range_ignored() {
        let mut styled = StyledText::new("x");
        styled.set_alpha(5, 0.5);
        assert_eq!(styled.len(), 1);
    }

    #[test]
    fn combining_marks_are_one_unit() {
        // 'e' + combining acute accent segments as a single cluster.
        let styled = StyledText::new("e\u{301}f");
        assert_eq!(styled.len(), 2);
        assert_eq!(styled.grapheme(0), Some("e\u{301}"));
        assert!(styled.is_eligible(0));
    }

    #[test]
    fn wide_grapheme_width() {
        let styled = StyledText::new("日a");
        assert_eq!(styled.iter().next().unwrap().width(), 2);
        assert_eq!(styled.display_width(), 3);
    }

    #[test]
    fn empty_text() {
        let styled = StyledText::new("");
        assert!(styled.is_empty());
        assert_eq!(styled.alpha(0), None);
        assert!(!styled.is_eligible(0));
    }
}
