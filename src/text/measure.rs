use unicode_segmentation::UnicodeSegmentation;

use crate::foundation::core::Size;
use crate::foundation::error::{KaraokeError, KaraokeResult};
use crate::text::script;

/// Text style handed to the measurement service.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size_px: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self { font_size_px: 32.0 }
    }
}

impl TextStyle {
    /// Reject non-finite or non-positive sizes.
    pub fn validate(&self) -> KaraokeResult<()> {
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(KaraokeError::validation(
                "text style font_size_px must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// Result of measuring one run of text.
///
/// Besides the box size it keeps the left edge of every grapheme cluster in visual placement,
/// which is what per-character drawing needs to place each glyph at its sub-position.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasuredText {
    width: f64,
    height: f64,
    grapheme_x: Vec<f64>,
}

impl MeasuredText {
    /// Build a measurement. Negative or non-finite sizes clamp to zero.
    pub fn new(width: f64, height: f64, grapheme_x: Vec<f64>) -> Self {
        let sane = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            width: sane(width),
            height: sane(height),
            grapheme_x,
        }
    }

    /// Advance width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Line box height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Width and height as a [`Size`].
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Left edge of grapheme `index` relative to the run origin.
    ///
    /// Indices past the end report the run width.
    pub fn horizontal_offset(&self, index: usize) -> f64 {
        self.grapheme_x.get(index).copied().unwrap_or(self.width)
    }

    /// Visual width of grapheme `index`: the distance from its left edge to the next edge to
    /// its right, or to the end of the run.
    pub fn grapheme_width(&self, index: usize) -> f64 {
        let Some(&x) = self.grapheme_x.get(index) else {
            return 0.0;
        };
        let next = self
            .grapheme_x
            .iter()
            .copied()
            .filter(|&o| o > x)
            .fold(self.width, f64::min);
        (next - x).max(0.0)
    }
}

/// Text measurement service.
///
/// Implementations must be deterministic for a fixed `(text, style)` pair: the layout cache
/// assumes that re-measuring unchanged input yields identical results.
pub trait TextMeasurer {
    /// Measure a single, unwrapped run of text.
    fn measure(&mut self, text: &str, style: &TextStyle) -> MeasuredText;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &mut M {
    fn measure(&mut self, text: &str, style: &TextStyle) -> MeasuredText {
        (**self).measure(text, style)
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for Box<M> {
    fn measure(&mut self, text: &str, style: &TextStyle) -> MeasuredText {
        (**self).measure(text, style)
    }
}

/// Measurer where every grapheme advances by the same amount.
///
/// Useful for headless hosts (terminals, tests) that have no font backend. Advance and line
/// height are expressed in ems of the style's font size. Right-to-left runs place their first
/// grapheme at the right edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvanceMeasurer {
    advance_em: f64,
    line_height_em: f64,
}

impl FixedAdvanceMeasurer {
    /// Create a measurer; both factors must be finite and non-negative.
    pub fn new(advance_em: f64, line_height_em: f64) -> KaraokeResult<Self> {
        for (name, v) in [("advance_em", advance_em), ("line_height_em", line_height_em)] {
            if !v.is_finite() || v < 0.0 {
                return Err(KaraokeError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        Ok(Self {
            advance_em,
            line_height_em,
        })
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&mut self, text: &str, style: &TextStyle) -> MeasuredText {
        let size = f64::from(style.font_size_px);
        let advance = self.advance_em * size;
        let count = grapheme_count(text);
        let width = advance * count as f64;
        let rtl = script::contains_rtl(text);
        let grapheme_x = (0..count)
            .map(|i| {
                if rtl {
                    width - advance * (i + 1) as f64
                } else {
                    advance * i as f64
                }
            })
            .collect();
        MeasuredText::new(width, self.line_height_em * size, grapheme_x)
    }
}

/// Number of extended grapheme clusters in `text`.
pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Byte offsets and contents of the extended grapheme clusters of `text`.
pub fn graphemes(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.grapheme_indices(true)
}

#[cfg(test)]
#[path = "../../tests/unit/text/measure.rs"]
mod tests;
