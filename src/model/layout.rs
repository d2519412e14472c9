use std::sync::Arc;

use crate::foundation::core::{Point, Rect};
use crate::model::syllable::{KaraokeAlignment, Syllable};
use crate::text::measure::{MeasuredText, grapheme_count};

/// Word-level timing shared by every syllable of a richly animated word.
#[derive(Clone, Debug, PartialEq)]
pub struct WordAnimationInfo {
    /// Earliest syllable start in the word.
    pub word_start_ms: i64,
    /// Latest syllable end in the word.
    pub word_end_ms: i64,
    /// Concatenated syllable contents.
    pub word_content: String,
    /// `word_end_ms - word_start_ms`.
    pub word_duration_ms: i64,
    /// Grapheme clusters in `word_content`.
    pub char_count: usize,
}

impl WordAnimationInfo {
    /// Aggregate the timing of a word's syllables, in order.
    pub fn from_syllables<'a>(syllables: impl IntoIterator<Item = &'a Syllable>) -> Self {
        let mut start = i64::MAX;
        let mut end = i64::MIN;
        let mut content = String::new();
        for s in syllables {
            start = start.min(s.start_ms);
            end = end.max(s.end_ms);
            content.push_str(&s.content);
        }
        if start > end {
            start = 0;
            end = 0;
        }
        Self {
            word_start_ms: start,
            word_end_ms: end,
            char_count: grapheme_count(&content),
            word_content: content,
            word_duration_ms: end - start,
        }
    }
}

/// A measured syllable on its way through the layout passes.
///
/// Every pass builds new values through the consuming `with_*` methods; a value that has been
/// handed to a later pass is never modified.
#[derive(Clone, Debug, PartialEq)]
pub struct SyllableLayout {
    /// Source syllable. The line breaker may replace it with a right-trimmed copy.
    pub syllable: Syllable,
    /// Measurement of `syllable.content`.
    pub measured: MeasuredText,
    /// Index of the containing word within the line.
    pub word_id: usize,
    /// Word qualifies for per-character animation.
    pub use_rich_animation: bool,
    /// Top-left corner; `None` until line placement.
    pub position: Option<Point>,
    /// Horizontal center and bottom edge of the word's bounding box.
    pub word_pivot: Option<Point>,
    /// Present only for syllables of rich words.
    pub word_anim: Option<Arc<WordAnimationInfo>>,
    /// Graphemes of the word that precede this syllable.
    pub char_offset_in_word: usize,
}

impl SyllableLayout {
    /// First-pass value: measured and classified, not yet placed.
    pub fn measured(
        syllable: Syllable,
        measured: MeasuredText,
        word_id: usize,
        use_rich_animation: bool,
    ) -> Self {
        Self {
            syllable,
            measured,
            word_id,
            use_rich_animation,
            position: None,
            word_pivot: None,
            word_anim: None,
            char_offset_in_word: 0,
        }
    }

    /// Measured advance width.
    pub fn width(&self) -> f64 {
        self.measured.width()
    }

    /// Measured height.
    pub fn height(&self) -> f64 {
        self.measured.height()
    }

    /// Top-left corner, or the origin before placement.
    pub fn origin(&self) -> Point {
        self.position.unwrap_or(Point::ORIGIN)
    }

    /// Bounding box at the current position.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin(), self.measured.size())
    }

    /// Replace the syllable and its measurement (used when trimming trailing whitespace).
    pub fn with_content(self, syllable: Syllable, measured: MeasuredText) -> Self {
        Self {
            syllable,
            measured,
            ..self
        }
    }

    /// Place the syllable.
    pub fn with_position(self, position: Point) -> Self {
        Self {
            position: Some(position),
            ..self
        }
    }

    /// Attach word-level pivot and animation data.
    pub fn with_word_data(
        self,
        word_pivot: Point,
        word_anim: Option<Arc<WordAnimationInfo>>,
        char_offset_in_word: usize,
    ) -> Self {
        Self {
            word_pivot: Some(word_pivot),
            word_anim,
            char_offset_in_word,
            ..self
        }
    }
}

/// Syllables sharing one visual row.
#[derive(Clone, Debug, PartialEq)]
pub struct WrappedLine {
    /// Syllables in singing order.
    pub syllables: Vec<SyllableLayout>,
    /// Sum of syllable widths.
    pub total_width: f64,
}

impl WrappedLine {
    /// Build a row and cache its width.
    pub fn new(syllables: Vec<SyllableLayout>) -> Self {
        let total_width = syllables.iter().map(SyllableLayout::width).sum();
        Self {
            syllables,
            total_width,
        }
    }
}

/// Horizontal placement of rows inside the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineAlign {
    /// Rows start at x = 0.
    #[default]
    Start,
    /// Rows are centered.
    Center,
    /// Rows end at the canvas width.
    End,
}

impl From<KaraokeAlignment> for LineAlign {
    fn from(value: KaraokeAlignment) -> Self {
        match value {
            KaraokeAlignment::Start => LineAlign::Start,
            KaraokeAlignment::End => LineAlign::End,
        }
    }
}

/// Output of the static pipeline, reused across animation ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticLayout {
    /// Fully placed rows, top to bottom.
    pub rows: Vec<Vec<SyllableLayout>>,
    /// Height of one row.
    pub line_height: f64,
    /// Width the rows were aligned in.
    pub canvas_width: f64,
    /// Direction the rows were laid out in.
    pub is_rtl: bool,
    /// Alignment the rows were laid out with.
    pub align: LineAlign,
}

impl StaticLayout {
    /// `line_height * rows`; zero for an empty layout.
    pub fn total_height(&self) -> f64 {
        self.line_height * self.rows.len() as f64
    }

    /// `true` when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/layout.rs"]
mod tests;
