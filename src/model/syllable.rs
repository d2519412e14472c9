use crate::foundation::error::KaraokeResult;
use crate::text::script;

/// Smallest timed unit of a lyric line.
///
/// `end_ms >= start_ms` is a caller precondition and is not checked here; reversed timestamps
/// produce meaningless progress rather than an error.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Syllable {
    /// Text, possibly with trailing whitespace marking the end of a word.
    pub content: String,
    /// Start time in milliseconds.
    pub start_ms: i64,
    /// End time in milliseconds.
    pub end_ms: i64,
}

impl Syllable {
    /// Convenience constructor.
    pub fn new(content: impl Into<String>, start_ms: i64, end_ms: i64) -> Self {
        Self {
            content: content.into(),
            start_ms,
            end_ms,
        }
    }

    /// `end_ms - start_ms`.
    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }

    /// Linear progress through the syllable at `time_ms`, clamped to `[0, 1]`.
    ///
    /// Zero-length syllables jump from 0 to 1 at their start.
    pub fn progress(&self, time_ms: i64) -> f64 {
        let dur = self.duration_ms();
        if dur <= 0 {
            return if time_ms >= self.start_ms { 1.0 } else { 0.0 };
        }
        ((time_ms - self.start_ms) as f64 / dur as f64).clamp(0.0, 1.0)
    }

    /// `true` when `time_ms` lies in the half-open interval `[start_ms, end_ms)`.
    pub fn is_active(&self, time_ms: i64) -> bool {
        self.start_ms <= time_ms && time_ms < self.end_ms
    }

    /// Content is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Content ends in whitespace, which closes the current word.
    pub fn ends_word(&self) -> bool {
        self.content.trim_end().len() < self.content.len()
    }

    /// Trimmed content is non-empty punctuation.
    pub fn is_punctuation(&self) -> bool {
        script::is_punctuation(self.content.trim())
    }
}

/// Horizontal anchoring of a lyric line inside its container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KaraokeAlignment {
    /// Anchored to the leading (left) edge.
    #[default]
    Start,
    /// Anchored to the trailing (right) edge, typically a second singer.
    End,
}

/// One lyric line as supplied by the host.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct KaraokeLine {
    /// Timed syllables in singing order.
    pub syllables: Vec<Syllable>,
    /// Horizontal anchoring.
    #[serde(default)]
    pub alignment: KaraokeAlignment,
    /// Backing-vocal line, drawn with reduced animation richness.
    #[serde(default)]
    pub is_accompaniment: bool,
    /// Optional translation shown under the line; not animated.
    #[serde(default)]
    pub translation: Option<String>,
}

impl KaraokeLine {
    /// Main-vocal, start-aligned line without translation.
    pub fn new(syllables: Vec<Syllable>) -> Self {
        Self {
            syllables,
            alignment: KaraokeAlignment::Start,
            is_accompaniment: false,
            translation: None,
        }
    }

    /// Parse a line from JSON.
    pub fn from_json_str(s: &str) -> KaraokeResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Start of the first syllable, `0` for an empty line.
    pub fn start_ms(&self) -> i64 {
        self.syllables.first().map_or(0, |s| s.start_ms)
    }

    /// End of the last syllable, `0` for an empty line.
    pub fn end_ms(&self) -> i64 {
        self.syllables.last().map_or(0, |s| s.end_ms)
    }

    /// The line is being sung at `time_ms`.
    pub fn is_focused(&self, time_ms: i64) -> bool {
        !self.syllables.is_empty() && self.start_ms() <= time_ms && time_ms < self.end_ms()
    }

    /// Any syllable contains right-to-left script.
    pub fn is_rtl(&self) -> bool {
        self.syllables
            .iter()
            .any(|s| script::contains_rtl(&s.content))
    }

    /// Syllables that take part in layout.
    ///
    /// End-aligned lines drop trailing blank syllables so the visible text hugs the right edge.
    pub fn display_syllables(&self) -> &[Syllable] {
        match self.alignment {
            KaraokeAlignment::Start => &self.syllables,
            KaraokeAlignment::End => {
                let keep = self
                    .syllables
                    .iter()
                    .rposition(|s| !s.is_blank())
                    .map_or(0, |i| i + 1);
                &self.syllables[..keep]
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/syllable.rs"]
mod tests;
