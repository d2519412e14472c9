use crate::foundation::error::KaraokeResult;
use crate::layout::words::RichAnimationOpts;
use crate::model::syllable::KaraokeLine;
use crate::render::frame::FrameOpts;
use crate::text::measure::TextStyle;

/// Configuration of a [`crate::KaraokeRenderer`].
///
/// Every field has a default, so a JSON document only needs the values it overrides.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct KaraokeOpts {
    /// Style of main-vocal lines.
    pub normal_style: TextStyle,
    /// Style of accompaniment lines.
    pub accompaniment_style: TextStyle,
    /// Which words get per-character animation.
    pub rich: RichAnimationOpts,
    /// Per-tick drawing, motion and highlight options.
    pub frame: FrameOpts,
}

impl Default for KaraokeOpts {
    fn default() -> Self {
        Self {
            normal_style: TextStyle::default(),
            accompaniment_style: TextStyle { font_size_px: 24.0 },
            rich: RichAnimationOpts::default(),
            frame: FrameOpts::default(),
        }
    }
}

impl KaraokeOpts {
    /// Validate every nested option group.
    pub fn validate(&self) -> KaraokeResult<()> {
        self.normal_style.validate()?;
        self.accompaniment_style.validate()?;
        self.rich.validate()?;
        self.frame.validate()
    }

    /// Parse options from JSON and validate them.
    pub fn from_json_str(s: &str) -> KaraokeResult<Self> {
        let opts: Self = serde_json::from_str(s)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Style used to lay out `line`.
    pub fn style_for(&self, line: &KaraokeLine) -> TextStyle {
        if line.is_accompaniment {
            self.accompaniment_style
        } else {
            self.normal_style
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/opts.rs"]
mod tests;
