use std::sync::Arc;

use crate::foundation::error::KaraokeResult;
use crate::layout::cache::{CacheStats, LayoutCache, LayoutKey};
use crate::layout::pipeline::build_static_layout;
use crate::model::layout::{LineAlign, StaticLayout};
use crate::model::syllable::KaraokeLine;
use crate::render::frame::{KaraokeFrame, build_frame};
use crate::session::opts::KaraokeOpts;
use crate::text::measure::TextMeasurer;

/// Lays out and animates one lyric line widget.
///
/// Holds the measurer, the options and a single-entry layout cache. Call [`Self::frame`] on
/// every animation tick; the static layout is rebuilt only when the line, width or style
/// changes.
pub struct KaraokeRenderer<M: TextMeasurer> {
    measurer: M,
    opts: KaraokeOpts,
    cache: LayoutCache,
}

impl<M: TextMeasurer> std::fmt::Debug for KaraokeRenderer<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KaraokeRenderer")
            .field("opts", &self.opts)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl<M: TextMeasurer> KaraokeRenderer<M> {
    /// Validate `opts` and create a renderer.
    pub fn new(measurer: M, opts: KaraokeOpts) -> KaraokeResult<Self> {
        opts.validate()?;
        Ok(Self {
            measurer,
            opts,
            cache: LayoutCache::new(),
        })
    }

    /// Options in use.
    pub fn opts(&self) -> &KaraokeOpts {
        &self.opts
    }

    /// Static layout of `line` in a container `available_width` pixels wide.
    ///
    /// Negative or non-finite widths are treated as zero, which puts every syllable on its own
    /// row.
    #[tracing::instrument(skip(self, line), fields(syllables = line.syllables.len()))]
    pub fn layout(&mut self, line: &KaraokeLine, available_width: f64) -> Arc<StaticLayout> {
        let width = if available_width.is_finite() {
            available_width.max(0.0)
        } else {
            0.0
        };
        let style = self.opts.style_for(line);
        let rich = self.opts.rich;
        let key = LayoutKey {
            syllables: line.display_syllables(),
            style: &style,
            available_width: width,
            align: LineAlign::from(line.alignment),
            is_rtl: line.is_rtl(),
            is_accompaniment: line.is_accompaniment,
        };
        let measurer = &mut self.measurer;
        self.cache.get_or_build(&key, || {
            build_static_layout(line, measurer, &style, width, &rich)
        })
    }

    /// Draw list of `line` at `time_ms`.
    pub fn frame(
        &mut self,
        line: &KaraokeLine,
        available_width: f64,
        time_ms: i64,
    ) -> KaraokeFrame {
        let layout = self.layout(line, available_width);
        build_frame(&layout, line, time_ms, &self.opts.frame)
    }

    /// Layout cache counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/renderer.rs"]
mod tests;
