use crate::layout::breaker::wrap_balanced;
use crate::layout::placement::place_lines;
use crate::layout::words::{RichAnimationOpts, measure_syllables};
use crate::model::layout::{LineAlign, StaticLayout};
use crate::model::syllable::KaraokeLine;
use crate::text::measure::{TextMeasurer, TextStyle};

/// Reference glyph whose measured height sets the row pitch.
const LINE_HEIGHT_PROBE: &str = "M";

/// Run the static pipeline: measure, classify, wrap, and place one lyric line.
///
/// The result depends only on the line's display syllables, `style`, `available_width`, the
/// line's alignment, direction and accompaniment flag.
#[tracing::instrument(
    skip_all,
    fields(syllables = line.syllables.len(), available_width = available_width)
)]
pub fn build_static_layout<M: TextMeasurer + ?Sized>(
    line: &KaraokeLine,
    measurer: &mut M,
    style: &TextStyle,
    available_width: f64,
    rich: &RichAnimationOpts,
) -> StaticLayout {
    let is_rtl = line.is_rtl();
    let align = LineAlign::from(line.alignment);
    let line_height = measurer.measure(LINE_HEIGHT_PROBE, style).height();

    let measured = measure_syllables(
        line.display_syllables(),
        measurer,
        style,
        line.is_accompaniment,
        rich,
    );
    let wrapped = wrap_balanced(&measured, available_width, measurer, style);
    let rows = place_lines(&wrapped, align, available_width, line_height, is_rtl);

    StaticLayout {
        rows,
        line_height,
        canvas_width: available_width,
        is_rtl,
        align,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/pipeline.rs"]
mod tests;
