use std::borrow::Cow;
use std::ops::Range;

use parley::layout::PositionedLayoutItem;

use crate::foundation::error::{KaraokeError, KaraokeResult};
use crate::text::measure::{MeasuredText, TextMeasurer, TextStyle, graphemes};

/// [`TextMeasurer`] backed by Parley shaping of a single registered font.
pub struct ParleyMeasurer {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    family_name: String,
}

impl std::fmt::Debug for ParleyMeasurer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParleyMeasurer")
            .field("family_name", &self.family_name)
            .finish_non_exhaustive()
    }
}

impl ParleyMeasurer {
    /// Register `font_bytes` (TTF/OTF) and measure every run with its first family.
    pub fn from_font_bytes(font_bytes: &[u8]) -> KaraokeResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| KaraokeError::measure("no font families registered from font bytes"))?;

        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| KaraokeError::measure("registered font family has no name"))?
            .to_string();

        tracing::debug!(family = %family_name, "registered measurement font");
        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
        })
    }

    /// Family name used for every measured run.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    fn layout_unwrapped(&mut self, text: &str, style: &TextStyle) -> parley::Layout<()> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(style.font_size_px));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }

    /// Line box height of a run at `style`, taken from a single space.
    fn line_height(&mut self, style: &TextStyle) -> f64 {
        self.layout_unwrapped(" ", style)
            .lines()
            .map(|line| {
                let m = line.metrics();
                f64::from(m.ascent + m.descent + m.leading)
            })
            .sum()
    }
}

impl TextMeasurer for ParleyMeasurer {
    fn measure(&mut self, text: &str, style: &TextStyle) -> MeasuredText {
        // Parley shapes an empty run as a single space.
        if text.is_empty() {
            return MeasuredText::new(0.0, self.line_height(style), Vec::new());
        }

        let layout = self.layout_unwrapped(text, style);

        let mut width = 0.0f64;
        let mut height = 0.0f64;
        let mut clusters = Vec::<(Range<usize>, f64)>::new();
        for line in layout.lines() {
            let m = line.metrics();
            width = width.max(f64::from(m.advance));
            height += f64::from(m.ascent + m.descent + m.leading);

            for item in line.items() {
                let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };
                let mut x = f64::from(glyph_run.offset());
                for cluster in glyph_run.run().visual_clusters() {
                    clusters.push((cluster.text_range(), x));
                    x += f64::from(cluster.advance());
                }
            }
        }

        // Ligatures map several graphemes onto one cluster; they share its left edge.
        let grapheme_x = graphemes(text)
            .map(|(byte, _)| {
                clusters
                    .iter()
                    .find(|(range, _)| range.start <= byte && byte < range.end)
                    .map_or(width, |(_, x)| *x)
            })
            .collect();

        MeasuredText::new(width, height, grapheme_x)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/parley_measurer.rs"]
mod tests;
