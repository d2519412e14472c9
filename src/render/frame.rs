use crate::animation::glyph::{MotionOpts, SyllableAnimation, animate_row};
use crate::foundation::core::{Point, Rect, Rgba8Premul, Size};
use crate::foundation::error::{KaraokeError, KaraokeResult};
use crate::model::layout::{StaticLayout, SyllableLayout};
use crate::model::syllable::{KaraokeAlignment, KaraokeLine};
use crate::render::emphasis::{LineEmphasis, line_emphasis};
use crate::render::gradient::{GradientBrush, GradientOpts, line_gradient};

/// Compositing mode of a draw step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlendMode {
    /// Regular source-over painting.
    SourceOver,
    /// Keep destination pixels scaled by the source alpha.
    DestinationIn,
}

/// Drop shadow under a glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    /// Blur radius in pixels.
    pub blur: f64,
    /// Shadow color.
    pub color: Rgba8Premul,
}

/// One text run to paint.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawInstruction {
    /// Text to shape and paint.
    pub text: String,
    /// Rest position of the run's top-left corner.
    pub top_left: Point,
    /// Vertical displacement from the rest position.
    pub y_offset: f64,
    /// Unscaled run size.
    pub size: Size,
    /// Uniform scale applied about `pivot`.
    pub scale: f64,
    /// Scale origin.
    pub pivot: Point,
    /// Present for per-character runs.
    pub shadow: Option<Shadow>,
    /// Solid fill color.
    pub color: Rgba8Premul,
    /// How the run composites into the row layer.
    pub blend: BlendMode,
}

impl DrawInstruction {
    /// Top-left corner after the vertical displacement, before scaling.
    pub fn origin(&self) -> Point {
        Point::new(self.top_left.x, self.top_left.y + self.y_offset)
    }

    /// Unscaled bounds at [`Self::origin`].
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin(), self.size)
    }
}

/// Gradient painted over a row layer after its text.
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    /// Area covered; equals the layer bounds.
    pub rect: Rect,
    /// Highlight brush.
    pub brush: GradientBrush,
    /// Always [`BlendMode::DestinationIn`], so the text keeps the brush's alpha.
    pub blend: BlendMode,
}

/// Everything needed to paint one row.
#[derive(Clone, Debug, PartialEq)]
pub struct LineFrame {
    /// Offscreen layer the row is painted into; padded so moving glyphs are not clipped.
    pub layer_bounds: Rect,
    /// Text runs in singing order.
    pub instructions: Vec<DrawInstruction>,
    /// Highlight mask applied after the runs.
    pub overlay: Overlay,
    /// Outline of every run; empty unless [`FrameOpts::debug_bounds`] is set.
    pub debug_bounds: Vec<Rect>,
}

/// Translation text shown under the line.
#[derive(Clone, Debug, PartialEq)]
pub struct TranslationRun {
    /// Translation text.
    pub text: String,
    /// Fill color.
    pub color: Rgba8Premul,
    /// Follows the line alignment.
    pub align: KaraokeAlignment,
}

/// One tick of one lyric line.
#[derive(Clone, Debug, PartialEq)]
pub struct KaraokeFrame {
    /// Canvas width and `line_height * rows`.
    pub size: Size,
    /// Rows top to bottom.
    pub rows: Vec<LineFrame>,
    /// Whole-line emphasis targets.
    pub emphasis: LineEmphasis,
    /// Present when the line carries a translation.
    pub translation: Option<TranslationRun>,
}

/// Per-tick drawing options.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FrameOpts {
    /// Horizontal layer padding as a fraction of the row width.
    pub layer_padding_x: f64,
    /// Vertical layer padding as a fraction of the row height.
    pub layer_padding_y: f64,
    /// Opacity of glyph shadows relative to the active color.
    pub shadow_opacity: f32,
    /// Opacity of the translation relative to the active color.
    pub translation_opacity: f32,
    /// Emit run outlines.
    pub debug_bounds: bool,
    /// Character motion.
    pub motion: MotionOpts,
    /// Highlight colors and fade band.
    pub gradient: GradientOpts,
}

impl Default for FrameOpts {
    fn default() -> Self {
        Self {
            layer_padding_x: 0.2,
            layer_padding_y: 0.1,
            shadow_opacity: 0.4,
            translation_opacity: 0.4,
            debug_bounds: false,
            motion: MotionOpts::default(),
            gradient: GradientOpts::default(),
        }
    }
}

impl FrameOpts {
    /// Validate padding, opacities and the nested options.
    pub fn validate(&self) -> KaraokeResult<()> {
        for (name, v) in [
            ("layer_padding_x", self.layer_padding_x),
            ("layer_padding_y", self.layer_padding_y),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(KaraokeError::validation(format!(
                    "frame {name} must be finite and >= 0"
                )));
            }
        }
        for (name, v) in [
            ("shadow_opacity", self.shadow_opacity),
            ("translation_opacity", self.translation_opacity),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(KaraokeError::validation(format!(
                    "frame {name} must be in [0, 1]"
                )));
            }
        }
        self.motion.validate()?;
        self.gradient.validate()
    }
}

fn layer_bounds(row: &[SyllableLayout], opts: &FrameOpts) -> Rect {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut height = 0.0_f64;
    for l in row {
        let b = l.bounds();
        min_x = min_x.min(b.x0);
        max_x = max_x.max(b.x1);
        min_y = min_y.min(b.y0);
        height = height.max(l.height());
    }
    let pad_x = (max_x - min_x) * opts.layer_padding_x;
    let pad_y = height * opts.layer_padding_y;
    Rect::new(
        min_x - pad_x,
        min_y - pad_y,
        max_x + pad_x,
        min_y + height + pad_y,
    )
}

fn row_frame(
    row: &[SyllableLayout],
    time_ms: i64,
    is_rtl: bool,
    opts: &FrameOpts,
) -> LineFrame {
    let color = opts.gradient.active;
    let shadow_color = color.with_opacity(opts.shadow_opacity);
    let mut instructions = Vec::with_capacity(row.len());

    for (layout, anim) in row.iter().zip(animate_row(row, time_ms, &opts.motion)) {
        let origin = layout.origin();
        let pivot = layout.word_pivot.unwrap_or(origin);
        match anim {
            SyllableAnimation::Glyphs(glyphs) => {
                for (local, g) in glyphs.into_iter().enumerate() {
                    instructions.push(DrawInstruction {
                        text: layout.syllable.content[g.bytes.clone()].to_owned(),
                        top_left: Point::new(origin.x + g.x_offset, origin.y),
                        y_offset: g.y_offset,
                        size: Size::new(layout.measured.grapheme_width(local), layout.height()),
                        scale: g.scale,
                        pivot,
                        shadow: Some(Shadow {
                            blur: g.blur,
                            color: shadow_color,
                        }),
                        color,
                        blend: BlendMode::SourceOver,
                    });
                }
            }
            SyllableAnimation::Block { y_offset } => {
                instructions.push(DrawInstruction {
                    text: layout.syllable.content.clone(),
                    top_left: origin,
                    y_offset,
                    size: layout.measured.size(),
                    scale: 1.0,
                    pivot,
                    shadow: None,
                    color,
                    blend: BlendMode::SourceOver,
                });
            }
        }
    }

    let layer = layer_bounds(row, opts);
    let debug_bounds = if opts.debug_bounds {
        instructions.iter().map(DrawInstruction::bounds).collect()
    } else {
        Vec::new()
    };
    LineFrame {
        layer_bounds: layer,
        instructions,
        overlay: Overlay {
            rect: layer,
            brush: line_gradient(row, time_ms, is_rtl, &opts.gradient),
            blend: BlendMode::DestinationIn,
        },
        debug_bounds,
    }
}

/// Build the draw list of `line` at `time_ms` from its static layout.
///
/// Pure: equal inputs produce equal frames.
pub fn build_frame(
    layout: &StaticLayout,
    line: &KaraokeLine,
    time_ms: i64,
    opts: &FrameOpts,
) -> KaraokeFrame {
    let rows = layout
        .rows
        .iter()
        .filter(|row| !row.is_empty())
        .map(|row| row_frame(row, time_ms, layout.is_rtl, opts))
        .collect();
    let translation = line.translation.as_ref().map(|text| TranslationRun {
        text: text.clone(),
        color: opts.gradient.active.with_opacity(opts.translation_opacity),
        align: line.alignment,
    });
    KaraokeFrame {
        size: Size::new(layout.canvas_width, layout.total_height()),
        rows,
        emphasis: line_emphasis(line, time_ms),
        translation,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
