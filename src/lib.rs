//! karaoke-lines lays out and animates time-synchronized lyric lines.
//!
//! A line is a sequence of timed [`Syllable`]s. Rendering happens in two stages:
//!
//! - A static pipeline measures syllables, classifies words for per-character animation,
//!   wraps them into balanced rows and places them ([`build_static_layout`]). Its result is
//!   memoized by [`LayoutCache`].
//! - A per-tick pipeline turns the static layout and the playback time into a
//!   [`KaraokeFrame`]: text runs with their float, scale and blur, plus a gradient mask that
//!   sweeps across each row as it is sung ([`build_frame`]).
//!
//! [`KaraokeRenderer`] wires both together behind a [`TextMeasurer`]. The crate draws nothing
//! itself; hosts paint the frame with their own text stack.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod layout;
pub(crate) mod model;
pub(crate) mod render;
pub(crate) mod session;
pub(crate) mod text;

pub use crate::foundation::core::{Point, Rect, Rgba8Premul, Size};
pub use crate::foundation::error::{KaraokeError, KaraokeResult};

pub use crate::animation::curves::{Bounce, DipAndRise, Swell};
pub use crate::animation::ease::Ease;
pub use crate::animation::glyph::{
    GlyphMotion, MotionOpts, SyllableAnimation, SyllableMotion, animate_row, resolve_motion,
    rich_glyph_motions, rise_offset,
};
pub use crate::layout::breaker::{
    BreakPlan, plan_balanced, plan_greedy, trim_trailing_whitespace, wrap_balanced, wrap_greedy,
};
pub use crate::layout::cache::{CacheStats, LayoutCache, LayoutFingerprint, LayoutKey};
pub use crate::layout::pipeline::build_static_layout;
pub use crate::layout::placement::place_lines;
pub use crate::layout::words::{RichAnimationOpts, group_into_words, measure_syllables};
pub use crate::model::layout::{
    LineAlign, StaticLayout, SyllableLayout, WordAnimationInfo, WrappedLine,
};
pub use crate::model::syllable::{KaraokeAlignment, KaraokeLine, Syllable};
pub use crate::render::emphasis::{LineEmphasis, Transition, line_emphasis};
pub use crate::render::frame::{
    BlendMode, DrawInstruction, FrameOpts, KaraokeFrame, LineFrame, Overlay, Shadow,
    TranslationRun, build_frame,
};
pub use crate::render::gradient::{
    GradientBrush, GradientOpts, GradientStop, LineSweep, line_gradient, line_sweep,
};
pub use crate::session::opts::KaraokeOpts;
pub use crate::session::renderer::KaraokeRenderer;
pub use crate::text::measure::{FixedAdvanceMeasurer, MeasuredText, TextMeasurer, TextStyle};
#[cfg(feature = "parley")]
pub use crate::text::parley_measurer::ParleyMeasurer;
