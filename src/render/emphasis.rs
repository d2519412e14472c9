use crate::animation::ease::Ease;
use crate::model::syllable::{KaraokeAlignment, KaraokeLine};

/// Eased transition the host should use to reach a target value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Length of the transition.
    pub duration_ms: u32,
    /// Curve of the transition.
    pub ease: Ease,
}

/// Whole-line scale and opacity targets for the current focus state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineEmphasis {
    /// Line is being sung.
    pub focused: bool,
    /// Target uniform scale of the line.
    pub scale: f64,
    /// How to animate toward `scale`.
    pub scale_transition: Transition,
    /// Target opacity of the line.
    pub alpha: f32,
    /// Scale origin as a fraction of the line box; `(0, 1)` is the bottom-left corner.
    pub origin: (f64, f64),
}

/// Focus-dependent emphasis of `line` at `time_ms`.
///
/// Focused lines settle to full size slowly; lines leaving focus shrink on a shorter curve.
/// Accompaniment lines stay dimmer than main lines in both states.
pub fn line_emphasis(line: &KaraokeLine, time_ms: i64) -> LineEmphasis {
    let focused = line.is_focused(time_ms);
    let (scale, scale_transition) = if focused {
        (
            1.0,
            Transition {
                duration_ms: 600,
                ease: Ease::LINEAR_OUT_SLOW_IN,
            },
        )
    } else {
        (
            0.98,
            Transition {
                duration_ms: 300,
                ease: Ease::EASE_IN_OUT,
            },
        )
    };
    let alpha = match (line.is_accompaniment, focused) {
        (false, true) => 1.0,
        (false, false) => 0.4,
        (true, true) => 0.6,
        (true, false) => 0.2,
    };
    let origin_x = match line.alignment {
        KaraokeAlignment::Start => 0.0,
        KaraokeAlignment::End => 1.0,
    };
    LineEmphasis {
        focused,
        scale,
        scale_transition,
        alpha,
        origin: (origin_x, 1.0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/emphasis.rs"]
mod tests;
