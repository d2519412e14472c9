use std::sync::Arc;

use crate::foundation::core::Point;
use crate::model::layout::{LineAlign, SyllableLayout, WordAnimationInfo, WrappedLine};
use crate::text::measure::grapheme_count;

/// Extent of one word over all rows it spans.
#[derive(Clone, Debug)]
struct WordSlot {
    min_x: f64,
    max_x: f64,
    bottom: f64,
    anim: Option<Arc<WordAnimationInfo>>,
}

impl WordSlot {
    fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            bottom: f64::NEG_INFINITY,
            anim: None,
        }
    }

    fn pivot(&self) -> Point {
        Point::new((self.min_x + self.max_x) / 2.0, self.bottom)
    }
}

fn row_start_x(align: LineAlign, canvas_width: f64, row_width: f64) -> f64 {
    match align {
        LineAlign::Start => 0.0,
        LineAlign::Center => (canvas_width - row_width) / 2.0,
        LineAlign::End => canvas_width - row_width,
    }
}

fn position_row(
    row: &WrappedLine,
    y: f64,
    align: LineAlign,
    canvas_width: f64,
    is_rtl: bool,
) -> Vec<SyllableLayout> {
    let start_x = row_start_x(align, canvas_width, row.total_width);
    let mut cursor = if is_rtl {
        start_x + row.total_width
    } else {
        start_x
    };
    row.syllables
        .iter()
        .map(|l| {
            let w = l.width();
            let x = if is_rtl {
                cursor -= w;
                cursor
            } else {
                let x = cursor;
                cursor += w;
                x
            };
            l.clone().with_position(Point::new(x, y))
        })
        .collect()
}

/// Position every syllable and attach word pivots, shared word timing and character offsets.
///
/// Words are aggregated across rows, so a word broken over two rows scales about a single
/// pivot and staggers its characters as one unit.
pub fn place_lines(
    wrapped: &[WrappedLine],
    align: LineAlign,
    canvas_width: f64,
    line_height: f64,
    is_rtl: bool,
) -> Vec<Vec<SyllableLayout>> {
    let positioned: Vec<Vec<SyllableLayout>> = wrapped
        .iter()
        .enumerate()
        .map(|(i, row)| position_row(row, i as f64 * line_height, align, canvas_width, is_rtl))
        .collect();

    let word_count = positioned
        .iter()
        .flatten()
        .map(|l| l.word_id + 1)
        .max()
        .unwrap_or(0);
    let mut words = vec![WordSlot::empty(); word_count];
    let mut members: Vec<Vec<&SyllableLayout>> = vec![Vec::new(); word_count];

    for l in positioned.iter().flatten() {
        let b = l.bounds();
        let slot = &mut words[l.word_id];
        slot.min_x = slot.min_x.min(b.x0);
        slot.max_x = slot.max_x.max(b.x1);
        slot.bottom = slot.bottom.max(b.y1);
        members[l.word_id].push(l);
    }

    for (slot, layouts) in words.iter_mut().zip(&members) {
        if layouts.first().is_some_and(|l| l.use_rich_animation) {
            let info = WordAnimationInfo::from_syllables(layouts.iter().map(|l| &l.syllable));
            slot.anim = Some(Arc::new(info));
        }
    }

    let mut running = vec![0usize; word_count];
    positioned
        .iter()
        .map(|row| {
            row.iter()
                .map(|l| {
                    let slot = &words[l.word_id];
                    let offset = if slot.anim.is_some() {
                        let offset = running[l.word_id];
                        running[l.word_id] += grapheme_count(&l.syllable.content);
                        offset
                    } else {
                        0
                    };
                    l.clone()
                        .with_word_data(slot.pivot(), slot.anim.clone(), offset)
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/placement.rs"]
mod tests;
