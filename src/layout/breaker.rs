use std::ops::Range;

use crate::model::layout::{SyllableLayout, WrappedLine};
use crate::model::syllable::Syllable;
use crate::text::measure::{TextMeasurer, TextStyle};

/// Partition of a syllable sequence into rows, as half-open index spans in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BreakPlan {
    /// Row spans; they are contiguous and cover `0..n`.
    pub spans: Vec<Range<usize>>,
}

impl BreakPlan {
    /// Total squared slack of the spans, measured before trimming.
    pub fn cost(&self, layouts: &[SyllableLayout], available_width: f64) -> f64 {
        self.spans
            .iter()
            .map(|span| {
                let w = span_width(&layouts[span.clone()]);
                let slack = available_width - w;
                slack * slack
            })
            .sum()
    }

    /// Materialize the spans into trimmed rows, dropping rows that become empty.
    pub fn apply<M: TextMeasurer + ?Sized>(
        &self,
        layouts: &[SyllableLayout],
        measurer: &mut M,
        style: &TextStyle,
    ) -> Vec<WrappedLine> {
        self.spans
            .iter()
            .filter_map(|span| {
                trim_trailing_whitespace(layouts[span.clone()].to_vec(), measurer, style)
            })
            .collect()
    }
}

fn span_width(layouts: &[SyllableLayout]) -> f64 {
    layouts.iter().map(SyllableLayout::width).sum()
}

/// Fill each row left to right, closing it when the next syllable would overflow.
///
/// A syllable wider than the budget still gets a row of its own.
pub fn plan_greedy(layouts: &[SyllableLayout], available_width: f64) -> BreakPlan {
    let mut spans = Vec::new();
    let mut start = 0usize;
    let mut width = 0.0;
    for (i, l) in layouts.iter().enumerate() {
        let w = l.width();
        if i > start && width + w > available_width {
            spans.push(start..i);
            start = i;
            width = 0.0;
        }
        width += w;
    }
    if start < layouts.len() {
        spans.push(start..layouts.len());
    }
    BreakPlan { spans }
}

/// Minimize the sum of squared slack over all rows.
///
/// `cost[i]` is the best cost of laying out the first `i` syllables. Returns `None` when no
/// partition keeps every row within the budget, i.e. some syllable is wider than it.
pub fn plan_balanced(layouts: &[SyllableLayout], available_width: f64) -> Option<BreakPlan> {
    let n = layouts.len();
    if n == 0 {
        return Some(BreakPlan::default());
    }

    let mut cost = vec![f64::INFINITY; n + 1];
    let mut breaks = vec![0usize; n + 1];
    cost[0] = 0.0;

    for i in 1..=n {
        let mut width = 0.0;
        for j in (1..=i).rev() {
            width += layouts[j - 1].width();
            if width > available_width {
                break;
            }
            if cost[j - 1].is_infinite() {
                continue;
            }
            let slack = available_width - width;
            let candidate = cost[j - 1] + slack * slack;
            if candidate < cost[i] {
                cost[i] = candidate;
                breaks[i] = j - 1;
            }
        }
    }

    if cost[n].is_infinite() {
        return None;
    }

    let mut spans = Vec::new();
    let mut end = n;
    while end > 0 {
        let start = breaks[end];
        spans.push(start..end);
        end = start;
    }
    spans.reverse();
    Some(BreakPlan { spans })
}

/// Greedy wrapping with trailing whitespace trimmed from each row.
pub fn wrap_greedy<M: TextMeasurer + ?Sized>(
    layouts: &[SyllableLayout],
    available_width: f64,
    measurer: &mut M,
    style: &TextStyle,
) -> Vec<WrappedLine> {
    plan_greedy(layouts, available_width).apply(layouts, measurer, style)
}

/// Balanced wrapping, falling back to greedy for the whole line when no plan fits.
pub fn wrap_balanced<M: TextMeasurer + ?Sized>(
    layouts: &[SyllableLayout],
    available_width: f64,
    measurer: &mut M,
    style: &TextStyle,
) -> Vec<WrappedLine> {
    match plan_balanced(layouts, available_width) {
        Some(plan) => plan.apply(layouts, measurer, style),
        None => {
            tracing::debug!(
                syllables = layouts.len(),
                available_width,
                "no balanced break plan fits; falling back to greedy"
            );
            wrap_greedy(layouts, available_width, measurer, style)
        }
    }
}

/// Drop trailing blank syllables from a row and remeasure a last syllable that ends in
/// whitespace. Returns `None` when nothing visible remains.
pub fn trim_trailing_whitespace<M: TextMeasurer + ?Sized>(
    mut row: Vec<SyllableLayout>,
    measurer: &mut M,
    style: &TextStyle,
) -> Option<WrappedLine> {
    while row.last().is_some_and(|l| l.syllable.is_blank()) {
        row.pop();
    }
    let last = row.pop()?;
    let last = if last.syllable.ends_word() {
        let trimmed = last.syllable.content.trim_end();
        let syllable = Syllable::new(trimmed, last.syllable.start_ms, last.syllable.end_ms);
        let measured = measurer.measure(trimmed, style);
        last.with_content(syllable, measured)
    } else {
        last
    };
    row.push(last);
    Some(WrappedLine::new(row))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/breaker.rs"]
mod tests;
