use super::*;
use crate::layout::words::{RichAnimationOpts, measure_syllables};
use crate::text::measure::FixedAdvanceMeasurer;

const STYLE: TextStyle = TextStyle { font_size_px: 10.0 };

fn measurer() -> FixedAdvanceMeasurer {
    FixedAdvanceMeasurer::new(1.0, 1.2).unwrap()
}

/// Every grapheme is 10px wide.
fn layouts(contents: &[&str]) -> Vec<SyllableLayout> {
    let syllables: Vec<Syllable> = contents
        .iter()
        .enumerate()
        .map(|(i, c)| Syllable::new(*c, i as i64 * 100, i as i64 * 100 + 100))
        .collect();
    measure_syllables(
        &syllables,
        &mut measurer(),
        &STYLE,
        false,
        &RichAnimationOpts::default(),
    )
}

fn contents(rows: &[WrappedLine]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| r.syllables.iter().map(|l| l.syllable.content.clone()).collect())
        .collect()
}

#[test]
fn greedy_fills_rows_left_to_right() {
    let l = layouts(&["aa", "bb", "cc", "dddd"]);
    let plan = plan_greedy(&l, 65.0);
    assert_eq!(plan.spans, vec![0..3, 3..4]);
}

#[test]
fn greedy_gives_overwide_syllable_its_own_row() {
    let l = layouts(&["a", "bbbbbbbbbb", "c"]);
    let plan = plan_greedy(&l, 50.0);
    assert_eq!(plan.spans, vec![0..1, 1..2, 2..3]);
}

#[test]
fn balanced_beats_greedy_on_a_ragged_tail() {
    let l = layouts(&["aa", "bb", "cc", "dd", "ee", "fffff"]);
    let greedy = plan_greedy(&l, 100.0);
    let balanced = plan_balanced(&l, 100.0).unwrap();
    assert_eq!(greedy.spans, vec![0..5, 5..6]);
    assert_eq!(balanced.spans, vec![0..4, 4..6]);
    assert_eq!(greedy.cost(&l, 100.0), 2500.0);
    assert_eq!(balanced.cost(&l, 100.0), 1300.0);
}

#[test]
fn balanced_cost_never_exceeds_greedy_when_everything_fits() {
    let cases: &[&[&str]] = &[
        &["a", "bb", "ccc", "dddd", "e", "ff"],
        &["aaa", "aaa", "aaa", "aaa"],
        &["a", "b", "c", "d", "e", "f", "g", "h"],
        &["abcd", "e", "fghi", "j", "klmn"],
    ];
    for contents in cases {
        let l = layouts(contents);
        for width in [40.0, 55.0, 70.0, 100.0] {
            let greedy = plan_greedy(&l, width).cost(&l, width);
            let balanced = plan_balanced(&l, width).unwrap().cost(&l, width);
            assert!(balanced <= greedy, "{contents:?} at {width}: {balanced} > {greedy}");
        }
    }
}

#[test]
fn balanced_is_none_when_a_syllable_cannot_fit() {
    let l = layouts(&["aa", "bbbbbb", "cc"]);
    assert!(plan_balanced(&l, 50.0).is_none());
    assert_eq!(plan_balanced(&[], 50.0), Some(BreakPlan::default()));
}

#[test]
fn narrow_budget_falls_back_to_greedy() {
    let l = layouts(&["Hel", "lo ", "world"]);
    let mut m = measurer();
    let balanced = wrap_balanced(&l, 5.0, &mut m, &STYLE);
    let greedy = wrap_greedy(&l, 5.0, &mut m, &STYLE);
    assert_eq!(balanced, greedy);
    assert_eq!(balanced.len(), 3);
}

#[test]
fn trailing_blank_syllable_is_removed() {
    let l = layouts(&["ab", "cd", "  "]);
    let untrimmed: f64 = l.iter().map(SyllableLayout::width).sum();
    let row = trim_trailing_whitespace(l.clone(), &mut measurer(), &STYLE).unwrap();
    assert_eq!(row.syllables.len(), 2);
    assert_eq!(row.total_width, untrimmed - l[2].width());
}

#[test]
fn trailing_space_inside_last_syllable_is_remeasured() {
    let l = layouts(&["ab", "cd "]);
    let row = trim_trailing_whitespace(l, &mut measurer(), &STYLE).unwrap();
    let last = row.syllables.last().unwrap();
    assert_eq!(last.syllable.content, "cd");
    assert_eq!(last.syllable.start_ms, 100);
    assert_eq!(last.width(), 20.0);
    assert_eq!(row.total_width, 40.0);
}

#[test]
fn row_of_blanks_is_dropped() {
    let l = layouts(&[" ", "  "]);
    assert!(trim_trailing_whitespace(l, &mut measurer(), &STYLE).is_none());
}

#[test]
fn rows_trim_but_keep_word_boundaries_inside() {
    let l = layouts(&["Hel", "lo ", "world"]);
    let rows = wrap_balanced(&l, 60.0, &mut measurer(), &STYLE);
    assert_eq!(
        contents(&rows),
        vec![vec!["Hel".to_owned(), "lo".to_owned()], vec!["world".to_owned()]]
    );
    assert_eq!(rows[0].total_width, 50.0);
}
