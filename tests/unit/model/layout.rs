use super::*;

fn measured(width: f64) -> MeasuredText {
    MeasuredText::new(width, 10.0, vec![0.0])
}

#[test]
fn word_info_spans_min_start_to_max_end() {
    let syllables = [
        Syllable::new("Hel", 100, 400),
        Syllable::new("lo ", 400, 1500),
    ];
    let info = WordAnimationInfo::from_syllables(&syllables);
    assert_eq!(info.word_start_ms, 100);
    assert_eq!(info.word_end_ms, 1500);
    assert_eq!(info.word_duration_ms, 1400);
    assert_eq!(info.word_content, "Hello ");
    assert_eq!(info.char_count, 6);
}

#[test]
fn word_info_of_nothing_is_zeroed() {
    let info = WordAnimationInfo::from_syllables(std::iter::empty());
    assert_eq!(info.word_duration_ms, 0);
    assert_eq!(info.char_count, 0);
}

#[test]
fn passes_build_new_values() {
    let first = SyllableLayout::measured(Syllable::new("a", 0, 1), measured(5.0), 3, true);
    assert!(first.position.is_none());
    assert_eq!(first.origin(), Point::ORIGIN);

    let placed = first.clone().with_position(Point::new(2.0, 4.0));
    assert!(first.position.is_none());
    assert_eq!(placed.position, Some(Point::new(2.0, 4.0)));
    assert_eq!(placed.word_id, 3);
    assert_eq!(placed.bounds(), Rect::new(2.0, 4.0, 7.0, 14.0));

    let done = placed.with_word_data(Point::new(4.5, 14.0), None, 2);
    assert_eq!(done.word_pivot, Some(Point::new(4.5, 14.0)));
    assert_eq!(done.char_offset_in_word, 2);
    assert!(done.use_rich_animation);
}

#[test]
fn wrapped_line_sums_widths() {
    let line = WrappedLine::new(vec![
        SyllableLayout::measured(Syllable::new("a", 0, 1), measured(5.0), 0, false),
        SyllableLayout::measured(Syllable::new("b", 1, 2), measured(7.5), 0, false),
    ]);
    assert_eq!(line.total_width, 12.5);
}

#[test]
fn alignment_maps_onto_line_align() {
    assert_eq!(LineAlign::from(KaraokeAlignment::Start), LineAlign::Start);
    assert_eq!(LineAlign::from(KaraokeAlignment::End), LineAlign::End);
}
