use super::*;

fn style(px: f32) -> TextStyle {
    TextStyle { font_size_px: px }
}

#[test]
fn fixed_advance_scales_with_font_size() {
    let mut m = FixedAdvanceMeasurer::new(0.5, 1.25).unwrap();
    let t = m.measure("abcd", &style(20.0));
    assert_eq!(t.width(), 40.0);
    assert_eq!(t.height(), 25.0);
    assert_eq!(t.horizontal_offset(0), 0.0);
    assert_eq!(t.horizontal_offset(3), 30.0);
    assert_eq!(t.horizontal_offset(99), 40.0);
}

#[test]
fn fixed_advance_counts_graphemes_not_chars() {
    let mut m = FixedAdvanceMeasurer::new(1.0, 1.0).unwrap();
    // "e" + combining acute accent is one grapheme.
    let t = m.measure("e\u{301}x", &style(10.0));
    assert_eq!(t.width(), 20.0);
    assert_eq!(t.horizontal_offset(1), 10.0);
    assert_eq!(t.grapheme_width(1), 10.0);
}

#[test]
fn fixed_advance_places_rtl_from_the_right() {
    let mut m = FixedAdvanceMeasurer::new(1.0, 1.0).unwrap();
    let t = m.measure("שלום", &style(10.0));
    assert_eq!(t.width(), 40.0);
    assert_eq!(t.horizontal_offset(0), 30.0);
    assert_eq!(t.horizontal_offset(3), 0.0);
}

#[test]
fn rejects_negative_factors() {
    assert!(FixedAdvanceMeasurer::new(-1.0, 1.0).is_err());
    assert!(FixedAdvanceMeasurer::new(1.0, f64::NAN).is_err());
}

#[test]
fn measured_text_clamps_bad_sizes() {
    let t = MeasuredText::new(-3.0, f64::INFINITY, vec![]);
    assert_eq!(t.width(), 0.0);
    assert_eq!(t.height(), 0.0);
}

#[test]
fn style_validation() {
    assert!(style(12.0).validate().is_ok());
    assert!(style(0.0).validate().is_err());
    assert!(style(f32::NAN).validate().is_err());
}

#[test]
fn measurer_works_through_mut_ref_and_box() {
    let mut m = FixedAdvanceMeasurer::new(1.0, 1.0).unwrap();
    let via_ref = (&mut m).measure("ab", &style(10.0));
    let mut boxed: Box<dyn TextMeasurer> = Box::new(m);
    let via_box = boxed.measure("ab", &style(10.0));
    assert_eq!(via_ref, via_box);
}

#[test]
fn grapheme_width_runs_to_the_next_edge() {
    let mut m = FixedAdvanceMeasurer::new(1.0, 1.0).unwrap();
    let ltr = m.measure("abc", &style(10.0));
    assert_eq!(ltr.grapheme_width(0), 10.0);
    assert_eq!(ltr.grapheme_width(2), 10.0);
    assert_eq!(ltr.grapheme_width(3), 0.0);

    let rtl = m.measure("שלום", &style(10.0));
    assert_eq!(rtl.grapheme_width(0), 10.0);
    assert_eq!(rtl.grapheme_width(3), 10.0);
}
