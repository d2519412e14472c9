use super::*;
use crate::foundation::error::KaraokeError;

#[test]
fn defaults_are_valid() {
    assert!(KaraokeOpts::default().validate().is_ok());
}

#[test]
fn partial_json_keeps_defaults() {
    let opts = KaraokeOpts::from_json_str(
        r#"{
            "normal_style": { "font_size_px": 40.0 },
            "frame": { "debug_bounds": true, "gradient": { "fade_width_px": 60.0 } }
        }"#,
    )
    .unwrap();
    assert_eq!(opts.normal_style.font_size_px, 40.0);
    assert_eq!(opts.accompaniment_style.font_size_px, 24.0);
    assert!(opts.frame.debug_bounds);
    assert_eq!(opts.frame.gradient.fade_width_px, 60.0);
    assert_eq!(opts.frame.motion, KaraokeOpts::default().frame.motion);
    assert_eq!(opts.rich, RichAnimationOpts::default());
}

#[test]
fn invalid_values_are_rejected_after_parsing() {
    let err = KaraokeOpts::from_json_str(r#"{ "accompaniment_style": { "font_size_px": 0.0 } }"#)
        .unwrap_err();
    assert!(matches!(err, KaraokeError::Validation(_)));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = KaraokeOpts::from_json_str("{ nope").unwrap_err();
    assert!(matches!(err, KaraokeError::Serde(_)));
}

#[test]
fn accompaniment_lines_use_their_own_style() {
    let opts = KaraokeOpts::default();
    let mut line = KaraokeLine::new(Vec::new());
    assert_eq!(opts.style_for(&line), opts.normal_style);
    line.is_accompaniment = true;
    assert_eq!(opts.style_for(&line), opts.accompaniment_style);
}
