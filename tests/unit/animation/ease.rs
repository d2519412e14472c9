use super::*;

const ALL: [Ease; 10] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::RISE,
    Ease::LINEAR_OUT_SLOW_IN,
    Ease::EASE_IN_OUT,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::RISE.apply(-3.0), 0.0);
    assert_eq!(Ease::RISE.apply(7.0), 1.0);
}

#[test]
fn linear_bezier_is_identity() {
    let ease = Ease::CubicBezier {
        x1: 0.25,
        y1: 0.25,
        x2: 0.75,
        y2: 0.75,
    };
    for t in [0.1, 0.3, 0.5, 0.9] {
        assert!((ease.apply(t) - t).abs() < 1e-9);
    }
}

#[test]
fn symmetric_bezier_passes_through_center() {
    assert!((Ease::EASE_IN_OUT.apply(0.5) - 0.5).abs() < 1e-9);
    assert!(Ease::EASE_IN_OUT.apply(0.2) < 0.2);
    assert!(Ease::LINEAR_OUT_SLOW_IN.apply(0.2) > 0.2);
}

#[test]
fn rise_starts_slow_and_settles() {
    // Early progress lags linear, late progress leads it.
    assert!(Ease::RISE.apply(0.2) < 0.2);
    assert!(Ease::RISE.apply(0.8) > 0.8);
}
