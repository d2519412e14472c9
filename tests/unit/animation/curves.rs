use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn dip_and_rise_dips_then_lands_on_one() {
    let c = DipAndRise { dip: 0.3 };
    assert!(close(c.apply(0.0), 0.0));
    assert!(close(c.apply(0.25), -0.3));
    assert!(close(c.apply(0.5), 0.0));
    assert!(close(c.apply(0.75), 0.5));
    assert!(close(c.apply(1.0), 1.0));
    assert!(close(c.apply(4.0), 1.0));
}

#[test]
fn dip_and_rise_without_dip_never_goes_negative() {
    let c = DipAndRise { dip: 0.0 };
    for i in 0..=20 {
        assert!(c.apply(f64::from(i) / 20.0) >= 0.0);
    }
}

#[test]
fn swell_peaks_at_midpoint() {
    let c = Swell { amount: 0.1 };
    assert!(close(c.apply(0.0), 0.0));
    assert!(close(c.apply(0.5), 0.1));
    assert!(close(c.apply(1.0), 0.0));
    assert!(c.apply(0.25) < c.apply(0.5));
}

#[test]
fn bounce_decays_and_rests_at_both_ends() {
    let c = Bounce { strength: 0.8 };
    assert_eq!(c.apply(0.0), 0.0);
    assert_eq!(c.apply(1.0), 0.0);
    assert!(close(c.apply(1.0 / 6.0), 0.8));
    assert!(close(c.apply(0.5), 0.4));
    assert!(close(c.apply(5.0 / 6.0), 0.2));
    for i in 0..=30 {
        let v = c.apply(f64::from(i) / 30.0);
        assert!((0.0..=0.8 + 1e-9).contains(&v));
    }
}

#[test]
fn zero_strength_curves_are_flat() {
    for i in 0..=10 {
        let x = f64::from(i) / 10.0;
        assert_eq!(Bounce { strength: 0.0 }.apply(x), 0.0);
        assert_eq!(Swell { amount: 0.0 }.apply(x), 0.0);
    }
}
