use super::*;

const ALL: [Ease; 2] = [Ease::OutCubic, Ease::OutBack];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
    }
}

#[test]
fn out_cubic_is_monotonic_and_front_loaded() {
    let a = Ease::OutCubic.apply(0.25);
    let b = Ease::OutCubic.apply(0.5);
    let c = Ease::OutCubic.apply(0.75);
    assert!(a < b && b < c);
    assert_eq!(b, 0.875);
}

#[test]
fn out_back_overshoots_then_settles() {
    let peak = (1..100)
        .map(|i| Ease::OutBack.apply(f64::from(i) / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.05);
    assert!(peak < 1.15);
    assert!(Ease::OutBack.apply(0.1) > 0.0);
}
