use super::*;

#[test]
fn fract_wraps_negative_inputs() {
    assert_eq!(fract(2.25), 0.25);
    assert_eq!(fract(-0.25), 0.75);
    assert_eq!(fract(3.0), 0.0);
}

#[test]
fn fmt_num_is_compact() {
    assert_eq!(fmt_num(15.0), "15");
    assert_eq!(fmt_num(0.5), "0.5");
    assert_eq!(fmt_num(-0.0001), "0");
    assert_eq!(fmt_num(1.23456), "1.235");
    assert_eq!(fmt_num(f64::NAN), "0");
    assert_eq!(fmt_num(-12.5), "-12.5");
}
