use super::*;

#[test]
fn fnv_split_writes_match_single_write() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"pictograph");
    let mut b = Fnv1a64::new_default();
    b.write_u8(b'p');
    b.write_bytes(b"ictograph");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn fnv_empty_input_is_offset_basis() {
    assert_eq!(Fnv1a64::new_default().finish(), 0xcbf2_9ce4_8422_2325);
}

#[test]
fn fnv_f64_distinguishes_signed_zero() {
    let mut a = Fnv1a64::new_default();
    a.write_f64(0.0);
    let mut b = Fnv1a64::new_default();
    b.write_f64(-0.0);
    assert_ne!(a.finish(), b.finish());
}

#[test]
fn approx_eq_uses_coord_epsilon() {
    assert!(approx_eq(143.1, 143.1 + COORD_EPSILON / 2.0));
    assert!(!approx_eq(143.1, 143.1 + 1e-6));
}

#[test]
fn wrap_degrees_folds_negative_and_overflow() {
    assert_eq!(wrap_degrees(-90), 270);
    assert_eq!(wrap_degrees(360), 0);
    assert_eq!(wrap_degrees(405), 45);
}
