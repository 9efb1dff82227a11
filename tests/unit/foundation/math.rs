use super::*;

#[test]
fn int_endpoints_are_exact() {
    assert_eq!(<u8 as Channel>::mul(255, 255), 255);
    assert_eq!(<u8 as Channel>::mul(255, 0), 0);
    assert_eq!(<u8 as Channel>::mul3(255, 255, 255), 255);
    assert_eq!(<u16 as Channel>::mul3(u16::MAX, u16::MAX, 1234), 1234);
    assert_eq!(<u8 as Channel>::inv(0), 255);
    assert_eq!(<u8 as Channel>::union(255, 17), 255);
    assert_eq!(<u8 as Channel>::union(0, 17), 17);
}

#[test]
fn int_mul_rounds_to_nearest() {
    // 128 * 128 / 255 = 64.25
    assert_eq!(<u8 as Channel>::mul(128, 128), 64);
    // 200 * 200 / 255 = 156.86
    assert_eq!(<u8 as Channel>::mul(200, 200), 157);
}

#[test]
fn int_lerp_hits_both_ends_and_goes_both_ways() {
    assert_eq!(<u8 as Channel>::lerp(10, 200, 0), 10);
    assert_eq!(<u8 as Channel>::lerp(10, 200, 255), 200);
    assert_eq!(<u8 as Channel>::lerp(200, 10, 255), 10);
    let mid = <u8 as Channel>::lerp(200, 10, 128);
    assert!((104..=106).contains(&mid), "mid={mid}");
}

#[test]
fn int_div_saturates() {
    assert_eq!(<u8 as Channel>::div(200, 100), 255);
    assert_eq!(<u8 as Channel>::div(5, 0), 255);
    assert_eq!(<u8 as Channel>::div(64, 128), 128);
}

#[test]
fn scale_round_trips_int_values() {
    for v in [0u8, 1, 127, 128, 254, 255] {
        assert_eq!(u8::from_f32(v.to_f32()), v);
    }
    for v in [0u16, 1, 32767, u16::MAX] {
        assert_eq!(u16::from_f32(v.to_f32()), v);
    }
    assert_eq!(u8::from_f32(1.7), 255);
    assert_eq!(u8::from_f32(-0.3), 0);
}

#[test]
fn float_union_matches_porter_duff() {
    for a in [0.1f32, 0.25, 0.5, 0.9] {
        for b in [0.05f32, 0.4, 0.75] {
            let expected = a + b - a * b;
            assert!((<f32 as Channel>::union(a, b) - expected).abs() < 1e-7);
        }
    }
}

#[test]
fn blend_with_opaque_inputs_is_the_composite_value() {
    assert_eq!(<f32 as Channel>::blend(0.2, 1.0, 0.7, 1.0, 0.33), 0.33);
    assert_eq!(<u8 as Channel>::blend(10, 255, 90, 255, 42), 42);
}

#[test]
fn fuzzy_tests_use_the_shared_tolerance() {
    assert!(0.0f32.is_zero_fuzzy());
    assert!((ALPHA_FUZZ * 0.5).is_zero_fuzzy());
    assert!(!(ALPHA_FUZZ * 4.0).is_zero_fuzzy());
    assert!((1.0f32 - ALPHA_FUZZ * 0.5).is_unit_fuzzy());
    assert!(!0.999f32.is_unit_fuzzy());
    assert!(0u8.is_zero_fuzzy());
    assert!(!1u8.is_zero_fuzzy());
    assert!(255u8.is_unit_fuzzy());
    assert!(!254u8.is_unit_fuzzy());
}

#[test]
fn round3_keeps_three_decimals() {
    assert_eq!(round3(0.12345), 0.123);
    assert_eq!(round3(0.9996), 1.0);
}
