use super::*;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn separable_functions_on_u8() {
    assert_eq!(normal(10u8, 200), 10);
    assert_eq!(multiply(255u8, 77), 77);
    assert_eq!(screen(0u8, 77), 77);
    assert_eq!(darken(10u8, 200), 10);
    assert_eq!(lighten(10u8, 200), 200);
    assert_eq!(difference(200u8, 50), 150);
    assert_eq!(addition(200u8, 100), 255);
    assert_eq!(subtract(100u8, 40), 0);
    assert_eq!(subtract(40u8, 100), 60);
}

#[test]
fn separable_functions_on_f32() {
    assert!(close(multiply(0.5f32, 0.5), 0.25));
    assert!(close(screen(0.5f32, 0.5), 0.75));
    assert!(close(difference(0.25f32, 0.75), 0.5));
}

#[test]
fn luminosity_takes_source_luma() {
    let (mut r, mut g, mut b) = (0.2, 0.4, 0.6);
    luminosity(0.5, 0.5, 0.5, &mut r, &mut g, &mut b);
    assert!(close(luma(r, g, b), 0.5));
    // chroma offsets survive
    assert!(close(g - r, 0.2));
    assert!(close(b - g, 0.2));
}

#[test]
fn color_keeps_destination_luma() {
    let (mut r, mut g, mut b) = (0.3, 0.3, 0.3);
    color(1.0, 0.0, 0.0, &mut r, &mut g, &mut b);
    assert!(close(luma(r, g, b), 0.3));
    assert!(r > g && g >= 0.0 && close(g, b));
}

#[test]
fn set_luma_stays_in_gamut() {
    let (mut r, mut g, mut b) = (1.0, 1.0, 0.0);
    set_luma(&mut r, &mut g, &mut b, 0.98);
    for c in [r, g, b] {
        assert!((0.0..=1.0 + 1e-5).contains(&c), "c={c}");
    }
}

#[test]
fn greater_is_noop_on_opaque_destination() {
    let (mut d, mut da) = (0.4, 1.0);
    greater(0.9, 1.0, &mut d, &mut da);
    assert_eq!((d, da), (0.4, 1.0));
}

#[test]
fn greater_takes_source_over_transparent_destination() {
    let (mut d, mut da) = (0.4, 0.0);
    greater(0.9, 1.0, &mut d, &mut da);
    assert!(close(d, 0.9));
    assert!(close(da, 1.0));
}

#[test]
fn greater_never_lowers_alpha() {
    let (mut d, mut da) = (0.4, 0.8);
    greater(0.9, 0.1, &mut d, &mut da);
    assert!(da >= 0.8);
    assert!((0.0..=1.0).contains(&d));
}

#[test]
fn linear_mix_endpoints() {
    let mut dst = (0.1, 0.2, 0.3);
    linear_mix(0.9, 0.8, 0.7, 0.0, &mut dst.0, &mut dst.1, &mut dst.2);
    assert_eq!(dst, (0.9, 0.8, 0.7));

    let mut dst = (0.1, 0.2, 0.3);
    linear_mix(0.9, 0.8, 0.7, 1.0, &mut dst.0, &mut dst.1, &mut dst.2);
    assert!(close(dst.0, 0.1) && close(dst.1, 0.2) && close(dst.2, 0.3));
}
