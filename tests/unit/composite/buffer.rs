use super::*;
use crate::blend::contracts::ChannelFn;
use crate::blend::functions::{LINEAR_MIX, SPECTRAL_MIX, multiply_fn, normal_fn};
use crate::composite::generic::{GenericOver, GenericSc};
use crate::foundation::core::{Rgba8, RgbaF32};

fn normal_u8() -> GenericSc<ChannelFn<u8>> {
    GenericSc::new(normal_fn())
}

// Deterministic pseudo-random bytes.
fn noise(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect()
}

#[test]
fn rejects_mismatched_lengths() {
    let mut dst = vec![0u8; 8];
    let src = vec![0u8; 12];
    let err =
        composite_in_place::<Rgba8, _>(&normal_u8(), &mut dst, &src, None, &BufferParams::default())
            .unwrap_err();
    assert!(matches!(err, PigmixError::Buffer(_)));
}

#[test]
fn rejects_partial_pixels() {
    let mut dst = vec![0u8; 6];
    let src = vec![0u8; 6];
    let err =
        composite_in_place::<Rgba8, _>(&normal_u8(), &mut dst, &src, None, &BufferParams::default())
            .unwrap_err();
    assert!(matches!(err, PigmixError::Buffer(_)));
}

#[test]
fn rejects_wrong_mask_length() {
    let mut dst = vec![0u8; 8];
    let src = vec![0u8; 8];
    let mask = vec![255u8; 3];
    let err = composite_in_place::<Rgba8, _>(
        &normal_u8(),
        &mut dst,
        &src,
        Some(&mask),
        &BufferParams::default(),
    )
    .unwrap_err();
    assert!(matches!(err, PigmixError::Buffer(_)));
}

#[test]
fn rejects_bad_opacity() {
    for opacity in [-0.1, 1.5, f32::NAN] {
        let mut dst = vec![0u8; 4];
        let src = vec![0u8; 4];
        let params = BufferParams {
            opacity,
            ..BufferParams::default()
        };
        let err = composite_in_place::<Rgba8, _>(&normal_u8(), &mut dst, &src, None, &params)
            .unwrap_err();
        assert!(matches!(err, PigmixError::Validation(_)));
    }
}

#[test]
fn empty_buffers_are_fine() {
    let mut dst: Vec<u8> = Vec::new();
    composite_in_place::<Rgba8, _>(&normal_u8(), &mut dst, &[], None, &BufferParams::default())
        .unwrap();
}

#[test]
fn writes_returned_alpha() {
    let mut dst = vec![0u8, 0, 0, 0, 10, 20, 30, 255];
    let src = vec![200u8, 100, 50, 255, 200, 100, 50, 255];
    composite_in_place::<Rgba8, _>(&normal_u8(), &mut dst, &src, None, &BufferParams::default())
        .unwrap();
    assert_eq!(dst, vec![200, 100, 50, 255, 200, 100, 50, 255]);
}

#[test]
fn zero_mask_leaves_pixel_alone() {
    let mut dst = vec![10u8, 20, 30, 128, 10, 20, 30, 128];
    let src = vec![200u8, 100, 50, 255, 200, 100, 50, 255];
    let mask = vec![0u8, 255];
    composite_in_place::<Rgba8, _>(
        &normal_u8(),
        &mut dst,
        &src,
        Some(&mask),
        &BufferParams::default(),
    )
    .unwrap();
    assert_eq!(&dst[..4], &[10, 20, 30, 128]);
    assert_eq!(&dst[4..], &[200, 100, 50, 255]);
}

#[test]
fn alpha_locked_keeps_alpha_channel() {
    let mut dst = vec![0.5f32, 0.5, 0.5, 0.25];
    let src = vec![0.2f32, 0.4, 0.6, 1.0];
    let params = BufferParams {
        alpha_locked: true,
        ..BufferParams::default()
    };
    let op = GenericSc::<_>::new(multiply_fn::<f32>());
    composite_in_place::<RgbaF32, _>(&op, &mut dst, &src, None, &params).unwrap();
    assert_eq!(dst[3], 0.25);
    assert!((dst[0] - 0.1).abs() < 1e-6);
}

#[test]
fn deselecting_alpha_locks_it() {
    let mut dst = vec![0.5f32, 0.5, 0.5, 0.25];
    let src = vec![0.2f32, 0.4, 0.6, 0.5];
    let params = BufferParams {
        flags: ChannelFlags::from_indices([0, 1, 2]),
        ..BufferParams::default()
    };
    let op = GenericOver::new(LINEAR_MIX);
    composite_in_place::<RgbaF32, _>(&op, &mut dst, &src, None, &params).unwrap();
    assert_eq!(dst[3], 0.25);
}

#[test]
fn transparent_pixels_are_cleared_under_partial_selection() {
    let mut dst = vec![90u8, 91, 92, 0];
    let src = vec![200u8, 100, 50, 255];
    let params = BufferParams {
        flags: ChannelFlags::from_indices([0, 3]),
        ..BufferParams::default()
    };
    composite_in_place::<Rgba8, _>(&normal_u8(), &mut dst, &src, None, &params).unwrap();
    assert_eq!(dst, vec![200, 0, 0, 255]);
}

#[test]
fn full_selection_matches_all_channels() {
    let src = vec![200u8, 100, 50, 0, 200, 100, 50, 255];
    let base = vec![10u8, 20, 30, 0, 10, 20, 30, 128];

    let mut all = base.clone();
    composite_in_place::<Rgba8, _>(&normal_u8(), &mut all, &src, None, &BufferParams::default())
        .unwrap();
    assert_eq!(&all[..4], &[10, 20, 30, 0]);

    for flags in [
        ChannelFlags::from_indices([0, 1, 2, 3]),
        ChannelFlags::from_indices([3, 2, 1, 0]),
    ] {
        let mut selected = base.clone();
        let params = BufferParams {
            flags,
            ..BufferParams::default()
        };
        composite_in_place::<Rgba8, _>(&normal_u8(), &mut selected, &src, None, &params).unwrap();
        assert_eq!(selected, all);
    }
}

#[test]
fn empty_selection_matches_all_channels() {
    let src = vec![0.2f32, 0.4, 0.6, 0.5];
    let base = vec![0.5f32, 0.5, 0.5, 0.25];
    let op = GenericOver::new(LINEAR_MIX);

    let mut all = base.clone();
    composite_in_place::<RgbaF32, _>(&op, &mut all, &src, None, &BufferParams::default())
        .unwrap();
    let mut empty = base.clone();
    let params = BufferParams {
        flags: ChannelFlags::Selected(0),
        ..BufferParams::default()
    };
    composite_in_place::<RgbaF32, _>(&op, &mut empty, &src, None, &params).unwrap();
    assert_eq!(empty, all);
    assert_ne!(empty, base);
}

#[test]
fn opacity_scales_source() {
    let mut dst = vec![0.0f32, 0.0, 0.0, 1.0];
    let src = vec![1.0f32, 1.0, 1.0, 1.0];
    let params = BufferParams {
        opacity: 0.25,
        ..BufferParams::default()
    };
    let op = GenericSc::<_>::new(normal_fn::<f32>());
    composite_in_place::<RgbaF32, _>(&op, &mut dst, &src, None, &params).unwrap();
    assert!((dst[0] - 0.25).abs() < 1e-6);
    assert_eq!(dst[3], 1.0);
}

#[test]
fn parallel_matches_serial() {
    let pixels = CHUNK_PIXELS * 2 + 37;
    let base = noise(pixels * 4, 7);
    let src = noise(pixels * 4, 11);
    let mask = noise(pixels, 13);

    let ops: Vec<Box<dyn CompositeOp<Rgba8>>> = vec![
        Box::new(GenericSc::<_>::new(multiply_fn::<u8>())) as Box<dyn CompositeOp<Rgba8>>,
        Box::new(GenericOver::new(SPECTRAL_MIX)) as Box<dyn CompositeOp<Rgba8>>,
    ];
    for op in &ops {
        let mut serial = base.clone();
        let mut parallel = base.clone();
        let mut params = BufferParams {
            opacity: 0.8,
            ..BufferParams::default()
        };
        composite_in_place::<Rgba8, _>(&**op, &mut serial, &src, Some(&mask), &params).unwrap();
        params.threading = Threading::Parallel;
        composite_in_place::<Rgba8, _>(&**op, &mut parallel, &src, Some(&mask), &params)
            .unwrap();
        assert_eq!(serial, parallel);
        assert_ne!(serial, base);
    }
}
