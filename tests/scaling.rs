/*
 * // Copyright (c) the field-scale developers. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

use field_scale::{ResamplingFunction, ResizeConfig, Resizer, ScaleError, ThreadingPolicy};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro128StarStar;

fn random_plane(rng: &mut Xoshiro128StarStar, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.random()).collect()
}

#[test]
fn horizontal_identity_reproduces_the_source() {
    let mut rng = Xoshiro128StarStar::from_seed(*b"deadbeeflolcakes");
    let (width, height) = (7usize, 3usize);
    let src = random_plane(&mut rng, width * height);
    let mut dst = vec![0u8; width * height];
    let resizer = Resizer::new(
        ResizeConfig::horizontal(width, width),
        ResamplingFunction::Bilinear,
    )
    .unwrap();
    resizer
        .resize_plane(&mut dst, &src, width, height, width, width)
        .unwrap();
    assert_eq!(dst, src);
}

#[test]
fn vertical_identity_reproduces_the_source() {
    let mut rng = Xoshiro128StarStar::from_seed(*b"deadbeeflolcakes");
    let (width, height) = (4usize, 5usize);
    let src = random_plane(&mut rng, width * height);
    let mut dst = vec![0u8; width * height];
    let resizer = Resizer::new(
        ResizeConfig::vertical(height, height),
        ResamplingFunction::Bilinear,
    )
    .unwrap();
    resizer
        .resize_plane(&mut dst, &src, width, height, width, width)
        .unwrap();
    assert_eq!(dst, src);
}

#[test]
fn constant_planes_survive_any_filter() {
    // quantized kernel rows sum to exactly one, so flat fields cannot drift
    for filter in [
        ResamplingFunction::Bilinear,
        ResamplingFunction::Bicubic,
        ResamplingFunction::MitchellNetravalli,
        ResamplingFunction::CatmullRom,
        ResamplingFunction::Lanczos3,
    ] {
        let src = vec![77u8; 5 * 10];
        let mut dst = vec![0u8; 5 * 7];
        let resizer = Resizer::new(ResizeConfig::vertical(10, 7), filter).unwrap();
        resizer.resize_plane(&mut dst, &src, 5, 10, 5, 5).unwrap();
        assert!(dst.iter().all(|&px| px == 77), "{filter:?} drifted");
    }
}

#[test]
fn vertical_thread_count_does_not_change_output() {
    let mut rng = Xoshiro128StarStar::from_seed(*b"deadbeeflolcakes");
    let (width, in_rows, out_rows) = (5usize, 10usize, 7usize);
    let src = random_plane(&mut rng, width * in_rows);

    let reference = {
        let resizer = Resizer::new(
            ResizeConfig::vertical(in_rows, out_rows),
            ResamplingFunction::Lanczos3,
        )
        .unwrap();
        let mut dst = vec![0u8; width * out_rows];
        resizer
            .resize_plane(&mut dst, &src, width, in_rows, width, width)
            .unwrap();
        dst
    };

    for threads in 1..=out_rows {
        let resizer = Resizer::new(
            ResizeConfig::vertical(in_rows, out_rows)
                .with_threading_policy(ThreadingPolicy::Fixed(threads)),
            ResamplingFunction::Lanczos3,
        )
        .unwrap();
        let mut dst = vec![0u8; width * out_rows];
        resizer
            .resize_plane(&mut dst, &src, width, in_rows, width, width)
            .unwrap();
        assert_eq!(dst, reference, "T={threads}");
    }
}

#[test]
fn horizontal_thread_count_does_not_change_output() {
    let mut rng = Xoshiro128StarStar::from_seed(*b"deadbeeflolcakes");
    let (in_cols, out_cols, rows) = (10usize, 7usize, 6usize);
    let src = random_plane(&mut rng, in_cols * rows);

    let reference = {
        let resizer = Resizer::new(
            ResizeConfig::horizontal(in_cols, out_cols),
            ResamplingFunction::CatmullRom,
        )
        .unwrap();
        let mut dst = vec![0u8; out_cols * rows];
        resizer
            .resize_plane(&mut dst, &src, in_cols, rows, out_cols, in_cols)
            .unwrap();
        dst
    };

    for threads in 1..=rows + 2 {
        let resizer = Resizer::new(
            ResizeConfig::horizontal(in_cols, out_cols)
                .with_threading_policy(ThreadingPolicy::Fixed(threads)),
            ResamplingFunction::CatmullRom,
        )
        .unwrap();
        let mut dst = vec![0u8; out_cols * rows];
        resizer
            .resize_plane(&mut dst, &src, in_cols, rows, out_cols, in_cols)
            .unwrap();
        assert_eq!(dst, reference, "T={threads}");
    }
}

#[test]
fn oversubscribed_thread_budget_does_not_crash() {
    let mut rng = Xoshiro128StarStar::from_seed(*b"deadbeeflolcakes");
    let src = random_plane(&mut rng, 3 * 6);
    let reference = {
        let resizer =
            Resizer::new(ResizeConfig::vertical(6, 3), ResamplingFunction::Bilinear).unwrap();
        let mut dst = vec![0u8; 3 * 3];
        resizer.resize_plane(&mut dst, &src, 3, 6, 3, 3).unwrap();
        dst
    };
    let resizer = Resizer::new(
        ResizeConfig::vertical(6, 3).with_threading_policy(ThreadingPolicy::Fixed(64)),
        ResamplingFunction::Bilinear,
    )
    .unwrap();
    let mut dst = vec![0u8; 3 * 3];
    resizer.resize_plane(&mut dst, &src, 3, 6, 3, 3).unwrap();
    assert_eq!(dst, reference);
}

#[test]
fn interlaced_resize_matches_independent_field_passes() {
    let mut rng = Xoshiro128StarStar::from_seed(*b"deadbeeflolcakes");
    let (width, in_rows, out_rows) = (4usize, 10usize, 6usize);
    let src = random_plane(&mut rng, width * in_rows);

    let mut interlaced_dst = vec![0u8; width * out_rows];
    let interlaced = Resizer::new(
        ResizeConfig::vertical(in_rows, out_rows)
            .interlaced()
            .with_threading_policy(ThreadingPolicy::Fixed(3)),
        ResamplingFunction::Bilinear,
    )
    .unwrap();
    interlaced
        .resize_plane(&mut interlaced_dst, &src, width, in_rows, width, width)
        .unwrap();

    // each field is a plain progressive resize at half the extents
    let progressive = Resizer::new(
        ResizeConfig::vertical(in_rows / 2, out_rows / 2),
        ResamplingFunction::Bilinear,
    )
    .unwrap();
    for field in 0..2usize {
        let field_src: Vec<u8> = src
            .chunks_exact(width)
            .skip(field)
            .step_by(2)
            .flatten()
            .copied()
            .collect();
        let mut field_dst = vec![0u8; width * (out_rows / 2)];
        progressive
            .resize_plane(
                &mut field_dst,
                &field_src,
                width,
                in_rows / 2,
                width,
                width,
            )
            .unwrap();
        let interleaved: Vec<u8> = interlaced_dst
            .chunks_exact(width)
            .skip(field)
            .step_by(2)
            .flatten()
            .copied()
            .collect();
        assert_eq!(interleaved, field_dst, "field {field}");
    }
}

#[test]
fn odd_interlaced_output_keeps_the_extra_top_field_row() {
    let mut rng = Xoshiro128StarStar::from_seed(*b"deadbeeflolcakes");
    let (width, in_rows, out_rows) = (3usize, 9usize, 5usize);
    let src = random_plane(&mut rng, width * in_rows);

    let mut interlaced_dst = vec![0u8; width * out_rows];
    let interlaced = Resizer::new(
        ResizeConfig::vertical(in_rows, out_rows)
            .interlaced()
            .with_threading_policy(ThreadingPolicy::Fixed(2)),
        ResamplingFunction::Bilinear,
    )
    .unwrap();
    interlaced
        .resize_plane(&mut interlaced_dst, &src, width, in_rows, width, width)
        .unwrap();

    // top field: 5 source rows to 3, bottom field: 4 to 2
    for (field, field_in, field_out) in [(0usize, 5usize, 3usize), (1, 4, 2)] {
        let field_src: Vec<u8> = src
            .chunks_exact(width)
            .skip(field)
            .step_by(2)
            .flatten()
            .copied()
            .collect();
        let progressive = Resizer::new(
            ResizeConfig::vertical(field_in, field_out),
            ResamplingFunction::Bilinear,
        )
        .unwrap();
        let mut field_dst = vec![0u8; width * field_out];
        progressive
            .resize_plane(&mut field_dst, &field_src, width, field_in, width, width)
            .unwrap();
        let interleaved: Vec<u8> = interlaced_dst
            .chunks_exact(width)
            .skip(field)
            .step_by(2)
            .flatten()
            .copied()
            .collect();
        assert_eq!(interleaved, field_dst, "field {field}");
    }
}

#[test]
fn single_output_sample_is_served_by_one_worker() {
    let mut rng = Xoshiro128StarStar::from_seed(*b"deadbeeflolcakes");
    let src = random_plane(&mut rng, 10 * 4);

    // vertical: one output row, absurd thread budget
    let resizer = Resizer::new(
        ResizeConfig::vertical(4, 1).with_threading_policy(ThreadingPolicy::Fixed(32)),
        ResamplingFunction::Bicubic,
    )
    .unwrap();
    let mut dst = vec![0u8; 10];
    resizer.resize_plane(&mut dst, &src, 10, 4, 10, 10).unwrap();

    // horizontal: one output column
    let resizer = Resizer::new(
        ResizeConfig::horizontal(10, 1).with_threading_policy(ThreadingPolicy::Fixed(32)),
        ResamplingFunction::Bicubic,
    )
    .unwrap();
    let mut dst = vec![0u8; 4];
    resizer.resize_plane(&mut dst, &src, 10, 4, 1, 10).unwrap();
}

#[test]
fn context_is_reusable_across_calls() {
    let mut rng = Xoshiro128StarStar::from_seed(*b"deadbeeflolcakes");
    let src = random_plane(&mut rng, 8 * 8);
    let resizer = Resizer::new(
        ResizeConfig::horizontal(8, 5),
        ResamplingFunction::Lanczos2,
    )
    .unwrap();
    let mut first = vec![0u8; 5 * 8];
    let mut second = vec![0u8; 5 * 8];
    resizer.resize_plane(&mut first, &src, 8, 8, 5, 8).unwrap();
    resizer.resize_plane(&mut second, &src, 8, 8, 5, 8).unwrap();
    assert_eq!(first, second);
}

#[test]
fn invalid_inputs_are_reported() {
    let err = Resizer::new(ResizeConfig::horizontal(0, 5), ResamplingFunction::Bilinear)
        .map(|_| ())
        .unwrap_err();
    assert!(matches!(err, ScaleError::ZeroImageDimensions));

    let resizer =
        Resizer::new(ResizeConfig::horizontal(8, 4), ResamplingFunction::Bilinear).unwrap();
    let src = vec![0u8; 8 * 2];
    let mut dst = vec![0u8; 4 * 2];

    let err = resizer.resize_plane(&mut dst, &src, 8, 2, 3, 8).unwrap_err();
    assert!(matches!(err, ScaleError::InvalidStride(4, 3)));

    let mut short_dst = vec![0u8; 3];
    let err = resizer
        .resize_plane(&mut short_dst, &src, 8, 2, 4, 8)
        .unwrap_err();
    assert!(matches!(err, ScaleError::BufferMismatch(_)));
}
