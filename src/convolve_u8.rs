/*
 * // Copyright (c) the field-scale developers. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

use crate::support::{ROUNDING_CONST, saturate_narrow};
use crate::unsafe_slice::UnsafeSlice;

/// Shared horizontal body; the const-generic wrappers below pin `taps` at
/// monomorphization time so the inner window loop fully unrolls.
#[inline(always)]
fn convolve_horizontal_plane(
    dst: &UnsafeSlice<u8>,
    dst_offset: usize,
    src: &[u8],
    weights: &[i16],
    offsets: &[usize],
    taps: usize,
    width: usize,
    height: usize,
    dst_stride: usize,
    src_stride: usize,
) {
    for y in 0..height {
        let src_row = &src[y * src_stride..];
        let dst_row = dst_offset + y * dst_stride;
        for (x, (&start, weights)) in offsets
            .iter()
            .zip(weights.chunks_exact(taps))
            .take(width)
            .enumerate()
        {
            let mut sum = ROUNDING_CONST;
            let window = &src_row[start..start + taps];
            for (&px, &weight) in window.iter().zip(weights.iter()) {
                sum += i32::from(px) * i32::from(weight);
            }
            // SAFETY: the destination window of this region is owned
            // exclusively by the calling worker.
            unsafe { dst.write(dst_row + x, saturate_narrow(sum)) };
        }
    }
}

/// Shared vertical body. The offset table carries row deltas, not absolute
/// rows, so the source cursor is advanced before each produced row.
#[inline(always)]
fn convolve_vertical_plane(
    dst: &UnsafeSlice<u8>,
    dst_offset: usize,
    src: &[u8],
    weights: &[i16],
    offsets: &[usize],
    taps: usize,
    width: usize,
    height: usize,
    dst_stride: usize,
    src_stride: usize,
) {
    let mut src_cursor = 0usize;
    for (y, (&row_delta, weights)) in offsets
        .iter()
        .zip(weights.chunks_exact(taps))
        .take(height)
        .enumerate()
    {
        src_cursor += row_delta * src_stride;
        let dst_row = dst_offset + y * dst_stride;
        for x in 0..width {
            let mut sum = ROUNDING_CONST;
            for (t, &weight) in weights.iter().enumerate() {
                sum += i32::from(src[src_cursor + t * src_stride + x]) * i32::from(weight);
            }
            // SAFETY: the destination window of this region is owned
            // exclusively by the calling worker.
            unsafe { dst.write(dst_row + x, saturate_narrow(sum)) };
        }
    }
}

pub(crate) fn convolve_horizontal_u8<const TAPS: usize>(
    dst: &UnsafeSlice<u8>,
    dst_offset: usize,
    src: &[u8],
    weights: &[i16],
    offsets: &[usize],
    width: usize,
    height: usize,
    dst_stride: usize,
    src_stride: usize,
) {
    convolve_horizontal_plane(
        dst, dst_offset, src, weights, offsets, TAPS, width, height, dst_stride, src_stride,
    );
}

pub(crate) fn convolve_horizontal_u8_n(
    dst: &UnsafeSlice<u8>,
    dst_offset: usize,
    src: &[u8],
    weights: &[i16],
    offsets: &[usize],
    taps: usize,
    width: usize,
    height: usize,
    dst_stride: usize,
    src_stride: usize,
) {
    convolve_horizontal_plane(
        dst, dst_offset, src, weights, offsets, taps, width, height, dst_stride, src_stride,
    );
}

pub(crate) fn convolve_vertical_u8<const TAPS: usize>(
    dst: &UnsafeSlice<u8>,
    dst_offset: usize,
    src: &[u8],
    weights: &[i16],
    offsets: &[usize],
    width: usize,
    height: usize,
    dst_stride: usize,
    src_stride: usize,
) {
    convolve_vertical_plane(
        dst, dst_offset, src, weights, offsets, TAPS, width, height, dst_stride, src_stride,
    );
}

pub(crate) fn convolve_vertical_u8_n(
    dst: &UnsafeSlice<u8>,
    dst_offset: usize,
    src: &[u8],
    weights: &[i16],
    offsets: &[usize],
    taps: usize,
    width: usize,
    height: usize,
    dst_stride: usize,
    src_stride: usize,
) {
    convolve_vertical_plane(
        dst, dst_offset, src, weights, offsets, taps, width, height, dst_stride, src_stride,
    );
}
