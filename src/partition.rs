/*
 * // Copyright (c) the field-scale developers. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

use crate::unsafe_slice::UnsafeSlice;

/// Extents and strides of one field pass, after any interlace doubling.
#[derive(Debug, Copy, Clone)]
pub(crate) struct FieldGeometry {
    pub taps: usize,
    pub width: usize,
    /// Output rows of this field; the axis every plan partitions along.
    pub height: usize,
    pub dst_stride: usize,
    pub src_stride: usize,
    pub threads: usize,
}

/// One worker's share of a field: byte cursors into the destination and
/// source planes plus the coefficient/offset sub-windows it may consult.
/// Destination windows of sibling slices never overlap; source windows may.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct SliceWindow {
    pub dst_start: usize,
    pub dst_len: usize,
    pub src_start: usize,
    pub cof_start: usize,
    pub cof_len: usize,
    pub off_start: usize,
    pub off_len: usize,
    pub rows: usize,
}

/// Everything a convolution routine needs to fill one slice window.
#[derive(Copy, Clone)]
pub(crate) struct RegionView<'a> {
    pub dst: UnsafeSlice<'a, u8>,
    pub dst_offset: usize,
    pub src: &'a [u8],
    pub weights: &'a [i16],
    pub offsets: &'a [usize],
    pub taps: usize,
    pub width: usize,
    pub height: usize,
    pub dst_stride: usize,
    pub src_stride: usize,
}

/// Splits one field's output rows into per-worker slice windows.
///
/// The two implementations differ only in cursor bookkeeping, but that
/// bookkeeping is exactly where orientation bugs hide, so each strategy is
/// spelled out and tested on its own.
pub(crate) trait SlicePlan {
    fn plan(&self, geometry: &FieldGeometry, offsets: &[usize]) -> Vec<SliceWindow>;
}

/// Row partitioning for horizontal resizing: every worker shares the whole
/// per-column coefficient/offset tables and the source advances by a uniform
/// row stride.
pub(crate) struct HorizontalPlan;

/// Row partitioning for vertical resizing: coefficients and offsets are
/// per-output-row, and the source cursor must replay the offset deltas of
/// every consumed row. Guessing `row * ratio` instead would drift from the
/// kernel's actual phase at non-integral ratios.
pub(crate) struct VerticalPlan;

fn chunk_rows(height: usize, threads: usize) -> usize {
    (height / threads).max(1)
}

impl SlicePlan for HorizontalPlan {
    fn plan(&self, g: &FieldGeometry, _offsets: &[usize]) -> Vec<SliceWindow> {
        let nh = chunk_rows(g.height, g.threads);
        let mut windows = Vec::with_capacity(g.threads.min(g.height));
        let mut remaining = g.height;
        let mut dst_cursor = 0usize;
        let mut src_cursor = 0usize;
        for i in 0..g.threads {
            let last = i + 1 == g.threads;
            let rows = if last { remaining } else { nh.min(remaining) };
            if rows == 0 {
                continue;
            }
            windows.push(SliceWindow {
                dst_start: dst_cursor,
                dst_len: g.dst_stride * (rows - 1) + g.width,
                src_start: src_cursor,
                cof_start: 0,
                cof_len: g.width * g.taps,
                off_start: 0,
                off_len: g.width,
                rows,
            });
            remaining -= rows;
            dst_cursor += rows * g.dst_stride;
            src_cursor += rows * g.src_stride;
        }
        windows
    }
}

impl SlicePlan for VerticalPlan {
    fn plan(&self, g: &FieldGeometry, offsets: &[usize]) -> Vec<SliceWindow> {
        let nh = chunk_rows(g.height, g.threads);
        let mut windows = Vec::with_capacity(g.threads.min(g.height));
        let mut remaining = g.height;
        let mut dst_cursor = 0usize;
        let mut src_cursor = 0usize;
        let mut cof_cursor = 0usize;
        let mut off_cursor = 0usize;
        for i in 0..g.threads {
            let last = i + 1 == g.threads;
            let rows = if last { remaining } else { nh.min(remaining) };
            if rows == 0 {
                continue;
            }
            windows.push(SliceWindow {
                dst_start: dst_cursor,
                dst_len: g.dst_stride * (rows - 1) + g.width,
                src_start: src_cursor,
                cof_start: cof_cursor,
                cof_len: rows * g.taps,
                off_start: off_cursor,
                off_len: rows,
                rows,
            });
            remaining -= rows;
            dst_cursor += rows * g.dst_stride;
            cof_cursor += rows * g.taps;
            for &delta in &offsets[off_cursor..off_cursor + rows] {
                src_cursor += delta * g.src_stride;
            }
            off_cursor += rows;
        }
        windows
    }
}
