/*
 * // Copyright (c) the field-scale developers. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

use crate::dispatch::{ScaleRoutine, select_horizontal_routine, select_vertical_routine};
use crate::filter_weights::{FilterKernel, make_kernel};
use crate::partition::{FieldGeometry, HorizontalPlan, RegionView, SlicePlan, SliceWindow, VerticalPlan};
use crate::sampler::ResamplingFunction;
use crate::scale_error::{ScaleBufferMismatch, ScaleError};
use crate::threading_policy::{PlaneSize, ThreadingPolicy};
use crate::unsafe_slice::UnsafeSlice;

/// One-axis resampling configuration.
///
/// `input` and `output` are extents along the resized axis: columns for a
/// horizontal resize, frame rows for a vertical one. `interlaced` is only
/// meaningful together with `vertical` and makes the resize run as two
/// independent half-height field passes.
#[derive(Debug, Copy, Clone)]
pub struct ResizeConfig {
    pub bit_depth: usize,
    pub input: usize,
    pub output: usize,
    pub vertical: bool,
    pub interlaced: bool,
    pub threading_policy: ThreadingPolicy,
}

impl ResizeConfig {
    pub fn horizontal(input: usize, output: usize) -> ResizeConfig {
        ResizeConfig {
            bit_depth: 8,
            input,
            output,
            vertical: false,
            interlaced: false,
            threading_policy: ThreadingPolicy::default(),
        }
    }

    pub fn vertical(input: usize, output: usize) -> ResizeConfig {
        ResizeConfig {
            vertical: true,
            ..ResizeConfig::horizontal(input, output)
        }
    }

    #[must_use]
    pub fn interlaced(mut self) -> ResizeConfig {
        self.interlaced = true;
        self
    }

    #[must_use]
    pub fn with_threading_policy(mut self, threading_policy: ThreadingPolicy) -> ResizeConfig {
        self.threading_policy = threading_policy;
        self
    }
}

/// Ready-to-use resampling context for one axis of one plane geometry.
///
/// Construction bakes the polyphase kernels and selects the convolution
/// routine; after that the context is read-only, so `resize_plane` may be
/// called repeatedly and concurrently against different buffer pairs.
#[derive(Debug)]
pub struct Resizer {
    cfg: ResizeConfig,
    kernels: Vec<FilterKernel>,
    routine: ScaleRoutine,
}

impl Resizer {
    pub fn new(cfg: ResizeConfig, filter: ResamplingFunction) -> Result<Resizer, ScaleError> {
        if cfg.input == 0 || cfg.output == 0 {
            return Err(ScaleError::ZeroImageDimensions);
        }
        if cfg.vertical && cfg.interlaced && cfg.input < 2 {
            // the bottom field would have no source rows at all
            return Err(ScaleError::ZeroImageDimensions);
        }
        let mut cfg = cfg;
        // only 8-bit planes are supported
        cfg.bit_depth = 8;
        let mut kernels = vec![make_kernel(&cfg, filter, 0)];
        let mut routine = select_horizontal_routine(kernels[0].taps);
        if cfg.vertical {
            routine = select_vertical_routine(kernels[0].taps);
            if cfg.interlaced {
                kernels.push(make_kernel(&cfg, filter, 1));
            }
        }
        Ok(Resizer {
            cfg,
            kernels,
            routine,
        })
    }

    /// Resamples one 8-bit plane along the configured axis.
    ///
    /// `width`/`height` describe the source plane; strides are in bytes.
    /// The call blocks until every field and worker task has finished, so
    /// the destination is fully written when it returns.
    pub fn resize_plane(
        &self,
        dst: &mut [u8],
        src: &[u8],
        width: usize,
        height: usize,
        dst_stride: usize,
        src_stride: usize,
    ) -> Result<(), ScaleError> {
        if width == 0 || height == 0 {
            return Err(ScaleError::ZeroImageDimensions);
        }
        let interlace = (self.cfg.vertical && self.cfg.interlaced) as usize;
        // validation extents come from the configuration, not the caller's
        // header, so a short plane fails loudly instead of reading garbage
        let (src_cols, src_rows, dst_cols, dst_rows) = if self.cfg.vertical {
            (width, self.cfg.input, width, self.cfg.output)
        } else {
            (self.cfg.input, height, self.cfg.output, height)
        };
        if src_stride < src_cols {
            return Err(ScaleError::InvalidStride(src_cols, src_stride));
        }
        if dst_stride < dst_cols {
            return Err(ScaleError::InvalidStride(dst_cols, dst_stride));
        }
        let needed_src = src_stride * (src_rows - 1) + src_cols;
        if src.len() < needed_src {
            return Err(ScaleError::BufferMismatch(ScaleBufferMismatch {
                expected: needed_src,
                width: src_cols,
                height: src_rows,
                slice_len: src.len(),
            }));
        }
        let needed_dst = dst_stride * (dst_rows - 1) + dst_cols;
        if dst.len() < needed_dst {
            return Err(ScaleError::BufferMismatch(ScaleBufferMismatch {
                expected: needed_dst,
                width: dst_cols,
                height: dst_rows,
                slice_len: dst.len(),
            }));
        }

        let plane = PlaneSize::new(dst_cols, dst_rows);
        let threads = self.cfg.threading_policy.thread_count(plane);
        let pool = self.cfg.threading_policy.get_pool(plane);
        let cells = UnsafeSlice::new(dst);
        match pool {
            Some(pool) => pool.install(|| {
                rayon::scope(|scope| {
                    for field in 0..=interlace {
                        let field_rows = Self::field_rows(dst_rows, interlace, field);
                        if field_rows == 0 {
                            continue;
                        }
                        scope.spawn(move |_| {
                            self.resize_field(
                                cells, src, field, interlace, dst_cols, field_rows, dst_stride,
                                src_stride, threads, true,
                            );
                        });
                    }
                });
            }),
            None => {
                for field in 0..=interlace {
                    let field_rows = Self::field_rows(dst_rows, interlace, field);
                    if field_rows == 0 {
                        continue;
                    }
                    self.resize_field(
                        cells, src, field, interlace, dst_cols, field_rows, dst_stride,
                        src_stride, threads, false,
                    );
                }
            }
        }
        Ok(())
    }

    /// Output rows one field contributes. With an odd interlaced height the
    /// top field carries the extra row.
    fn field_rows(dst_rows: usize, interlace: usize, field: usize) -> usize {
        if interlace == 1 {
            (dst_rows + 1 - field) >> 1
        } else {
            dst_rows
        }
    }

    /// Resamples one field. For interlaced passes the strides are doubled
    /// and the buffers offset by one row so the interleaved rows of the
    /// other field are skipped.
    fn resize_field(
        &self,
        dst: UnsafeSlice<'_, u8>,
        src: &[u8],
        field: usize,
        interlace: usize,
        width: usize,
        height: usize,
        dst_stride: usize,
        src_stride: usize,
        threads: usize,
        parallel: bool,
    ) {
        let kernel = &self.kernels[field];
        let field_dst_stride = dst_stride << interlace;
        let field_src_stride = src_stride << interlace;
        let dst_base = dst_stride * field;
        let src = &src[src_stride * field..];
        let geometry = FieldGeometry {
            taps: kernel.taps,
            width,
            height,
            dst_stride: field_dst_stride,
            src_stride: field_src_stride,
            threads,
        };
        let windows = if self.cfg.vertical {
            VerticalPlan.plan(&geometry, &kernel.offsets)
        } else {
            HorizontalPlan.plan(&geometry, &kernel.offsets)
        };
        let run = |window: &SliceWindow| {
            debug_assert!(dst_base + window.dst_start + window.dst_len <= dst.len());
            let region = RegionView {
                dst,
                dst_offset: dst_base + window.dst_start,
                src: &src[window.src_start..],
                weights: &kernel.weights[window.cof_start..window.cof_start + window.cof_len],
                offsets: &kernel.offsets[window.off_start..window.off_start + window.off_len],
                taps: kernel.taps,
                width,
                height: window.rows,
                dst_stride: field_dst_stride,
                src_stride: field_src_stride,
            };
            self.routine.invoke(&region);
        };
        if parallel {
            let run = &run;
            rayon::scope(|scope| {
                for window in &windows {
                    scope.spawn(move |_| run(window));
                }
            });
        } else {
            for window in &windows {
                run(window);
            }
        }
    }
}
