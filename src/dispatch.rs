/*
 * // Copyright (c) the field-scale developers. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

use crate::convolve_u8::{
    convolve_horizontal_u8, convolve_horizontal_u8_n, convolve_vertical_u8, convolve_vertical_u8_n,
};
use crate::partition::RegionView;

/// Tap widths with a dedicated monomorphized routine; everything else
/// falls back to the runtime-tap variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum TapsClass {
    Taps2,
    Taps4,
    Taps6,
    Taps8,
    Taps10,
    Taps12,
    AnyTaps,
}

impl TapsClass {
    pub(crate) fn from_taps(taps: usize) -> TapsClass {
        match taps {
            2 => TapsClass::Taps2,
            4 => TapsClass::Taps4,
            6 => TapsClass::Taps6,
            8 => TapsClass::Taps8,
            10 => TapsClass::Taps10,
            12 => TapsClass::Taps12,
            _ => TapsClass::AnyTaps,
        }
    }
}

/// Selected convolution routine for one resize context.
///
/// A closed enumeration rather than a stored function pointer: selection
/// happens once at construction, dispatch is a jump table in [`Self::invoke`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum ScaleRoutine {
    Horizontal(TapsClass),
    Vertical(TapsClass),
}

pub(crate) fn select_horizontal_routine(taps: usize) -> ScaleRoutine {
    ScaleRoutine::Horizontal(TapsClass::from_taps(taps))
}

pub(crate) fn select_vertical_routine(taps: usize) -> ScaleRoutine {
    ScaleRoutine::Vertical(TapsClass::from_taps(taps))
}

impl ScaleRoutine {
    pub(crate) fn invoke(&self, r: &RegionView<'_>) {
        match self {
            ScaleRoutine::Horizontal(class) => {
                let (d, s) = (&r.dst, r.src);
                match class {
                    TapsClass::Taps2 => convolve_horizontal_u8::<2>(
                        d, r.dst_offset, s, r.weights, r.offsets, r.width, r.height, r.dst_stride,
                        r.src_stride,
                    ),
                    TapsClass::Taps4 => convolve_horizontal_u8::<4>(
                        d, r.dst_offset, s, r.weights, r.offsets, r.width, r.height, r.dst_stride,
                        r.src_stride,
                    ),
                    TapsClass::Taps6 => convolve_horizontal_u8::<6>(
                        d, r.dst_offset, s, r.weights, r.offsets, r.width, r.height, r.dst_stride,
                        r.src_stride,
                    ),
                    TapsClass::Taps8 => convolve_horizontal_u8::<8>(
                        d, r.dst_offset, s, r.weights, r.offsets, r.width, r.height, r.dst_stride,
                        r.src_stride,
                    ),
                    TapsClass::Taps10 => convolve_horizontal_u8::<10>(
                        d, r.dst_offset, s, r.weights, r.offsets, r.width, r.height, r.dst_stride,
                        r.src_stride,
                    ),
                    TapsClass::Taps12 => convolve_horizontal_u8::<12>(
                        d, r.dst_offset, s, r.weights, r.offsets, r.width, r.height, r.dst_stride,
                        r.src_stride,
                    ),
                    TapsClass::AnyTaps => convolve_horizontal_u8_n(
                        d, r.dst_offset, s, r.weights, r.offsets, r.taps, r.width, r.height,
                        r.dst_stride, r.src_stride,
                    ),
                }
            }
            ScaleRoutine::Vertical(class) => {
                let (d, s) = (&r.dst, r.src);
                match class {
                    TapsClass::Taps2 => convolve_vertical_u8::<2>(
                        d, r.dst_offset, s, r.weights, r.offsets, r.width, r.height, r.dst_stride,
                        r.src_stride,
                    ),
                    TapsClass::Taps4 => convolve_vertical_u8::<4>(
                        d, r.dst_offset, s, r.weights, r.offsets, r.width, r.height, r.dst_stride,
                        r.src_stride,
                    ),
                    TapsClass::Taps6 => convolve_vertical_u8::<6>(
                        d, r.dst_offset, s, r.weights, r.offsets, r.width, r.height, r.dst_stride,
                        r.src_stride,
                    ),
                    TapsClass::Taps8 => convolve_vertical_u8::<8>(
                        d, r.dst_offset, s, r.weights, r.offsets, r.width, r.height, r.dst_stride,
                        r.src_stride,
                    ),
                    TapsClass::Taps10 => convolve_vertical_u8::<10>(
                        d, r.dst_offset, s, r.weights, r.offsets, r.width, r.height, r.dst_stride,
                        r.src_stride,
                    ),
                    TapsClass::Taps12 => convolve_vertical_u8::<12>(
                        d, r.dst_offset, s, r.weights, r.offsets, r.width, r.height, r.dst_stride,
                        r.src_stride,
                    ),
                    TapsClass::AnyTaps => convolve_vertical_u8_n(
                        d, r.dst_offset, s, r.weights, r.offsets, r.taps, r.width, r.height,
                        r.dst_stride, r.src_stride,
                    ),
                }
            }
        }
    }
}
