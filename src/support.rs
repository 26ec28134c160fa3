/*
 * // Copyright (c) the field-scale developers. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

/// Fixed-point precision of quantized filter weights.
pub const PRECISION: i32 = 12;
/// Bias folded into every accumulator so the final right shift rounds to nearest.
pub const ROUNDING_CONST: i32 = 1 << (PRECISION - 1);

#[inline(always)]
pub(crate) fn saturate_narrow(accumulator: i32) -> u8 {
    (accumulator >> PRECISION).clamp(0, 255) as u8
}
