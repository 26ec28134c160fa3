/*
 * // Copyright (c) the field-scale developers. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

#[inline(always)]
pub(crate) fn bc_spline(d: f32, b: f32, c: f32) -> f32 {
    let mut x = d;
    if x < 0.0f32 {
        x = -x;
    }
    let dp = x * x;
    let tp = dp * x;
    if x < 1f32 {
        return ((12f32 - 9f32 * b - 6f32 * c) * tp
            + (-18f32 + 12f32 * b + 6f32 * c) * dp
            + (6f32 - 2f32 * b))
            * (1f32 / 6f32);
    } else if x < 2f32 {
        return ((-b - 6f32 * c) * tp
            + (6f32 * b + 30f32 * c) * dp
            + (-12f32 * b - 48f32 * c) * x
            + (8f32 * b + 24f32 * c))
            * (1f32 / 6f32);
    }
    0f32
}

#[inline(always)]
pub(crate) fn triangle_spline(x: f32) -> f32 {
    (1f32 - x.abs()).max(0f32)
}

#[inline(always)]
pub(crate) fn bicubic_spline(d: f32) -> f32 {
    let a = -0.5f32;
    let modulo = d.abs();
    if modulo >= 2f32 {
        return 0f32;
    }
    let floatd = modulo * modulo;
    let triplet = floatd * modulo;
    if modulo <= 1f32 {
        return (a + 2f32) * triplet - (a + 3f32) * floatd + 1f32;
    }
    a * triplet - 5f32 * a * floatd + 8f32 * a * modulo - 4f32 * a
}

#[inline(always)]
pub(crate) fn sinc(x: f32) -> f32 {
    if x == 0f32 { 1f32 } else { x.sin() / x }
}

#[inline(always)]
pub(crate) fn lanczos_sinc(x: f32, a: f32) -> f32 {
    if x.abs() < a {
        let d = std::f32::consts::PI * x;
        return sinc(d) * sinc(d / a);
    }
    0f32
}

/// Polyphase resampling filters supported by [`Resizer`](crate::Resizer).
///
/// Each variant pairs a weighting function with its support radius; the
/// kernel builder samples it once per output phase.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResamplingFunction {
    Bilinear,
    Bicubic,
    MitchellNetravalli,
    CatmullRom,
    Lanczos2,
    Lanczos3,
}

impl ResamplingFunction {
    #[inline]
    pub(crate) fn evaluate(&self, x: f32) -> f32 {
        match self {
            ResamplingFunction::Bilinear => triangle_spline(x),
            ResamplingFunction::Bicubic => bicubic_spline(x),
            ResamplingFunction::MitchellNetravalli => bc_spline(x, 1f32 / 3f32, 1f32 / 3f32),
            ResamplingFunction::CatmullRom => bc_spline(x, 0f32, 0.5f32),
            ResamplingFunction::Lanczos2 => lanczos_sinc(x, 2f32),
            ResamplingFunction::Lanczos3 => lanczos_sinc(x, 3f32),
        }
    }

    /// Half-width of the filter in source samples at scale 1.
    #[inline]
    pub(crate) fn support(&self) -> f32 {
        match self {
            ResamplingFunction::Bilinear => 1f32,
            ResamplingFunction::Bicubic
            | ResamplingFunction::MitchellNetravalli
            | ResamplingFunction::CatmullRom
            | ResamplingFunction::Lanczos2 => 2f32,
            ResamplingFunction::Lanczos3 => 3f32,
        }
    }
}
