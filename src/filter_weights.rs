/*
 * // Copyright (c) the field-scale developers. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

use num_traits::{AsPrimitive, Bounded};

use crate::sampler::ResamplingFunction;
use crate::scaler::ResizeConfig;
use crate::support::PRECISION;

/// Precomputed polyphase table for one axis of one field.
///
/// `weights` holds `taps` fixed-point coefficients per output sample. For a
/// horizontal kernel `offsets[i]` is the absolute first source column of
/// output column `i`; for a vertical kernel it is the row delta from the
/// previous output sample's base row, so consumers must replay the walk.
#[derive(Debug, Clone)]
pub(crate) struct FilterKernel {
    pub taps: usize,
    pub weights: Vec<i16>,
    pub offsets: Vec<usize>,
}

fn numerical_approximation<J, const PRECISION: i32>(weights: &[f64]) -> Vec<J>
where
    J: Copy + 'static + Bounded + AsPrimitive<f64>,
    f64: AsPrimitive<J>,
{
    let precision_scale: f64 = (1i64 << PRECISION) as f64;
    let lower_bound = J::min_value().as_();
    let upper_bound = J::max_value().as_();
    weights
        .iter()
        .map(|&weight| {
            (weight * precision_scale)
                .round()
                .min(upper_bound)
                .max(lower_bound)
                .as_()
        })
        .collect()
}

/// Rounding each weight independently can leave the row a few counts away
/// from the normalization constant; fold the residual into the largest tap
/// so every row sums to exactly `1 << PRECISION`.
fn redistribute_rounding_error(row: &mut [i16]) {
    let total: i32 = row.iter().map(|&w| i32::from(w)).sum();
    let residual = (1i32 << PRECISION) - total;
    if residual != 0 {
        if let Some(peak) = row.iter_mut().max_by_key(|w| w.abs()) {
            *peak += residual as i16;
        }
    }
}

pub(crate) fn make_kernel(
    cfg: &ResizeConfig,
    filter: ResamplingFunction,
    field: usize,
) -> FilterKernel {
    let halve = (cfg.vertical && cfg.interlaced) as usize;
    let (in_size, out_size) = if halve == 1 {
        ((cfg.input + 1 - field) >> 1, (cfg.output + 1 - field) >> 1)
    } else {
        (cfg.input, cfg.output)
    };

    // Tap count follows the frame-level ratio so both field kernels of one
    // configuration select the same specialized routine.
    let frame_ratio = cfg.input as f64 / cfg.output as f64;
    let support = filter.support() as f64;
    let max_taps = if halve == 1 { cfg.input >> 1 } else { cfg.input };
    let taps = (((support * frame_ratio.max(1f64)).ceil() as usize) * 2)
        .min(max_taps)
        .max(1);

    if out_size == 0 {
        return FilterKernel {
            taps,
            weights: Vec::new(),
            offsets: Vec::new(),
        };
    }

    let ratio = in_size as f64 / out_size as f64;
    let sample_scale = ratio.max(1f64);
    let mut weights = Vec::with_capacity(out_size * taps);
    let mut offsets = Vec::with_capacity(out_size);
    let mut local_filter = vec![0f64; taps];
    let mut prev_start = 0usize;

    for i in 0..out_size {
        let center = (i as f64 + 0.5) * ratio - 0.5;
        // `center` grows monotonically, so the clamped start does too and
        // the vertical delta below can never go negative.
        let start = ((center - (taps as f64 - 1f64) * 0.5).round() as i64)
            .clamp(0, (in_size - taps) as i64) as usize;

        let mut weights_sum = 0f64;
        for (t, w) in local_filter.iter_mut().enumerate() {
            let dx = (start + t) as f64 - center;
            *w = filter.evaluate((dx / sample_scale) as f32) as f64;
            weights_sum += *w;
        }
        if weights_sum != 0f64 {
            let recpeq = 1f64 / weights_sum;
            for w in local_filter.iter_mut() {
                *w *= recpeq;
            }
        }

        let mut quantized = numerical_approximation::<i16, PRECISION>(&local_filter);
        redistribute_rounding_error(&mut quantized);
        weights.append(&mut quantized);

        if cfg.vertical {
            offsets.push(start - prev_start);
            prev_start = start;
        } else {
            offsets.push(start);
        }
    }

    FilterKernel {
        taps,
        weights,
        offsets,
    }
}
