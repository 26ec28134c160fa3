/*
 * // Copyright (c) the field-scale developers. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
//! Polyphase resampling of 8-bit planar images, one axis at a time, with
//! interlaced-field awareness.
//!
//! A [`Resizer`] is built once per (filter, extents, orientation)
//! combination and then applied to any number of buffer pairs. Vertical
//! contexts can be marked interlaced, in which case the two fields are
//! resampled as independent half-height passes writing interleaved rows.
//!
//! ```
//! use field_scale::{ResamplingFunction, ResizeConfig, Resizer};
//!
//! // Downscale 640 source columns to 320, two rows at a time.
//! let resizer = Resizer::new(
//!     ResizeConfig::horizontal(640, 320),
//!     ResamplingFunction::Lanczos3,
//! )
//! .unwrap();
//! let src = vec![0u8; 640 * 2];
//! let mut dst = vec![0u8; 320 * 2];
//! resizer.resize_plane(&mut dst, &src, 640, 2, 320, 640).unwrap();
//! ```
#![allow(clippy::too_many_arguments)]

mod convolve_u8;
mod dispatch;
mod filter_weights;
mod partition;
mod sampler;
mod scale_error;
mod scaler;
mod support;
mod threading_policy;
mod unsafe_slice;

pub use sampler::ResamplingFunction;
pub use scale_error::{ScaleBufferMismatch, ScaleError};
pub use scaler::{ResizeConfig, Resizer};
pub use support::PRECISION;
pub use threading_policy::{PlaneSize, ThreadingPolicy};
