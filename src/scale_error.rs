/*
 * // Copyright (c) the field-scale developers. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

use std::error::Error;
use std::fmt::Display;

/// Buffer mismatch error description
#[derive(Copy, Clone, Debug)]
pub struct ScaleBufferMismatch {
    pub expected: usize,
    pub width: usize,
    pub height: usize,
    pub slice_len: usize,
}

/// Error enumeration type
#[derive(Debug)]
pub enum ScaleError {
    ZeroImageDimensions,
    InvalidStride(usize, usize),
    BufferMismatch(ScaleBufferMismatch),
}

impl ScaleError {
    /// Returns error as int code
    #[inline]
    pub fn code(&self) -> usize {
        match self {
            ScaleError::ZeroImageDimensions => 1,
            ScaleError::InvalidStride(_, _) => 2,
            ScaleError::BufferMismatch(_) => 3,
        }
    }
}

impl Display for ScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleError::ZeroImageDimensions => {
                f.write_str("One of image dimensions is 0, this should not happen")
            }
            ScaleError::InvalidStride(min_stride, real_stride) => f.write_fmt(format_args!(
                "Stride must be at least {min_stride}, but received {real_stride}",
            )),
            ScaleError::BufferMismatch(buffer_mismatch) => f.write_fmt(format_args!(
                "Plane buffer len expected to be at least {} [w({}), h({})] but received {}",
                buffer_mismatch.expected,
                buffer_mismatch.width,
                buffer_mismatch.height,
                buffer_mismatch.slice_len,
            )),
        }
    }
}

impl Error for ScaleError {}
