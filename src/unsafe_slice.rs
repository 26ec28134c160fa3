/*
 * // Copyright (c) the field-scale developers. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

use std::cell::UnsafeCell;

/// Cell view over a destination buffer shared by concurrent workers.
///
/// Interlaced field passes write interleaved rows of the same buffer, so a
/// `&mut [u8]` split cannot express the partitioning; every worker instead
/// receives this view together with a byte window it alone may write.
#[derive(Copy, Clone)]
pub(crate) struct UnsafeSlice<'a, T> {
    pub slice: &'a [UnsafeCell<T>],
}

unsafe impl<T: Send + Sync> Send for UnsafeSlice<'_, T> {}

unsafe impl<T: Send + Sync> Sync for UnsafeSlice<'_, T> {}

impl<'a, T> UnsafeSlice<'a, T> {
    pub fn new(slice: &'a mut [T]) -> Self {
        let ptr = slice as *mut [T] as *const [UnsafeCell<T>];
        Self {
            slice: unsafe { &*ptr },
        }
    }

    /// SAFETY: It is UB if two threads write to the same index without
    /// synchronization.
    #[inline(always)]
    pub unsafe fn write(&self, i: usize, value: T) {
        let ptr = self.slice[i].get();
        unsafe { *ptr = value };
    }

    pub fn get(&self, i: usize) -> &T {
        let ptr = self.slice[i].get();
        unsafe { &*ptr }
    }

    pub fn len(&self) -> usize {
        self.slice.len()
    }
}
