/*
 * // Copyright (c) the field-scale developers. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

use rayon::ThreadPool;

/// Extent of one destination plane, used to size the worker budget.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct PlaneSize {
    pub width: usize,
    pub height: usize,
}

impl PlaneSize {
    pub fn new(width: usize, height: usize) -> PlaneSize {
        PlaneSize { width, height }
    }
}

/// Strategy for splitting one resize call across worker threads.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub enum ThreadingPolicy {
    /// Everything runs on the calling thread.
    Single,
    /// Exactly this many workers, clamped to at least one.
    Fixed(usize),
    /// Worker count derived from the destination plane area.
    Adaptive,
}

impl Default for ThreadingPolicy {
    fn default() -> Self {
        ThreadingPolicy::Single
    }
}

impl ThreadingPolicy {
    pub fn thread_count(&self, for_size: PlaneSize) -> usize {
        match self {
            ThreadingPolicy::Single => 1,
            ThreadingPolicy::Fixed(thread_count) => (*thread_count).max(1),
            ThreadingPolicy::Adaptive => {
                let box_size = 256 * 256;
                (for_size.width * for_size.height / box_size).clamp(1, 16)
            }
        }
    }

    pub(crate) fn get_pool(&self, for_size: PlaneSize) -> Option<ThreadPool> {
        if *self == ThreadingPolicy::Single {
            return None;
        }
        let threads_count = self.thread_count(for_size);
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads_count)
            .use_current_thread()
            .build()
            .ok()
    }
}
