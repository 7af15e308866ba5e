/* SPDX-License-Identifier: GPL-2.0-only */
#![cfg_attr(not(test), no_std)]

use core::fmt;
use log::debug;
use util::{
    align::{is_page_aligned, range_end},
    error::LayoutError,
};

/// Extents of the trusted on-chip RAM seen by the boot stage.
///
/// `total` is everything the stage may map. `free` is the contiguous part
/// not claimed by the stage's own image; it always lies inside `total`.
/// Created with `free == total` and narrowed through [`reserve`] while the
/// early platform setup runs. A later stage may inherit it read-only.
///
/// [`reserve`]: TrustedMemoryLayout::reserve
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TrustedMemoryLayout {
    total_base: usize,
    total_size: usize,
    free_base: usize,
    free_size: usize,
}

impl TrustedMemoryLayout {
    pub const fn new(total_base: usize, total_size: usize) -> Self {
        Self {
            total_base,
            total_size,
            free_base: total_base,
            free_size: total_size,
        }
    }

    pub fn total_base(&self) -> usize {
        self.total_base
    }

    pub fn total_size(&self) -> usize {
        self.total_size
    }

    /// `(total_base, total_size)`
    pub fn total(&self) -> (usize, usize) {
        (self.total_base, self.total_size)
    }

    /// `(free_base, free_size)`
    pub fn free(&self) -> (usize, usize) {
        (self.free_base, self.free_size)
    }

    pub fn free_contains(&self, addr: usize) -> bool {
        addr >= self.free_base && addr - self.free_base < self.free_size
    }

    /// Claim `[base, base + size)` out of the free range.
    ///
    /// The range must lie inside the current free range and be page aligned.
    /// An empty range is never inside the free range.
    /// The free range stays contiguous: whatever is left below and above the
    /// reservation, the larger part is kept and the smaller one is lost. A
    /// reservation at either end of the free range therefore loses nothing.
    ///
    /// On error the layout is left untouched.
    pub fn reserve(&mut self, base: usize, size: usize) -> Result<(), LayoutError> {
        let end = range_end(base, size).ok_or(LayoutError::OutOfRange)?;
        // free_base + free_size cannot wrap, it is inside total
        let free_end = self.free_base + self.free_size;
        if size == 0 || base < self.free_base || end > free_end {
            return Err(LayoutError::OutOfRange);
        }
        if !is_page_aligned(base) || !is_page_aligned(size) {
            return Err(LayoutError::Misaligned);
        }

        let below = base - self.free_base;
        let above = free_end - end;
        let discarded = if above >= below {
            self.free_base = end;
            self.free_size = above;
            below
        } else {
            self.free_size = below;
            above
        };

        debug!(
            "reserved {:#x}..{:#x}, free {:#x}..{:#x}, {:#x} bytes discarded",
            base,
            end,
            self.free_base,
            self.free_base + self.free_size,
            discarded
        );
        Ok(())
    }
}

impl fmt::Display for TrustedMemoryLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total {:#x}..{:#x} free {:#x}..{:#x}",
            self.total_base,
            self.total_base + self.total_size,
            self.free_base,
            self.free_base + self.free_size
        )
    }
}
