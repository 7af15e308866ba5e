//! Address and size alignment helpers shared by the memory layout and the
//! translation region checks.

/// Translation granule used for every BL1 mapping.
pub const PAGE_SIZE: usize = 0x1000;

pub const fn is_aligned(value: usize, align: usize) -> bool {
    debug_assert!(align.is_power_of_two());
    value & (align - 1) == 0
}

pub const fn is_page_aligned(value: usize) -> bool {
    is_aligned(value, PAGE_SIZE)
}

/// End of `[base, base + size)`, or `None` if it wraps the address space.
pub const fn range_end(base: usize, size: usize) -> Option<usize> {
    base.checked_add(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_alignment() {
        assert!(is_page_aligned(0));
        assert!(is_page_aligned(0x4001000));
        assert!(!is_page_aligned(0x4001004));
    }

    #[test]
    fn range_end_wraps() {
        assert_eq!(range_end(0x1000, 0x1000), Some(0x2000));
        assert_eq!(range_end(usize::MAX, 1), None);
    }
}
