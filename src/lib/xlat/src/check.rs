use util::{align::is_page_aligned, error::XlatError};

use crate::region::MemoryRegion;

/// Validate a region list before it is handed to the table builder.
///
/// Every region must be page aligned and non-empty. Two regions may only
/// overlap if one fully contains the other and they are not identical; the
/// inner one then refines the attributes of the outer one. Checking stops at
/// the first sentinel.
pub fn check_regions(regions: &[MemoryRegion]) -> Result<(), XlatError> {
    let live = regions
        .iter()
        .position(MemoryRegion::is_sentinel)
        .unwrap_or(regions.len());
    let regions = &regions[..live];

    for (i, r) in regions.iter().enumerate() {
        if r.size == 0 || !is_page_aligned(r.base) || !is_page_aligned(r.size) {
            return Err(XlatError::Misaligned);
        }
        if r.base.checked_add(r.size).is_none() {
            return Err(XlatError::Overlap);
        }

        for other in &regions[..i] {
            if !r.overlaps(other) {
                continue;
            }
            if r.base == other.base && r.size == other.size {
                return Err(XlatError::Duplicate);
            }
            if !(r.contains(other) || other.contains(r)) {
                return Err(XlatError::Overlap);
            }
        }
    }

    Ok(())
}
