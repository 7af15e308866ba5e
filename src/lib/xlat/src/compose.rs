use core::ops::Range;

use heapless::Vec;
use log::debug;
use meminfo::TrustedMemoryLayout;
use util::error::XlatError;

use crate::region::{MemAttr, MemoryRegion};

/// Catch-all, code, rodata, two extra regions and the sentinel, with room
/// to spare for boards adding their own.
pub const MAX_BL_REGIONS: usize = 8;

/// Link-time boundaries of the stage image.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImageSections {
    pub code: Range<usize>,
    pub rodata: Range<usize>,
    /// Coherent RAM. Must be empty for BL1 on Arm platforms.
    pub coherent: Range<usize>,
}

impl ImageSections {
    /// Smallest range covering both code and rodata.
    pub fn read_only(&self) -> Range<usize> {
        if self.rodata.is_empty() {
            return self.code.clone();
        }
        self.code.start.min(self.rodata.start)..self.code.end.max(self.rodata.end)
    }
}

/// Sentinel-terminated list of the stage's own regions.
#[derive(Clone, Debug)]
pub struct RegionList {
    regions: Vec<MemoryRegion, MAX_BL_REGIONS>,
}

impl RegionList {
    fn new() -> Self {
        Self { regions: Vec::new() }
    }

    fn push(&mut self, region: MemoryRegion) -> Result<(), XlatError> {
        self.regions
            .push(region)
            .map_err(|_| XlatError::TooManyRegions)
    }

    /// All entries including the trailing sentinel.
    pub fn as_slice(&self) -> &[MemoryRegion] {
        &self.regions
    }

    /// Entries without the trailing sentinel.
    pub fn regions(&self) -> &[MemoryRegion] {
        let n = self.regions.len().saturating_sub(1);
        &self.regions[..n]
    }

    pub fn len(&self) -> usize {
        self.regions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the stage's region list in the order the translation library
/// expects: the whole of trusted RAM as secure RW background, then the
/// read-only image, then `extra`, then the sentinel. Later entries refine
/// earlier ones.
///
/// With `separate_code_and_rodata` code and rodata get their own regions
/// (executable vs execute-never), otherwise one executable region covers
/// both.
///
/// No alignment or overlap checks happen here; see
/// [`check_regions`](crate::check_regions). The only failure is running out
/// of list capacity, no region is ever dropped.
pub fn compose(
    layout: &TrustedMemoryLayout,
    sections: &ImageSections,
    extra: &[MemoryRegion],
    separate_code_and_rodata: bool,
) -> Result<RegionList, XlatError> {
    let mut list = RegionList::new();
    let (total_base, total_size) = layout.total();

    list.push(MemoryRegion::flat(total_base, total_size, MemAttr::RW_DATA))?;

    if separate_code_and_rodata {
        list.push(MemoryRegion::from_range(
            sections.code.start,
            sections.code.end,
            MemAttr::CODE,
        ))?;
        list.push(MemoryRegion::from_range(
            sections.rodata.start,
            sections.rodata.end,
            MemAttr::RO_DATA,
        ))?;
    } else {
        let ro = sections.read_only();
        list.push(MemoryRegion::from_range(ro.start, ro.end, MemAttr::CODE))?;
    }

    for r in extra {
        list.push(*r)?;
    }

    list.push(MemoryRegion::SENTINEL)?;

    for r in list.regions() {
        debug!("bl region {r}");
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_only_span() {
        let s = ImageSections {
            code: 0x0..0x5000,
            rodata: 0x5000..0x7000,
            coherent: 0..0,
        };
        assert_eq!(s.read_only(), 0x0..0x7000);

        let s = ImageSections {
            code: 0x0..0x5000,
            rodata: 0x5000..0x5000,
            coherent: 0..0,
        };
        assert_eq!(s.read_only(), 0x0..0x5000);
    }

    #[test]
    fn overflow_is_an_error() {
        let layout = TrustedMemoryLayout::new(0x0, 0x10_0000);
        let s = ImageSections {
            code: 0x0..0x1000,
            rodata: 0x1000..0x2000,
            coherent: 0..0,
        };
        let extra = [MemoryRegion::flat(0x2000, 0x1000, MemAttr::RW_DATA); MAX_BL_REGIONS];
        assert_eq!(
            compose(&layout, &s, &extra, false).err(),
            Some(XlatError::TooManyRegions)
        );
    }
}
