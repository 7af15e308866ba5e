//! Bindings to the parts of TF-A the stage links against: the translation
//! table library, the IO layer and image loader, and the boot ROM library.

use core::ffi::{c_int, c_uint};

use bl1_cpu::arm64::sysreg::current_el;
use bl1_soc::arm::{
    def::{ARM_TB_FW_CONFIG_BASE, ARM_TB_FW_CONFIG_LIMIT},
    EntryPointInfo,
};
use drivers::{
    io::{BootMedia, IoLayer, RomLib},
    DriverError,
};
use log::{debug, warn};
use xlat::{
    check_regions, MemAttr, MemType, MemoryRegion, Security, TranslationRegime,
    TranslationTables, XlatError,
};

/* Memory attributes of the translation table library */
const MT_DEVICE: u32 = 0;
const MT_MEMORY: u32 = 2;
const MT_RW: u32 = 1 << 3;
const MT_NS: u32 = 1 << 4;
const MT_EXECUTE_NEVER: u32 = 1 << 5;

#[repr(C)]
struct ParamHeader {
    kind: u8,
    version: u8,
    size: u16,
    attr: u32,
}

#[repr(C)]
struct ImageInfo {
    h: ParamHeader,
    image_base: usize,
    image_size: u32,
    image_max_size: u32,
}

const PARAM_IMAGE_BINARY: u8 = 0x02;
const VERSION_2: u8 = 0x02;

extern "C" {
    fn mmap_add_region(base_pa: u64, base_va: usize, size: usize, attr: c_uint);
    fn init_xlat_tables();
    fn enable_mmu_el3(flags: c_uint);
    fn enable_mmu_svc_mon(flags: c_uint);

    fn plat_arm_io_setup();
    fn arm_io_is_toc_valid() -> c_int;
    fn load_auth_image(image_id: c_uint, image_data: *mut ImageInfo) -> c_int;

    fn rom_lib_init(version: c_int) -> c_int;

    /// Loads the image and enters it through `ep`. Never returns.
    pub fn bl1_run_next_image(image_id: c_uint, ep: *const EntryPointInfo) -> !;
}

/// Encode a region attribute for `mmap_add_region`.
pub fn mt_attr(attr: MemAttr) -> u32 {
    let kind = match attr.kind {
        MemType::Code => MT_MEMORY,
        MemType::RoData => MT_MEMORY | MT_EXECUTE_NEVER,
        MemType::RwData => MT_MEMORY | MT_RW | MT_EXECUTE_NEVER,
        MemType::Device => MT_DEVICE | MT_RW,
        MemType::DeviceRo => MT_DEVICE,
    };
    match attr.security {
        Security::Secure => kind,
        Security::NonSecure => kind | MT_NS,
    }
}

#[derive(Default)]
pub struct TfaXlat;

impl TfaXlat {
    fn add_regions(regions: &[MemoryRegion]) {
        for r in regions.iter().take_while(|r| !r.is_sentinel()) {
            debug!("xlat: map {r}");
            unsafe { mmap_add_region(r.base as u64, r.base, r.size, mt_attr(r.attr)) };
        }
    }
}

impl TranslationTables for TfaXlat {
    fn install(
        &mut self,
        bl_regions: &[MemoryRegion],
        plat_regions: &[MemoryRegion],
    ) -> Result<(), XlatError> {
        check_regions(bl_regions)?;
        check_regions(plat_regions)?;
        Self::add_regions(bl_regions);
        Self::add_regions(plat_regions);
        unsafe { init_xlat_tables() };
        Ok(())
    }

    fn enable_translation(&mut self, regime: TranslationRegime) -> Result<(), XlatError> {
        match regime {
            TranslationRegime::El3 => {
                if current_el() != 3 {
                    warn!("xlat: not running at EL3");
                    return Err(XlatError::Rejected);
                }
                unsafe { enable_mmu_el3(0) };
            }
            TranslationRegime::Aarch32SvcMon => unsafe { enable_mmu_svc_mon(0) },
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct TfaIo;

impl IoLayer for TfaIo {
    fn setup_backends(&mut self) -> Result<(), DriverError> {
        unsafe { plat_arm_io_setup() };
        Ok(())
    }

    fn load_config_blob(&mut self, id: u32) -> Result<(), DriverError> {
        let mut info = ImageInfo {
            h: ParamHeader {
                kind: PARAM_IMAGE_BINARY,
                version: VERSION_2,
                size: core::mem::size_of::<ImageInfo>() as u16,
                attr: 0,
            },
            image_base: ARM_TB_FW_CONFIG_BASE,
            image_size: 0,
            image_max_size: (ARM_TB_FW_CONFIG_LIMIT - ARM_TB_FW_CONFIG_BASE) as u32,
        };
        if unsafe { load_auth_image(id, &mut info) } != 0 {
            warn!("io: config {id} not loaded");
            return Err(DriverError::Unsupported);
        }
        debug!("io: config {id} at {:#x}, {} bytes", info.image_base, info.image_size);
        Ok(())
    }
}

impl BootMedia for TfaIo {
    fn is_toc_valid(&mut self) -> bool {
        unsafe { arm_io_is_toc_valid() != 0 }
    }
}

#[derive(Default)]
pub struct TfaRomLib;

impl RomLib for TfaRomLib {
    fn init(&mut self, version: u32) -> bool {
        unsafe { rom_lib_init(version as c_int) != 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes() {
        assert_eq!(mt_attr(MemAttr::CODE), 0x02);
        assert_eq!(mt_attr(MemAttr::RO_DATA), 0x22);
        assert_eq!(mt_attr(MemAttr::RW_DATA), 0x2a);
        assert_eq!(mt_attr(MemAttr::DEVICE), 0x08);
        assert_eq!(mt_attr(MemAttr::DEVICE_RO), 0x00);
        assert_eq!(mt_attr(MemAttr::non_secure(MemType::RwData)), 0x3a);
    }
}
