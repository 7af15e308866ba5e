//! Memory map and device constants shared by the Arm standard platforms
//! (Versatile Express base memory map, as on FVP).

use xlat::{MemAttr, MemoryRegion};

const USE_ROMLIB: bool = cfg!(feature = "use-romlib");

/* Trusted boot ROM */
pub const PLAT_ARM_TRUSTED_ROM_BASE: usize = 0x0000_0000;
pub const PLAT_ARM_TRUSTED_ROM_SIZE: usize = 0x0400_0000; /* 64 MB */

/* Trusted SRAM, the first page is shared RAM */
pub const ARM_TRUSTED_SRAM_BASE: usize = 0x0400_0000;
pub const PLAT_ARM_TRUSTED_SRAM_SIZE: usize = 0x0004_0000; /* 256 KB */
pub const ARM_SHARED_RAM_BASE: usize = ARM_TRUSTED_SRAM_BASE;
pub const ARM_SHARED_RAM_SIZE: usize = 0x0000_1000; /* 4 KB */

/// Trusted SRAM available to the boot stages
pub const ARM_BL_RAM_BASE: usize = ARM_SHARED_RAM_BASE + ARM_SHARED_RAM_SIZE;
pub const ARM_BL_RAM_SIZE: usize = PLAT_ARM_TRUSTED_SRAM_SIZE - ARM_SHARED_RAM_SIZE;

/// Secondary cores poll this for their entry point
pub const PLAT_ARM_TRUSTED_MAILBOX_BASE: usize = ARM_SHARED_RAM_BASE;

/* Boot ROM shared library */
pub const PLAT_ARM_MAX_ROMLIB_RO_SIZE: usize = 0x1000;
pub const PLAT_ARM_MAX_ROMLIB_RW_SIZE: usize = 0xe000;
pub const ROMLIB_VERSION: u32 = 1;
const ROMLIB_RW_RESERVED: usize = if USE_ROMLIB {
    PLAT_ARM_MAX_ROMLIB_RW_SIZE
} else {
    0
};

/* BL1 RW sits at the top of trusted SRAM below the ROM library data */
pub const PLAT_ARM_MAX_BL1_RW_SIZE: usize = 0xb000;
pub const BL1_RW_LIMIT: usize = ARM_BL_RAM_BASE + ARM_BL_RAM_SIZE - ROMLIB_RW_RESERVED;
pub const BL1_RW_BASE: usize = BL1_RW_LIMIT - PLAT_ARM_MAX_BL1_RW_SIZE;

pub const ROMLIB_RO_BASE: usize =
    PLAT_ARM_TRUSTED_ROM_BASE + PLAT_ARM_TRUSTED_ROM_SIZE - PLAT_ARM_MAX_ROMLIB_RO_SIZE;
pub const ROMLIB_RO_LIMIT: usize = PLAT_ARM_TRUSTED_ROM_BASE + PLAT_ARM_TRUSTED_ROM_SIZE;
pub const ROMLIB_RW_BASE: usize = ARM_BL_RAM_BASE + ARM_BL_RAM_SIZE - PLAT_ARM_MAX_ROMLIB_RW_SIZE;
pub const ROMLIB_RW_END: usize = ARM_BL_RAM_BASE + ARM_BL_RAM_SIZE;

/// TB_FW_CONFIG is loaded into the first half page of BL RAM
pub const ARM_TB_FW_CONFIG_BASE: usize = ARM_BL_RAM_BASE;
pub const ARM_TB_FW_CONFIG_LIMIT: usize = ARM_BL_RAM_BASE + 0x1000 / 2;

/* BL2 is loaded right below BL1 RW */
pub const PLAT_ARM_MAX_BL2_SIZE: usize = 0x1_1000;
pub const BL2_LIMIT: usize = BL1_RW_BASE;
pub const BL2_BASE: usize = BL2_LIMIT - PLAT_ARM_MAX_BL2_SIZE;

/* Versatile Express motherboard */
pub const V2M_FLASH0_BASE: usize = 0x0800_0000;
pub const V2M_FLASH0_SIZE: usize = 0x0400_0000;
pub const V2M_IOFPGA_BASE: usize = 0x1c00_0000;
pub const V2M_IOFPGA_SIZE: usize = 0x0300_0000;
pub const V2M_SYSREGS_BASE: usize = 0x1c01_0000;
pub const V2M_SYS_ID: usize = 0x0;

/// Non-trusted firmware update image, executed in place from NOR flash
pub const NS_BL1U_BASE: usize = V2M_FLASH0_BASE + 0x03eb_8000;

pub const DEVICE0_BASE: usize = 0x2000_0000;
pub const DEVICE0_SIZE: usize = 0x0c20_0000;
pub const DEVICE1_BASE: usize = 0x2f00_0000;
pub const DEVICE1_SIZE: usize = 0x0020_0000;

/* Trusted watchdog */
pub const ARM_SP805_TWDG_BASE: usize = 0x2a49_0000;
pub const ARM_SP805_TWDG_CLK_HZ: u32 = 32_768;
pub const ARM_TWDG_TIMEOUT_SEC: u32 = 128;
pub const ARM_TWDG_LOAD_VAL: u32 = ARM_SP805_TWDG_CLK_HZ * ARM_TWDG_TIMEOUT_SEC;

/* Boot console */
pub const PLAT_ARM_BOOT_UART_BASE: usize = 0x1c09_0000;
pub const PLAT_ARM_BOOT_UART_CLK_IN_HZ: u32 = 24_000_000;
pub const ARM_CONSOLE_BAUDRATE: u32 = 115_200;

/* System counter and timer frames */
pub const ARM_SYS_CNTCTL_BASE: usize = 0x2a43_0000;
pub const ARM_SYS_TIMCTL_BASE: usize = 0x2a81_0000;
pub const PLAT_ARM_NSTIMER_FRAME_ID: usize = 1;

/* Cache coherent interconnect */
pub const PLAT_ARM_CCI_BASE: usize = 0x2c09_0000;
pub const PLAT_ARM_CCI_CLUSTER0_SL_IFACE_IX: usize = 3;
pub const PLAT_ARM_CCI_CLUSTER1_SL_IFACE_IX: usize = 4;

/// Slave interface of each cluster, indexed by cluster number
pub static PLAT_ARM_CCI_MAP: [usize; 2] = [
    PLAT_ARM_CCI_CLUSTER0_SL_IFACE_IX,
    PLAT_ARM_CCI_CLUSTER1_SL_IFACE_IX,
];

pub const ARM_MAP_SHARED_RAM: MemoryRegion =
    MemoryRegion::flat(ARM_SHARED_RAM_BASE, ARM_SHARED_RAM_SIZE, MemAttr::DEVICE);
pub const V2M_MAP_FLASH0_RO: MemoryRegion =
    MemoryRegion::flat(V2M_FLASH0_BASE, V2M_FLASH0_SIZE, MemAttr::DEVICE_RO);
pub const V2M_MAP_IOFPGA: MemoryRegion =
    MemoryRegion::flat(V2M_IOFPGA_BASE, V2M_IOFPGA_SIZE, MemAttr::DEVICE);
pub const MAP_DEVICE0: MemoryRegion =
    MemoryRegion::flat(DEVICE0_BASE, DEVICE0_SIZE, MemAttr::DEVICE);
pub const MAP_DEVICE1: MemoryRegion =
    MemoryRegion::flat(DEVICE1_BASE, DEVICE1_SIZE, MemAttr::DEVICE);

pub const ARM_MAP_ROMLIB_CODE: MemoryRegion =
    MemoryRegion::from_range(ROMLIB_RO_BASE, ROMLIB_RO_LIMIT, MemAttr::CODE);
pub const ARM_MAP_ROMLIB_DATA: MemoryRegion =
    MemoryRegion::from_range(ROMLIB_RW_BASE, ROMLIB_RW_END, MemAttr::RW_DATA);

pub static ARM_ROMLIB_REGIONS: [MemoryRegion; 2] = [ARM_MAP_ROMLIB_CODE, ARM_MAP_ROMLIB_DATA];

/// Static regions every BL1 on these platforms maps in addition to its own
pub static PLAT_ARM_MMAP_BL1: [MemoryRegion; 6] = [
    ARM_MAP_SHARED_RAM,
    V2M_MAP_FLASH0_RO,
    V2M_MAP_IOFPGA,
    MAP_DEVICE0,
    MAP_DEVICE1,
    MemoryRegion::SENTINEL,
];
