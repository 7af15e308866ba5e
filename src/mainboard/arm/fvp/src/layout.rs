use core::ptr::addr_of;

use xlat::ImageSections;

extern "C" {
    static __TEXT_START__: u8;
    static __TEXT_END__: u8;
    static __RODATA_START__: u8;
    static __RODATA_END__: u8;
    static __COHERENT_RAM_START__: u8;
    static __COHERENT_RAM_END__: u8;
}

/// Section boundaries from `link.ld`.
pub fn image_sections() -> ImageSections {
    unsafe {
        ImageSections {
            code: addr_of!(__TEXT_START__) as usize..addr_of!(__TEXT_END__) as usize,
            rodata: addr_of!(__RODATA_START__) as usize..addr_of!(__RODATA_END__) as usize,
            coherent: addr_of!(__COHERENT_RAM_START__) as usize
                ..addr_of!(__COHERENT_RAM_END__) as usize,
        }
    }
}
