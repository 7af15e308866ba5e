use xlat::ImageSections;

/// A BL1 image at the bottom of the trusted ROM.
pub fn image_sections() -> ImageSections {
    ImageSections {
        code: 0x0000..0x7000,
        rodata: 0x7000..0x9000,
        coherent: 0..0,
    }
}
