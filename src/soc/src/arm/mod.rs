//! BL1 platform layer shared by the Arm standard platforms.

pub mod bl1_setup;
pub mod config;
pub mod def;
pub mod error;
pub mod image;

pub use self::{
    bl1_setup::Bl1Platform,
    config::{Bl1Config, BUILD_CONFIG},
    error::Bl1Error,
    image::{select_next_image, EntryPointInfo, ImageId, NextImageDecision},
};
