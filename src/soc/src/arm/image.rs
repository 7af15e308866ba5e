//! Next image selection and its entry point.
use core::fmt;

use super::def::{BL2_BASE, NS_BL1U_BASE};

/// Image identifier understood by the image loader
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ImageId(pub u32);

pub const BL2_IMAGE_ID: ImageId = ImageId(1);
pub const NS_BL1U_IMAGE_ID: ImageId = ImageId(16);
pub const TB_FW_CONFIG_ID: ImageId = ImageId(21);

/// What runs after this stage.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NextImageDecision {
    /// Firmware package unusable, start the non-secure firmware updater
    FirmwareUpdate,
    /// Continue the normal boot chain with BL2
    NormalNextStage,
}

impl NextImageDecision {
    pub fn image_id(self) -> ImageId {
        match self {
            Self::FirmwareUpdate => NS_BL1U_IMAGE_ID,
            Self::NormalNextStage => BL2_IMAGE_ID,
        }
    }
}

impl fmt::Display for NextImageDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirmwareUpdate => write!(f, "NS_BL1U (firmware update)"),
            Self::NormalNextStage => write!(f, "BL2"),
        }
    }
}

/// Picks the next image from the state of the firmware package's table of
/// contents.
pub fn select_next_image(toc_valid: bool) -> NextImageDecision {
    if toc_valid {
        NextImageDecision::NormalNextStage
    } else {
        NextImageDecision::FirmwareUpdate
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum SecurityState {
    Secure = 0,
    NonSecure = 1,
}

/* SPSR_EL3 values, all of DAIF masked, SP_ELx */
pub const SPSR_EL1H: u32 = 0x3c5;
pub const SPSR_EL2H: u32 = 0x3c9;
pub const SPSR_EL3H: u32 = 0x3cd;

/// Where and how the next image is entered.
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EntryPointInfo {
    pub pc: u64,
    pub spsr: u32,
    pub security: SecurityState,
    pub args: [u64; 8],
}

impl EntryPointInfo {
    /// Entry point of a payload run directly at EL3 instead of the image
    /// chain.
    pub const fn el3_payload(pc: u64) -> Self {
        Self {
            pc,
            spsr: SPSR_EL3H,
            security: SecurityState::Secure,
            args: [0; 8],
        }
    }

    /// Default entry point of the image picked by the selector.
    pub fn for_decision(decision: NextImageDecision) -> Self {
        match decision {
            NextImageDecision::NormalNextStage => Self {
                pc: BL2_BASE as u64,
                spsr: SPSR_EL1H,
                security: SecurityState::Secure,
                args: [0; 8],
            },
            NextImageDecision::FirmwareUpdate => Self {
                pc: NS_BL1U_BASE as u64,
                spsr: SPSR_EL2H,
                security: SecurityState::NonSecure,
                args: [0; 8],
            },
        }
    }
}
