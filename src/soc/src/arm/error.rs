use bootstate::BootStateError;
use core::fmt;
use util::error::{ConfigError, DriverError, LayoutError, XlatError};

/// Any failure that stops the stage. All of them are fatal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Bl1Error {
    Layout(LayoutError),
    TranslationSetup(XlatError),
    Config(ConfigError),
    Driver(DriverError),
    Sequence(BootStateError),
}

impl From<LayoutError> for Bl1Error {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}

impl From<XlatError> for Bl1Error {
    fn from(e: XlatError) -> Self {
        Self::TranslationSetup(e)
    }
}

impl From<ConfigError> for Bl1Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<DriverError> for Bl1Error {
    fn from(e: DriverError) -> Self {
        Self::Driver(e)
    }
}

impl From<BootStateError> for Bl1Error {
    fn from(e: BootStateError) -> Self {
        Self::Sequence(e)
    }
}

impl fmt::Display for Bl1Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(e) => write!(f, "memory layout: {e}"),
            Self::TranslationSetup(e) => write!(f, "translation setup: {e}"),
            Self::Config(e) => write!(f, "configuration: {e}"),
            Self::Driver(e) => write!(f, "driver: {e}"),
            Self::Sequence(e) => write!(f, "boot sequence: {e}"),
        }
    }
}
