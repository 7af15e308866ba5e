//! BL1 error codes
//!
//! Every error the stage can report. None of them is recovered from inside
//! the stage: the caller logs the error and traps, leaving the watchdog to
//! reset the system.

use core::fmt;

/// Trusted memory layout bookkeeping failures
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LayoutError {
    /// Reserved range is not fully contained in the current free range
    OutOfRange,
    /// Reserved range is not aligned to the translation granule
    Misaligned,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange => write!(f, "reserved range outside of free memory"),
            Self::Misaligned => write!(f, "reserved range not page aligned"),
        }
    }
}

/// Translation table setup failures
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum XlatError {
    /// Region list capacity exceeded
    TooManyRegions,
    /// Region base or size not aligned to the translation granule
    Misaligned,
    /// Two regions describe exactly the same range
    Duplicate,
    /// Two regions overlap without one containing the other
    Overlap,
    /// The translation library refused the tables or the MMU enable
    Rejected,
}

impl fmt::Display for XlatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyRegions => write!(f, "too many memory regions"),
            Self::Misaligned => write!(f, "memory region not page aligned"),
            Self::Duplicate => write!(f, "duplicate memory region"),
            Self::Overlap => write!(f, "partially overlapping memory regions"),
            Self::Rejected => write!(f, "translation tables rejected"),
        }
    }
}

/// An enabled build option lacks its backing resource
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// Firmware configuration blob could not be loaded
    MissingConfig,
    /// Boot ROM library missing or of an incompatible version
    RomLibVersion,
    /// Coherent memory section present, BL1 does not support it
    CoherentMemory,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingConfig => write!(f, "firmware config not found"),
            Self::RomLibVersion => write!(f, "incompatible ROM library"),
            Self::CoherentMemory => write!(f, "coherent memory not supported in BL1"),
        }
    }
}

/// Device error kind that can be used across board implementations
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DriverError {
    /// Device did not reach the requested state in time
    Timeout,
    /// The function is unimplemented
    Unsupported,
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "device timed out"),
            Self::Unsupported => write!(f, "operation not supported"),
        }
    }
}
