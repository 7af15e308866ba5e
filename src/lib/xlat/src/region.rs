use core::fmt;

/// What the mapped memory holds
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MemType {
    /// Executable, read-only
    Code,
    /// Read-only, execute-never
    RoData,
    /// Read-write normal memory, execute-never
    RwData,
    /// Read-write device memory, execute-never
    Device,
    /// Read-only device memory, execute-never
    DeviceRo,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Security {
    Secure,
    NonSecure,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MemAttr {
    pub kind: MemType,
    pub security: Security,
}

impl MemAttr {
    pub const CODE: Self = Self::secure(MemType::Code);
    pub const RO_DATA: Self = Self::secure(MemType::RoData);
    pub const RW_DATA: Self = Self::secure(MemType::RwData);
    pub const DEVICE: Self = Self::secure(MemType::Device);
    pub const DEVICE_RO: Self = Self::secure(MemType::DeviceRo);

    pub const fn secure(kind: MemType) -> Self {
        Self {
            kind,
            security: Security::Secure,
        }
    }

    pub const fn non_secure(kind: MemType) -> Self {
        Self {
            kind,
            security: Security::NonSecure,
        }
    }

    pub fn is_executable(&self) -> bool {
        self.kind == MemType::Code
    }

    pub fn is_writable(&self) -> bool {
        matches!(self.kind, MemType::RwData | MemType::Device)
    }
}

impl fmt::Display for MemAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            MemType::Code => "CODE",
            MemType::RoData => "RO_DATA",
            MemType::RwData => "MEMORY|RW",
            MemType::Device => "DEVICE|RW",
            MemType::DeviceRo => "DEVICE|RO",
        };
        let sec = match self.security {
            Security::Secure => "SECURE",
            Security::NonSecure => "NS",
        };
        write!(f, "{kind}|{sec}")
    }
}

/// A flat (VA == PA) mapping of `[base, base + size)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MemoryRegion {
    pub base: usize,
    pub size: usize,
    pub attr: MemAttr,
}

impl MemoryRegion {
    /// Terminates every region list.
    pub const SENTINEL: Self = Self {
        base: 0,
        size: 0,
        attr: MemAttr::CODE,
    };

    pub const fn flat(base: usize, size: usize, attr: MemAttr) -> Self {
        Self { base, size, attr }
    }

    /// Region covering `[start, end)`. An inverted range yields an empty
    /// region at `start`.
    pub const fn from_range(start: usize, end: usize, attr: MemAttr) -> Self {
        let size = if end > start { end - start } else { 0 };
        Self::flat(start, size, attr)
    }

    pub fn is_sentinel(&self) -> bool {
        self.size == 0 && self.base == 0
    }

    /// Exclusive end; saturates instead of wrapping.
    pub fn end(&self) -> usize {
        self.base.saturating_add(self.size)
    }

    pub fn contains(&self, other: &Self) -> bool {
        other.base >= self.base && other.end() <= self.end()
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.base < other.end() && other.base < self.end()
    }
}

impl fmt::Display for MemoryRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}..{:#010x} {}", self.base, self.end(), self.attr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_only_device() {
        let a = MemAttr::DEVICE_RO;
        assert!(!a.is_writable());
        assert!(!a.is_executable());
        assert!(MemAttr::DEVICE.is_writable());
        assert_eq!(format!("{a}"), "DEVICE|RO|SECURE");
    }
}
