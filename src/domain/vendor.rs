//! PCI vendor-id lookup
//!
//! Maps a raw hexadecimal vendor identifier to a known GPU vendor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Known GPU vendors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vendor {
    Nvidia,
    Amd,
    Intel,
    Unknown,
}

impl Vendor {
    /// Resolve a vendor from a raw PCI vendor identifier.
    ///
    /// Comparison is case-insensitive and tolerates an optional `0x`
    /// prefix. Unrecognized input (including an empty string) resolves
    /// to [`Vendor::Unknown`]; there is no failure mode.
    pub fn from_pci_vendor_id(vendor_id: &str) -> Self {
        let id = vendor_id.to_ascii_lowercase();
        let id = id.strip_prefix("0x").unwrap_or(&id);

        match id {
            "10de" => Self::Nvidia,
            "1002" => Self::Amd,
            "8086" => Self::Intel,
            _ => Self::Unknown,
        }
    }

    /// Vendor display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nvidia => "NVIDIA",
            Self::Amd => "AMD",
            Self::Intel => "Intel",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vendor_ids() {
        assert_eq!(Vendor::from_pci_vendor_id("10de"), Vendor::Nvidia);
        assert_eq!(Vendor::from_pci_vendor_id("1002"), Vendor::Amd);
        assert_eq!(Vendor::from_pci_vendor_id("8086"), Vendor::Intel);
    }

    #[test]
    fn test_case_and_prefix_insensitive() {
        assert_eq!(Vendor::from_pci_vendor_id("0x10DE"), Vendor::Nvidia);
        assert_eq!(Vendor::from_pci_vendor_id("0X1002"), Vendor::Amd);
        assert_eq!(Vendor::from_pci_vendor_id("0x8086"), Vendor::Intel);
        assert_eq!(Vendor::from_pci_vendor_id("10DE"), Vendor::Nvidia);
    }

    #[test]
    fn test_unrecognized_ids() {
        assert_eq!(Vendor::from_pci_vendor_id(""), Vendor::Unknown);
        assert_eq!(Vendor::from_pci_vendor_id("1234"), Vendor::Unknown);
        assert_eq!(Vendor::from_pci_vendor_id("0x"), Vendor::Unknown);
        assert_eq!(Vendor::from_pci_vendor_id("not-hex"), Vendor::Unknown);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Vendor::Nvidia.to_string(), "NVIDIA");
        assert_eq!(Vendor::Amd.to_string(), "AMD");
        assert_eq!(Vendor::Intel.to_string(), "Intel");
        assert_eq!(Vendor::Unknown.to_string(), "Unknown");
    }
}
