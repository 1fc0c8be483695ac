//! GPU record domain type
//!
//! One record per detected display adapter, built fresh on every
//! enumeration call. Index 0 in one invocation is not guaranteed to be
//! the same physical device in the next (hot-plug, driver reload, or a
//! change in platform enumeration order).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder used where a platform has no meaningful value to report.
///
/// Distinct from an unset field: the stub strategy reports `"N/A"` so the
/// uniform record contract stays satisfiable, and detail rendering filters
/// it back out.
pub const NOT_AVAILABLE: &str = "N/A";

/// A single detected GPU
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpuRecord {
    /// Position in enumeration order (0-based, contiguous per call)
    pub index: u32,
    /// Human-readable model/description, never empty in output
    pub name: String,
    /// Vendor display string
    ///
    /// On Linux this is resolved from the PCI vendor id; on Windows it is
    /// the raw manufacturer string as reported by SetupAPI.
    pub vendor: String,
    /// Driver version, when a source for it exists
    pub driver_version: Option<String>,
    /// PCI identifier as `VVVV:DDDD` (case preserved from the source)
    pub pci_id: Option<String>,
    /// Heuristic: the first enumerated record is treated as active
    pub is_active: bool,
}

impl GpuRecord {
    /// Create a record at the given enumeration position.
    ///
    /// The first record of a pass is marked active; this is a heuristic,
    /// not a verified default-adapter query.
    pub fn new(index: u32) -> Self {
        Self {
            index,
            name: String::new(),
            vendor: String::from("Unknown"),
            driver_version: None,
            pci_id: None,
            is_active: index == 0,
        }
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the vendor display string
    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = vendor.into();
        self
    }

    /// Set the driver version
    pub fn with_driver_version(mut self, version: impl Into<String>) -> Self {
        self.driver_version = Some(version.into());
        self
    }

    /// Set the PCI identifier
    pub fn with_pci_id(mut self, pci_id: impl Into<String>) -> Self {
        self.pci_id = Some(pci_id.into());
        self
    }

    /// Synthesize a name from vendor and PCI id when no descriptive
    /// name source was available.
    pub fn synthesized_name(&self) -> String {
        match &self.pci_id {
            Some(pci_id) => format!("{} GPU [{}]", self.vendor, pci_id),
            None => format!("{} GPU", self.vendor),
        }
    }

    /// Whether a real driver version is known (set and not the
    /// [`NOT_AVAILABLE`] marker).
    pub fn has_driver_version(&self) -> bool {
        matches!(&self.driver_version, Some(v) if v != NOT_AVAILABLE)
    }

    /// Whether a real PCI identifier is known (set and not the
    /// [`NOT_AVAILABLE`] marker).
    pub fn has_pci_id(&self) -> bool {
        matches!(&self.pci_id, Some(id) if id != NOT_AVAILABLE)
    }
}

impl fmt::Display for GpuRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.index, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_record_is_active() {
        assert!(GpuRecord::new(0).is_active);
        assert!(!GpuRecord::new(1).is_active);
    }

    #[test]
    fn test_builder() {
        let gpu = GpuRecord::new(0)
            .with_name("GeForce RTX 4090")
            .with_vendor("NVIDIA")
            .with_driver_version("535.154.05")
            .with_pci_id("10de:2684");

        assert_eq!(gpu.name, "GeForce RTX 4090");
        assert_eq!(gpu.vendor, "NVIDIA");
        assert_eq!(gpu.driver_version.as_deref(), Some("535.154.05"));
        assert_eq!(gpu.pci_id.as_deref(), Some("10de:2684"));
    }

    #[test]
    fn test_synthesized_name() {
        let gpu = GpuRecord::new(0).with_vendor("AMD").with_pci_id("1002:73bf");
        assert_eq!(gpu.synthesized_name(), "AMD GPU [1002:73bf]");

        let gpu = GpuRecord::new(0).with_vendor("AMD");
        assert_eq!(gpu.synthesized_name(), "AMD GPU");
    }

    #[test]
    fn test_na_marker_is_not_a_driver_version() {
        let gpu = GpuRecord::new(0).with_driver_version(NOT_AVAILABLE);
        assert!(!gpu.has_driver_version());

        let gpu = GpuRecord::new(0).with_driver_version("550.54.14");
        assert!(gpu.has_driver_version());

        assert!(!GpuRecord::new(0).has_driver_version());
    }

    #[test]
    fn test_na_marker_is_not_a_pci_id() {
        let gpu = GpuRecord::new(0).with_pci_id(NOT_AVAILABLE);
        assert!(!gpu.has_pci_id());

        let gpu = GpuRecord::new(0).with_pci_id("8086:a780");
        assert!(gpu.has_pci_id());
    }

    #[test]
    fn test_display() {
        let gpu = GpuRecord::new(2).with_name("Intel UHD Graphics 770");
        assert_eq!(gpu.to_string(), "[2] Intel UHD Graphics 770");
    }

    #[test]
    fn test_unset_fields_serialize_as_null() {
        let gpu = GpuRecord::new(0).with_name("Test GPU");
        let json = serde_json::to_value(&gpu).unwrap();
        assert!(json["driver_version"].is_null());
        assert!(json["pci_id"].is_null());
    }
}
