//! Stub GPU enumeration for macOS
//!
//! No real backend exists here yet, so the strategy returns a single
//! synthetic record to keep the uniform contract (non-empty result, one
//! active record) satisfiable.
//!
//! TODO: replace with IOKit-based detection.

use crate::domain::{GpuRecord, NOT_AVAILABLE};

/// Return the single placeholder record.
pub fn enumerate() -> Vec<GpuRecord> {
    vec![GpuRecord::new(0)
        .with_name("macOS GPU (detection not implemented)")
        .with_vendor("Unknown")
        .with_driver_version(NOT_AVAILABLE)
        .with_pci_id(NOT_AVAILABLE)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_contract() {
        let gpus = enumerate();
        assert_eq!(gpus.len(), 1);
        assert_eq!(gpus[0].index, 0);
        assert!(gpus[0].is_active);
        assert_eq!(gpus[0].vendor, "Unknown");
        assert_eq!(gpus[0].driver_version.as_deref(), Some(NOT_AVAILABLE));
        assert_eq!(gpus[0].pci_id.as_deref(), Some(NOT_AVAILABLE));
        assert!(!gpus[0].has_driver_version());
        assert!(!gpus[0].has_pci_id());
    }
}
