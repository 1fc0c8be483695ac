//! Platform enumeration strategies
//!
//! Exactly one strategy is compiled in per target; [`detect_gpus`] is the
//! single dispatch entry point. There is no runtime platform detection
//! and no trait object: the selection is fixed at build time.

#[cfg(target_os = "windows")]
pub mod setupapi;
#[cfg(target_os = "macos")]
pub mod stub;
#[cfg(target_os = "linux")]
pub mod sysfs;

use crate::domain::GpuRecord;

/// Enumerate display adapters using the strategy for this target.
///
/// Always performs a fresh synchronous pass; nothing is cached between
/// calls. Targets without a strategy yield an empty sequence.
pub fn detect_gpus() -> Vec<GpuRecord> {
    #[cfg(target_os = "linux")]
    {
        sysfs::enumerate()
    }
    #[cfg(target_os = "windows")]
    {
        setupapi::enumerate()
    }
    #[cfg(target_os = "macos")]
    {
        stub::enumerate()
    }
    #[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
    {
        Vec::new()
    }
}
