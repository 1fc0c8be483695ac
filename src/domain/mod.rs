//! Domain types for whatsmy-gpu
//!
//! The GPU record returned by every enumeration strategy and the
//! PCI vendor-id lookup.

pub mod gpu;
pub mod vendor;

pub use gpu::{GpuRecord, NOT_AVAILABLE};
pub use vendor::Vendor;
