//! Linux GPU enumeration via sysfs
//!
//! Walks `/sys/class/drm` for primary adapter entries (`cardN`, excluding
//! the `cardN-HDMI-A-1` style connector entries that share the prefix) and
//! assembles a record per card from the per-device metadata files.
//!
//! Every per-device read is best-effort: a missing or unreadable file
//! leaves the corresponding field unset and enumeration continues.

use crate::domain::{GpuRecord, Vendor};
use std::fs;
use std::path::Path;

const DRM_CLASS_DIR: &str = "/sys/class/drm";
const NVIDIA_VERSION_FILE: &str = "/proc/driver/nvidia/version";

/// Key in the device `uevent` file carrying the `VVVV:DDDD` pair
const PCI_ID_KEY: &str = "PCI_ID=";

/// Marker preceding the version token in the NVIDIA version file
const KERNEL_MODULE_MARKER: &str = "Kernel Module";

/// Candidate files for a human-readable device name, in preference order
const NAME_CANDIDATES: &[&str] = &["label", "product_name", "model"];

/// Enumerate GPUs from the live sysfs tree.
pub fn enumerate() -> Vec<GpuRecord> {
    enumerate_at(Path::new(DRM_CLASS_DIR), Path::new(NVIDIA_VERSION_FILE))
}

/// Enumerate GPUs from an arbitrary DRM class directory.
///
/// A missing root directory yields an empty result, not an error.
fn enumerate_at(drm_root: &Path, nvidia_version_file: &Path) -> Vec<GpuRecord> {
    let entries = match fs::read_dir(drm_root) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("cannot read {}: {}", drm_root.display(), e);
            return Vec::new();
        }
    };

    let mut gpus = Vec::new();
    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let card_name = file_name.to_string_lossy();
        if !is_primary_card(&card_name) {
            continue;
        }

        let device_dir = entry.path().join("device");
        let mut gpu = GpuRecord::new(gpus.len() as u32);

        if let Some(pci_id) = read_pci_id(&device_dir.join("uevent")) {
            let vendor_id = pci_id.split(':').next().unwrap_or("");
            gpu = gpu
                .with_vendor(Vendor::from_pci_vendor_id(vendor_id).to_string())
                .with_pci_id(pci_id);
        }

        gpu.name = match read_device_name(&device_dir) {
            Some(name) => name,
            None => gpu.synthesized_name(),
        };

        if gpu.vendor == Vendor::Nvidia.as_str() {
            if let Some(version) = read_nvidia_driver_version(nvidia_version_file) {
                gpu = gpu.with_driver_version(version);
            }
        }

        gpus.push(gpu);
    }

    gpus
}

/// Whether a DRM entry names a primary adapter (`card0`) rather than a
/// sub-connector (`card0-DP-1`) or render node (`renderD128`).
fn is_primary_card(name: &str) -> bool {
    name.starts_with("card") && !name.contains('-')
}

/// Parse the `PCI_ID=VVVV:DDDD` line from a device uevent file.
fn read_pci_id(uevent_path: &Path) -> Option<String> {
    let contents = match fs::read_to_string(uevent_path) {
        Ok(contents) => contents,
        Err(e) => {
            log::debug!("skipping {}: {}", uevent_path.display(), e);
            return None;
        }
    };

    contents
        .lines()
        .find_map(|line| line.strip_prefix(PCI_ID_KEY))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Read the first non-empty single-line value from the name candidates.
fn read_device_name(device_dir: &Path) -> Option<String> {
    for candidate in NAME_CANDIDATES {
        if let Ok(contents) = fs::read_to_string(device_dir.join(candidate)) {
            if let Some(name) = contents.lines().next() {
                let name = name.trim();
                if !name.is_empty() {
                    return Some(name.to_string());
                }
            }
        }
    }
    None
}

/// Extract the driver version from the NVIDIA version status file.
///
/// The file looks like:
/// `NVRM version: NVIDIA UNIX x86_64 Kernel Module  535.154.05  ...`
/// and the version is the first whitespace-delimited token after the
/// `Kernel Module` marker. Absence of the file or the marker is normal
/// (nouveau, or no NVIDIA driver loaded).
fn read_nvidia_driver_version(version_file: &Path) -> Option<String> {
    let contents = match fs::read_to_string(version_file) {
        Ok(contents) => contents,
        Err(e) => {
            log::debug!("skipping {}: {}", version_file.display(), e);
            return None;
        }
    };

    contents.lines().find_map(|line| {
        let (_, remainder) = line.split_once(KERNEL_MODULE_MARKER)?;
        remainder
            .split_whitespace()
            .next()
            .map(|token| token.to_string())
    })
}
