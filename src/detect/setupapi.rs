//! Windows GPU enumeration via the SetupAPI device-information service
//!
//! Enumerates present devices in the display-adapter device class and
//! queries four registry properties per device: description, manufacturer,
//! driver metadata, and hardware id. Each query is independent; a failed
//! query leaves that field unset and never aborts the pass.
//!
//! Note the intentional asymmetry with the sysfs strategy: the vendor
//! field here is the raw manufacturer string, not a PCI vendor-id lookup.

use crate::domain::GpuRecord;
use windows::core::PCWSTR;
use windows::Win32::Devices::DeviceAndDriverInstallation::{
    SetupDiDestroyDeviceInfoList, SetupDiEnumDeviceInfo, SetupDiGetClassDevsW,
    SetupDiGetDeviceRegistryPropertyW, DIGCF_PRESENT, GUID_DEVCLASS_DISPLAY, HDEVINFO,
    SETUP_DI_REGISTRY_PROPERTY, SPDRP_DEVICEDESC, SPDRP_DRIVER, SPDRP_HARDWAREID, SPDRP_MFG,
    SP_DEVINFO_DATA,
};

/// Markers in a `PCI\VEN_XXXX&DEV_XXXX&...` hardware id
const VENDOR_MARKER: &str = "VEN_";
const DEVICE_MARKER: &str = "DEV_";

/// Width of the hex subfield following each marker
const ID_WIDTH: usize = 4;

/// Enumerate GPUs through the display-adapter device class.
///
/// Failure to initialize the device-information set yields an empty
/// result, not an error.
pub fn enumerate() -> Vec<GpuRecord> {
    let device_info_set: HDEVINFO = match unsafe {
        SetupDiGetClassDevsW(Some(&GUID_DEVCLASS_DISPLAY), PCWSTR::null(), None, DIGCF_PRESENT)
    } {
        Ok(handle) => handle,
        Err(e) => {
            log::debug!("SetupDiGetClassDevs failed: {}", e);
            return Vec::new();
        }
    };

    let mut gpus = Vec::new();
    let mut device_info_data = SP_DEVINFO_DATA {
        cbSize: std::mem::size_of::<SP_DEVINFO_DATA>() as u32,
        ..Default::default()
    };

    let mut member_index = 0u32;
    while unsafe { SetupDiEnumDeviceInfo(device_info_set, member_index, &mut device_info_data) }
        .is_ok()
    {
        member_index += 1;

        let mut gpu = GpuRecord::new(gpus.len() as u32);

        if let Some(description) =
            read_string_property(device_info_set, &device_info_data, SPDRP_DEVICEDESC)
        {
            gpu = gpu.with_name(description);
        }

        if let Some(manufacturer) =
            read_string_property(device_info_set, &device_info_data, SPDRP_MFG)
        {
            gpu = gpu.with_vendor(manufacturer);
        }

        if let Some(driver) = read_string_property(device_info_set, &device_info_data, SPDRP_DRIVER)
        {
            gpu = gpu.with_driver_version(driver);
        }

        if let Some(hardware_id) =
            read_string_property(device_info_set, &device_info_data, SPDRP_HARDWAREID)
        {
            if let Some(pci_id) = parse_hardware_id(&hardware_id) {
                gpu = gpu.with_pci_id(pci_id);
            }
        }

        if gpu.name.is_empty() {
            gpu.name = gpu.synthesized_name();
        }

        gpus.push(gpu);
    }

    if let Err(e) = unsafe { SetupDiDestroyDeviceInfoList(device_info_set) } {
        log::debug!("SetupDiDestroyDeviceInfoList failed: {}", e);
    }

    gpus
}

/// Query one string-valued registry property, best-effort.
fn read_string_property(
    device_info_set: HDEVINFO,
    device_info_data: &SP_DEVINFO_DATA,
    property: SETUP_DI_REGISTRY_PROPERTY,
) -> Option<String> {
    let mut buffer = [0u8; 512];
    unsafe {
        SetupDiGetDeviceRegistryPropertyW(
            device_info_set,
            device_info_data,
            property,
            None,
            Some(&mut buffer),
            None,
        )
    }
    .ok()?;

    // The buffer holds UTF-16; REG_MULTI_SZ values (hardware ids) yield
    // their first string via the NUL cut.
    let wide: Vec<u16> = buffer
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let len = wide.iter().position(|&c| c == 0).unwrap_or(wide.len());
    let value = String::from_utf16_lossy(&wide[..len]).trim().to_string();

    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Parse `PCI\VEN_XXXX&DEV_XXXX&...` into `XXXX:XXXX`.
///
/// Both markers must be present with four characters after each;
/// otherwise the PCI id is left unset.
fn parse_hardware_id(hardware_id: &str) -> Option<String> {
    let vendor = fixed_field_after(hardware_id, VENDOR_MARKER)?;
    let device = fixed_field_after(hardware_id, DEVICE_MARKER)?;
    Some(format!("{vendor}:{device}"))
}

fn fixed_field_after<'a>(haystack: &'a str, marker: &str) -> Option<&'a str> {
    let start = haystack.find(marker)? + marker.len();
    haystack.get(start..start + ID_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hardware_id() {
        assert_eq!(
            parse_hardware_id("PCI\\VEN_10DE&DEV_2684&SUBSYS_167C10DE&REV_A1").as_deref(),
            Some("10DE:2684")
        );
    }

    #[test]
    fn test_parse_hardware_id_missing_markers() {
        assert!(parse_hardware_id("ROOT\\BasicDisplay").is_none());
        assert!(parse_hardware_id("PCI\\VEN_10DE").is_none());
        assert!(parse_hardware_id("PCI\\DEV_2684").is_none());
    }

    #[test]
    fn test_parse_hardware_id_truncated_field() {
        assert!(parse_hardware_id("PCI\\DEV_2684&VEN_10").is_none());
    }
}
