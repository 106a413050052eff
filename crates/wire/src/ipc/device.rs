//! Device information reported by a remote device

use super::{decode_str, encode_str};
use serde::{Deserialize, Serialize};

/// Device information; any field may be unknown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "DeviceInfoWire", from = "DeviceInfoWire")]
pub struct DeviceInfo {
    /// Device name
    pub name: Option<String>,
    /// Host name
    pub host_name: Option<String>,
    /// Device UUID
    pub uuid: Option<String>,
    /// Content type
    pub content_type: Option<String>,
    /// Supported OCF core version
    pub version: Option<String>,
    /// Manufacturer name
    pub manufacturer_name: Option<String>,
    /// Manufacturer URL
    pub manufacturer_url: Option<String>,
    /// Model number
    pub model_number: Option<String>,
    /// Date of manufacture
    pub date_of_manufacture: Option<String>,
    /// Platform version
    pub platform_version: Option<String>,
    /// Firmware version
    pub firmware_version: Option<String>,
    /// Support URL
    pub support_url: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct DeviceInfoWire(
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
);

impl From<DeviceInfo> for DeviceInfoWire {
    fn from(info: DeviceInfo) -> Self {
        let s = |v: Option<String>| encode_str(v.as_deref());
        DeviceInfoWire(
            s(info.name),
            s(info.host_name),
            s(info.uuid),
            s(info.content_type),
            s(info.version),
            s(info.manufacturer_name),
            s(info.manufacturer_url),
            s(info.model_number),
            s(info.date_of_manufacture),
            s(info.platform_version),
            s(info.firmware_version),
            s(info.support_url),
        )
    }
}

impl From<DeviceInfoWire> for DeviceInfo {
    fn from(w: DeviceInfoWire) -> Self {
        DeviceInfo {
            name: decode_str(w.0),
            host_name: decode_str(w.1),
            uuid: decode_str(w.2),
            content_type: decode_str(w.3),
            version: decode_str(w.4),
            manufacturer_name: decode_str(w.5),
            manufacturer_url: decode_str(w.6),
            model_number: decode_str(w.7),
            date_of_manufacture: decode_str(w.8),
            platform_version: decode_str(w.9),
            firmware_version: decode_str(w.10),
            support_url: decode_str(w.11),
        }
    }
}
