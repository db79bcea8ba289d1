use super::text_serde;
use serde::{Deserialize, Serialize};

/// `getDevInfo`
///
/// The text fields come from leaf values that may have been coerced to numbers,
/// so an all-digit value loses its leading zeros (`007` reads as `7`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevInfo {
    pub result: i64,
    #[serde(default, deserialize_with = "text_serde::option::deserialize")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "text_serde::option::deserialize")]
    pub serial_no: Option<String>,
    #[serde(default, deserialize_with = "text_serde::option::deserialize")]
    pub dev_name: Option<String>,
    #[serde(default, deserialize_with = "text_serde::option::deserialize")]
    pub mac: Option<String>,
    #[serde(default, deserialize_with = "text_serde::option::deserialize")]
    pub firmware_ver: Option<String>,
    #[serde(default, deserialize_with = "text_serde::option::deserialize")]
    pub hardware_ver: Option<String>,
}

/// `getDevName`. An all-digit name loses its leading zeros, see [`DevInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevName {
    pub result: i64,
    #[serde(deserialize_with = "text_serde::deserialize")]
    pub dev_name: String,
}
